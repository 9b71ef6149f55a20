use ark_bn254::{Fr, G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{AffineRepr, CurveGroup};
use ark_std::vec::Vec;
use serde::{Deserialize, Serialize};

extern crate alloc;
use alloc::format;
use alloc::string::{String, ToString};

use crate::{
    errors::KzgError,
    helpers::compute_powers,
    traits::{ReadPointFromBytes, WriteBytesBe},
};

/// A structured reference string as loaded from external storage:
/// `g1_monomial[i] = secret^i * G1` and `g2_monomial = [G2, secret * G2, ...]`.
///
/// Nothing about it is trusted until it has gone through
/// [crate::validator::validate].
#[derive(Debug, Clone, PartialEq)]
pub struct TrustedSetup {
    g1_monomial: Vec<G1Affine>,
    g2_monomial: Vec<G2Affine>,
}

/// On-disk JSON layout. Points are hex strings of the big-endian compressed
/// encodings, with or without a `0x` prefix. Unknown fields (such as a
/// precomputed `g1_lagrange` array) are ignored, the Lagrange points are
/// always re-derived from the monomial ones.
#[derive(Serialize, Deserialize)]
struct JsonTrustedSetup {
    g1_monomial: Vec<String>,
    g2_monomial: Vec<String>,
}

fn decode_hex_point<P: ReadPointFromBytes>(encoded: &str, index: usize) -> Result<P, KzgError> {
    let trimmed = encoded.strip_prefix("0x").unwrap_or(encoded);
    let bytes = hex::decode(trimmed).map_err(|e| {
        KzgError::DeserializationError(format!("point {} is not valid hex: {}", index, e))
    })?;
    P::read_point_from_bytes_native_compressed_be(&bytes)
}

impl TrustedSetup {
    pub fn new(g1_monomial: Vec<G1Affine>, g2_monomial: Vec<G2Affine>) -> Self {
        Self {
            g1_monomial,
            g2_monomial,
        }
    }

    /// Parses the JSON setup format. Every point is decoded with the curve
    /// and subgroup checks; the setup itself is not validated.
    pub fn from_json_str(json: &str) -> Result<Self, KzgError> {
        let parsed: JsonTrustedSetup = serde_json::from_str(json)
            .map_err(|e| KzgError::DeserializationError(e.to_string()))?;

        let g1_monomial = parsed
            .g1_monomial
            .iter()
            .enumerate()
            .map(|(i, point)| decode_hex_point::<G1Affine>(point, i))
            .collect::<Result<Vec<_>, _>>()?;
        let g2_monomial = parsed
            .g2_monomial
            .iter()
            .enumerate()
            .map(|(i, point)| decode_hex_point::<G2Affine>(point, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(g1_monomial, g2_monomial))
    }

    /// Encodes the setup in the JSON format read by [TrustedSetup::from_json_str].
    pub fn to_json_string(&self) -> Result<String, KzgError> {
        let g1_monomial = self
            .g1_monomial
            .iter()
            .map(|point| point.to_bytes_be().map(|b| format!("0x{}", hex::encode(b))))
            .collect::<Result<Vec<_>, _>>()?;
        let g2_monomial = self
            .g2_monomial
            .iter()
            .map(|point| point.to_bytes_be().map(|b| format!("0x{}", hex::encode(b))))
            .collect::<Result<Vec<_>, _>>()?;

        serde_json::to_string(&JsonTrustedSetup {
            g1_monomial,
            g2_monomial,
        })
        .map_err(|e| KzgError::SerializationError(e.to_string()))
    }

    /// Builds a setup from a known secret.
    ///
    /// Anyone holding `secret` can forge proofs against keys derived from
    /// this setup. Only use it for tests and benchmarks.
    pub fn insecure_from_secret(secret: &Fr, num_g1_points: usize) -> Self {
        let powers = compute_powers(secret, num_g1_points);

        let g1_generator = G1Affine::generator();
        let g1_projective: Vec<G1Projective> =
            powers.iter().map(|power| g1_generator * power).collect();

        let g2_generator = G2Affine::generator();
        let g2_projective: Vec<G2Projective> = vec![g2_generator.into(), g2_generator * secret];

        Self::new(
            G1Projective::normalize_batch(&g1_projective),
            G2Projective::normalize_batch(&g2_projective),
        )
    }

    pub fn g1_monomial(&self) -> &[G1Affine] {
        &self.g1_monomial
    }

    pub fn g2_monomial(&self) -> &[G2Affine] {
        &self.g2_monomial
    }

    /// Number of G1 points, i.e. one more than the largest supported degree.
    pub fn len(&self) -> usize {
        self.g1_monomial.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g1_monomial.is_empty()
    }
}
