use ark_bn254::{Bn254, G1Affine, G1Projective, G2Affine};
use ark_ec::{pairing::Pairing, CurveGroup};
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};
use ark_std::vec::Vec;

extern crate alloc;
use alloc::string::ToString;

use crate::{domain::Domain, errors::KzgError, helpers, validator::ValidatedSetup};

/// Setup points in Lagrange form: `g1_lagrange[i]` commits to the Lagrange
/// basis polynomial that is one on `domain.roots()[i]`. Same ordering as the
/// domain it was derived for.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitKey {
    g1_lagrange: Vec<G1Affine>,
}

impl CommitKey {
    pub fn new(g1_lagrange: Vec<G1Affine>) -> Self {
        Self { g1_lagrange }
    }

    /// Converts the first `domain.cardinality()` monomial points to Lagrange
    /// form with an inverse FFT over G1, then reorders them to match the
    /// domain.
    pub fn from_monomial(g1_monomial: &[G1Affine], domain: &Domain) -> Result<Self, KzgError> {
        let length = domain.cardinality();
        if g1_monomial.len() < length {
            return Err(KzgError::InsufficientSetupPoints {
                required: length,
                available: g1_monomial.len(),
            });
        }

        let points_projective: Vec<G1Projective> = g1_monomial[..length]
            .iter()
            .map(|&p| G1Projective::from(p))
            .collect();
        let ifft_result = GeneralEvaluationDomain::<ark_bn254::Fr>::new(length)
            .ok_or(KzgError::DomainTooLarge {
                requested_log2: length.trailing_zeros(),
                max_log2: crate::consts::MAX_DOMAIN_LOG2,
            })?
            .ifft(&points_projective);

        let mut g1_lagrange = G1Projective::normalize_batch(&ifft_result);
        if domain.is_bit_reversed() {
            helpers::bit_reverse_permutation(&mut g1_lagrange);
        }

        Ok(Self { g1_lagrange })
    }

    pub fn g1_lagrange(&self) -> &[G1Affine] {
        &self.g1_lagrange
    }

    pub fn len(&self) -> usize {
        self.g1_lagrange.len()
    }

    pub fn is_empty(&self) -> bool {
        self.g1_lagrange.is_empty()
    }
}

/// Everything the verifier needs. The G2 points are also kept as prepared
/// pairing inputs (precomputed Miller loop lines) since every verification
/// pairs against them.
#[derive(Debug, Clone)]
pub struct OpeningKey {
    pub generator_g1: G1Affine,
    pub generator_g2: G2Affine,
    /// `secret * G2`
    pub alpha_g2: G2Affine,
    generator_g2_prepared: <Bn254 as Pairing>::G2Prepared,
    alpha_g2_prepared: <Bn254 as Pairing>::G2Prepared,
}

impl OpeningKey {
    pub fn new(generator_g1: G1Affine, generator_g2: G2Affine, alpha_g2: G2Affine) -> Self {
        Self {
            generator_g1,
            generator_g2,
            alpha_g2,
            generator_g2_prepared: generator_g2.into(),
            alpha_g2_prepared: alpha_g2.into(),
        }
    }

    /// Builds the opening key from the first G1 point and the first two G2
    /// points of a validated setup.
    pub fn from_setup(setup: &ValidatedSetup) -> Result<Self, KzgError> {
        let g1 = setup.setup().g1_monomial();
        let g2 = setup.setup().g2_monomial();
        match (g1.first(), g2.first(), g2.get(1)) {
            (Some(g1_gen), Some(g2_gen), Some(alpha_g2)) => {
                Ok(Self::new(*g1_gen, *g2_gen, *alpha_g2))
            },
            _ => Err(KzgError::MalformedTrustedSetup(
                "setup is too short to derive an opening key".to_string(),
            )),
        }
    }

    pub fn generator_g2_prepared(&self) -> &<Bn254 as Pairing>::G2Prepared {
        &self.generator_g2_prepared
    }

    pub fn alpha_g2_prepared(&self) -> &<Bn254 as Pairing>::G2Prepared {
        &self.alpha_g2_prepared
    }
}

impl PartialEq for OpeningKey {
    fn eq(&self, other: &Self) -> bool {
        // prepared values are a pure function of the affine points
        self.generator_g1 == other.generator_g1
            && self.generator_g2 == other.generator_g2
            && self.alpha_g2 == other.alpha_g2
    }
}

/// Commit and opening keys derived together from one validated setup.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupKeys {
    pub commit_key: CommitKey,
    pub opening_key: OpeningKey,
}

impl SetupKeys {
    /// Derives both keys for `domain`. The commit key follows the domain's
    /// ordering, so a bit-reversed domain yields a bit-reversed commit key.
    pub fn derive(setup: &ValidatedSetup, domain: &Domain) -> Result<Self, KzgError> {
        let commit_key = CommitKey::from_monomial(setup.setup().g1_monomial(), domain)?;
        let opening_key = OpeningKey::from_setup(setup)?;
        Ok(Self {
            commit_key,
            opening_key,
        })
    }
}
