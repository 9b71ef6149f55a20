use ark_bn254::{g1, g2, Fr, G1Affine, G2Affine};
use ark_ec::{short_weierstrass::Affine, AffineRepr};
use ark_ff::{BigInteger, Field, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

extern crate alloc;
use alloc::format;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{
    consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED},
    errors::KzgError,
};

pub type Result<T> = core::result::Result<T, KzgError>;

/// Reads points from the big-endian compressed encoding. Arkworks serializes
/// little-endian, so the bytes are reversed before handing them over.
/// Deserialization validates that the point is on the curve and in the
/// prime-order subgroup.
pub trait ReadPointFromBytes: AffineRepr {
    const COMPRESSED_SIZE: usize;

    fn read_point_from_bytes_native_compressed_be(bytes: &[u8]) -> Result<Self>;
}

// The impls name the concrete curve configs: `G1Affine` and `G2Affine` are
// aliases through `BnConfig` associated types, which coherence cannot tell apart.
impl ReadPointFromBytes for Affine<g1::Config> {
    const COMPRESSED_SIZE: usize = SIZE_OF_G1_AFFINE_COMPRESSED;

    fn read_point_from_bytes_native_compressed_be(bytes_be: &[u8]) -> Result<G1Affine> {
        if bytes_be.len() != SIZE_OF_G1_AFFINE_COMPRESSED {
            return Err(KzgError::DeserializationError(format!(
                "G1 point must be {} bytes, got {}",
                SIZE_OF_G1_AFFINE_COMPRESSED,
                bytes_be.len()
            )));
        }
        let mut bytes_le = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
        bytes_le.copy_from_slice(bytes_be);
        bytes_le.reverse();
        G1Affine::deserialize_compressed(&bytes_le[..])
            .map_err(|e| KzgError::DeserializationError(format!("invalid G1 point: {}", e)))
    }
}

impl ReadPointFromBytes for Affine<g2::Config> {
    const COMPRESSED_SIZE: usize = SIZE_OF_G2_AFFINE_COMPRESSED;

    fn read_point_from_bytes_native_compressed_be(bytes_be: &[u8]) -> Result<G2Affine> {
        if bytes_be.len() != SIZE_OF_G2_AFFINE_COMPRESSED {
            return Err(KzgError::DeserializationError(format!(
                "G2 point must be {} bytes, got {}",
                SIZE_OF_G2_AFFINE_COMPRESSED,
                bytes_be.len()
            )));
        }
        let mut bytes_le = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
        bytes_le.copy_from_slice(bytes_be);
        bytes_le.reverse();
        G2Affine::deserialize_compressed(&bytes_le[..])
            .map_err(|e| KzgError::DeserializationError(format!("invalid G2 point: {}", e)))
    }
}

// A trait for Fr for reading from bytes in big endian format
pub trait ReadFrFromBytes: Field {
    /// Decodes exactly [BYTES_PER_FIELD_ELEMENT] big-endian bytes. Values
    /// greater than or equal to the modulus are rejected, never reduced.
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Self>;
}

impl ReadFrFromBytes for Fr {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Fr> {
        if bytes.len() != BYTES_PER_FIELD_ELEMENT {
            return Err(KzgError::DeserializationError(format!(
                "scalar must be {} bytes, got {}",
                BYTES_PER_FIELD_ELEMENT,
                bytes.len()
            )));
        }
        let mut bytes_le = [0u8; BYTES_PER_FIELD_ELEMENT];
        bytes_le.copy_from_slice(bytes);
        bytes_le.reverse();
        Fr::deserialize_uncompressed(&bytes_le[..]).map_err(|_| {
            KzgError::DeserializationError("scalar is not canonical".to_string())
        })
    }
}

/// Big-endian fixed-width encodings, the inverse of the readers above.
pub trait WriteBytesBe {
    type Bytes;

    fn to_bytes_be(&self) -> Result<Self::Bytes>;
}

impl WriteBytesBe for Fr {
    type Bytes = [u8; BYTES_PER_FIELD_ELEMENT];

    fn to_bytes_be(&self) -> Result<Self::Bytes> {
        let v = self.into_bigint().to_bytes_be();
        let mut out = [0u8; BYTES_PER_FIELD_ELEMENT];
        // to_bytes_be of a 4-limb bigint is always 32 bytes
        out[BYTES_PER_FIELD_ELEMENT - v.len()..].copy_from_slice(&v);
        Ok(out)
    }
}

fn serialize_compressed_be<P: CanonicalSerialize>(point: &P, size: usize) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(size);
    point
        .serialize_compressed(&mut bytes)
        .map_err(|e| KzgError::SerializationError(e.to_string()))?;
    if bytes.len() != size {
        return Err(KzgError::InvalidInputLength);
    }
    bytes.reverse();
    Ok(bytes)
}

impl WriteBytesBe for Affine<g1::Config> {
    type Bytes = [u8; SIZE_OF_G1_AFFINE_COMPRESSED];

    fn to_bytes_be(&self) -> Result<Self::Bytes> {
        let bytes = serialize_compressed_be(self, SIZE_OF_G1_AFFINE_COMPRESSED)?;
        let mut out = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
        out.copy_from_slice(&bytes);
        Ok(out)
    }
}

impl WriteBytesBe for Affine<g2::Config> {
    type Bytes = [u8; SIZE_OF_G2_AFFINE_COMPRESSED];

    fn to_bytes_be(&self) -> Result<Self::Bytes> {
        let bytes = serialize_compressed_be(self, SIZE_OF_G2_AFFINE_COMPRESSED)?;
        let mut out = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
        out.copy_from_slice(&bytes);
        Ok(out)
    }
}
