use ark_bn254::Fr;
use ark_ff::FftField;

pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 32; // in bytes
pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 64; // in bytes

/// Largest `k` such that a multiplicative subgroup of order `2^k` exists in
/// the bn254 scalar field.
pub const MAX_DOMAIN_LOG2: u32 = <Fr as FftField>::TWO_ADICITY;

pub const FIAT_SHAMIR_PROTOCOL_DOMAIN: &[u8] = b"DAKZG_FSBLOBVERIFY_V1___"; // Adapted from 4844
pub const RANDOM_CHALLENGE_KZG_BATCH_DOMAIN: &[u8] = b"DAKZG_RCKZGBATCH___V1___"; // Adapted from 4844
pub const TRUSTED_SETUP_CHECK_DOMAIN: &[u8] = b"DAKZG_SRSWELLFORMED_V1__";

/// Default number of field elements in a blob, used by the benches and the
/// root crate's examples.
pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;
