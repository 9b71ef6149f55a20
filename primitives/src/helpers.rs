use ark_bn254::{Bn254, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{pairing::Pairing, CurveGroup, VariableBaseMSM};
use ark_ff::{One, PrimeField, Zero};
use ark_std::vec::Vec;
use sha2::{Digest, Sha256};

extern crate alloc;
use alloc::string::ToString;

use crate::errors::KzgError;

/// Computes powers of a field element: `[1, base, base^2, ..., base^(count-1)]`.
///
/// # Arguments
/// * `base` - The field element to raise to powers
/// * `count` - Number of powers to compute
///
/// # Returns
/// * Vector of field elements, empty when `count` is zero
///
/// # Example
/// ```
/// use ark_bn254::Fr;
/// use da_kzg_bn254_primitives::helpers::compute_powers;
///
/// let powers = compute_powers(&Fr::from(2u64), 4);
/// assert_eq!(powers, vec![Fr::from(1u64), Fr::from(2u64), Fr::from(4u64), Fr::from(8u64)]);
/// ```
pub fn compute_powers(base: &Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}

/// Computes a linear combination of G1 points weighted by scalar coefficients.
///
/// Uses Multi-Scalar Multiplication (MSM) for efficient computation.
///
/// # Arguments
/// * `points` - Array of G1 points in affine form
/// * `scalars` - Array of field elements as scalar weights
///
/// # Returns
/// * Single G1 point in affine form representing the linear combination
pub fn g1_lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Affine, KzgError> {
    let lincomb =
        G1Projective::msm(points, scalars).map_err(|e| KzgError::MsmError(e.to_string()))?;
    Ok(lincomb.into_affine())
}

/// Inner product of two scalar slices of equal length.
pub fn inner_product(a: &[Fr], b: &[Fr]) -> Fr {
    a.iter()
        .zip(b.iter())
        .fold(Fr::zero(), |acc, (x, y)| acc + *x * y)
}

/// Maps a byte slice to a field element (`Fr`) using SHA-256 as the hash
/// function, reducing the digest modulo the field order.
pub fn hash_to_field_element(msg: &[u8]) -> Fr {
    let msg_digest = Sha256::digest(msg);
    Fr::from_be_bytes_mod_order(msg_digest.as_slice())
}

/// Checks `e(a1, a2) == e(b1, b2)` with a single multi-pairing.
pub fn pairings_verify(a1: G1Affine, a2: G2Affine, b1: G1Affine, b2: G2Affine) -> bool {
    let neg_b1 = -b1;
    let p = [a1, neg_b1];
    let q = [a2, b2];
    let result = Bn254::multi_pairing(p, q);
    result.is_zero()
}

/// Reverses the lowest `bits` bits of `n`.
pub fn reverse_bits(n: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    n.reverse_bits() >> (usize::BITS - bits)
}

/// Applies the bit-reversal permutation in place. The length of `values`
/// must be a power of two; other lengths are left untouched.
///
/// # Example
/// ```
/// use da_kzg_bn254_primitives::helpers::bit_reverse_permutation;
///
/// let mut values = vec![0, 1, 2, 3, 4, 5, 6, 7];
/// bit_reverse_permutation(&mut values);
/// assert_eq!(values, vec![0, 4, 2, 6, 1, 5, 3, 7]);
/// ```
pub fn bit_reverse_permutation<T>(values: &mut [T]) {
    let n = values.len();
    if n <= 2 || !n.is_power_of_two() {
        return;
    }
    let log_n = n.trailing_zeros();
    for i in 0..n {
        let j = reverse_bits(i, log_n);
        if i < j {
            values.swap(i, j);
        }
    }
}
