use ark_bn254::{Bn254, Fr, G1Affine, G1Projective};
use ark_ec::{pairing::Pairing, CurveGroup};
use ark_ff::Zero;
use da_kzg_bn254_primitives::{
    blob::Blob,
    domain::Domain,
    errors::KzgError,
    helpers::{compute_powers, g1_lincomb, inner_product},
    keys::OpeningKey,
    proof::OpeningProof,
    transcript,
};
use tracing::debug;

extern crate alloc;
use alloc::vec::Vec;

use crate::verify::{blob_opening, verify_proof};

/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_kzg_proof_batch
///
/// Verifies `n` openings with one pairing check. For a Fiat-Shamir scalar
/// `r` derived from all inputs and weights `r^i`:
///
/// ```text
/// folded_q  = Σ r^i * Q_i
/// folded_c  = Σ r^i * C_i
/// folded_zq = Σ r^i * z_i * Q_i
/// folded_y  = Σ r^i * y_i
/// F = folded_c - folded_y * G1 + folded_zq
/// ```
///
/// and the batch is accepted iff `e(F, G2) * e(-folded_q, s*G2) == 1`.
///
/// An empty batch is trivially valid, and a batch of one is checked with
/// [verify_proof] directly.
pub fn verify_kzg_proof_batch(
    commitments: &[G1Affine],
    proofs: &[OpeningProof],
    opening_key: &OpeningKey,
) -> Result<(), KzgError> {
    if commitments.len() != proofs.len() {
        return Err(KzgError::LengthMismatch {
            commitments: commitments.len(),
            proofs: proofs.len(),
        });
    }

    match commitments.len() {
        0 => return Ok(()),
        1 => return verify_proof(&commitments[0], &proofs[0], opening_key),
        _ => {},
    }

    let n = commitments.len();
    let r = transcript::compute_batch_challenge(commitments, proofs)?;
    let r_powers = compute_powers(&r, n);

    let quotients: Vec<G1Affine> = proofs.iter().map(|p| p.quotient_commitment).collect();
    let ys: Vec<Fr> = proofs.iter().map(|p| p.claimed_value).collect();
    let r_times_z: Vec<Fr> = r_powers
        .iter()
        .zip(proofs.iter())
        .map(|(r_i, p)| *r_i * p.input_point)
        .collect();

    let folded_q = g1_lincomb(&quotients, &r_powers)?;
    let folded_c = g1_lincomb(commitments, &r_powers)?;
    let folded_zq = g1_lincomb(&quotients, &r_times_z)?;
    let folded_y = inner_product(&r_powers, &ys);

    let lhs_g1 = (G1Projective::from(folded_c) - opening_key.generator_g1 * folded_y
        + folded_zq)
        .into_affine();

    let pairing = Bn254::multi_pairing(
        [lhs_g1, -folded_q],
        [
            opening_key.generator_g2_prepared().clone(),
            opening_key.alpha_g2_prepared().clone(),
        ],
    );

    if pairing.is_zero() {
        debug!(batch_size = n, "batch of KZG proofs verified");
        Ok(())
    } else {
        debug!(batch_size = n, "batch of KZG proofs rejected");
        Err(KzgError::VerificationFailed)
    }
}

/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_blob_kzg_proof_batch
///
/// Recomputes the challenge and evaluation of every blob and hands the
/// resulting openings to [verify_kzg_proof_batch].
///
/// # Errors
/// * [KzgError::InvalidInputLength] if the number of blobs differs from the number of commitments
/// * [KzgError::LengthMismatch] if the number of commitments differs from the number of proofs
pub fn verify_blob_kzg_proof_batch(
    domain: &Domain,
    blobs: &[Blob],
    commitments: &[G1Affine],
    proofs: &[G1Affine],
    opening_key: &OpeningKey,
) -> Result<(), KzgError> {
    if commitments.len() != proofs.len() {
        return Err(KzgError::LengthMismatch {
            commitments: commitments.len(),
            proofs: proofs.len(),
        });
    }
    if blobs.len() != commitments.len() {
        return Err(KzgError::InvalidInputLength);
    }

    let openings = blobs
        .iter()
        .zip(commitments.iter())
        .zip(proofs.iter())
        .map(|((blob, commitment), proof)| blob_opening(domain, blob, commitment, proof))
        .collect::<Result<Vec<OpeningProof>, KzgError>>()?;

    verify_kzg_proof_batch(commitments, &openings, opening_key)
}
