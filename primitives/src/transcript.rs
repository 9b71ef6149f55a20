//! Fiat-Shamir challenges. Every scalar the protocol needs at random is
//! derived here by hashing public inputs behind a domain separator, so no
//! caller ever supplies one.

use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_std::vec::Vec;

use crate::{
    blob::Blob,
    consts::{
        BYTES_PER_FIELD_ELEMENT, FIAT_SHAMIR_PROTOCOL_DOMAIN, RANDOM_CHALLENGE_KZG_BATCH_DOMAIN,
        SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED, TRUSTED_SETUP_CHECK_DOMAIN,
    },
    errors::KzgError,
    helpers::hash_to_field_element,
    proof::OpeningProof,
    traits::WriteBytesBe,
};

/// Computes the evaluation challenge for a blob and its commitment:
/// `H(domain ‖ u64_be(n) ‖ blob ‖ commitment)` reduced into the field, where
/// `n` is the number of field elements in the blob.
pub fn compute_challenge(blob: &Blob, commitment: &G1Affine) -> Result<Fr, KzgError> {
    let challenge_input_size =
        FIAT_SHAMIR_PROTOCOL_DOMAIN.len() + 8 + blob.len() + SIZE_OF_G1_AFFINE_COMPRESSED;

    let mut digest_bytes = Vec::with_capacity(challenge_input_size);
    digest_bytes.extend_from_slice(FIAT_SHAMIR_PROTOCOL_DOMAIN);
    digest_bytes.extend_from_slice(&(blob.num_field_elements() as u64).to_be_bytes());
    digest_bytes.extend_from_slice(blob.data());
    digest_bytes.extend_from_slice(&commitment.to_bytes_be()?);

    if digest_bytes.len() != challenge_input_size {
        return Err(KzgError::InvalidInputLength);
    }

    Ok(hash_to_field_element(&digest_bytes))
}

/// Challenge used to fold a batch of opening proofs. Binds every commitment,
/// evaluation point, claimed value and quotient commitment in the batch.
///
/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_kzg_proof_batch
pub fn compute_batch_challenge(
    commitments: &[G1Affine],
    proofs: &[OpeningProof],
) -> Result<Fr, KzgError> {
    if commitments.len() != proofs.len() {
        return Err(KzgError::LengthMismatch {
            commitments: commitments.len(),
            proofs: proofs.len(),
        });
    }
    let n = commitments.len();

    let input_size = RANDOM_CHALLENGE_KZG_BATCH_DOMAIN.len()
        + 8
        + n * (2 * SIZE_OF_G1_AFFINE_COMPRESSED + 2 * BYTES_PER_FIELD_ELEMENT);

    let mut data_to_be_hashed = Vec::with_capacity(input_size);
    data_to_be_hashed.extend_from_slice(RANDOM_CHALLENGE_KZG_BATCH_DOMAIN);
    data_to_be_hashed.extend_from_slice(&(n as u64).to_be_bytes());

    for (commitment, proof) in commitments.iter().zip(proofs.iter()) {
        data_to_be_hashed.extend_from_slice(&commitment.to_bytes_be()?);
        data_to_be_hashed.extend_from_slice(&proof.input_point.to_bytes_be()?);
        data_to_be_hashed.extend_from_slice(&proof.claimed_value.to_bytes_be()?);
        data_to_be_hashed.extend_from_slice(&proof.quotient_commitment.to_bytes_be()?);
    }

    if data_to_be_hashed.len() != input_size {
        return Err(KzgError::InvalidInputLength);
    }

    Ok(hash_to_field_element(&data_to_be_hashed))
}

/// Challenge used by the trusted setup check. Hashes every point of the
/// setup, so a malicious setup cannot be chosen after seeing it.
pub fn compute_setup_challenge(
    g1_points: &[G1Affine],
    g2_points: &[G2Affine],
) -> Result<Fr, KzgError> {
    let input_size = TRUSTED_SETUP_CHECK_DOMAIN.len()
        + 16
        + g1_points.len() * SIZE_OF_G1_AFFINE_COMPRESSED
        + g2_points.len() * SIZE_OF_G2_AFFINE_COMPRESSED;

    let mut data_to_be_hashed = Vec::with_capacity(input_size);
    data_to_be_hashed.extend_from_slice(TRUSTED_SETUP_CHECK_DOMAIN);
    data_to_be_hashed.extend_from_slice(&(g1_points.len() as u64).to_be_bytes());
    data_to_be_hashed.extend_from_slice(&(g2_points.len() as u64).to_be_bytes());
    for point in g1_points {
        data_to_be_hashed.extend_from_slice(&point.to_bytes_be()?);
    }
    for point in g2_points {
        data_to_be_hashed.extend_from_slice(&point.to_bytes_be()?);
    }

    Ok(hash_to_field_element(&data_to_be_hashed))
}
