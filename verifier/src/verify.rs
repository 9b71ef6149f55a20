use ark_bn254::{Bn254, G1Affine, G1Projective};
use ark_ec::{pairing::Pairing, CurveGroup, VariableBaseMSM};
use ark_ff::Zero;
use da_kzg_bn254_primitives::{
    blob::Blob, domain::Domain, errors::KzgError, keys::OpeningKey, proof::OpeningProof,
    transcript,
};

extern crate alloc;
use alloc::string::ToString;

/// Verifies that `commitment` opens to `proof.claimed_value` at
/// `proof.input_point`.
///
/// With `C` the commitment, `Q` the quotient commitment, `z` the input point
/// and `y` the claimed value, the proof is valid iff
/// `e(C - y*G1, G2) == e(Q, s*G2 - z*G2)`. Moving everything to one side and
/// the `z` term into G1 gives
///
/// ```text
/// e(y*G1 - z*Q - C, G2) * e(Q, s*G2) == 1
/// ```
///
/// which needs a two-base MSM in G1 and a single multi-pairing against the
/// prepared G2 points of the opening key.
///
/// # Returns
/// * `Ok(())` if the proof is valid
/// * `Err(KzgError::VerificationFailed)` if the pairing check rejects it
/// * `Err(KzgError::MsmError)` if the MSM could not be computed
pub fn verify_proof(
    commitment: &G1Affine,
    proof: &OpeningProof,
    opening_key: &OpeningKey,
) -> Result<(), KzgError> {
    let y_g1_minus_z_q = G1Projective::msm(
        &[opening_key.generator_g1, proof.quotient_commitment],
        &[proof.claimed_value, -proof.input_point],
    )
    .map_err(|e| KzgError::MsmError(e.to_string()))?;
    let lhs_g1 = (y_g1_minus_z_q - commitment).into_affine();

    let pairing = Bn254::multi_pairing(
        [lhs_g1, proof.quotient_commitment],
        [
            opening_key.generator_g2_prepared().clone(),
            opening_key.alpha_g2_prepared().clone(),
        ],
    );

    if pairing.is_zero() {
        Ok(())
    } else {
        Err(KzgError::VerificationFailed)
    }
}

/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#verify_blob_kzg_proof
///
/// Recomputes the Fiat-Shamir point for the blob and commitment, evaluates
/// the blob there, and checks `proof` against that value.
pub fn verify_blob_kzg_proof(
    domain: &Domain,
    blob: &Blob,
    commitment: &G1Affine,
    proof: &G1Affine,
    opening_key: &OpeningKey,
) -> Result<(), KzgError> {
    let opening = blob_opening(domain, blob, commitment, proof)?;
    verify_proof(commitment, &opening, opening_key)
}

/// Rebuilds the full [OpeningProof] for a blob proof: the input point is the
/// blob challenge and the claimed value is the blob evaluated there.
pub(crate) fn blob_opening(
    domain: &Domain,
    blob: &Blob,
    commitment: &G1Affine,
    proof: &G1Affine,
) -> Result<OpeningProof, KzgError> {
    let polynomial = blob.to_polynomial_eval_form()?;
    let input_point = transcript::compute_challenge(blob, commitment)?;
    let claimed_value = domain.evaluate(polynomial.evaluations(), &input_point)?;
    Ok(OpeningProof {
        quotient_commitment: *proof,
        input_point,
        claimed_value,
    })
}
