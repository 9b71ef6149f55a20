use ark_bn254::{G1Affine, G2Affine};
use ark_ec::AffineRepr;
use tracing::{debug, warn};

extern crate alloc;
use alloc::string::ToString;

use crate::{
    errors::KzgError,
    helpers::{compute_powers, g1_lincomb, pairings_verify},
    transcript::compute_setup_challenge,
    trusted_setup::TrustedSetup,
};

/// A [TrustedSetup] that passed [validate]. It can only be obtained through
/// that function, so key derivation never sees an unchecked setup.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedSetup(TrustedSetup);

impl ValidatedSetup {
    pub fn setup(&self) -> &TrustedSetup {
        &self.0
    }

    pub fn into_inner(self) -> TrustedSetup {
        self.0
    }
}

/// Validates a setup of untrusted origin and marks it as trusted.
///
/// See [check_well_formed] for the checks performed.
pub fn validate(setup: TrustedSetup, declared_len: usize) -> Result<ValidatedSetup, KzgError> {
    match check_well_formed(&setup, declared_len) {
        Ok(()) => {
            debug!(
                g1_points = setup.g1_monomial().len(),
                g2_points = setup.g2_monomial().len(),
                "trusted setup is well formed"
            );
            Ok(ValidatedSetup(setup))
        },
        Err(err) => {
            warn!(error = %err, "rejected trusted setup");
            Err(err)
        },
    }
}

/// Checks, without knowing the secret `s`, that the G1 points are
/// consecutive powers `s^i * G1` of the same secret that scales the second
/// G2 point.
///
/// With a Fiat-Shamir scalar `r` over the whole setup, let
/// `L = Σ r^i * g1[i+1]` and `R = Σ r^i * g1[i]`. The setup is accepted iff
/// `e(L, g2[0]) == e(R, g2[1])`. If any consecutive pair breaks
/// `g1[i+1] = s * g1[i]`, the check passes only with probability about
/// `len / |Fr|`.
///
/// # Errors
/// * [KzgError::EmptySRS] if either point sequence is empty
/// * [KzgError::SRSLengthMismatch] if `declared_len` differs from the number of G1 points
/// * [KzgError::MalformedTrustedSetup] for a wrong generator, missing `s * G2`, or a failed pairing check
pub fn check_well_formed(setup: &TrustedSetup, declared_len: usize) -> Result<(), KzgError> {
    let g1 = setup.g1_monomial();
    let g2 = setup.g2_monomial();

    if g1.is_empty() || g2.is_empty() {
        return Err(KzgError::EmptySRS);
    }

    if declared_len != g1.len() {
        return Err(KzgError::SRSLengthMismatch {
            declared: declared_len,
            actual: g1.len(),
        });
    }

    if g2.len() < 2 {
        return Err(KzgError::MalformedTrustedSetup(
            "missing the secret scaled G2 point".to_string(),
        ));
    }

    if g1[0] != G1Affine::generator() {
        return Err(KzgError::MalformedTrustedSetup(
            "first G1 point is not the generator".to_string(),
        ));
    }

    if g2[0] != G2Affine::generator() {
        return Err(KzgError::MalformedTrustedSetup(
            "first G2 point is not the generator".to_string(),
        ));
    }

    // A single G1 point has no consecutive pairs to relate
    if g1.len() == 1 {
        return Ok(());
    }

    let r = compute_setup_challenge(g1, g2)?;
    let r_powers = compute_powers(&r, g1.len() - 1);

    let lhs = g1_lincomb(&g1[1..], &r_powers)?;
    let rhs = g1_lincomb(&g1[..g1.len() - 1], &r_powers)?;

    if !pairings_verify(lhs, g2[0], rhs, g2[1]) {
        return Err(KzgError::MalformedTrustedSetup(
            "G1 points are not consecutive powers of the G2 secret".to_string(),
        ));
    }

    Ok(())
}
