use ark_bn254::{Fr, G1Affine};

/// Proof that a committed polynomial `f` evaluates to `claimed_value` at
/// `input_point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningProof {
    /// Commitment to the quotient `(f(X) - f(z)) / (X - z)`
    pub quotient_commitment: G1Affine,
    /// Point the polynomial is evaluated at: `z`
    pub input_point: Fr,
    /// Purported value `f(z)`
    pub claimed_value: Fr,
}
