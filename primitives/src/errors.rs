use thiserror::Error;

extern crate alloc;
use alloc::string::String;

/// Errors related to KZG operations.
///
/// The `KzgError` enum encapsulates all possible errors that can occur during
/// domain construction, setup validation, committing, opening and verifying.
///
/// The variants fall into three groups that callers are expected to treat
/// differently:
/// - malformed byte input ([KzgError::DeserializationError]),
/// - inconsistent lengths or setup problems, which point at a bug or a bad
///   configuration on the caller side,
/// - [KzgError::VerificationFailed], which is the ordinary rejection of an
///   invalid proof.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum KzgError {
    /// Byte input could not be decoded: point not on curve or not in the
    /// subgroup, scalar not canonical, or wrong length.
    #[error("deserialization error: {0}")]
    DeserializationError(String),

    /// Error related to serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// The polynomial does not have one evaluation per domain element.
    #[error("domain size {expected} does not match polynomial length {actual}")]
    DomainSizeMismatch { expected: usize, actual: usize },

    /// The requested domain needs a root of unity of higher order than the
    /// scalar field provides.
    #[error("domain of size 2^{requested_log2} exceeds the maximum 2^{max_log2}")]
    DomainTooLarge { requested_log2: u32, max_log2: u32 },

    #[error("polynomial length {polynomial_len} does not match commit key length {key_len}")]
    PolynomialLengthMismatch {
        polynomial_len: usize,
        key_len: usize,
    },

    /// Batch inputs of different lengths.
    #[error("number of commitments ({commitments}) does not match number of proofs ({proofs})")]
    LengthMismatch { commitments: usize, proofs: usize },

    #[error("trusted setup is empty")]
    EmptySRS,

    #[error("declared setup length {declared} does not match number of G1 points {actual}")]
    SRSLengthMismatch { declared: usize, actual: usize },

    /// The setup holds fewer G1 points than the domain needs.
    #[error("domain needs {required} G1 setup points but only {available} are available")]
    InsufficientSetupPoints { required: usize, available: usize },

    #[error("malformed trusted setup: {0}")]
    MalformedTrustedSetup(String),

    /// The pairing check rejected the proof.
    #[error("verification failed")]
    VerificationFailed,

    #[error("MSM error: {0}")]
    MsmError(String),

    #[error("io error: {0}")]
    IoError(String),

    /// Error indicating an invalid input length scenario, typically in data processing.
    #[error("invalid input length")]
    InvalidInputLength,
}

impl KzgError {
    /// Returns true when the error is a rejection of a proof rather than a
    /// problem with the inputs.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, KzgError::VerificationFailed)
    }
}
