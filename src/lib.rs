//! ## Library Design / Architecture
//!
//! The main purpose of this library is to take a blob of data, commit to it,
//! and then generate and verify KZG opening proofs against that commitment,
//! over the bn254 curve.
//!
//! ### Crates
//!
//! - [da_kzg_bn254_primitives]: domain, blob and polynomial types, trusted
//!   setup loading and validation, key derivation, Fiat-Shamir transcripts and
//!   the byte encodings.
//! - [da_kzg_bn254_prover]: committing and opening, and the parallel reader
//!   for binary setup point files.
//! - [da_kzg_bn254_verifier]: single and batched proof verification.
//! - this crate: [Context], which ties the three together behind a byte
//!   oriented API.
//!
//! ### Data Types
//!
//! The main data pipeline goes:
//! > bytes -> [Blob] -> [PolynomialEvalForm] -> KZG Commitment / Proof
//!
//! - Blob: bn254 field elements array, 32 big-endian bytes each. Every chunk
//!   must be a canonical scalar (less than the modulus).
//! - Polynomial: the blob's field elements interpreted as the evaluations of
//!   a polynomial over the roots of unity of a power-of-two domain.
//!
//! ### KZG Commitments
//!
//! Committing is a single MSM between the evaluations and the setup points
//! in Lagrange form, which are derived from the monomial setup points with an
//! inverse FFT over G1 when the [Context] is built. No polynomial is ever
//! converted to coefficient form.
//!
//! ### KZG Proofs
//!
//! An opening proof at `z` is a commitment to the quotient
//! `(p(X) - p(z)) / (X - z)`, also computed in evaluation form. Verification
//! is one pairing check, and a batch of proofs is folded with powers of a
//! Fiat-Shamir scalar into a single pairing check.
//!
//! ## Examples
//!
//! ```rust
//! use ark_bn254::Fr;
//! use da_kzg_bn254::{Context, TrustedSetup};
//!
//! // A real deployment loads a setup from a ceremony with
//! // `Context::from_json_file` or `Context::from_point_files`.
//! let setup = TrustedSetup::insecure_from_secret(&Fr::from(1234u64), 4);
//! let ctx = Context::new(setup, 4, 4).unwrap();
//!
//! let mut blob = vec![0u8; 4 * 32];
//! blob[31] = 7;
//! let commitment = ctx.blob_to_kzg_commitment(&blob).unwrap();
//! let proof = ctx.compute_blob_kzg_proof(&blob, &commitment).unwrap();
//! assert!(ctx.verify_blob_kzg_proof(&blob, &commitment, &proof).is_ok());
//! ```

pub mod context;

pub use context::Context;
pub use da_kzg_bn254_primitives::{
    blob::Blob, errors::KzgError, polynomial::PolynomialEvalForm, proof::OpeningProof,
    trusted_setup::TrustedSetup,
};
pub use da_kzg_bn254_primitives as primitives;
pub use da_kzg_bn254_prover as prover;
pub use da_kzg_bn254_verifier as verifier;
