//! Shared building blocks for committing to blobs with KZG over bn254 in
//! evaluation form.
//!
//! - [domain::Domain]: roots of unity, barycentric evaluation, Lagrange
//!   coefficients and bit-reversal.
//! - [trusted_setup::TrustedSetup] and [validator]: loading an SRS and
//!   checking it is well formed before anything is derived from it.
//! - [keys]: Lagrange commit key and opening key derived from a validated setup.
//! - [blob::Blob] / [polynomial::PolynomialEvalForm]: the data being committed.
//! - [transcript]: Fiat-Shamir challenges.

pub mod blob;
pub mod consts;
pub mod domain;
pub mod errors;
pub mod helpers;
pub mod keys;
pub mod polynomial;
pub mod proof;
pub mod traits;
pub mod transcript;
pub mod trusted_setup;
pub mod validator;
