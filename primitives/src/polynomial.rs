use ark_bn254::Fr;
use ark_std::Zero;

use crate::{consts::BYTES_PER_FIELD_ELEMENT, errors::KzgError, traits::WriteBytesBe};

extern crate alloc;
use alloc::vec::Vec;

/// A polynomial represented by its evaluations over a [crate::domain::Domain]:
/// `evaluations[i]` is the value at `domain.roots()[i]`. These are not
/// coefficients.
///
/// Committing and opening never convert to coefficient form; the commit key
/// is laid out in the same (Lagrange) basis.
#[derive(Clone, Debug, PartialEq)]
pub struct PolynomialEvalForm {
    /// evaluations of the polynomial, padded with 0s to the next power of
    /// two. Hence if the polynomial is created with evaluations [1, 2, 3],
    /// the internal representation will be [1, 2, 3, 0].
    evaluations: Vec<Fr>,
}

impl PolynomialEvalForm {
    /// Creates a new [PolynomialEvalForm] from the given evaluations, padded
    /// to the next power of two by appending zeros. Typically a
    /// [crate::blob::Blob] is converted with
    /// [crate::blob::Blob::to_polynomial_eval_form] instead.
    pub fn new(evals: Vec<Fr>) -> Self {
        let next_power_of_two = evals.len().max(1).next_power_of_two();
        let mut padded_evals = evals;
        padded_evals.resize(next_power_of_two, Fr::zero());
        Self {
            evaluations: padded_evals,
        }
    }

    pub fn evaluations(&self) -> &[Fr] {
        &self.evaluations
    }

    /// Returns the number of evaluations, which is the padded length.
    pub fn len(&self) -> usize {
        self.evaluations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evaluations.is_empty()
    }

    pub fn get_evaluation(&self, i: usize) -> Option<&Fr> {
        self.evaluations.get(i)
    }

    /// Converts all `Fr` elements in the polynomial to a single big-endian byte vector.
    pub fn to_bytes_be(&self) -> Result<Vec<u8>, KzgError> {
        let mut bytes = Vec::with_capacity(self.len() * BYTES_PER_FIELD_ELEMENT);
        for evaluation in &self.evaluations {
            bytes.extend_from_slice(&evaluation.to_bytes_be()?);
        }
        Ok(bytes)
    }
}

impl From<PolynomialEvalForm> for Vec<Fr> {
    fn from(polynomial: PolynomialEvalForm) -> Self {
        polynomial.evaluations
    }
}
