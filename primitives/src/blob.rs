use ark_bn254::Fr;

use crate::{
    consts::BYTES_PER_FIELD_ELEMENT, errors::KzgError, polynomial::PolynomialEvalForm,
    traits::ReadFrFromBytes,
};

extern crate alloc;
use alloc::format;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// A blob: a byte string made of big-endian scalars, one per 32 bytes.
///
/// Element `i` of the blob is the evaluation of the blob polynomial at the
/// `i`-th root of the domain it is committed over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob {
    /// The binary data contained within the blob.
    blob_data: Vec<u8>,
}

/// Decodes blob data into bn254 scalars, checking that the data is a whole
/// number of canonical field elements (i.e. each is less than the modulus).
fn decode_canonical_field_elements(data: &[u8]) -> Result<Vec<Fr>, KzgError> {
    if data.len() % BYTES_PER_FIELD_ELEMENT != 0 {
        return Err(KzgError::DeserializationError(format!(
            "blob length {} is not a multiple of {}",
            data.len(),
            BYTES_PER_FIELD_ELEMENT
        )));
    }

    data.chunks_exact(BYTES_PER_FIELD_ELEMENT)
        .enumerate()
        .map(|(i, chunk)| {
            Fr::deserialize_from_bytes_be(chunk).map_err(|_| {
                KzgError::DeserializationError(format!(
                    "field element at position {} is not canonical",
                    i
                ))
            })
        })
        .collect()
}

impl Blob {
    /// Creates a new `Blob` from the given blob_data.
    ///
    /// This function validates that all 32-byte chunks in the data represent
    /// canonical bn254 field elements (i.e., they are less than the field modulus).
    pub fn new(blob_data: &[u8]) -> Result<Self, KzgError> {
        decode_canonical_field_elements(blob_data)?;
        Ok(Blob {
            blob_data: blob_data.to_vec(),
        })
    }

    /// Creates a blob from scalars, encoding each one big-endian.
    pub fn from_field_elements(elements: &[Fr]) -> Result<Self, KzgError> {
        let polynomial = PolynomialEvalForm::new(elements.to_vec());
        let mut blob_data = polynomial.to_bytes_be()?;
        blob_data.truncate(elements.len() * BYTES_PER_FIELD_ELEMENT);
        Ok(Blob { blob_data })
    }

    /// Returns the blob data
    pub fn data(&self) -> &[u8] {
        &self.blob_data
    }

    /// Returns the length of the blob data in bytes.
    pub fn len(&self) -> usize {
        self.blob_data.len()
    }

    /// Checks whether the blob data is empty.
    pub fn is_empty(&self) -> bool {
        self.blob_data.is_empty()
    }

    /// Number of scalars in the blob.
    pub fn num_field_elements(&self) -> usize {
        self.blob_data.len() / BYTES_PER_FIELD_ELEMENT
    }

    /// Decodes the blob into scalars. Fails for data that did not go through
    /// [Blob::new], e.g. blobs deserialized with serde.
    pub fn to_field_elements(&self) -> Result<Vec<Fr>, KzgError> {
        decode_canonical_field_elements(&self.blob_data)
    }

    /// Convert the blob data to a [PolynomialEvalForm], padding with zero
    /// evaluations to the next power of two.
    pub fn to_polynomial_eval_form(&self) -> Result<PolynomialEvalForm, KzgError> {
        Ok(PolynomialEvalForm::new(self.to_field_elements()?))
    }
}

impl TryFrom<Vec<u8>> for Blob {
    type Error = KzgError;

    fn try_from(blob_data: Vec<u8>) -> Result<Self, Self::Error> {
        decode_canonical_field_elements(&blob_data)?;
        Ok(Blob { blob_data })
    }
}

impl From<Blob> for Vec<u8> {
    fn from(blob: Blob) -> Self {
        blob.blob_data
    }
}
