use ark_bn254::{Fr, G1Affine};
use da_kzg_bn254_primitives::{
    blob::Blob,
    consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED},
    domain::Domain,
    errors::KzgError,
    keys::{OpeningKey, SetupKeys},
    proof::OpeningProof,
    traits::{ReadFrFromBytes, ReadPointFromBytes, WriteBytesBe},
    trusted_setup::TrustedSetup,
    validator,
};
use da_kzg_bn254_prover::{kzg::KZG, srs};
use da_kzg_bn254_verifier::{batch, verify};
use tracing::debug;

/// Number of G2 points read by [Context::from_point_files]: the generator
/// and the secret scaled generator.
const NUM_G2_POINTS: usize = 2;

/// Everything needed to commit, prove and verify for blobs of a fixed size.
///
/// A [Context] is built once from a trusted setup, which is validated on the
/// way in, and is read-only afterwards: all operations take `&self` and it can
/// be shared between threads.
///
/// Blob element `i` is the evaluation at the `i`-th root of a bit-reversed
/// domain, so the commit key is bit-reversed as well.
///
/// All byte inputs and outputs use the big-endian encodings of
/// [da_kzg_bn254_primitives::traits]: 32 bytes per scalar and per compressed
/// G1 point.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    field_elements_per_blob: usize,
    prover: KZG,
    opening_key: OpeningKey,
}

impl Context {
    /// Validates `setup` against the declared number of G1 points and derives
    /// the keys for blobs of `field_elements_per_blob` elements.
    ///
    /// `declared_setup_len` comes from configuration, not from the setup
    /// itself: a setup that was truncated or padded on the way in is rejected.
    ///
    /// # Errors
    /// * [KzgError::DomainSizeMismatch] if `field_elements_per_blob` is not a
    ///   power of two
    /// * [KzgError::DomainTooLarge] if it exceeds the field's 2-adicity
    /// * any setup validation error (see [validator::check_well_formed]),
    ///   including [KzgError::SRSLengthMismatch]
    /// * [KzgError::InsufficientSetupPoints] if the setup is shorter than a blob
    pub fn new(
        setup: TrustedSetup,
        declared_setup_len: usize,
        field_elements_per_blob: usize,
    ) -> Result<Self, KzgError> {
        let domain = blob_domain(field_elements_per_blob)?;
        Self::with_domain(setup, declared_setup_len, domain)
    }

    /// Loads the setup from its JSON encoding, see
    /// [TrustedSetup::from_json_str].
    pub fn from_json_str(
        json: &str,
        declared_setup_len: usize,
        field_elements_per_blob: usize,
    ) -> Result<Self, KzgError> {
        let setup = TrustedSetup::from_json_str(json)?;
        Self::new(setup, declared_setup_len, field_elements_per_blob)
    }

    pub fn from_json_file(
        path: &str,
        declared_setup_len: usize,
        field_elements_per_blob: usize,
    ) -> Result<Self, KzgError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| KzgError::IoError(format!("{}: {}", path, e)))?;
        Self::from_json_str(&json, declared_setup_len, field_elements_per_blob)
    }

    /// Loads the first `num_g1_points` G1 points and the first two G2 points
    /// from binary point files (see [srs::read_setup_files]).
    ///
    /// The blob size is checked before any file is touched.
    pub fn from_point_files(
        path_to_g1_points: &str,
        path_to_g2_points: &str,
        num_g1_points: usize,
        field_elements_per_blob: usize,
    ) -> Result<Self, KzgError> {
        let domain = blob_domain(field_elements_per_blob)?;
        let setup = srs::read_setup_files(
            path_to_g1_points,
            path_to_g2_points,
            num_g1_points,
            NUM_G2_POINTS,
        )?;
        Self::with_domain(setup, num_g1_points, domain)
    }

    fn with_domain(
        setup: TrustedSetup,
        declared_setup_len: usize,
        domain: Domain,
    ) -> Result<Self, KzgError> {
        let field_elements_per_blob = domain.cardinality();
        let setup_points = setup.len();

        let validated = validator::validate(setup, declared_setup_len)?;
        let SetupKeys {
            commit_key,
            opening_key,
        } = SetupKeys::derive(&validated, &domain)?;
        let prover = KZG::new(domain, commit_key)?;

        debug!(field_elements_per_blob, setup_points, "created KZG context");

        Ok(Self {
            field_elements_per_blob,
            prover,
            opening_key,
        })
    }

    pub fn field_elements_per_blob(&self) -> usize {
        self.field_elements_per_blob
    }

    pub fn domain(&self) -> &Domain {
        self.prover.domain()
    }

    pub fn prover(&self) -> &KZG {
        &self.prover
    }

    pub fn opening_key(&self) -> &OpeningKey {
        &self.opening_key
    }

    /// Commits to a blob of exactly `field_elements_per_blob` scalars.
    pub fn blob_to_kzg_commitment(
        &self,
        blob: &[u8],
    ) -> Result<[u8; SIZE_OF_G1_AFFINE_COMPRESSED], KzgError> {
        let blob = self.deserialize_blob(blob)?;
        self.prover.commit_blob(&blob)?.to_bytes_be()
    }

    /// Opens the blob at `z`, returning the proof and the value `y = p(z)`.
    pub fn compute_kzg_proof(
        &self,
        blob: &[u8],
        z: &[u8; BYTES_PER_FIELD_ELEMENT],
    ) -> Result<([u8; SIZE_OF_G1_AFFINE_COMPRESSED], [u8; BYTES_PER_FIELD_ELEMENT]), KzgError> {
        let blob = self.deserialize_blob(blob)?;
        let z_fr = Fr::deserialize_from_bytes_be(z)?;
        let polynomial = blob.to_polynomial_eval_form()?;
        let proof = self.prover.compute_proof(&polynomial, &z_fr)?;
        Ok((
            proof.quotient_commitment.to_bytes_be()?,
            proof.claimed_value.to_bytes_be()?,
        ))
    }

    /// Proof for the blob at its Fiat-Shamir challenge. The commitment is
    /// decoded, so an invalid point is rejected, but is not recomputed.
    pub fn compute_blob_kzg_proof(
        &self,
        blob: &[u8],
        commitment: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    ) -> Result<[u8; SIZE_OF_G1_AFFINE_COMPRESSED], KzgError> {
        let blob = self.deserialize_blob(blob)?;
        let commitment = G1Affine::read_point_from_bytes_native_compressed_be(commitment)?;
        let proof = self.prover.compute_blob_proof(&blob, &commitment)?;
        proof.quotient_commitment.to_bytes_be()
    }

    /// Returns `Ok(())` if `proof` shows that the polynomial behind
    /// `commitment` evaluates to `y` at `z`, and
    /// [KzgError::VerificationFailed] if it does not.
    pub fn verify_kzg_proof(
        &self,
        commitment: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
        z: &[u8; BYTES_PER_FIELD_ELEMENT],
        y: &[u8; BYTES_PER_FIELD_ELEMENT],
        proof: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    ) -> Result<(), KzgError> {
        let commitment = G1Affine::read_point_from_bytes_native_compressed_be(commitment)?;
        let opening = OpeningProof {
            quotient_commitment: G1Affine::read_point_from_bytes_native_compressed_be(proof)?,
            input_point: Fr::deserialize_from_bytes_be(z)?,
            claimed_value: Fr::deserialize_from_bytes_be(y)?,
        };
        verify::verify_proof(&commitment, &opening, &self.opening_key)
    }

    pub fn verify_blob_kzg_proof(
        &self,
        blob: &[u8],
        commitment: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
        proof: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    ) -> Result<(), KzgError> {
        let blob = self.deserialize_blob(blob)?;
        let commitment = G1Affine::read_point_from_bytes_native_compressed_be(commitment)?;
        let proof = G1Affine::read_point_from_bytes_native_compressed_be(proof)?;
        verify::verify_blob_kzg_proof(
            self.domain(),
            &blob,
            &commitment,
            &proof,
            &self.opening_key,
        )
    }

    /// Verifies many blob proofs with a single pairing check.
    pub fn verify_blob_kzg_proof_batch(
        &self,
        blobs: &[Vec<u8>],
        commitments: &[[u8; SIZE_OF_G1_AFFINE_COMPRESSED]],
        proofs: &[[u8; SIZE_OF_G1_AFFINE_COMPRESSED]],
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

        let blobs = blobs
            .iter()
            .map(|blob| self.deserialize_blob(blob))
            .collect::<Result<Vec<Blob>, KzgError>>()?;
        let commitments = commitments
            .iter()
            .map(|c| G1Affine::read_point_from_bytes_native_compressed_be(c))
            .collect::<Result<Vec<G1Affine>, KzgError>>()?;
        let proofs = proofs
            .iter()
            .map(|p| G1Affine::read_point_from_bytes_native_compressed_be(p))
            .collect::<Result<Vec<G1Affine>, KzgError>>()?;

        batch::verify_blob_kzg_proof_batch(
            self.domain(),
            &blobs,
            &commitments,
            &proofs,
            &self.opening_key,
        )
    }

    /// Blobs must hold exactly one scalar per domain element.
    fn deserialize_blob(&self, blob: &[u8]) -> Result<Blob, KzgError> {
        if blob.len() != self.field_elements_per_blob * BYTES_PER_FIELD_ELEMENT {
            return Err(KzgError::InvalidInputLength);
        }
        Blob::new(blob)
    }
}

/// Bit-reversed domain holding exactly `field_elements_per_blob` elements.
fn blob_domain(field_elements_per_blob: usize) -> Result<Domain, KzgError> {
    let mut domain = Domain::new(field_elements_per_blob)?;
    if domain.cardinality() != field_elements_per_blob {
        return Err(KzgError::DomainSizeMismatch {
            expected: domain.cardinality(),
            actual: field_elements_per_blob,
        });
    }
    domain.reverse_order();
    Ok(domain)
}
