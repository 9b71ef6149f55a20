use ark_bn254::{Fr, G1Affine, G1Projective};
use ark_ec::{CurveGroup, VariableBaseMSM};
use ark_ff::{batch_inversion, Zero};
use da_kzg_bn254_primitives::{
    blob::Blob,
    domain::Domain,
    errors::KzgError,
    keys::CommitKey,
    polynomial::PolynomialEvalForm,
    proof::OpeningProof,
    transcript,
};
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use tracing::trace;

/// Main struct of the prover crate. [KZG] owns the evaluation [Domain] and
/// the Lagrange [CommitKey] derived for it, and provides methods for
/// committing to a blob (either via a [Blob] itself, or a
/// [PolynomialEvalForm]) and computing opening proofs.
///
/// Both members are immutable once built, so a [KZG] can be shared between
/// threads and used concurrently.
#[derive(Debug, PartialEq, Clone)]
pub struct KZG {
    domain: Domain,
    commit_key: CommitKey,
}

impl KZG {
    /// Pairs a domain with its commit key.
    ///
    /// # Errors
    /// * [KzgError::PolynomialLengthMismatch] if the key does not have one
    ///   point per domain element.
    pub fn new(domain: Domain, commit_key: CommitKey) -> Result<Self, KzgError> {
        if domain.cardinality() != commit_key.len() {
            return Err(KzgError::PolynomialLengthMismatch {
                polynomial_len: domain.cardinality(),
                key_len: commit_key.len(),
            });
        }
        Ok(Self { domain, commit_key })
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn commit_key(&self) -> &CommitKey {
        &self.commit_key
    }

    /// helper function to get the i-th root of the domain
    pub fn get_nth_root_of_unity(&self, i: usize) -> Option<&Fr> {
        self.domain.roots().get(i)
    }

    /// Commit to a polynomial in evaluation form.
    pub fn commit_eval_form(&self, polynomial: &PolynomialEvalForm) -> Result<G1Affine, KzgError> {
        commit_eval_form(polynomial.evaluations(), &self.commit_key)
    }

    /// commit to a [Blob], by transforming it into a [PolynomialEvalForm] and
    /// then calling [KZG::commit_eval_form].
    pub fn commit_blob(&self, blob: &Blob) -> Result<G1Affine, KzgError> {
        let polynomial = blob.to_polynomial_eval_form()?;
        self.commit_eval_form(&polynomial)
    }

    /// Compute an opening proof for `polynomial` at `z_fr`.
    pub fn compute_proof(
        &self,
        polynomial: &PolynomialEvalForm,
        z_fr: &Fr,
    ) -> Result<OpeningProof, KzgError> {
        compute_proof(&self.domain, polynomial.evaluations(), z_fr, &self.commit_key)
    }

    /// Opening proof at the root of unity with the given index.
    pub fn compute_proof_with_known_z_fr_index(
        &self,
        polynomial: &PolynomialEvalForm,
        index: usize,
    ) -> Result<OpeningProof, KzgError> {
        let z_fr = *self
            .get_nth_root_of_unity(index)
            .ok_or(KzgError::DomainSizeMismatch {
                expected: self.domain.cardinality(),
                actual: index,
            })?;
        self.compute_proof(polynomial, &z_fr)
    }

    /// Computes the proof for a blob at the Fiat-Shamir point derived from
    /// the blob and its commitment.
    ///
    /// Note: this does not check that `commitment` commits to `blob`; callers
    /// should get it from [KZG::commit_blob].
    pub fn compute_blob_proof(
        &self,
        blob: &Blob,
        commitment: &G1Affine,
    ) -> Result<OpeningProof, KzgError> {
        let blob_poly = blob.to_polynomial_eval_form()?;
        let evaluation_challenge = transcript::compute_challenge(blob, commitment)?;
        self.compute_proof(&blob_poly, &evaluation_challenge)
    }
}

/// Commits to a polynomial in evaluation form: `Σ evaluations[i] * commit_key[i]`.
///
/// No conversion to coefficient form is needed since the key is in the same
/// Lagrange basis as the evaluations.
pub fn commit_eval_form(evaluations: &[Fr], commit_key: &CommitKey) -> Result<G1Affine, KzgError> {
    if evaluations.len() != commit_key.len() {
        return Err(KzgError::PolynomialLengthMismatch {
            polynomial_len: evaluations.len(),
            key_len: commit_key.len(),
        });
    }

    G1Projective::msm(commit_key.g1_lagrange(), evaluations)
        .map(|res| res.into_affine())
        .map_err(|err| KzgError::MsmError(err.to_string()))
}

/// Computes a KZG opening proof for `evaluations` at `z_fr`.
///
/// 1. Evaluates the polynomial at `z` to get `y = p(z)`.
/// 2. Computes the quotient `q(X) = (p(X) - y) / (X - z)` in evaluation form.
/// 3. Commits to `q`.
///
/// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#compute_kzg_proof_impl
pub fn compute_proof(
    domain: &Domain,
    evaluations: &[Fr],
    z_fr: &Fr,
    commit_key: &CommitKey,
) -> Result<OpeningProof, KzgError> {
    let (y_fr, index_in_domain) = domain.evaluate_with_index(evaluations, z_fr)?;
    trace!(in_domain = index_in_domain.is_some(), "computing opening proof");

    let quotient = compute_quotient(domain, evaluations, z_fr, &y_fr, index_in_domain);
    let quotient_commitment = commit_eval_form(&quotient, commit_key)?;

    Ok(OpeningProof {
        quotient_commitment,
        input_point: *z_fr,
        claimed_value: y_fr,
    })
}

/// Evaluations of `(p(X) - y) / (X - z)` over the domain.
///
/// When `z` is the root at `index_in_domain` the division there is `0/0`;
/// that entry is the derivative of `p` at `z`, computed as
/// `Σ_{j != m} (p_j - y) * ω_j / (z * (z - ω_j))`, which equals
/// `-z^{-1} * Σ_{j != m} q_j * ω_j` in terms of the other quotient entries.
fn compute_quotient(
    domain: &Domain,
    evaluations: &[Fr],
    z_fr: &Fr,
    y_fr: &Fr,
    index_in_domain: Option<usize>,
) -> Vec<Fr> {
    let roots = domain.roots();

    // ω_i - z for every root; batch_inversion leaves the zero entry (if any) at zero
    let mut inv_denominators: Vec<Fr> = roots.iter().map(|root| *root - z_fr).collect();
    batch_inversion(&mut inv_denominators);

    let mut quotient: Vec<Fr> = evaluations
        .par_iter()
        .zip(inv_denominators.par_iter())
        .map(|(p_i, inv_denominator)| (*p_i - y_fr) * inv_denominator)
        .collect();

    if let Some(m) = index_in_domain {
        let sum = quotient
            .iter()
            .zip(roots.iter())
            .enumerate()
            .filter(|(j, _)| *j != m)
            .fold(Fr::zero(), |acc, (_, (q_j, root))| acc + *q_j * root);
        quotient[m] = -(sum * domain.precomputed_inverses()[m]);
    }

    quotient
}
