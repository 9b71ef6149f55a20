use ark_bn254::Fr;
use ark_ff::{batch_inversion, FftField, Field, One, Zero};
use ark_std::vec::Vec;

use crate::{consts::MAX_DOMAIN_LOG2, errors::KzgError, helpers};

/// Multiplicative subgroup of the scalar field of power-of-two order,
/// together with everything needed to work with polynomials in Lagrange
/// (evaluation) form over it.
///
/// `roots[i]` is `generator^i` unless the domain has been bit-reversed with
/// [Domain::reverse_order], in which case both `roots` and
/// `precomputed_inverses` are stored in bit-reversed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    cardinality: usize,
    cardinality_inv: Fr,
    // Generator of the subgroup, not the primitive generator of the field
    generator: Fr,
    generator_inv: Fr,
    roots: Vec<Fr>,
    // 1/roots[i], used when dividing by linear polynomials that vanish on the domain
    precomputed_inverses: Vec<Fr>,
    bit_reversed: bool,
}

impl Domain {
    /// Builds the smallest domain holding at least `m` elements. A domain of
    /// size zero degenerates to the trivial domain `{1}`.
    ///
    /// # Errors
    /// * [KzgError::DomainTooLarge] if `m` needs a subgroup of order larger
    ///   than `2^MAX_DOMAIN_LOG2`.
    ///
    /// # Example
    /// ```
    /// use da_kzg_bn254_primitives::domain::Domain;
    ///
    /// let domain = Domain::new(3).unwrap();
    /// assert_eq!(domain.cardinality(), 4);
    /// ```
    pub fn new(m: usize) -> Result<Self, KzgError> {
        let cardinality = m.max(1).checked_next_power_of_two().ok_or(
            KzgError::DomainTooLarge {
                requested_log2: usize::BITS,
                max_log2: MAX_DOMAIN_LOG2,
            },
        )?;
        let log_cardinality = cardinality.trailing_zeros();
        if log_cardinality > MAX_DOMAIN_LOG2 {
            return Err(KzgError::DomainTooLarge {
                requested_log2: log_cardinality,
                max_log2: MAX_DOMAIN_LOG2,
            });
        }

        // Squaring the generator of the largest 2-adic subgroup once per
        // missing bit gives a generator of order `cardinality`.
        let mut generator = <Fr as FftField>::TWO_ADIC_ROOT_OF_UNITY;
        for _ in log_cardinality..MAX_DOMAIN_LOG2 {
            generator.square_in_place();
        }

        // Both inverses exist: the generator is a unit and the cardinality is
        // far smaller than the field characteristic.
        let generator_inv = generator.inverse().ok_or(KzgError::DomainTooLarge {
            requested_log2: log_cardinality,
            max_log2: MAX_DOMAIN_LOG2,
        })?;
        let cardinality_inv =
            Fr::from(cardinality as u64)
                .inverse()
                .ok_or(KzgError::DomainTooLarge {
                    requested_log2: log_cardinality,
                    max_log2: MAX_DOMAIN_LOG2,
                })?;

        let mut roots = Vec::with_capacity(cardinality);
        let mut current = Fr::one();
        for _ in 0..cardinality {
            roots.push(current);
            current *= generator;
        }

        let mut precomputed_inverses = roots.clone();
        batch_inversion(&mut precomputed_inverses);

        Ok(Self {
            cardinality,
            cardinality_inv,
            generator,
            generator_inv,
            roots,
            precomputed_inverses,
            bit_reversed: false,
        })
    }

    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    pub fn cardinality_inv(&self) -> &Fr {
        &self.cardinality_inv
    }

    pub fn generator(&self) -> &Fr {
        &self.generator
    }

    pub fn generator_inv(&self) -> &Fr {
        &self.generator_inv
    }

    pub fn roots(&self) -> &[Fr] {
        &self.roots
    }

    pub fn precomputed_inverses(&self) -> &[Fr] {
        &self.precomputed_inverses
    }

    /// Whether [Domain::reverse_order] has been applied an odd number of times.
    pub fn is_bit_reversed(&self) -> bool {
        self.bit_reversed
    }

    /// Applies the bit-reversal permutation to the roots and their inverses.
    /// Used when the ordering of the setup points and the ordering of the
    /// domain disagree.
    pub fn reverse_order(&mut self) {
        helpers::bit_reverse_permutation(&mut self.roots);
        helpers::bit_reverse_permutation(&mut self.precomputed_inverses);
        self.bit_reversed = !self.bit_reversed;
    }

    /// Returns the index of `point` in the domain, or `None` if the point is
    /// not a root of unity of this domain.
    // TODO: this sits on the proving and verification paths, benchmark a
    // hash map lookup against the linear scan for large domains.
    pub fn find_index(&self, point: &Fr) -> Option<usize> {
        self.roots.iter().position(|root| root == point)
    }

    pub fn contains(&self, point: &Fr) -> bool {
        self.find_index(point).is_some()
    }

    /// Evaluates a polynomial given by its evaluations over the domain at an
    /// arbitrary point.
    ///
    /// Ref: https://github.com/ethereum/consensus-specs/blob/master/specs/deneb/polynomial-commitments.md#evaluate_polynomial_in_evaluation_form
    pub fn evaluate(&self, polynomial: &[Fr], point: &Fr) -> Result<Fr, KzgError> {
        self.evaluate_with_index(polynomial, point)
            .map(|(value, _)| value)
    }

    /// Same as [Domain::evaluate] but also returns the index of `point` in the
    /// domain when it is a domain element.
    pub fn evaluate_with_index(
        &self,
        polynomial: &[Fr],
        point: &Fr,
    ) -> Result<(Fr, Option<usize>), KzgError> {
        if polynomial.len() != self.cardinality {
            return Err(KzgError::DomainSizeMismatch {
                expected: self.cardinality,
                actual: polynomial.len(),
            });
        }

        // On the domain the evaluation is just a lookup
        if let Some(index) = self.find_index(point) {
            return Ok((polynomial[index], Some(index)));
        }

        // point is off the domain, so none of the denominators is zero
        let mut denominators: Vec<Fr> = self.roots.iter().map(|root| *point - root).collect();
        batch_inversion(&mut denominators);

        let sum = polynomial
            .iter()
            .zip(self.roots.iter())
            .zip(denominators.iter())
            .fold(Fr::zero(), |acc, ((f_i, root), inv_denominator)| {
                acc + *f_i * root * inv_denominator
            });

        // (z^n - 1) / n
        let factor = (point.pow([self.cardinality as u64]) - Fr::one()) * self.cardinality_inv;

        Ok((sum * factor, None))
    }

    /// Evaluates every Lagrange basis polynomial of the domain at `tau`.
    ///
    /// Entry `i` is `L_i(tau)` where `L_i` is one on `roots[i]` and zero on the
    /// other roots, so the result follows the current ordering of the domain.
    pub fn all_lagrange_coefficients(&self, tau: &Fr) -> Vec<Fr> {
        let tau_pow_n = tau.pow([self.cardinality as u64]);

        if tau_pow_n.is_one() {
            // tau is a domain element: indicator vector
            return self
                .roots
                .iter()
                .map(|root| if root == tau { Fr::one() } else { Fr::zero() })
                .collect();
        }

        let factor = (tau_pow_n - Fr::one()) * self.cardinality_inv;

        let mut coefficients: Vec<Fr> = self.roots.iter().map(|root| *tau - root).collect();
        batch_inversion(&mut coefficients);

        coefficients
            .iter_mut()
            .zip(self.roots.iter())
            .for_each(|(coefficient, root)| *coefficient *= factor * root);

        coefficients
    }
}
