//! cyclo-poly — polynomials in `Z_q[x]/(x^n + 1)` over a shared NTT engine.
//!
//! [`Poly`] is a thin façade: it stores coefficients and leans on
//! [`NttEngine`] for everything transform-shaped (`forward`, `inverse`,
//! `pointwise`) plus the element-wise modular helpers from `cyclo-numth`. It
//! deliberately owns no twiddle or root-discovery logic; the engine instance
//! passed to each operation is the single source of ring parameters.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

use cyclo_ffts::{NttEngine, TransformError};
use cyclo_numth::{add_mod, sub_mod};

/// A polynomial of the ring `Z_q[x]/(x^n + 1)`, coefficient order low to
/// high, always reduced into `[0, q)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly {
    coeffs: Vec<u64>,
}

impl Poly {
    /// Wrap a coefficient vector for the ring the engine is configured for.
    ///
    /// Coefficients are reduced modulo the engine's modulus.
    ///
    /// # Errors
    /// [`TransformError::InvalidLength`] unless `coeffs.len()` equals the
    /// engine degree.
    pub fn new(coeffs: Vec<u64>, engine: &NttEngine) -> Result<Self, TransformError> {
        if coeffs.len() != engine.degree() {
            return Err(TransformError::InvalidLength {
                expected: engine.degree(),
                got: coeffs.len(),
            });
        }
        let q = engine.modulus();
        Ok(Self {
            coeffs: coeffs.into_iter().map(|c| c % q).collect(),
        })
    }

    /// The zero polynomial of the engine's ring.
    #[must_use]
    pub fn zero(engine: &NttEngine) -> Self {
        Self {
            coeffs: vec![0; engine.degree()],
        }
    }

    /// Coefficients, low degree first.
    #[inline]
    #[must_use]
    pub fn coefficients(&self) -> &[u64] {
        &self.coeffs
    }

    /// Coefficient-wise sum.
    ///
    /// # Errors
    /// [`TransformError::InvalidLength`] if the operands belong to a
    /// different degree than the engine.
    pub fn add(&self, rhs: &Self, engine: &NttEngine) -> Result<Self, TransformError> {
        self.check_degree(engine)?;
        rhs.check_degree(engine)?;
        let q = engine.modulus();
        Ok(Self {
            coeffs: self
                .coeffs
                .iter()
                .zip(&rhs.coeffs)
                .map(|(&a, &b)| add_mod(a, b, q))
                .collect(),
        })
    }

    /// Coefficient-wise difference.
    ///
    /// # Errors
    /// [`TransformError::InvalidLength`] if the operands belong to a
    /// different degree than the engine.
    pub fn sub(&self, rhs: &Self, engine: &NttEngine) -> Result<Self, TransformError> {
        self.check_degree(engine)?;
        rhs.check_degree(engine)?;
        let q = engine.modulus();
        Ok(Self {
            coeffs: self
                .coeffs
                .iter()
                .zip(&rhs.coeffs)
                .map(|(&a, &b)| sub_mod(a, b, q))
                .collect(),
        })
    }

    /// Additive negation.
    ///
    /// # Errors
    /// [`TransformError::InvalidLength`] if the polynomial belongs to a
    /// different degree than the engine.
    pub fn neg(&self, engine: &NttEngine) -> Result<Self, TransformError> {
        Self::zero(engine).sub(self, engine)
    }

    /// Negacyclic product via the engine: forward both operands, multiply
    /// pointwise in the transform domain, inverse-transform the result.
    ///
    /// # Errors
    /// [`TransformError::InvalidLength`] if the operands belong to a
    /// different degree than the engine.
    pub fn mul(&self, rhs: &Self, engine: &NttEngine) -> Result<Self, TransformError> {
        let lhs_evals = engine.forward(&self.coeffs)?;
        let rhs_evals = engine.forward(&rhs.coeffs)?;
        let product = engine.pointwise(&lhs_evals, &rhs_evals)?;
        Ok(Self {
            coeffs: engine.inverse(&product)?,
        })
    }

    #[inline]
    fn check_degree(&self, engine: &NttEngine) -> Result<(), TransformError> {
        if self.coeffs.len() != engine.degree() {
            return Err(TransformError::InvalidLength {
                expected: engine.degree(),
                got: self.coeffs.len(),
            });
        }
        Ok(())
    }
}
