//! Negacyclic number-theoretic transform over `Z_q`.
//!
//! The engine fixes a prime modulus `q` and a power-of-two degree `n` with
//! `2n | q - 1`, discovers a primitive 2n-th root of unity `psi`, and
//! precomputes the twiddle tables `psi^0..psi^(n-1)` and their inverses. The
//! forward transform twists coefficients by `psi^i` before the butterfly
//! network, which maps the plain cyclic convolution engine onto
//! `Z_q[x]/(x^n + 1)`; the inverse undoes the twist and rescales by `n^-1`.
//!
//! Pointwise multiplication between `forward` and `inverse` therefore
//! realizes negacyclic polynomial multiplication, the core primitive of
//! lattice-based schemes.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use cyclo_numth::{add_mod, find_root_of_unity, is_power_of_two, mod_exp, mod_inv, mul_mod, sub_mod};
use tracing::debug;

use crate::bitrev::bit_reverse_permute;
use crate::error::{Result, TransformError};

/// Reusable NTT engine for one `(modulus, degree)` pair.
///
/// Construction amortizes root discovery and table construction across many
/// forward/inverse calls; the tables are write-once and safe to share across
/// threads behind a shared reference.
#[derive(Clone, Debug)]
pub struct NttEngine {
    modulus: u64,
    degree: usize,
    degree_inv: u64,
    psi: u64,
    psi_inv: u64,
    /// `psi^0 .. psi^(n-1)`; doubles as the butterfly twiddle table (stage
    /// `len` strides it by `2n/len`) and as the forward twist.
    psi_powers: Vec<u64>,
    /// `psi^0 .. psi^-(n-1)`, same layout for the inverse network.
    psi_inv_powers: Vec<u64>,
}

impl NttEngine {
    /// Build an engine for `degree`-point transforms modulo `modulus`.
    ///
    /// # Errors
    /// - [`TransformError::InvalidDegree`] unless `degree` is a power of two
    ///   (>= 2).
    /// - `NotPrime` / `InvalidOrder` / `PrimitiveRootNotFound` (via
    ///   [`TransformError::NumTheory`]) when no primitive 2n-th root of unity
    ///   exists for the pair, i.e. unless `2n | modulus - 1`.
    pub fn new(modulus: u64, degree: usize) -> Result<Self> {
        if !is_power_of_two(degree as u64) {
            return Err(TransformError::InvalidDegree(degree));
        }
        let order = 2 * degree as u64;
        let psi = find_root_of_unity(order, modulus)?;
        // The search projects a primitive root down to order exactly 2n, so
        // psi^n is the negacyclic half-turn -1, never 1.
        debug_assert_eq!(mod_exp(psi, order, modulus), 1);
        debug_assert_eq!(mod_exp(psi, degree as u64, modulus), modulus - 1);

        let psi_inv = mod_inv(psi, modulus)?;
        let degree_inv = mod_inv(degree as u64, modulus)?;

        let mut psi_powers = Vec::with_capacity(degree);
        let mut psi_inv_powers = Vec::with_capacity(degree);
        let (mut w, mut w_inv) = (1u64, 1u64);
        for _ in 0..degree {
            psi_powers.push(w);
            psi_inv_powers.push(w_inv);
            w = mul_mod(w, psi, modulus);
            w_inv = mul_mod(w_inv, psi_inv, modulus);
        }

        debug!(modulus, degree, psi, "constructed NTT engine");
        Ok(Self {
            modulus,
            degree,
            degree_inv,
            psi,
            psi_inv,
            psi_powers,
            psi_inv_powers,
        })
    }

    /// Prime modulus `q`.
    #[inline]
    #[must_use]
    pub const fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Transform degree `n`.
    #[inline]
    #[must_use]
    pub const fn degree(&self) -> usize {
        self.degree
    }

    /// The primitive 2n-th root of unity the engine twists with.
    #[inline]
    #[must_use]
    pub const fn psi(&self) -> u64 {
        self.psi
    }

    /// Its modular inverse.
    #[inline]
    #[must_use]
    pub const fn psi_inv(&self) -> u64 {
        self.psi_inv
    }

    #[inline]
    fn check_len(&self, v: &[u64]) -> Result<()> {
        if v.len() != self.degree {
            return Err(TransformError::InvalidLength {
                expected: self.degree,
                got: v.len(),
            });
        }
        Ok(())
    }

    /// Forward transform: coefficients of `Z_q[x]/(x^n + 1)` to evaluations.
    ///
    /// Inputs are reduced into `[0, q)`; the result is an independently owned
    /// vector, the input is left untouched.
    ///
    /// # Errors
    /// [`TransformError::InvalidLength`] unless `coefficients.len()` equals
    /// the engine degree.
    pub fn forward(&self, coefficients: &[u64]) -> Result<Vec<u64>> {
        self.check_len(coefficients)?;
        let q = self.modulus;

        // Twist into the negacyclic ring: a[i] *= psi^i.
        let mut a: Vec<u64> = coefficients
            .iter()
            .zip(&self.psi_powers)
            .map(|(&c, &w)| mul_mod(c % q, w, q))
            .collect();

        bit_reverse_permute(&mut a)?;
        self.butterflies(&mut a, &self.psi_powers);
        Ok(a)
    }

    /// Inverse transform: evaluations back to coefficients.
    ///
    /// Runs the same network with inverse twiddles, then undoes the forward
    /// twist and the transform scaling with `psi^-i * n^-1`.
    ///
    /// # Errors
    /// [`TransformError::InvalidLength`] unless `values.len()` equals the
    /// engine degree.
    pub fn inverse(&self, values: &[u64]) -> Result<Vec<u64>> {
        self.check_len(values)?;
        let q = self.modulus;

        let mut a: Vec<u64> = values.iter().map(|&v| v % q).collect();
        bit_reverse_permute(&mut a)?;
        self.butterflies(&mut a, &self.psi_inv_powers);

        for (v, &w_inv) in a.iter_mut().zip(&self.psi_inv_powers) {
            *v = mul_mod(mul_mod(*v, w_inv, q), self.degree_inv, q);
        }
        Ok(a)
    }

    /// Element-wise product of two transformed vectors.
    ///
    /// This is the whole transform-domain step of negacyclic convolution;
    /// callers sandwich it between [`forward`](Self::forward) and
    /// [`inverse`](Self::inverse).
    ///
    /// # Errors
    /// [`TransformError::InvalidLength`] if either operand's length disagrees
    /// with the engine degree.
    pub fn pointwise(&self, lhs: &[u64], rhs: &[u64]) -> Result<Vec<u64>> {
        self.check_len(lhs)?;
        self.check_len(rhs)?;
        let q = self.modulus;
        Ok(lhs
            .iter()
            .zip(rhs)
            .map(|(&x, &y)| mul_mod(x % q, y % q, q))
            .collect())
    }

    /// The radix-2 decimation-in-time network: log2(n) stages of
    /// `(u, v) -> (u + w*v, u - w*v)` butterflies, twiddles drawn from the
    /// psi-power `table` with stride `2n/len` per stage.
    fn butterflies(&self, a: &mut [u64], table: &[u64]) {
        let n = self.degree;
        let q = self.modulus;

        let mut len = 2usize;
        while len <= n {
            let half = len / 2;
            let stride = 2 * n / len;
            let mut block = 0usize;
            while block < n {
                for i in 0..half {
                    let w = table[i * stride];
                    let u = a[block + i];
                    let v = mul_mod(a[block + i + half], w, q);
                    a[block + i] = add_mod(u, v, q);
                    a[block + i + half] = sub_mod(u, v, q);
                }
                block += len;
            }
            len <<= 1;
        }
    }
}
