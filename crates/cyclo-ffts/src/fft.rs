//! Complex fast Fourier transform over power-of-two domains.
//!
//! Same butterfly network as the NTT, with the arithmetic domain swapped for
//! `Complex64`. The complex field always has the needed roots, so there is
//! no root search: the twiddle tables come straight from
//! `omega = e^(-2*pi*i/n)` (forward kernel `e^(-2*pi*i*jk/n)`) and its
//! conjugate for the inverse, which also rescales by `1/n`. No twist is
//! applied; the FFT's natural domain is the plain polynomial ring without
//! wraparound sign.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use std::f64::consts::PI;

use cyclo_numth::is_power_of_two;
use num_complex::Complex64;

use crate::bitrev::bit_reverse_permute;
use crate::error::{Result, TransformError};

/// Reusable FFT engine for one transform degree.
#[derive(Clone, Debug)]
pub struct FftEngine {
    degree: usize,
    /// `omega^0 .. omega^(n-1)` for `omega = e^(-2*pi*i/n)`; stage `len`
    /// strides it by `n/len`.
    omega_powers: Vec<Complex64>,
    /// Conjugate powers for the inverse network.
    omega_inv_powers: Vec<Complex64>,
}

impl FftEngine {
    /// Build an engine for `degree`-point transforms.
    ///
    /// # Errors
    /// [`TransformError::InvalidDegree`] unless `degree` is a power of two
    /// (>= 2).
    pub fn new(degree: usize) -> Result<Self> {
        if !is_power_of_two(degree as u64) {
            return Err(TransformError::InvalidDegree(degree));
        }
        let n = degree as f64;
        let omega_powers = (0..degree)
            .map(|k| Complex64::from_polar(1.0, -2.0 * PI * k as f64 / n))
            .collect();
        let omega_inv_powers = (0..degree)
            .map(|k| Complex64::from_polar(1.0, 2.0 * PI * k as f64 / n))
            .collect();
        Ok(Self {
            degree,
            omega_powers,
            omega_inv_powers,
        })
    }

    /// Transform degree `n`.
    #[inline]
    #[must_use]
    pub const fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    fn check_len(&self, v: &[Complex64]) -> Result<()> {
        if v.len() != self.degree {
            return Err(TransformError::InvalidLength {
                expected: self.degree,
                got: v.len(),
            });
        }
        Ok(())
    }

    /// Forward transform (`X_k = sum_j x_j * e^(-2*pi*i*jk/n)`).
    ///
    /// # Errors
    /// [`TransformError::InvalidLength`] unless `samples.len()` equals the
    /// engine degree.
    pub fn forward(&self, samples: &[Complex64]) -> Result<Vec<Complex64>> {
        self.check_len(samples)?;
        let mut a = samples.to_vec();
        bit_reverse_permute(&mut a)?;
        self.butterflies(&mut a, &self.omega_powers);
        Ok(a)
    }

    /// Inverse transform; rescales by `1/n`.
    ///
    /// # Errors
    /// [`TransformError::InvalidLength`] unless `values.len()` equals the
    /// engine degree.
    pub fn inverse(&self, values: &[Complex64]) -> Result<Vec<Complex64>> {
        self.check_len(values)?;
        let mut a = values.to_vec();
        bit_reverse_permute(&mut a)?;
        self.butterflies(&mut a, &self.omega_inv_powers);

        let scale = 1.0 / self.degree as f64;
        for v in &mut a {
            *v *= scale;
        }
        Ok(a)
    }

    fn butterflies(&self, a: &mut [Complex64], table: &[Complex64]) {
        let n = self.degree;

        let mut len = 2usize;
        while len <= n {
            let half = len / 2;
            let stride = n / len;
            let mut block = 0usize;
            while block < n {
                for i in 0..half {
                    let w = table[i * stride];
                    let u = a[block + i];
                    let v = a[block + i + half] * w;
                    a[block + i] = u + v;
                    a[block + i + half] = u - v;
                }
                block += len;
            }
            len <<= 1;
        }
    }
}
