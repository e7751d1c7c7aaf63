//! Modular scalar arithmetic on `u64` residues.
//!
//! All helpers reduce through `u128` intermediates, so operands anywhere in
//! `u64` range are safe; nothing relies on wraparound.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

use crate::error::{NumTheoryError, Result};

/// `(a + b) mod m` without overflow (via `u128`).
#[inline]
#[must_use]
pub fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be nonzero");
    let s = u128::from(a) + u128::from(b);
    (s % u128::from(m)) as u64
}

/// `(a - b) mod m`, normalized to `[0, m)`.
#[inline]
#[must_use]
pub fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be nonzero");
    let (a, b) = (a % m, b % m);
    if a >= b {
        a - b
    } else {
        // (a + m) - b, done in u128 to avoid debug overflow.
        ((u128::from(a) + u128::from(m) - u128::from(b)) % u128::from(m)) as u64
    }
}

/// `(a * b) mod m` using a 128-bit widening multiply.
#[inline]
#[must_use]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be nonzero");
    let prod = u128::from(a) * u128::from(b);
    (prod % u128::from(m)) as u64
}

/// `base^exp mod m` by square-and-multiply (`O(log exp)` multiplications).
#[inline]
#[must_use]
pub fn mod_exp(base: u64, mut exp: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be nonzero");
    let mut acc = 1 % m;
    let mut base = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}

/// Modular exponentiation with a signed exponent.
///
/// An exponent of `-1` is a sentinel meaning "compute the modular inverse";
/// anything below `-1` is rejected. Non-negative exponents delegate to
/// [`mod_exp`].
///
/// # Errors
/// - [`NumTheoryError::InvalidExponent`] for exponents below `-1`.
/// - [`NumTheoryError::InvalidGcd`] when the inverse sentinel is used and
///   `base` is not coprime with `m`.
pub fn mod_pow(base: u64, exponent: i64, m: u64) -> Result<u64> {
    match exponent {
        e if e < -1 => Err(NumTheoryError::InvalidExponent(e)),
        -1 => mod_inv(base, m),
        e => Ok(mod_exp(base, e as u64, m)),
    }
}

/// Extended Euclidean algorithm, iterative form.
///
/// Returns `(gcd, x, y)` with `a·x + b·y = gcd(a, b)`. Bezout coefficients
/// come back as `i128` so the identity holds for the full `u64` range.
#[must_use]
pub fn egcd(a: u64, b: u64) -> (u64, i128, i128) {
    let (mut r0, mut r1) = (i128::from(a), i128::from(b));
    let (mut x0, mut x1) = (1i128, 0i128);
    let (mut y0, mut y1) = (0i128, 1i128);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (x0, x1) = (x1, x0 - q * x1);
        (y0, y1) = (y1, y0 - q * y1);
    }
    (r0 as u64, x0, y0)
}

/// Modular inverse of `a` modulo `m`, normalized to `[0, m)`.
///
/// # Errors
/// [`NumTheoryError::InvalidGcd`] when `gcd(a, m) != 1` (no inverse exists).
pub fn mod_inv(a: u64, m: u64) -> Result<u64> {
    let (g, x, _) = egcd(a % m, m);
    if g != 1 {
        return Err(NumTheoryError::InvalidGcd {
            value: a,
            modulus: m,
        });
    }
    Ok(x.rem_euclid(i128::from(m)) as u64)
}

/// `true` iff `n` is a power of two **greater than one**.
///
/// 0 and 1 are deliberately not powers of two under this convention; a
/// length-1 transform is meaningless.
#[inline]
#[must_use]
pub const fn is_power_of_two(n: u64) -> bool {
    n > 1 && n & (n - 1) == 0
}
