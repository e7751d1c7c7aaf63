//! Primitive-root and root-of-unity discovery modulo a prime.
//!
//! The search order is deterministic (candidates walk up from 2), so results
//! are reproducible and tests can pin concrete values.

use tracing::debug;

use crate::error::{NumTheoryError, Result};
use crate::modular::mod_exp;
use crate::primality::is_prime;

/// Distinct prime factors of `n`, by trial division up to `sqrt(n)`.
fn distinct_prime_factors(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    let mut d = 2u64;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            factors.push(d);
            while n % d == 0 {
                n /= d;
            }
        }
        d += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

/// `r` generates the full multiplicative group iff `r^(phi/f) != 1` for every
/// distinct prime factor `f` of `phi`.
#[inline]
fn is_generator(r: u64, phi: u64, phi_factors: &[u64], modulus: u64) -> bool {
    phi_factors.iter().all(|&f| mod_exp(r, phi / f, modulus) != 1)
}

/// Find the smallest primitive root modulo a prime, by deterministic search
/// from 2 upward.
///
/// # Errors
/// - [`NumTheoryError::NotPrime`] if `modulus` fails the primality check.
/// - [`NumTheoryError::PrimitiveRootNotFound`] if the search exhausts every
///   candidate up to the modulus (cannot happen for a genuine prime).
pub fn find_primitive_root(modulus: u64) -> Result<u64> {
    if !is_prime(modulus) {
        return Err(NumTheoryError::NotPrime(modulus));
    }
    let phi = modulus - 1;
    let factors = distinct_prime_factors(phi);
    (2..=modulus)
        .find(|&r| is_generator(r, phi, &factors, modulus))
        .ok_or(NumTheoryError::PrimitiveRootNotFound(modulus))
}

/// Find a root of unity of multiplicative order exactly `order` modulo a
/// prime.
///
/// Requires `order | modulus - 1`. The root is obtained by projecting a
/// primitive root `g` down to `g^((modulus-1)/order)`; a candidate that
/// degenerates to 1 is skipped and the next generator is tried, so the retry
/// is bounded by the modulus instead of looping unboundedly.
///
/// # Errors
/// - [`NumTheoryError::NotPrime`] if `modulus` fails the primality check.
/// - [`NumTheoryError::InvalidOrder`] if `order` does not divide `modulus - 1`.
/// - [`NumTheoryError::PrimitiveRootNotFound`] if every generator candidate
///   degenerates (cannot happen for a genuine prime and `order > 1`).
pub fn find_root_of_unity(order: u64, modulus: u64) -> Result<u64> {
    if !is_prime(modulus) {
        return Err(NumTheoryError::NotPrime(modulus));
    }
    if order == 0 || (modulus - 1) % order != 0 {
        return Err(NumTheoryError::InvalidOrder { order, modulus });
    }
    if order == 1 {
        return Ok(1);
    }

    let phi = modulus - 1;
    let factors = distinct_prime_factors(phi);
    for g in (2..=modulus).filter(|&r| is_generator(r, phi, &factors, modulus)) {
        let candidate = mod_exp(g, phi / order, modulus);
        if candidate != 1 {
            return Ok(candidate);
        }
        debug!(generator = g, order, modulus, "degenerate root-of-unity candidate, trying next generator");
    }
    Err(NumTheoryError::PrimitiveRootNotFound(modulus))
}
