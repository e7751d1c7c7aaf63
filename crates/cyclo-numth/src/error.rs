//! Error types for the number-theory utilities.

use thiserror::Error;

/// Result alias for number-theoretic operations.
pub type Result<T> = std::result::Result<T, NumTheoryError>;

/// Errors reported by the number-theory utilities.
///
/// Every failure mode is a typed value returned to the caller; nothing in
/// this crate panics on malformed parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum NumTheoryError {
    /// A modulus expected to be prime failed the primality check.
    #[error("modulus {0} is not prime")]
    NotPrime(u64),

    /// The requested root order does not divide `modulus - 1`, so no root of
    /// that order can exist.
    #[error("order {order} does not divide {modulus} - 1")]
    InvalidOrder {
        /// Requested multiplicative order.
        order: u64,
        /// Prime modulus the root was requested in.
        modulus: u64,
    },

    /// Exhaustive search up to the modulus found no primitive root. Should
    /// not occur for a genuinely prime modulus; signals an internal
    /// inconsistency if triggered.
    #[error("no primitive root found modulo {0}")]
    PrimitiveRootNotFound(u64),

    /// No modular inverse exists because the operands are not coprime.
    #[error("{value} has no inverse modulo {modulus} (gcd != 1)")]
    InvalidGcd {
        /// Value whose inverse was requested.
        value: u64,
        /// Modulus of the inversion.
        modulus: u64,
    },

    /// An exponent below −1 was passed to [`mod_pow`](crate::mod_pow); only
    /// −1 is accepted as the inversion sentinel.
    #[error("invalid exponent {0}; only exponents >= -1 are supported")]
    InvalidExponent(i64),
}
