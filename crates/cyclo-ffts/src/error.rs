//! Error types for the transform engines.

use cyclo_numth::NumTheoryError;
use thiserror::Error;

/// Result alias for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Errors reported by the transform engines and permutation helpers.
///
/// Malformed inputs are always reported as typed values, never as silent
/// truncation or panics.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransformError {
    /// Requested transform degree is not a power of two (>= 2).
    #[error("degree {0} is not a power of two >= 2")]
    InvalidDegree(usize),

    /// A supplied vector's length disagrees with the engine's configured
    /// degree (and therefore with its twiddle tables).
    #[error("input length {got} does not match transform degree {expected}")]
    InvalidLength {
        /// The engine's configured degree.
        expected: usize,
        /// Length of the vector actually supplied.
        got: usize,
    },

    /// Bit-reversal permutation requested on a non-power-of-two length.
    #[error("sequence length {0} is not a power of two >= 2")]
    LengthNotPowerOfTwo(usize),

    /// Number-theoretic failure during engine construction (composite
    /// modulus, impossible root order, missing inverse).
    #[error(transparent)]
    NumTheory(#[from] NumTheoryError),
}
