//! cyclo-ffts — iterative radix-2 transform engines.
//!
//! - [`NttEngine`]: number-theoretic transform over `Z_q` for a prime `q`,
//!   twisted by a primitive 2n-th root of unity so that pointwise
//!   multiplication realizes negacyclic convolution in `Z_q[x]/(x^n + 1)`.
//! - [`FftEngine`]: the same butterfly network over `Complex64`.
//! - [`bitrev`]: the bit-reversal permutation both engines use to run the
//!   decimation-in-time network iteratively and in place.
//!
//! Engines are constructed once per parameter set and reused; construction
//! pays for root discovery and twiddle tables, each forward/inverse call is a
//! pure `O(n log n)` pass returning a freshly owned vector.

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

pub mod bitrev;
pub mod error;
pub mod fft;
pub mod ntt;

pub use bitrev::{bit_reverse, bit_reverse_permute, bit_reverse_slice};
pub use error::TransformError;
pub use fft::FftEngine;
pub use ntt::NttEngine;

/// Complex sample type used by [`FftEngine`], re-exported for convenience.
pub use num_complex::Complex64;
