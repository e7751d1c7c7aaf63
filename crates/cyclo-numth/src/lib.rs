//! cyclo-numth — number-theory utilities for power-of-two transforms.
//!
//! - modular scalar arithmetic with widening reduction: [`add_mod`],
//!   [`sub_mod`], [`mul_mod`], [`mod_exp`], [`mod_pow`], [`mod_inv`], [`egcd`],
//! - Miller–Rabin primality testing with an injectable RNG: [`is_prime`],
//!   [`is_prime_with`],
//! - primitive-root and root-of-unity discovery: [`find_primitive_root`],
//!   [`find_root_of_unity`],
//! - [`is_power_of_two`] with the transform-friendly convention (0 and 1 are
//!   not powers of two; a length-1 transform is meaningless).
//!
//! Everything operates on `u64` residues with `u128` intermediates, so no
//! parameter combination can silently wrap.

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

pub mod error;
pub mod modular;
pub mod primality;
pub mod roots;

pub use error::NumTheoryError;
pub use modular::{add_mod, egcd, is_power_of_two, mod_exp, mod_inv, mod_pow, mul_mod, sub_mod};
pub use primality::{is_prime, is_prime_with, DEFAULT_MILLER_RABIN_TRIALS};
pub use roots::{find_primitive_root, find_root_of_unity};
