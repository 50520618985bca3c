//! Deterministic random number generation
//!
//! Uses the xorshift32 algorithm for fast, deterministic random number
//! generation. Output is a lazy, pull-driven sequence of signed 32-bit
//! values that reproduces the reference golden sequences bit for bit.

mod xorshift32;

pub use xorshift32::Xorshift32;
