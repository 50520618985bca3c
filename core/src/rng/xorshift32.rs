//! xorshift32 random number generator
//!
//! This is a fast, non-cryptographic PRNG that is deterministic and suitable
//! for testing and simulation purposes.
//!
//! # Algorithm
//!
//! Classic 32-bit xorshift with the (13, 17, 5) shift triple, operating on
//! **signed** 32-bit state:
//!
//! ```text
//! s ^= s << 13;
//! s ^= s >> 17;   // arithmetic (sign-propagating) shift
//! s ^= s << 5;
//! ```
//!
//! The right shift must be sign-propagating. On `i32`, Rust's `>>` is exactly
//! that, and `<<` discards the high bits, so the whole step is plain `i32`
//! arithmetic with no masking needed. A zero-fill right shift, or widening to
//! 64 bits without truncation, produces a different sequence for negative
//! intermediate states.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers, bit for bit, on every
//! platform. This is CRITICAL for:
//! - Reproducible tests
//! - Replayable simulations
//! - Cross-implementation golden sequences

use serde::{Deserialize, Serialize};

/// Deterministic lazy sequence of pseudo-random `i32` values.
///
/// The generator is an [`Iterator`]: no value is computed until requested,
/// and pulling values is the only way to advance it. There is no reset or
/// reseed — replaying a sequence means constructing a new generator from the
/// same seed.
///
/// A state of exactly 0 is a fixed point of xorshift: seeding with 0 yields
/// 0 forever. That is the reference behavior and is deliberately not
/// special-cased.
///
/// # Example
/// ```
/// use util_belt_core_rs::Xorshift32;
///
/// let mut rng = Xorshift32::new(344);
/// assert_eq!(rng.next(), Some(88811757));
/// assert_eq!(rng.next(), Some(1786880006));
///
/// // Bounded: exactly 10 values, then the sequence ends.
/// let values: Vec<i32> = Xorshift32::with_limit(344, 10).collect();
/// assert_eq!(values.len(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Xorshift32 {
    /// Internal state (32-bit signed)
    state: i32,
    /// Maximum number of values to yield; 0 means unbounded
    limit: usize,
    /// Values yielded so far (only tracked against a nonzero limit)
    emitted: usize,
}

impl Xorshift32 {
    /// Create an unbounded generator with the given seed.
    ///
    /// # Example
    /// ```
    /// use util_belt_core_rs::Xorshift32;
    ///
    /// let rng = Xorshift32::new(12345);
    /// assert_eq!(rng.state(), 12345);
    /// ```
    pub fn new(seed: i32) -> Self {
        Self::with_limit(seed, 0)
    }

    /// Create a generator that yields exactly `limit` values before ending.
    ///
    /// A `limit` of 0 means unbounded, same as [`Xorshift32::new`].
    ///
    /// # Example
    /// ```
    /// use util_belt_core_rs::Xorshift32;
    ///
    /// let values: Vec<i32> = Xorshift32::with_limit(158484, 3).collect();
    /// assert_eq!(values, vec![-512132828, 98688842, -15169138]);
    /// ```
    pub fn with_limit(seed: i32, limit: usize) -> Self {
        Self {
            state: seed,
            limit,
            emitted: 0,
        }
    }

    /// Get the current internal state (for checkpointing/replay).
    ///
    /// # Example
    /// ```
    /// use util_belt_core_rs::Xorshift32;
    ///
    /// let mut rng = Xorshift32::new(344);
    /// rng.next();
    /// let checkpoint = rng.state();
    ///
    /// // A new generator seeded from the checkpoint replays the continuation.
    /// let mut replay = Xorshift32::new(checkpoint);
    /// assert_eq!(rng.next(), replay.next());
    /// ```
    pub fn state(&self) -> i32 {
        self.state
    }

    /// Advance the state by one xorshift step and return the new state.
    fn step(&mut self) -> i32 {
        let mut s = self.state;
        s ^= s << 13;
        s ^= s >> 17;
        s ^= s << 5;
        self.state = s;
        s
    }
}

/// Seed 0, unbounded. Note that 0 is a fixed point of the algorithm.
impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Iterator for Xorshift32 {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.limit > 0 {
            if self.emitted >= self.limit {
                return None;
            }
            self.emitted += 1;
        }
        Some(self.step())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.limit > 0 {
            let remaining = self.limit - self.emitted;
            (remaining, Some(remaining))
        } else {
            (usize::MAX, None)
        }
    }
}
