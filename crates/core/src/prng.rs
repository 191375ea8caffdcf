//! Deterministic random sources for the sketches.
//!
//! [`RandomSource`] is the seam every layout draws through: one required
//! method producing raw 64-bit values, with uniform reals, bounded integers
//! and range sampling derived from it. [`Xorshift64`] is the concrete
//! generator. Same seed always produces the same sequence of values across
//! all platforms (pure integer arithmetic in the core algorithm).

use crate::error::SketchError;
use serde::{Deserialize, Serialize};

/// A seedable stream of pseudo-random values.
///
/// Only [`next_u64`](RandomSource::next_u64) is required. The trait is
/// object-safe so layouts can take `&mut dyn RandomSource`.
pub trait RandomSource {
    /// Advances the state and returns the next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Returns a uniformly distributed f64 in [0, 1).
    ///
    /// Uses the upper 53 bits of `next_u64()` divided by 2^53 for
    /// full mantissa precision.
    fn next_uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed integer in [0, n).
    ///
    /// Uses simple modulo reduction; the bias is negligible at 64-bit
    /// state width. Returns `SketchError::InvalidArgument` if `n` is 0.
    fn next_bounded_int(&mut self, n: usize) -> Result<usize, SketchError> {
        if n == 0 {
            return Err(SketchError::InvalidArgument(
                "bounded integer upper bound must be at least 1".into(),
            ));
        }
        Ok((self.next_u64() % n as u64) as usize)
    }

    /// Linear blend `(1 - a) * lower + a * upper` with `a = next_uniform()`.
    ///
    /// Works for `lower > upper` as well; the result then lies in (upper, lower].
    fn sample_range(&mut self, lower: f64, upper: f64) -> f64 {
        let a = self.next_uniform();
        (1.0 - a) * lower + a * upper
    }
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced with
/// a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Fallback seed used when the caller provides 0.
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }
}

impl RandomSource for Xorshift64 {
    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}
