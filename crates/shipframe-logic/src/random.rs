//! Seeded random source — the pipeline's only entropy channel.
//!
//! Every draw the generator makes goes through one `RandomSource` instance,
//! so a whole generation pass is a pure function of (settings, seed). The
//! source is instance-owned, never ambient: independent generations on
//! separate sources are trivially safe to run concurrently.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::RangeError;

/// Inclusive-range float/int generator over a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: StdRng,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this source was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[lo, hi]`, inclusive on both ends.
    ///
    /// `lo == hi` returns `lo` without consuming entropy, so a degenerate
    /// bound pair does not shift the downstream draw sequence.
    pub fn next_float_range(&mut self, lo: f64, hi: f64) -> Result<f64, RangeError> {
        if hi < lo {
            return Err(RangeError { lo, hi });
        }
        if lo == hi {
            return Ok(lo);
        }
        Ok(self.rng.gen_range(lo..=hi))
    }

    /// Uniform integer draw in `[lo, hi]`, inclusive on both ends.
    pub fn next_int_range(&mut self, lo: u32, hi: u32) -> Result<u32, RangeError> {
        if hi < lo {
            return Err(RangeError {
                lo: lo as f64,
                hi: hi as f64,
            });
        }
        if lo == hi {
            return Ok(lo);
        }
        Ok(self.rng.gen_range(lo..=hi))
    }

    /// Uniform index draw in `[0, len)`. Empty collections are a range error.
    pub fn next_index(&mut self, len: usize) -> Result<usize, RangeError> {
        if len == 0 {
            return Err(RangeError { lo: 0.0, hi: -1.0 });
        }
        Ok(self.next_int_range(0, (len - 1) as u32)? as usize)
    }
}
