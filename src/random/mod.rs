//! Explicitly seeded random value generation.
//!
//! ## Purpose
//!
//! This module provides the random draws the toolkit's callers use for
//! dithering, jitter, and stochastic parameter choices: a unit-interval
//! float with extended precision and an integer-valued draw over an
//! inclusive range.
//!
//! ## Design notes
//!
//! * **Injected handle**: The generator is an owned [`RandomSource`]
//!   seeded explicitly; there is no process-wide state. Callers thread
//!   the handle wherever randomness is needed, which also makes every
//!   sequence reproducible from its seed.
//! * **Stacked draws**: `unit` composes two 31-bit draws (base plus a
//!   fine correction) to extend the effective precision beyond a single
//!   draw's resolution.
//! * **Exclusive access**: Methods take `&mut self`, so unsynchronized
//!   concurrent use is rejected at compile time.
//!
//! ## Invariants
//!
//! * The same seed produces the same draw sequence.
//! * `unit` values lie in `[0, 1)`.
//! * `in_range` values are integer-valued and lie in
//!   `[floor(min), ceil(max)]` for finite, ordered bounds.
//!
//! ## Non-goals
//!
//! * This module does not provide cryptographic randomness.
//! * This module does not sample non-uniform distributions.

// External dependencies
use num_traits::Float;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Draw Constants
// ============================================================================

/// Bits per draw; mirrors a 31-bit generator resolution.
const DRAW_BITS: u32 = 31;

/// Scale of one draw: 2^31 as a float.
const DRAW_SCALE: f64 = (1_u64 << DRAW_BITS) as f64;

// ============================================================================
// Random Source
// ============================================================================

/// An explicitly seeded source of uniform random values.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: SmallRng,
}

impl RandomSource {
    /// Create a source from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Reset the source to the state implied by a seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// Pseudo-random value in `[0, 1)`.
    ///
    /// Composed from two stacked 31-bit draws; the second draw refines
    /// the first below its resolution.
    pub fn unit(&mut self) -> f64 {
        let base = f64::from(self.rng.random_range(0..1_u32 << DRAW_BITS)) / DRAW_SCALE;
        let fine = f64::from(self.rng.random_range(0..1_u32 << DRAW_BITS)) / DRAW_SCALE;

        base + fine / DRAW_SCALE
    }

    /// Pseudo-random integer-valued float in `[floor(min), ceil(max)]`.
    ///
    /// Coincident bounds (after flooring and ceiling) always return that
    /// single value. Inverted or non-finite bounds degrade to
    /// `floor(min)` without drawing.
    pub fn in_range(&mut self, min: f64, max: f64) -> f64 {
        let lower = Float::floor(min);
        let delta = Float::ceil(max) - lower;

        if !delta.is_finite() || delta < 0.0 {
            return lower;
        }

        let span = delta as i64;
        lower + self.rng.random_range(0..=span) as f64
    }
}
