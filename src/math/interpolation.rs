//! Linear interpolation and incremental easing.
//!
//! ## Purpose
//!
//! This module provides linear interpolation between two values or two
//! points, and a single-step easing function that moves a value toward a
//! target without overshooting. The easing form is used for parameter
//! smoothing, where a control value should glide rather than jump.
//!
//! ## Design notes
//!
//! * **No clamping**: `lerp` weights outside [0, 1] extrapolate.
//! * **Single step**: `step_toward` advances once per call; the caller
//!   re-invokes it each tick until the target is reached.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `step_toward` never overshoots the target.
//! * All functions are pure; nothing is mutated.
//!
//! ## Non-goals
//!
//! * This module does not guard the degenerate two-point case `x1 == x2`;
//!   the division by zero propagates as IEEE infinity/NaN and callers must
//!   ensure distinct x-coordinates.
//! * This module does not provide higher-order interpolation.

// External dependencies
use num_traits::Float;

// ============================================================================
// Linear Interpolation
// ============================================================================

/// Linearly interpolate between `a` and `b` at the given weight.
///
/// Returns `a + (b - a) * weight`. The weight is not clamped, so values
/// outside [0, 1] extrapolate beyond the endpoints.
#[inline]
pub fn lerp<T: Float>(a: T, b: T, weight: T) -> T {
    a + (b - a) * weight
}

/// Evaluate the line through `(x1, y1)` and `(x2, y2)` at `x`.
///
/// Interpolates inside the segment and extrapolates outside it. The
/// degenerate case `x1 == x2` divides by zero and yields IEEE
/// infinity/NaN; callers may pre-check with
/// [`approx_zero`](crate::math::scalar::approx_zero) on `x2 - x1`.
#[inline]
pub fn lerp_between<T: Float>(x1: T, y1: T, x2: T, y2: T, x: T) -> T {
    y1 + (x - x1) * ((y2 - y1) / (x2 - x1))
}

// ============================================================================
// Incremental Easing
// ============================================================================

/// Move `current` toward `target` by at most `amount`, without overshoot.
///
/// Returns the updated value; `current` is returned unchanged when it
/// already equals the target. `amount` is assumed non-negative.
#[inline]
pub fn step_toward<T: Float>(current: T, target: T, amount: T) -> T {
    if current < target {
        (current + amount).min(target)
    } else if current > target {
        (current - amount).max(target)
    } else {
        current
    }
}
