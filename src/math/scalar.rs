//! Scalar helpers: clamping, rounding, and tolerance tests.
//!
//! ## Purpose
//!
//! This module provides the small scalar utilities the rest of the
//! toolkit and its callers lean on: range clamping, symmetric rounding,
//! integer narrowing, and a near-zero tolerance test.
//!
//! ## Design notes
//!
//! * **Symmetric rounding**: Ties round away from zero in both signs,
//!   built from `floor`/`ceil` so the contract does not depend on a
//!   platform rounding mode.
//! * **Saturating narrowing**: `round_to_int` clamps to the `i32` bounds
//!   instead of invoking an out-of-range cast.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `clamp(v, lo, hi)` lies in `[lo, hi]` whenever `lo <= hi`.
//! * `round_nearest` returns an integer-valued float for finite input.
//!
//! ## Non-goals
//!
//! * This module does not provide banker's rounding or other tie modes.

// External dependencies
use num_traits::Float;

// ============================================================================
// Clamping
// ============================================================================

/// Restrict `value` to the interval `[min_value, max_value]`.
///
/// Composed from the smaller-of/larger-of comparators; a value already
/// inside the interval is returned unchanged.
#[inline]
pub fn clamp<T: Float>(value: T, min_value: T, max_value: T) -> T {
    min_value.max(max_value.min(value))
}

// ============================================================================
// Rounding
// ============================================================================

/// Round to the nearest integer-valued float, ties away from zero.
///
/// Positive values round up at .5 and negative values round down at .5.
#[inline]
pub fn round_nearest<T: Float>(value: T) -> T {
    let half = T::from(0.5).unwrap();

    if value > T::zero() {
        (value + half).floor()
    } else {
        (value - half).ceil()
    }
}

/// Round to the nearest integer, ties away from zero, saturating at the
/// `i32` bounds.
///
/// Values beyond the `i32` range (and non-finite values) saturate toward
/// the sign of the input; NaN saturates to `i32::MAX`.
#[inline]
pub fn round_to_int<T: Float>(value: T) -> i32 {
    match round_nearest(value).to_i32() {
        Some(rounded) => rounded,
        None => {
            if value < T::zero() {
                i32::MIN
            } else {
                i32::MAX
            }
        }
    }
}

// ============================================================================
// Tolerance
// ============================================================================

/// Whether `value` is within machine epsilon of zero.
///
/// Useful as a pre-check before the unguarded divisions in
/// [`divide`](crate::math::elementwise::divide) and
/// [`lerp_between`](crate::math::interpolation::lerp_between).
#[inline]
pub fn approx_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}
