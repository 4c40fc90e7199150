//! Elementwise buffer operations: scale, divide, sum.
//!
//! ## Purpose
//!
//! This module provides the in-place elementwise transforms and the summed
//! reduction over caller-owned numeric buffers. These are the building
//! blocks the higher-level routines (normalization, statistics) compose.
//!
//! ## Design notes
//!
//! * **In place**: `scale` and `divide` mutate the caller's buffer; the
//!   library never allocates or resizes.
//! * **Wide accumulation**: `sum` accumulates in `f64` regardless of the
//!   element type to reduce rounding error.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * An empty buffer is a no-op for the mutating operations and sums to zero.
//! * Buffer length is never changed.
//!
//! ## Non-goals
//!
//! * This module does not guard against a zero divisor; `divide` by exact
//!   zero yields IEEE infinities/NaNs per element, which callers accept by
//!   contract.

// External dependencies
use num_traits::Float;

// ============================================================================
// In-Place Transforms
// ============================================================================

/// Multiply every element of the buffer in place by `factor`.
#[inline]
pub fn scale<T: Float>(buffer: &mut [T], factor: T) {
    for value in buffer.iter_mut() {
        *value = *value * factor;
    }
}

/// Divide every element of the buffer in place by `divisor`.
///
/// A divisor of exact zero is not guarded; each element becomes the IEEE
/// infinity/NaN the division produces.
#[inline]
pub fn divide<T: Float>(buffer: &mut [T], divisor: T) {
    for value in buffer.iter_mut() {
        *value = *value / divisor;
    }
}

// ============================================================================
// Reduction
// ============================================================================

/// Sum all elements of the buffer.
///
/// Accumulates in `f64` regardless of the element type, then converts the
/// total back to `T`. An empty buffer sums to zero.
#[inline]
pub fn sum<T: Float>(buffer: &[T]) -> T {
    let total = buffer
        .iter()
        .fold(0.0_f64, |acc, &value| acc + value.to_f64().unwrap_or(f64::NAN));

    T::from(total).unwrap_or_else(T::nan)
}
