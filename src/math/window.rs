//! Hann window coefficient generation.
//!
//! ## Purpose
//!
//! This module provides the raised-cosine (Hann) window used to taper
//! signal frames to zero at their edges before spectral analysis.
//!
//! ## Design notes
//!
//! * **Per-coefficient**: `hann_coefficient` evaluates one sample of the
//!   window; `fill_hann` writes the whole window into a caller-owned
//!   buffer without allocating.
//! * **Computation in `f64`**: The phase and cosine are evaluated in
//!   `f64` and converted to the element type at the end.
//!
//! ## Key concepts
//!
//! * **Hann window**: `w(i) = 0.5 * (1 - cos(2π·i / (N - 1)))` for a
//!   window of `N` samples; both endpoints are exactly zero.
//!
//! ## Invariants
//!
//! * For `window_size > 1`, coefficients at indices `0` and
//!   `window_size - 1` are zero and the window is symmetric.
//!
//! ## Non-goals
//!
//! * This module does not guard the degenerate `window_size <= 1` case;
//!   the division by zero propagates as NaN and callers must supply a
//!   window of at least two samples.
//! * This module does not provide Hamming, Blackman, or other window
//!   families.

// External dependencies
use core::f64::consts::PI;
use num_traits::Float;

// ============================================================================
// Coefficient Evaluation
// ============================================================================

/// Hann window coefficient for sample `index` of a window of
/// `window_size` samples.
///
/// Requires `window_size > 1`; a single-sample window divides by zero and
/// yields NaN. An `index` outside `[0, window_size - 1]` is not rejected
/// and produces a value outside the conventional [0, 1] window shape.
#[inline]
pub fn hann_coefficient<T: Float>(index: usize, window_size: usize) -> T {
    let phase = 2.0 * PI * index as f64 / (window_size as f64 - 1.0);

    T::from(0.5 * (1.0 - phase.cos())).unwrap_or_else(T::zero)
}

// ============================================================================
// Window Fill
// ============================================================================

/// Write the full Hann window for `buffer.len()` samples into the buffer.
///
/// Each element is replaced by its window coefficient. Inherits the
/// `window_size > 1` precondition of [`hann_coefficient`]; an empty
/// buffer is a no-op.
pub fn fill_hann<T: Float>(buffer: &mut [T]) {
    let window_size = buffer.len();

    for (index, coefficient) in buffer.iter_mut().enumerate() {
        *coefficient = hann_coefficient(index, window_size);
    }
}
