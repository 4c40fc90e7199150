//! Mean and absolute-mean statistics over buffers and sub-ranges.
//!
//! ## Purpose
//!
//! This module provides the arithmetic mean over a whole buffer or an
//! inclusive sub-range of it, together with the absolute-valued variants
//! used for magnitude estimates.
//!
//! ## Design notes
//!
//! * **Wide accumulation**: Sums are accumulated in `f64` regardless of
//!   the element type.
//! * **Inclusive ranges**: A range covers `start..=end`; the divisor is
//!   the element count `end - start + 1`.
//! * **Validated**: Range violations are reported through the sink and
//!   returned as [`VectralError::InvalidRange`].
//!
//! ## Invariants
//!
//! * A successful range mean reads only indices inside `start..=end`.
//! * `abs_mean` variants equal the absolute value of the matching mean.
//!
//! ## Non-goals
//!
//! * This module does not compute variance or higher moments.
//! * This module does not filter NaN or infinite elements; they propagate
//!   into the result.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::VectralError;
use crate::primitives::validator::Validator;

// ============================================================================
// Whole-Buffer Mean
// ============================================================================

/// Arithmetic mean over the whole buffer.
///
/// Fails with [`VectralError::EmptyInput`] when the buffer holds no
/// elements.
pub fn mean<T: Float>(buffer: &[T]) -> Result<T, VectralError> {
    Validator::validate_non_empty(buffer)?;

    let total = accumulate(buffer);
    let count = buffer.len() as f64;

    Ok(T::from(total / count).unwrap_or_else(T::nan))
}

/// Absolute value of [`mean`]; same error contract.
pub fn abs_mean<T: Float>(buffer: &[T]) -> Result<T, VectralError> {
    mean(buffer).map(T::abs)
}

// ============================================================================
// Range Mean
// ============================================================================

/// Arithmetic mean over the inclusive index range `start..=end`.
///
/// Requires `start <= end` and both indices strictly below the buffer
/// length; violations are reported and returned as
/// [`VectralError::InvalidRange`].
pub fn mean_range<T: Float>(
    buffer: &[T],
    start: usize,
    end: usize,
) -> Result<T, VectralError> {
    Validator::validate_range(start, end, buffer.len())?;

    let total = accumulate(&buffer[start..=end]);
    let count = (end - start + 1) as f64;

    Ok(T::from(total / count).unwrap_or_else(T::nan))
}

/// Absolute value of [`mean_range`]; same error contract.
pub fn abs_mean_range<T: Float>(
    buffer: &[T],
    start: usize,
    end: usize,
) -> Result<T, VectralError> {
    mean_range(buffer, start, end).map(T::abs)
}

// ============================================================================
// Internal Accumulation
// ============================================================================

/// Sum the values in `f64`, independent of the element width.
#[inline]
fn accumulate<T: Float>(values: &[T]) -> f64 {
    values
        .iter()
        .fold(0.0_f64, |acc, &value| acc + value.to_f64().unwrap_or(f64::NAN))
}
