//! Euclidean distance metrics between equal-length vectors.
//!
//! ## Purpose
//!
//! This module provides the squared Euclidean distance and the Euclidean
//! distance between two numeric vectors, used to compare feature frames
//! of equal length.
//!
//! ## Design notes
//!
//! * **Validated**: Vector lengths must match and must convert to the
//!   signed 32-bit count; violations are reported and returned as typed
//!   errors before any element is read.
//! * **Squared form first**: `euclidean` is the square root of
//!   `squared_euclidean` and inherits its full error contract.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Distance is always non-negative on success.
//! * Distance is zero if and only if the vectors are identical.
//! * No element past either slice's bound is ever read.
//!
//! ## Non-goals
//!
//! * This module does not provide Manhattan, Chebyshev, or other metrics.
//! * This module does not normalize or rescale the inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::convert::to_count;
use crate::primitives::errors::VectralError;
use crate::primitives::validator::Validator;

// ============================================================================
// Distance Computation
// ============================================================================

/// Sum of squared per-element differences between two vectors.
///
/// Fails with [`VectralError::SizeMismatch`] when the lengths differ and
/// with [`VectralError::Overflow`] when the shared length exceeds the
/// signed 32-bit count range.
#[inline]
pub fn squared_euclidean<T: Float>(a: &[T], b: &[T]) -> Result<T, VectralError> {
    Validator::validate_equal_lengths(a, b)?;
    to_count(a.len())?;

    Ok(a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| {
            let diff = ai - bi;
            diff * diff
        })
        .fold(T::zero(), |acc, x| acc + x))
}

/// Euclidean distance between two vectors.
///
/// Square root of [`squared_euclidean`]; inherits its error contract.
#[inline]
pub fn euclidean<T: Float>(a: &[T], b: &[T]) -> Result<T, VectralError> {
    Ok(squared_euclidean(a, b)?.sqrt())
}
