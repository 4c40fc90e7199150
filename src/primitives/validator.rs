//! Input validation for buffer ranges and vector sizes.
//!
//! ## Purpose
//!
//! This module provides the validation functions shared by the statistics,
//! distance, and normalization operations. It checks requirements such as
//! non-empty inputs, in-bounds sub-ranges, and matching vector lengths.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation encountered.
//! * **Reported**: Each violation is reported through the logging sink
//!   before the typed error is returned.
//! * **Index types**: Indices are `usize`, so the non-negativity checks of
//!   the range contract hold by construction.
//!
//! ## Key concepts
//!
//! * **Range**: A contiguous sub-interval of a buffer addressed by an
//!   inclusive start/end index pair.
//! * **Size equality**: Distance metrics require both vectors to have the
//!   same number of elements.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective bounds.
//! * Validation is deterministic and mutates nothing.
//!
//! ## Non-goals
//!
//! * This module does not check buffer contents for NaN or infinity;
//!   arithmetic degeneracies are each function's documented concern.
//! * This module does not clamp or correct invalid inputs.

// Internal dependencies
use crate::primitives::errors::VectralError;
use crate::primitives::report::report_error;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for buffer ranges and vector sizes.
///
/// Provides static methods that return `Result<(), VectralError>` and fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that a buffer holds at least one element.
    pub fn validate_non_empty<T>(buffer: &[T]) -> Result<(), VectralError> {
        if buffer.is_empty() {
            report_error!("input buffer is empty");
            return Err(VectralError::EmptyInput);
        }
        Ok(())
    }

    /// Validate an inclusive index range against a buffer length.
    ///
    /// Requires `start <= end` and both indices strictly below `len`.
    pub fn validate_range(start: usize, end: usize, len: usize) -> Result<(), VectralError> {
        if start >= len || end >= len || start > end {
            report_error!(start, end, len, "illegal range");
            return Err(VectralError::InvalidRange { start, end, len });
        }
        Ok(())
    }

    /// Validate that two vectors have the same number of elements.
    pub fn validate_equal_lengths<T>(a: &[T], b: &[T]) -> Result<(), VectralError> {
        if a.len() != b.len() {
            report_error!(
                a_len = a.len(),
                b_len = b.len(),
                "vectors are not the same size"
            );
            return Err(VectralError::SizeMismatch {
                a_len: a.len(),
                b_len: b.len(),
            });
        }
        Ok(())
    }
}
