//! Peak normalization of numeric buffers.
//!
//! ## Purpose
//!
//! This module rescales a buffer in place so that its maximum absolute
//! magnitude equals a target threshold, the standard peak-normalization
//! step before mixing or feature extraction.
//!
//! ## Design notes
//!
//! * **Silent buffers stay silent**: A peak of zero leaves the buffer
//!   unchanged rather than multiplying every element by zero.
//! * **Composed**: The rescale is performed by
//!   [`scale`](crate::math::elementwise::scale) once the factor is known.
//! * **Validated**: The buffer length must convert to the signed 32-bit
//!   count; on overflow the condition is reported and returned as
//!   [`VectralError::Overflow`].
//!
//! ## Invariants
//!
//! * On success with a non-zero peak, `max(|buffer|) == threshold` within
//!   floating-point tolerance.
//! * The buffer length never changes.
//!
//! ## Non-goals
//!
//! * This module does not perform RMS or loudness normalization.
//! * This module does not clip; a negative threshold flips signs as the
//!   arithmetic dictates.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::elementwise::scale;
use crate::primitives::convert::to_count;
use crate::primitives::errors::VectralError;

// ============================================================================
// Peak Normalization
// ============================================================================

/// Rescale the buffer in place so its peak magnitude equals `threshold`.
///
/// Finds the maximum absolute value; if it is strictly positive, every
/// element is multiplied by `threshold / peak`. An all-zero (or empty)
/// buffer is left unchanged.
pub fn normalize<T: Float>(buffer: &mut [T], threshold: T) -> Result<(), VectralError> {
    to_count(buffer.len())?;

    let peak = buffer.iter().map(|value| value.abs()).fold(T::zero(), T::max);

    if peak > T::zero() {
        scale(buffer, threshold / peak);
    }

    Ok(())
}
