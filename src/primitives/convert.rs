//! Safe conversion of buffer lengths to signed 32-bit counts.
//!
//! ## Purpose
//!
//! The toolkit's size contract bounds every buffer length to a signed
//! 32-bit count. On 64-bit targets a slice can exceed that, so length-
//! dependent operations (distance, normalization) convert through this
//! module instead of casting.
//!
//! ## Design notes
//!
//! * **Reportable, not fatal**: An oversized length is reported through
//!   the sink and surfaced as [`VectralError::Overflow`]; nothing panics.
//!
//! ## Invariants
//!
//! * A returned count is always non-negative and round-trips to the
//!   original length.
//!
//! ## Non-goals
//!
//! * This module does not validate buffer contents or index ranges.

// Internal dependencies
use crate::primitives::errors::VectralError;
use crate::primitives::report::report_error;

// ============================================================================
// Count Conversion
// ============================================================================

/// Convert a buffer length into the signed 32-bit count used internally.
///
/// Lengths above `i32::MAX` are reported and rejected with
/// [`VectralError::Overflow`].
#[inline]
pub fn to_count(len: usize) -> Result<i32, VectralError> {
    if len <= i32::MAX as usize {
        Ok(len as i32)
    } else {
        report_error!(len, "buffer length exceeds the signed 32-bit count range");
        Err(VectralError::Overflow { len })
    }
}
