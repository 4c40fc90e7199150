//! Tests for mean and absolute-mean statistics.
//!
//! These tests verify:
//! - Whole-buffer and inclusive-range means
//! - Range validation (out of bounds, inverted)
//! - Absolute-mean variants

use approx::assert_relative_eq;

use vectral::prelude::*;

// ============================================================================
// Whole-Buffer Mean Tests
// ============================================================================

#[test]
fn test_mean_basic() {
    let buffer = [1.0_f64, 2.0, 3.0, 4.0];
    assert_relative_eq!(mean(&buffer).unwrap(), 2.5);
}

#[test]
fn test_mean_singleton() {
    let buffer = [7.25_f64];
    assert_relative_eq!(mean(&buffer).unwrap(), 7.25);
}

#[test]
fn test_mean_empty_is_error() {
    let buffer: [f64; 0] = [];
    assert_eq!(mean(&buffer), Err(VectralError::EmptyInput));
}

#[test]
fn test_mean_f32_buffer() {
    let buffer = [0.5_f32, 1.5];
    assert_relative_eq!(mean(&buffer).unwrap(), 1.0);
}

// ============================================================================
// Range Mean Tests
// ============================================================================

/// The range is inclusive: indices 1..=2 cover the values 2.0 and 3.0,
/// so the mean is 2.5.
#[test]
fn test_mean_range_inclusive_scan() {
    let buffer = [1.0_f64, 2.0, 3.0, 4.0];
    assert_relative_eq!(mean_range(&buffer, 1, 2).unwrap(), 2.5);
}

#[test]
fn test_mean_range_single_index() {
    let buffer = [1.0_f64, 2.0, 3.0, 4.0];
    assert_relative_eq!(mean_range(&buffer, 2, 2).unwrap(), 3.0);
}

#[test]
fn test_mean_range_full_buffer() {
    let buffer = [1.0_f64, 2.0, 3.0, 4.0];
    assert_relative_eq!(mean_range(&buffer, 0, 3).unwrap(), 2.5);
}

#[test]
fn test_mean_range_inverted_is_error() {
    let buffer = [1.0_f64, 2.0, 3.0, 4.0];
    assert_eq!(
        mean_range(&buffer, 2, 1),
        Err(VectralError::InvalidRange {
            start: 2,
            end: 1,
            len: 4
        })
    );
}

#[test]
fn test_mean_range_end_out_of_bounds_is_error() {
    let buffer = [1.0_f64, 2.0, 3.0, 4.0];
    assert_eq!(
        mean_range(&buffer, 1, 4),
        Err(VectralError::InvalidRange {
            start: 1,
            end: 4,
            len: 4
        })
    );
}

#[test]
fn test_mean_range_start_out_of_bounds_is_error() {
    let buffer = [1.0_f64, 2.0];
    assert!(mean_range(&buffer, 5, 6).is_err());
}

#[test]
fn test_mean_range_on_empty_buffer_is_error() {
    let buffer: [f64; 0] = [];
    assert!(mean_range(&buffer, 0, 0).is_err());
}

// ============================================================================
// Absolute Mean Tests
// ============================================================================

#[test]
fn test_abs_mean_negative_buffer() {
    let buffer = [-1.0_f64, -2.0, -3.0];
    assert_relative_eq!(abs_mean(&buffer).unwrap(), 2.0);
}

/// The absolute value applies to the mean, not the elements: a buffer
/// with cancelling signs has a small absolute mean.
#[test]
fn test_abs_mean_applies_after_mean() {
    let buffer = [-2.0_f64, 2.0];
    assert_relative_eq!(abs_mean(&buffer).unwrap(), 0.0);
}

#[test]
fn test_abs_mean_range() {
    let buffer = [5.0_f64, -4.0, -8.0, 1.0];
    // Indices 1..=2: mean = (-4 - 8) / 2 = -6, absolute 6
    assert_relative_eq!(abs_mean_range(&buffer, 1, 2).unwrap(), 6.0);
}

#[test]
fn test_abs_mean_range_propagates_range_error() {
    let buffer = [1.0_f64, 2.0];
    assert_eq!(
        abs_mean_range(&buffer, 1, 0),
        Err(VectralError::InvalidRange {
            start: 1,
            end: 0,
            len: 2
        })
    );
}
