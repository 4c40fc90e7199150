//! Tests for elementwise buffer operations.
//!
//! These tests verify the in-place transforms and summation used as
//! building blocks by normalization and statistics:
//! - Scale/divide mutation and their round-trip law
//! - Wide-accumulator summation
//! - Empty-buffer behavior

use approx::assert_relative_eq;

use vectral::prelude::*;

// ============================================================================
// Scale Tests
// ============================================================================

#[test]
fn test_scale_multiplies_in_place() {
    let mut buffer = [1.0_f64, -2.0, 3.5];
    scale(&mut buffer, 2.0);
    assert_eq!(buffer, [2.0, -4.0, 7.0]);
}

#[test]
fn test_scale_by_zero_zeroes_buffer() {
    let mut buffer = [1.0_f64, -2.0, 3.5];
    scale(&mut buffer, 0.0);
    assert_eq!(buffer, [0.0, 0.0, 0.0]);
}

#[test]
fn test_scale_empty_buffer_is_noop() {
    let mut buffer: [f64; 0] = [];
    scale(&mut buffer, 10.0);
    assert!(buffer.is_empty());
}

// ============================================================================
// Divide Tests
// ============================================================================

#[test]
fn test_divide_in_place() {
    let mut buffer = [2.0_f64, -4.0, 7.0];
    divide(&mut buffer, 2.0);
    assert_eq!(buffer, [1.0, -2.0, 3.5]);
}

/// Dividing by exact zero is unguarded: elements become IEEE
/// infinities (or NaN for a zero element).
#[test]
fn test_divide_by_zero_propagates_ieee_values() {
    let mut buffer = [1.0_f64, -1.0, 0.0];
    divide(&mut buffer, 0.0);
    assert_eq!(buffer[0], f64::INFINITY);
    assert_eq!(buffer[1], f64::NEG_INFINITY);
    assert!(buffer[2].is_nan());
}

/// Round-trip law: scale by k then divide by k restores the original
/// values within floating-point tolerance, for k != 0.
#[test]
fn test_scale_divide_round_trip() {
    let original = [0.25_f32, -1.5, 3.125, 0.0, 7.75];
    let mut buffer = original;

    scale(&mut buffer, 3.7);
    divide(&mut buffer, 3.7);

    for (&restored, &expected) in buffer.iter().zip(original.iter()) {
        assert_relative_eq!(restored, expected, epsilon = 1e-6);
    }
}

// ============================================================================
// Sum Tests
// ============================================================================

#[test]
fn test_sum_empty_is_zero() {
    let buffer: [f64; 0] = [];
    assert_eq!(sum(&buffer), 0.0);
}

#[test]
fn test_sum_singleton() {
    let buffer = [42.5_f64];
    assert_eq!(sum(&buffer), 42.5);
}

#[test]
fn test_sum_pair() {
    let buffer = [1.5_f64, 2.25];
    assert_eq!(sum(&buffer), 3.75);
}

#[test]
fn test_sum_mixed_signs() {
    let buffer = [1.0_f64, -2.0, 3.0, -4.0];
    assert_relative_eq!(sum(&buffer), -2.0);
}

/// The accumulator is f64 even for f32 buffers: summing many small f32
/// values stays accurate where a single-precision accumulator drifts.
#[test]
fn test_sum_f32_uses_wide_accumulator() {
    let buffer = vec![0.1_f32; 10_000];
    let total: f32 = sum(&buffer);
    assert_relative_eq!(total, 1000.0, epsilon = 0.05);
}
