//! Tests for peak normalization.

use approx::assert_relative_eq;

use vectral::prelude::*;

// ============================================================================
// Peak Normalization Tests
// ============================================================================

/// Worked example: peak is 2.0, scale factor 1.0 / 2.0 = 0.5.
#[test]
fn test_normalize_scales_to_threshold() {
    let mut buffer = [0.5_f64, -2.0, 1.0];
    normalize(&mut buffer, 1.0).unwrap();
    assert_eq!(buffer, [0.25, -1.0, 0.5]);
}

#[test]
fn test_normalize_peak_matches_threshold() {
    let mut buffer = [0.3_f32, -0.9, 0.6, 0.1];
    normalize(&mut buffer, 0.5).unwrap();

    let peak = buffer.iter().fold(0.0_f32, |acc, v| acc.max(v.abs()));
    assert_relative_eq!(peak, 0.5, epsilon = 1e-6);
}

#[test]
fn test_normalize_negative_peak_sets_magnitude() {
    let mut buffer = [-4.0_f64, 1.0];
    normalize(&mut buffer, 2.0).unwrap();
    assert_eq!(buffer, [-2.0, 0.5]);
}

/// A silent buffer stays silent: the scale factor is never applied when
/// the peak is zero, so nothing is multiplied by zero.
#[test]
fn test_normalize_all_zero_is_noop() {
    let mut buffer = [0.0_f64, 0.0, 0.0];
    normalize(&mut buffer, 1.0).unwrap();
    assert_eq!(buffer, [0.0, 0.0, 0.0]);
}

#[test]
fn test_normalize_empty_is_noop() {
    let mut buffer: [f64; 0] = [];
    assert!(normalize(&mut buffer, 1.0).is_ok());
}

#[test]
fn test_normalize_amplifies_quiet_buffer() {
    let mut buffer = [0.1_f64, -0.05];
    normalize(&mut buffer, 1.0).unwrap();
    assert_relative_eq!(buffer[0], 1.0);
    assert_relative_eq!(buffer[1], -0.5);
}

#[test]
fn test_normalize_attenuates_loud_buffer() {
    let mut buffer = [8.0_f64, -2.0];
    normalize(&mut buffer, 1.0).unwrap();
    assert_relative_eq!(buffer[0], 1.0);
    assert_relative_eq!(buffer[1], -0.25);
}
