//! Tests for the resampling pitch shift.

use super::*;

fn ramp_clip(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 / len as f64).collect()
}

#[test]
fn test_zero_semitones_is_exact_copy() {
    let clip = vec![0.1, -0.7, 0.33333, 0.9, -0.0001];
    let shifted = pitch_shift(&clip, 0.0);
    assert_eq!(shifted.len(), clip.len());
    for (a, b) in shifted.iter().zip(&clip) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn test_octave_up_halves_length() {
    let clip = ramp_clip(1000);
    assert_eq!(pitch_shift(&clip, 12.0).len(), 500);
}

#[test]
fn test_octave_down_doubles_length() {
    let clip = ramp_clip(1000);
    assert_eq!(pitch_shift(&clip, -12.0).len(), 2000);
}

#[test]
fn test_length_uses_floor() {
    // 1000 / 2^(1/12) = 943.87...
    let clip = ramp_clip(1000);
    assert_eq!(pitch_shift(&clip, 1.0).len(), 943);
}

#[test]
fn test_endpoints_preserved() {
    let clip = vec![0.5, -0.25, 0.75, 0.0, -1.0, 0.3];
    let shifted = pitch_shift(&clip, -7.0);
    assert_eq!(shifted[0], 0.5);
    assert_eq!(*shifted.last().unwrap(), 0.3);
}

#[test]
fn test_linear_signal_stays_linear() {
    // Interpolating a straight line must land back on the line.
    let clip: Vec<f64> = (0..101).map(|i| i as f64).collect();
    let shifted = pitch_shift(&clip, 12.0);
    assert_eq!(shifted.len(), 50);
    let step = 100.0 / 49.0;
    for (i, s) in shifted.iter().enumerate() {
        assert!((s - i as f64 * step).abs() < 1e-9);
    }
}

#[test]
fn test_empty_and_tiny_clips() {
    assert!(pitch_shift(&[], 5.0).is_empty());
    // 1 / 2^(12/12) floors to 0 samples
    assert!(pitch_shift(&[0.4], 12.0).is_empty());
    assert_eq!(pitch_shift(&[0.4], -12.0), vec![0.4, 0.4]);
}

#[test]
fn test_pitch_factor() {
    assert_eq!(pitch_factor(0.0), 1.0);
    assert!((pitch_factor(12.0) - 2.0).abs() < 1e-12);
    assert!((pitch_factor(-12.0) - 0.5).abs() < 1e-12);
}
