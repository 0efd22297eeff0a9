//! Tests for peak normalization.

use super::*;

#[test]
fn test_normalize_basic() {
    let samples = vec![0.5, -0.3, 0.8, -0.2];
    let out = normalize(&samples, 0.85);
    assert!((peak(&out) - 0.85).abs() < 1e-12);
    // Ratios are preserved
    assert!((out[0] / out[2] - 0.5 / 0.8).abs() < 1e-12);
}

#[test]
fn test_negative_peak() {
    let samples = vec![0.1, -0.4, 0.2];
    let out = normalize(&samples, 0.8);
    assert_eq!(out[1], -0.8);
}

#[test]
fn test_normalize_silent_audio() {
    let samples = vec![0.0, 0.0, 0.0, 0.0];
    let out = normalize(&samples, 0.85);
    assert_eq!(out, samples);
}

#[test]
fn test_normalize_empty() {
    assert!(normalize(&[], 0.85).is_empty());
    assert_eq!(peak(&[]), 0.0);
}

#[test]
fn test_normalize_is_idempotent() {
    let samples = vec![0.013, -0.27, 0.91, -0.5, 0.0004];
    let once = normalize(&samples, 0.8);
    let twice = normalize(&once, 0.8);
    for (a, b) in once.iter().zip(&twice) {
        assert!((a - b).abs() < 1e-12);
    }
}

#[test]
fn test_loud_audio_is_attenuated() {
    let samples = vec![2.0, -1.5, 3.0, -2.5];
    let out = normalize(&samples, 1.0);
    assert_eq!(peak(&out), 1.0);
}
