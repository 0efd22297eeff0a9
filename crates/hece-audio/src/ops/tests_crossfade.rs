//! Tests for segment crossfading.

use super::*;

#[test]
fn test_length_accounts_for_overlap() {
    let a = vec![1.0; 1000];
    let b = vec![1.0; 800];
    let out = crossfade(&a, &b, 100);
    assert_eq!(out.len(), 1000 + 800 - 100);
}

#[test]
fn test_untouched_regions_are_copied() {
    let a: Vec<f64> = (0..200).map(|i| i as f64).collect();
    let b: Vec<f64> = (0..200).map(|i| -(i as f64)).collect();
    let out = crossfade(&a, &b, 50);

    assert_eq!(&out[..150], &a[..150]);
    assert_eq!(&out[200..], &b[50..]);
}

#[test]
fn test_blend_endpoints() {
    let a = vec![1.0; 100];
    let b = vec![0.5; 100];
    let out = crossfade(&a, &b, 20);

    // First blended sample is all `a`, last blended sample is all `b`
    assert_eq!(out[80], 1.0);
    assert_eq!(out[99], 0.5);
}

#[test]
fn test_constant_signals_blend_linearly() {
    let a = vec![1.0; 100];
    let b = vec![1.0; 100];
    let out = crossfade(&a, &b, 40);
    // Linear fades sum to one everywhere
    for s in &out {
        assert!((s - 1.0).abs() < 1e-12);
    }
}

#[test]
fn test_short_input_shrinks_overlap() {
    // b is shorter than the overlap: overlap becomes min(400/4, 60/4, 100) = 15
    let a = vec![0.2; 400];
    let b = vec![0.2; 60];
    let out = crossfade(&a, &b, 100);
    assert_eq!(out.len(), 400 + 60 - 15);
}

#[test]
fn test_tiny_overlap_concatenates() {
    // min(30/4, 30/4, 100) = 7, below the blend threshold
    let a = vec![0.3; 30];
    let b = vec![-0.3; 30];
    let out = crossfade(&a, &b, 100);
    assert_eq!(out.len(), 60);
    assert_eq!(&out[..30], &a[..]);
    assert_eq!(&out[30..], &b[..]);
}

#[test]
fn test_overlap_below_threshold_concatenates() {
    let a = vec![0.3; 500];
    let b = vec![0.3; 500];
    let out = crossfade(&a, &b, MIN_CROSSFADE_SAMPLES - 1);
    assert_eq!(out.len(), 1000);
}

#[test]
fn test_overlap_larger_than_both_inputs() {
    let a = vec![0.1; 12];
    let b = vec![0.2; 8];
    let out = crossfade(&a, &b, 10_000);
    assert_eq!(out.len(), 20);
}

#[test]
fn test_empty_inputs() {
    assert!(crossfade(&[], &[], 551).is_empty());
    assert_eq!(crossfade(&[0.5], &[], 551), vec![0.5]);
    assert_eq!(crossfade(&[], &[0.5], 551), vec![0.5]);
}

#[test]
fn test_inputs_not_mutated() {
    let a = vec![0.9; 100];
    let b = vec![0.9; 100];
    let _ = crossfade(&a, &b, 30);
    assert!(a.iter().chain(&b).all(|&s| s == 0.9));
}
