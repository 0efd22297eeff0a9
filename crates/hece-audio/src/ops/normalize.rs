//! Peak normalization.

/// Returns the largest absolute sample value (0.0 for an empty buffer).
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Scales a buffer so its peak equals `target_peak`.
///
/// Each sample becomes `sample / peak * target_peak`. Silent buffers (peak of
/// zero) are returned unchanged.
pub fn normalize(samples: &[f64], target_peak: f64) -> Vec<f64> {
    let current_peak = peak(samples);
    if current_peak > 0.0 {
        samples
            .iter()
            .map(|&s| s / current_peak * target_peak)
            .collect()
    } else {
        samples.to_vec()
    }
}
