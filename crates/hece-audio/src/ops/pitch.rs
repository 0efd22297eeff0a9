//! Resampling pitch shift.
//!
//! The shift reads the clip at a faster or slower rate, so duration changes
//! along with pitch: one octave up halves the clip length. There is no
//! time-stretching step.

use super::interpolate::{interpolate_at, linear_ramp};

/// Returns the resampling factor for a shift in semitones (`2^(s/12)`).
#[inline]
pub fn pitch_factor(semitones: f64) -> f64 {
    2.0_f64.powf(semitones / 12.0)
}

/// Shifts pitch by resampling with linear interpolation.
///
/// # Arguments
/// * `samples` - Input clip
/// * `semitones` - Shift amount; positive raises pitch and shortens the clip
///
/// # Returns
/// A new buffer of `floor(len / 2^(semitones/12))` samples, or an exact copy
/// of the input when `semitones` is zero.
pub fn pitch_shift(samples: &[f64], semitones: f64) -> Vec<f64> {
    if semitones == 0.0 {
        return samples.to_vec();
    }

    let factor = pitch_factor(semitones);
    let new_len = (samples.len() as f64 / factor) as usize;
    if samples.is_empty() || new_len == 0 {
        return Vec::new();
    }

    let last_index = (samples.len() - 1) as f64;
    linear_ramp(0.0, last_index, new_len)
        .into_iter()
        .map(|position| interpolate_at(samples, position))
        .collect()
}
