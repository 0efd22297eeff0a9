//! Mono sample buffer paired with its sample rate.

use crate::ops;

/// A mono waveform with samples in [-1.0, 1.0].
///
/// Transform methods never modify `self`; each returns a new waveform so
/// clips borrowed from the sample store stay intact.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    samples: Vec<f64>,
    sample_rate: u32,
}

impl Waveform {
    /// Creates a waveform from samples.
    pub fn new(samples: Vec<f64>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// Creates `floor(sample_rate * duration_secs)` samples of silence.
    pub fn silence(duration_secs: f64, sample_rate: u32) -> Self {
        let num_samples = seconds_to_samples(duration_secs, sample_rate);
        Self::new(vec![0.0; num_samples], sample_rate)
    }

    /// Returns the samples.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// Returns the peak absolute amplitude.
    pub fn peak(&self) -> f64 {
        ops::peak(&self.samples)
    }

    /// Returns a pitch-shifted copy. See [`ops::pitch_shift`].
    pub fn pitch_shifted(&self, semitones: f64) -> Self {
        Self::new(ops::pitch_shift(&self.samples, semitones), self.sample_rate)
    }

    /// Returns a copy normalized to `target_peak`. See [`ops::normalize`].
    pub fn normalized(&self, target_peak: f64) -> Self {
        Self::new(ops::normalize(&self.samples, target_peak), self.sample_rate)
    }

    /// Returns `self` crossfaded into `next`. See [`ops::crossfade`].
    ///
    /// The result keeps `self`'s sample rate; both inputs are expected to
    /// share it.
    pub fn crossfade(&self, next: &Waveform, overlap_samples: usize) -> Self {
        debug_assert_eq!(self.sample_rate, next.sample_rate);
        Self::new(
            ops::crossfade(&self.samples, &next.samples, overlap_samples),
            self.sample_rate,
        )
    }
}

/// Converts a duration to a sample count, truncating toward zero.
///
/// Negative and non-finite durations yield zero samples.
pub fn seconds_to_samples(duration_secs: f64, sample_rate: u32) -> usize {
    let n = sample_rate as f64 * duration_secs;
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_length_truncates() {
        // 22050 * 0.15 = 3307.5
        let w = Waveform::silence(0.15, 22050);
        assert_eq!(w.len(), 3307);
        assert!(w.samples().iter().all(|&s| s == 0.0));
        assert_eq!(w.peak(), 0.0);
    }

    #[test]
    fn test_silence_degenerate_durations() {
        assert!(Waveform::silence(0.0, 22050).is_empty());
        assert!(Waveform::silence(-1.0, 22050).is_empty());
        assert!(Waveform::silence(f64::NAN, 22050).is_empty());
    }

    #[test]
    fn test_duration() {
        let w = Waveform::new(vec![0.0; 11025], 22050);
        assert_eq!(w.duration_seconds(), 0.5);
        assert_eq!(Waveform::new(Vec::new(), 0).duration_seconds(), 0.0);
    }

    #[test]
    fn test_transforms_leave_source_untouched() {
        let source = Waveform::new(vec![0.1, -0.2, 0.4, 0.0], 22050);
        let snapshot = source.clone();

        let _ = source.pitch_shifted(3.0);
        let _ = source.normalized(0.8);
        let _ = source.crossfade(&snapshot, 2);

        assert_eq!(source, snapshot);
    }

    #[test]
    fn test_normalized_peak() {
        let w = Waveform::new(vec![0.1, -0.2, 0.4], 22050).normalized(0.8);
        assert_eq!(w.peak(), 0.8);
        assert_eq!(w.sample_rate(), 22050);
    }
}
