//! Encoded WAV result type.

use super::format::WavFormat;
use super::writer::{encode_wav, samples_to_pcm16};
use crate::waveform::Waveform;

/// An encoded mono WAV file plus its reporting metadata.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Container format.
    pub format: WavFormat,
    /// Number of samples.
    pub num_samples: usize,
}

impl WavResult {
    /// Encodes mono samples.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> Self {
        let pcm = samples_to_pcm16(samples);
        let pcm_hash = blake3::hash(&pcm).to_hex().to_string();
        let format = WavFormat::mono(sample_rate);
        let wav_data = encode_wav(&format, &pcm);

        Self {
            wav_data,
            pcm_hash,
            format,
            num_samples: samples.len(),
        }
    }

    /// Encodes a waveform at its own sample rate.
    pub fn from_waveform(waveform: &Waveform) -> Self {
        Self::from_mono(waveform.samples(), waveform.sample_rate())
    }

    /// Returns the sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.format.sample_rate
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.num_samples as f64 / self.format.sample_rate as f64
    }
}
