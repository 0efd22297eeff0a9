//! WAV decoding into mono waveforms.

use std::io::{Cursor, Read};
use std::path::Path;

use crate::error::{AudioError, AudioResult};
use crate::waveform::Waveform;

/// Decodes a WAV file into a mono waveform.
///
/// Multi-channel files are mixed down by averaging each frame. Integer
/// samples are divided by `2^(bits - 1) - 1` (32767 for 16-bit) and clamped to
/// [-1.0, 1.0]; float samples are clamped as is.
///
/// # Errors
/// Returns [`AudioError::Decode`] if the file cannot be opened, has an
/// unsupported layout, or contains truncated sample data.
pub fn read_wav_mono(path: &Path) -> AudioResult<Waveform> {
    let reader = hound::WavReader::open(path).map_err(|e| AudioError::decode(path, e))?;
    decode(reader, path)
}

/// Decodes in-memory WAV bytes into a mono waveform.
///
/// `label` is used in error messages in place of a file path.
pub fn read_wav_mono_from_bytes(bytes: &[u8], label: &str) -> AudioResult<Waveform> {
    let path = Path::new(label);
    let reader = hound::WavReader::new(Cursor::new(bytes)).map_err(|e| AudioError::decode(path, e))?;
    decode(reader, path)
}

fn decode<R: Read>(reader: hound::WavReader<R>, path: &Path) -> AudioResult<Waveform> {
    let spec = reader.spec();
    if spec.channels == 0 {
        return Err(AudioError::decode(path, "file declares zero channels"));
    }

    let interleaved: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Int => {
            if !(8..=32).contains(&spec.bits_per_sample) {
                return Err(AudioError::decode(
                    path,
                    format!(
                        "unsupported bit depth: {} bits (supported: 8 to 32)",
                        spec.bits_per_sample
                    ),
                ));
            }
            let max_value = ((1i64 << (spec.bits_per_sample - 1)) - 1) as f64;
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| (v as f64 / max_value).clamp(-1.0, 1.0)))
                .collect::<Result<_, _>>()
                .map_err(|e| AudioError::decode(path, e))?
        }
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(|v| (v as f64).clamp(-1.0, 1.0)))
            .collect::<Result<_, _>>()
            .map_err(|e| AudioError::decode(path, e))?,
    };

    Ok(Waveform::new(
        mix_to_mono(&interleaved, spec.channels),
        spec.sample_rate,
    ))
}

/// Averages interleaved frames down to a single channel.
///
/// A trailing partial frame is dropped.
fn mix_to_mono(interleaved: &[f64], channels: u16) -> Vec<f64> {
    if channels == 1 {
        return interleaved.to_vec();
    }

    let channels = channels as usize;
    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f64>() / channels as f64)
        .collect()
}
