//! PCM16 encoding and the RIFF/WAVE container.

use std::path::Path;

use super::format::WavFormat;
use super::result::WavResult;
use crate::error::AudioResult;
use crate::waveform::Waveform;

/// Size of the canonical header: RIFF descriptor, 16-byte `fmt ` chunk and
/// the `data` chunk header.
pub const WAV_HEADER_LEN: usize = 44;

/// Wraps PCM bytes in a canonical 44-byte WAV header.
///
/// The header carries no metadata chunks, so identical PCM always encodes to
/// identical files.
pub fn encode_wav(format: &WavFormat, pcm: &[u8]) -> Vec<u8> {
    let data_len = pcm.len() as u32;
    let mut bytes = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());

    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(WAV_HEADER_LEN as u32 - 8 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // integer PCM
    bytes.extend_from_slice(&format.channels.to_le_bytes());
    bytes.extend_from_slice(&format.sample_rate.to_le_bytes());
    bytes.extend_from_slice(&format.byte_rate().to_le_bytes());
    bytes.extend_from_slice(&format.block_align().to_le_bytes());
    bytes.extend_from_slice(&format.bits_per_sample.to_le_bytes());

    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.extend_from_slice(pcm);

    bytes
}

/// Encodes a waveform and writes it to `path`, returning the encoded result.
pub fn write_wav_file(path: &Path, waveform: &Waveform) -> AudioResult<WavResult> {
    let result = WavResult::from_waveform(waveform);
    std::fs::write(path, &result.wav_data)?;
    Ok(result)
}

/// Converts samples to little-endian 16-bit PCM with `round(clamp(x) * 32767)`.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0).round() as i16)
        .flat_map(i16::to_le_bytes)
        .collect()
}
