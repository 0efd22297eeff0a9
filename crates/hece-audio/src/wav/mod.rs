//! WAV encoding and decoding.
//!
//! Output is written as deterministic 16-bit mono PCM with no timestamps or
//! variable metadata, so the BLAKE3 hash of the PCM payload identifies a
//! synthesis result. Input clips are decoded with `hound`.

mod format;
mod reader;
mod result;
mod writer;


// Re-export public API
pub use format::WavFormat;
pub use reader::{read_wav_mono, read_wav_mono_from_bytes};
pub use result::WavResult;
pub use writer::{encode_wav, samples_to_pcm16, write_wav_file, WAV_HEADER_LEN};
