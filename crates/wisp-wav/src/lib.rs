//! WISP WAV Container Codec
//!
//! This crate reads and writes the WISP audio-file profile: 16-bit, 44.1 kHz,
//! mono PCM layered on the RIFF/WAVE container, with timed label metadata
//! ("cues") carried in `cue `/`labl` chunks.
//!
//! # Chunk layout
//!
//! A WISP-written file is structured as:
//!
//! ```text
//! "RIFF" <size> "WAVE"
//!   "fmt " chunk
//!   "data" chunk
//!   "cue " chunk         - cue point timings (only when cues exist)
//!   "list" chunk          - "adtl" with one "labl" sub-chunk per cue
//! ```
//!
//! The data chunk deliberately follows the fmt chunk immediately, deviating
//! from the generic RIFF/WAVE chunk order, because many real-world readers
//! fail on files where it does not. The decoder tolerates either ordering.
//!
//! # Decoding
//!
//! [`decode`] parses any 16-bit mono PCM WAVE file, not just WISP output.
//! Cue metadata is loaded when present and silently skipped when absent.
//! Files stamped with a foreign `ISFT` software tag keep their samples but
//! have their cues discarded rather than misinterpreted.
//!
//! # Determinism
//!
//! Encoding is deterministic: the same samples and cues always produce
//! byte-identical output. [`pcm::compute_pcm_hash`] hashes the PCM payload
//! for content validation.

pub mod chunks;
pub mod cue;
pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod pcm;
pub mod riff;

// Re-export main types at crate root
pub use cue::WavCue;
pub use decode::{decode, DecodedWav};
pub use encode::{encode, encode_channels, encode_samples_only};
pub use error::{WavError, WavResult};
pub use format::{WavProfile, WISP_ISFT_TAG};
pub use riff::find_chunk;

#[cfg(test)]
mod tests;
