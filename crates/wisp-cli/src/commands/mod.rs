//! Command implementations for the `wisp` binary.

pub mod convert;
pub mod cues;
pub mod info;
pub mod noise_floor;

use anyhow::{Context, Result};
use wisp_wav::DecodedWav;

/// Reads and decodes a WAV file, attaching the path to any failure.
pub(crate) fn read_wav(path: &str) -> Result<DecodedWav> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))?;
    wisp_wav::decode(&bytes).with_context(|| format!("Failed to decode WAV file: {}", path))
}
