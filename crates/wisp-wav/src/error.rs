//! Error types for the WAV codec.

use thiserror::Error;

/// Result type for codec operations.
pub type WavResult<T> = Result<T, WavError>;

/// Errors that can occur while encoding or decoding WAV containers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WavError {
    /// Buffer does not start with a RIFF/WAVE header.
    #[error("missing RIFF/WAVE header")]
    MissingRiffHeader,

    /// A required chunk was not found in the container.
    #[error("required chunk '{id}' not found")]
    MissingChunk {
        /// The chunk tag that was searched for.
        id: &'static str,
    },

    /// A chunk's data was shorter than its fixed layout requires.
    #[error("chunk '{id}' truncated: need {needed} bytes, have {available}")]
    TruncatedChunk {
        /// The chunk tag.
        id: &'static str,
        /// Bytes the layout requires.
        needed: usize,
        /// Bytes actually present.
        available: usize,
    },

    /// The fmt chunk declares a compression format this codec does not parse.
    #[error("unsupported format code: {code} (only PCM is supported)")]
    UnsupportedFormatCode {
        /// The declared format code.
        code: u16,
    },

    /// The fmt chunk declares a channel count this codec does not parse.
    #[error("unsupported channel count: {channels} (only mono is supported)")]
    UnsupportedChannelCount {
        /// The declared channel count.
        channels: u16,
    },

    /// The fmt chunk declares a bit depth this codec does not parse.
    #[error("unsupported bit depth: {bits} (only 16-bit is supported)")]
    UnsupportedBitDepth {
        /// The declared bits per sample.
        bits: u16,
    },

    /// Encoding was asked to use an impossible sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The rejected sample rate.
        rate: u32,
    },
}
