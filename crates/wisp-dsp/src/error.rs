//! Error types for signal analysis.

use thiserror::Error;

/// Result type for analysis operations.
pub type DspResult<T> = Result<T, DspError>;

/// Errors that can occur during signal analysis.
#[derive(Debug, Error, PartialEq)]
pub enum DspError {
    /// Analysis requires at least one sample.
    #[error("analysis requires a non-empty sample buffer")]
    EmptySamples,

    /// Noise-floor estimation needs enough histogram segments to interpolate.
    #[error("rms segment count must be at least 3, got {count}")]
    SegmentCountTooSmall {
        /// The rejected segment count.
        count: usize,
    },

    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid chunk duration.
    #[error("invalid chunk duration: {duration} seconds")]
    InvalidChunkDuration {
        /// The invalid duration.
        duration: f64,
    },
}
