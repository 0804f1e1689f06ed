//! WAV profile parameters.

/// Software tag stamped into files that carry WISP cue metadata.
///
/// Version of the metadata layout, not of any crate. Bump when the metadata
/// format changes; a decoder seeing a different tag keeps the samples but
/// discards the cues rather than misinterpreting them.
pub const WISP_ISFT_TAG: &str = "WISP WAV 1.0";

/// PCM format code in the fmt chunk.
pub const WAVE_FORMAT_PCM: u16 = 1;

/// Immutable encoding profile for a WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavProfile {
    /// Number of channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavProfile {
    /// The WISP speech-audio profile: 16-bit, 44.1 kHz, mono.
    pub const WISP: WavProfile = WavProfile {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 16,
    };

    /// Bytes per sample (per channel).
    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align (bytes per sample frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Byte rate (bytes per second).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
