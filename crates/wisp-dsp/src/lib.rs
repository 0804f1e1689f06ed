//! WISP Signal Processing
//!
//! Sample-buffer transforms and analysis utilities shared by the WISP audio
//! tooling:
//!
//! - **Sample transforms** - linear resampling, multichannel mixdown, and
//!   float/16-bit PCM conversion
//! - **RMS analysis** - windowed ("chunked") RMS energy measurement
//! - **Noise-floor estimation** - amplitude-histogram analysis that finds the
//!   ambient noise level of a recording
//!
//! # Determinism
//!
//! Every function here is pure: no I/O, no global state, no randomness. Given
//! the same input buffers, output is identical across runs, which makes the
//! encoded WISP files built on top of this crate byte-reproducible.
//!
//! # Example
//!
//! ```
//! use wisp_dsp::{find_noise_floor, NoiseFloorOptions};
//!
//! let samples = vec![0.0, 0.0, 0.0, 0.0, 1.5, 1.5, 1.5, 1.5, 2.0, 2.0];
//! let report = find_noise_floor(&samples, 4, &NoiseFloorOptions::default())?;
//! println!("noise floor: {}", report.noise_floor_rms);
//! # Ok::<(), wisp_dsp::DspError>(())
//! ```

pub mod error;
pub mod noise_floor;
pub mod peak;
pub mod rms;
pub mod sample;
pub mod silence;

// Re-export main types at crate root
pub use error::{DspError, DspResult};
pub use noise_floor::{find_noise_floor, NoiseFloorOptions, NoiseFloorReport, RmsSegment};
pub use rms::{combine_rms_pair, estimate_peak_from_rms, rms, rms_chunks, rms_range};
pub use sample::{combine_channels, pcm16_to_samples, resample, samples_to_pcm16};
