//! Histogram-based noise-floor estimation.
//!
//! The signal is measured as a sequence of windowed RMS values, and those
//! values are bucketed into equal-width amplitude segments. The most occupied
//! low-amplitude segment is presumed to be ambient noise; interpolation
//! against the neighboring segment smooths bucket-boundary quantization.

use serde::Serialize;

use crate::error::{DspError, DspResult};
use crate::rms::{estimate_peak_from_rms, rms_chunks, DEFAULT_CHUNK_DURATION};

const DEFAULT_RMS_SEGMENT_COUNT: usize = 10;

/// Tuning parameters for [`find_noise_floor`].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NoiseFloorOptions {
    /// RMS window length in seconds.
    pub chunk_duration: f64,
    /// Number of amplitude histogram segments. Must be at least 3.
    pub rms_segment_count: usize,
}

impl Default for NoiseFloorOptions {
    fn default() -> Self {
        Self {
            chunk_duration: DEFAULT_CHUNK_DURATION,
            rms_segment_count: DEFAULT_RMS_SEGMENT_COUNT,
        }
    }
}

/// One amplitude histogram segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RmsSegment {
    /// Inclusive lower amplitude bound.
    pub from_value: f64,
    /// Exclusive upper amplitude bound. Unbounded for the final segment.
    pub to_value: f64,
    /// Number of RMS chunks that fell in this segment.
    pub found_count: usize,
}

/// Result of noise-floor estimation.
#[derive(Debug, Clone, Serialize)]
pub struct NoiseFloorReport {
    /// Windowed RMS values the histogram was built from.
    pub chunks: Vec<f64>,
    /// Largest windowed RMS value.
    pub max_rms: f64,
    /// Amplitude histogram segments.
    pub rms_segments: Vec<RmsSegment>,
    /// Index of the selected (most occupied) segment.
    pub most_frequent_segment: usize,
    /// Estimated noise-floor amplitude.
    pub noise_floor_rms: f64,
}

fn build_segments(segment_count: usize, max_value: f64) -> Vec<RmsSegment> {
    let segment_range = max_value / segment_count as f64;
    let mut segments = Vec::with_capacity(segment_count);
    let mut from_value = 0.0;
    for segment_i in 0..segment_count {
        // The final segment is unbounded so clipped or outlier chunks always land somewhere.
        let to_value = if segment_i == segment_count - 1 {
            f64::INFINITY
        } else {
            from_value + segment_range
        };
        segments.push(RmsSegment {
            from_value,
            to_value,
            found_count: 0,
        });
        from_value = to_value;
    }
    segments
}

/// Returns the index of the first segment whose upper bound exceeds `rms`.
pub fn segment_containing_rms(segments: &[RmsSegment], rms: f64) -> Option<usize> {
    segments.iter().position(|segment| rms < segment.to_value)
}

fn find_most_frequent_segment(chunks: &[f64], segments: &mut [RmsSegment]) -> usize {
    let last_segment = segments.len() - 1;
    for &chunk_rms in chunks {
        let Some(segment_i) = segment_containing_rms(segments, chunk_rms) else {
            continue;
        };
        // Chunks in the unbounded segment are not counted, so flat stretches of
        // amplitude clipping cannot be mistaken for a noise floor.
        if segment_i == last_segment {
            continue;
        }
        segments[segment_i].found_count += 1;
    }

    let mut most_frequent = 0;
    for segment_i in 1..last_segment {
        // Ties keep the lower-amplitude segment.
        if segments[segment_i].found_count > segments[most_frequent].found_count {
            most_frequent = segment_i;
        }
    }
    most_frequent
}

fn other_segments_found_count_average(
    segments: &[RmsSegment],
    exclude_one: usize,
    exclude_two: usize,
) -> f64 {
    let sum: usize = segments
        .iter()
        .enumerate()
        .filter(|(segment_i, _)| *segment_i != exclude_one && *segment_i != exclude_two)
        .map(|(_, segment)| segment.found_count)
        .sum();
    sum as f64 / (segments.len() - 2) as f64
}

fn interpolate_noise_floor_rms(segments: &[RmsSegment], most_frequent: usize) -> f64 {
    let above = most_frequent + 1;
    let other_average = other_segments_found_count_average(segments, most_frequent, above);
    let lowest_noise_floor_rms = segments[most_frequent].to_value;

    let above_count = segments[above].found_count as f64;
    if above_count < other_average {
        return lowest_noise_floor_rms;
    }

    let most_frequent_count = segments[most_frequent].found_count as f64;
    let denominator = most_frequent_count - other_average;
    if denominator <= 0.0 {
        return lowest_noise_floor_rms;
    }
    let ratio = (above_count - other_average) / denominator;
    if ratio <= 0.0 {
        return lowest_noise_floor_rms;
    }
    let range = segments[above].to_value - lowest_noise_floor_rms;
    lowest_noise_floor_rms + ratio * range
}

/// Estimates the ambient noise level of a recording.
///
/// Computes windowed RMS chunks, buckets them into `rms_segment_count`
/// equal-width amplitude segments over `[0, max_rms]`, selects the most
/// occupied segment, and interpolates toward its upper neighbor when that
/// neighbor is occupied more than the remaining segments on average. The
/// result is passed through [`estimate_peak_from_rms`].
///
/// # Errors
/// Fails for empty input, a segment count below 3 (interpolation needs at
/// least one segment besides the selected pair), a zero sample rate, or a
/// non-positive chunk duration.
pub fn find_noise_floor(
    samples: &[f64],
    sample_rate: u32,
    options: &NoiseFloorOptions,
) -> DspResult<NoiseFloorReport> {
    if samples.is_empty() {
        return Err(DspError::EmptySamples);
    }
    if options.rms_segment_count < 3 {
        return Err(DspError::SegmentCountTooSmall {
            count: options.rms_segment_count,
        });
    }
    if sample_rate == 0 {
        return Err(DspError::InvalidSampleRate { rate: sample_rate });
    }
    if !(options.chunk_duration > 0.0) {
        return Err(DspError::InvalidChunkDuration {
            duration: options.chunk_duration,
        });
    }

    let chunks = rms_chunks(samples, sample_rate, options.chunk_duration);
    let max_rms = chunks.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mut rms_segments = build_segments(options.rms_segment_count, max_rms);
    let most_frequent_segment = find_most_frequent_segment(&chunks, &mut rms_segments);
    let noise_floor_rms = interpolate_noise_floor_rms(&rms_segments, most_frequent_segment);

    Ok(NoiseFloorReport {
        chunks,
        max_rms,
        rms_segments,
        most_frequent_segment,
        noise_floor_rms: estimate_peak_from_rms(noise_floor_rms),
    })
}
