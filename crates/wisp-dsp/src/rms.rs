//! RMS energy measurement.

/// Default analysis window length in seconds.
///
/// The largest window that does not cause noticeable differences in most,
/// but not all, operations the chunks might be used for.
pub const DEFAULT_CHUNK_DURATION: f64 = 1.0 / 20.0;

/// Empirical ratio between a window's RMS and its average peak amplitude.
const RMS_TO_PEAK_RATIO: f64 = 0.88;

fn rms_of_section(samples: &[f64], start: usize, end: usize) -> f64 {
    let end = end.min(samples.len());
    if start >= end {
        return 0.0;
    }
    let sum: f64 = samples[start..end].iter().map(|s| s * s).sum();
    (sum / (end - start) as f64).sqrt()
}

/// Computes the root-mean-square of an entire sample buffer.
///
/// Empty input yields 0.
pub fn rms(samples: &[f64]) -> f64 {
    rms_of_section(samples, 0, samples.len())
}

/// Computes the root-mean-square of `samples[start..end]`.
///
/// The range is clipped to the buffer; an empty range yields 0.
pub fn rms_range(samples: &[f64], start: usize, end: usize) -> f64 {
    rms_of_section(samples, start, end)
}

/// Partitions a buffer into consecutive windows of `chunk_duration` seconds
/// and returns each window's RMS.
///
/// Windows hold `ceil(sample_rate * chunk_duration)` samples; the final
/// window may be shorter. Empty input yields an empty vector.
pub fn rms_chunks(samples: &[f64], sample_rate: u32, chunk_duration: f64) -> Vec<f64> {
    let samples_per_chunk = ((sample_rate as f64 * chunk_duration).ceil() as usize).max(1);
    let mut chunks = Vec::with_capacity(samples.len().div_ceil(samples_per_chunk));
    let mut start = 0;
    while start < samples.len() {
        let end = (start + samples_per_chunk).min(samples.len());
        chunks.push(rms_of_section(samples, start, end));
        start = end;
    }
    chunks
}

/// Combines two RMS values weighted by their sample counts.
///
/// This is an RMS-of-RMS approximation, not an exact merge of the underlying
/// mean squares; callers rely on the approximation as-is.
pub fn combine_rms_pair(first_rms: f64, first_count: usize, second_rms: f64, second_count: usize) -> f64 {
    (first_rms * first_count as f64 + second_rms * second_count as f64)
        / (first_count + second_count) as f64
}

/// Estimates the average peak amplitude of a window from its RMS.
///
/// A rough empirical estimator, not an exact measure.
pub fn estimate_peak_from_rms(rms: f64) -> f64 {
    rms * RMS_TO_PEAK_RATIO
}
