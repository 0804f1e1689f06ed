//! Peak amplitude measurement.

/// Returns the largest absolute sample value in `samples[start..end]`.
///
/// The range is clipped to the buffer; an empty range yields 0.
pub fn max_peak_range(samples: &[f64], start: usize, end: usize) -> f64 {
    let end = end.min(samples.len());
    if start >= end {
        return 0.0;
    }
    samples[start..end]
        .iter()
        .map(|sample| sample.abs())
        .fold(0.0, f64::max)
}

/// Returns the largest absolute sample value in the buffer.
pub fn max_peak(samples: &[f64]) -> f64 {
    max_peak_range(samples, 0, samples.len())
}
