//! Timed label metadata.

/// A named time marker within an audio buffer.
///
/// WISP uses cues to mark sub-segment boundaries such as viseme timings
/// ("viseme-rest", "viseme-mbp", ...). Cue order is significant and survives
/// an encode/decode round trip. Labels may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct WavCue {
    /// Time offset in seconds from the start of the audio.
    pub position: f64,
    /// Label text.
    pub label: String,
}

impl WavCue {
    /// Creates a cue at `position` seconds.
    pub fn new(position: f64, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }
}
