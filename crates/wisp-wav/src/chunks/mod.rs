//! Encoders and parsers for the chunks of the WISP profile.
//!
//! Each encoder returns a complete chunk including its 8-byte header, so the
//! container assembly in [`crate::encode`] only concatenates. Parsers take
//! the chunk's data slice (header excluded), as returned by
//! [`crate::riff::find_chunk`].

pub mod adtl;
pub mod cue;
pub mod data;
pub mod fmt;
pub mod info;
