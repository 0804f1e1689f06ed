//! General-purpose RIFF container primitives.
//!
//! Byte readers, a chunk scanner, and a chunk builder. Nothing in this module
//! knows about the WISP profile or any particular chunk layout; it is usable
//! against any RIFF-family container.

mod builder;
mod bytes;
mod scanner;

pub use builder::RiffBuilder;
pub use bytes::{
    read_chunk_id, read_null_terminated_ascii, read_u16_le, read_u32_le,
    text_to_null_terminated_ascii,
};
pub use scanner::find_chunk;

/// Size of the `"RIFF" <size> "WAVE"` container header.
pub const RIFF_HEADER_SIZE: usize = 12;

/// Size of a `<tag> <size>` chunk header.
pub const CHUNK_HEADER_SIZE: usize = 8;
