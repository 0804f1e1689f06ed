//! Library surface of the `wisp` command-line tool.
//!
//! Command implementations live in [`commands`]; the binary in `main.rs`
//! only parses arguments and dispatches.

pub mod commands;
