//! Library half of the `healthjournal` binary.
//!
//! Holds the pieces of the CLI that are worth driving from integration
//! tests without spawning a process.

pub mod logging;
pub mod session;
