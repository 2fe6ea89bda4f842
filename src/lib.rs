//! tznow: print the current local time with its timezone
//!
//! The library half of the `tznow` binary: resolving the host's configured
//! timezone and rendering the current instant as a single line.

/// Command-line definition
pub mod cli;

/// The local timestamp value and its rendering
pub mod timestamp;

/// System timezone resolution
pub mod zone;
