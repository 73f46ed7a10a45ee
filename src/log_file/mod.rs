//! # Simulation Log Parser
//!
//! Reads the whitespace-delimited summary table a molecular dynamics run
//! appends to its output file. Each data line looks like:
//!
//! ```text
//! <time> <unused> <potential> <kinetic> <unused> <pressure> [more columns...]
//! ```
//!
//! The first lines of the file are a header and are skipped without being
//! looked at. The column positions and header length are described by a
//! [`LogLayout`]; its defaults match the simulation's own output.

mod error;
mod layout;
mod parser;
mod sample;

#[cfg(test)]
mod tests;

pub use error::LogFileError;
pub use layout::{LogLayout, DEFAULT_HEADER_LINES};
pub use parser::{parse_log, read_log_file};
pub use sample::Sample;
