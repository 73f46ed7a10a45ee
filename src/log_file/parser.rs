use std::io::BufRead;
use std::path::Path;

use log::{debug, warn};

use super::{LogFileError, LogLayout, Sample};

/// Parse samples from a reader positioned at the start of a log.
///
/// The first `layout.header_lines` lines are skipped without inspection,
/// so they may hold arbitrary bytes. Data lines must be UTF-8.
/// Every remaining line must carry at least `layout.min_tokens()`
/// whitespace-separated tokens, and each configured column must hold a
/// floating-point literal. Parsing is all-or-nothing: the first bad line
/// aborts the whole read.
pub fn parse_log<R: BufRead>(reader: R, layout: &LogLayout) -> Result<Vec<Sample>, LogFileError> {
    layout.validate()?;
    let required = layout.min_tokens();

    let mut samples = Vec::new();
    let mut non_finite = 0usize;

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        if index < layout.header_lines {
            continue;
        }

        let line_number = index + 1;
        let line = std::str::from_utf8(&bytes)
            .map_err(|_| LogFileError::InvalidEncoding { line: line_number })?;
        let sample = parse_line(line, line_number, required, layout)?;
        if !sample.is_finite() {
            non_finite += 1;
        }
        samples.push(sample);
    }

    if non_finite > 0 {
        warn!(
            "{} of {} samples contain non-finite values; running averages after the first one are poisoned",
            non_finite,
            samples.len()
        );
    }
    debug!("Parsed {} samples", samples.len());

    Ok(samples)
}

/// Read a log file fully into memory, release it, then parse it
pub fn read_log_file<P: AsRef<Path>>(path: P, layout: &LogLayout) -> Result<Vec<Sample>, LogFileError> {
    let path = path.as_ref();
    let content = std::fs::read(path).map_err(|source| LogFileError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Read {} bytes from {}", content.len(), path.display());

    parse_log(content.as_slice(), layout)
}

fn parse_line(
    line: &str,
    line_number: usize,
    required: usize,
    layout: &LogLayout,
) -> Result<Sample, LogFileError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < required {
        return Err(LogFileError::MissingColumns {
            line: line_number,
            found: tokens.len(),
            required,
        });
    }

    let parse_column = |field: &'static str, column: usize| -> Result<f64, LogFileError> {
        let token = tokens[column];
        token.parse::<f64>().map_err(|_| LogFileError::InvalidNumber {
            line: line_number,
            column,
            field,
            token: token.to_string(),
        })
    };

    Ok(Sample {
        time: parse_column("time", layout.time_column)?,
        potential_energy: parse_column("potential energy", layout.potential_column)?,
        kinetic_energy: parse_column("kinetic energy", layout.kinetic_column)?,
        pressure: parse_column("pressure", layout.pressure_column)?,
    })
}
