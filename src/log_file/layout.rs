use super::LogFileError;

/// Number of header lines written ahead of the data rows
pub const DEFAULT_HEADER_LINES: usize = 2;

/// Column positions of the quantities in a data line.
///
/// Columns are zero-based positions after splitting the line on runs of
/// whitespace. The defaults match the simulation summary output, where
/// columns 1 and 4 carry values this tool does not use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogLayout {
    /// Lines discarded unconditionally at the top of the file
    pub header_lines: usize,
    /// Column holding the elapsed time
    pub time_column: usize,
    /// Column holding the potential energy
    pub potential_column: usize,
    /// Column holding the kinetic energy
    pub kinetic_column: usize,
    /// Column holding the pressure
    pub pressure_column: usize,
}

impl Default for LogLayout {
    fn default() -> Self {
        Self {
            header_lines: DEFAULT_HEADER_LINES,
            time_column: 0,
            potential_column: 2,
            kinetic_column: 3,
            pressure_column: 5,
        }
    }
}

impl LogLayout {
    /// Minimum number of tokens a data line must carry
    pub fn min_tokens(&self) -> usize {
        self.columns()
            .iter()
            .map(|(_, column)| column + 1)
            .max()
            .unwrap_or(0)
    }

    /// Named columns in the order they are parsed
    pub fn columns(&self) -> [(&'static str, usize); 4] {
        [
            ("time", self.time_column),
            ("potential energy", self.potential_column),
            ("kinetic energy", self.kinetic_column),
            ("pressure", self.pressure_column),
        ]
    }

    /// Reject layouts where two quantities read the same column
    pub fn validate(&self) -> Result<(), LogFileError> {
        let columns = self.columns();
        for (i, (name_a, col_a)) in columns.iter().enumerate() {
            for (name_b, col_b) in &columns[i + 1..] {
                if col_a == col_b {
                    return Err(LogFileError::InvalidLayout(format!(
                        "{} and {} both read column {}",
                        name_a, name_b, col_a
                    )));
                }
            }
        }
        Ok(())
    }
}
