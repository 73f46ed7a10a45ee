use std::path::PathBuf;

/// Errors that can occur while reading a simulation log
#[derive(Debug, thiserror::Error)]
pub enum LogFileError {
    /// The log file is missing or unreadable
    #[error("Failed to read log file {}: {source}", .path.display())]
    FileAccess {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading lines from an already opened source
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A data line has fewer tokens than the layout requires
    #[error("Line {line}: expected at least {required} columns, found {found}")]
    MissingColumns {
        /// 1-based line number in the file
        line: usize,
        /// Tokens present on the line
        found: usize,
        /// Tokens required by the layout
        required: usize,
    },

    /// A required token is not a floating-point literal
    #[error("Line {line}, column {column} ({field}): invalid number '{token}'")]
    InvalidNumber {
        /// 1-based line number in the file
        line: usize,
        /// 0-based column index
        column: usize,
        /// Quantity the column was expected to hold
        field: &'static str,
        /// The offending token
        token: String,
    },

    /// A data line is not valid UTF-8 text
    #[error("Line {line}: not valid UTF-8 text")]
    InvalidEncoding {
        /// 1-based line number in the file
        line: usize,
    },

    /// The column layout itself is unusable
    #[error("Invalid log layout: {0}")]
    InvalidLayout(String),
}

impl LogFileError {
    /// Returns true for malformed content, as opposed to access failures
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            LogFileError::MissingColumns { .. }
                | LogFileError::InvalidNumber { .. }
                | LogFileError::InvalidEncoding { .. }
        )
    }
}
