/// Errors that can occur while averaging samples
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    /// The log contained no data rows after the header
    #[error("No data rows to average: the log holds only header lines")]
    EmptyInput,
}
