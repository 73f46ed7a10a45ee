/// Errors that can occur while rendering a chart
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// I/O error while writing the output
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the XML writer
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// Error from the CSV writer
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    /// A series does not have one value per time point
    #[error("Series '{label}' has {found} points, expected {expected}")]
    LengthMismatch {
        /// Label of the offending series
        label: String,
        /// Number of time points
        expected: usize,
        /// Number of values in the series
        found: usize,
    },

    /// Nothing to draw
    #[error("No finite data points to plot")]
    NoData,
}
