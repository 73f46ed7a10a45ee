use super::ChartError;
use crate::log_file::Sample;
use crate::running::RunningAverageSeries;

/// Horizontal axis label used for running-average charts
pub const X_LABEL: &str = "Elapsed time";
/// Vertical axis label used for running-average charts
pub const Y_LABEL: &str = "Dimensionless units";

/// One labelled line of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// Short machine-friendly name, used as a CSV column header
    pub key: String,
    /// Legend label
    pub label: String,
    /// One value per time point
    pub values: Vec<f64>,
}

impl ChartSeries {
    /// Create a series
    pub fn new(key: impl Into<String>, label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            values,
        }
    }
}

/// Everything a plotter needs: a shared x sequence and labelled series
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    time: Vec<f64>,
    series: Vec<ChartSeries>,
    x_label: String,
    y_label: String,
}

impl ChartData {
    /// Build chart data, checking that every series matches `time` in length
    pub fn new(time: Vec<f64>, series: Vec<ChartSeries>) -> Result<Self, ChartError> {
        for s in &series {
            if s.values.len() != time.len() {
                return Err(ChartError::LengthMismatch {
                    label: s.label.clone(),
                    expected: time.len(),
                    found: s.values.len(),
                });
            }
        }

        Ok(Self {
            time,
            series,
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
        })
    }

    /// Chart of the three running averages against sample time
    pub fn running_averages(
        samples: &[Sample],
        averages: &RunningAverageSeries,
    ) -> Result<Self, ChartError> {
        let time = samples.iter().map(|s| s.time).collect();
        Self::new(
            time,
            vec![
                ChartSeries::new("potential", "Potential Energy", averages.potential().to_vec()),
                ChartSeries::new("total", "Total Energy", averages.total().to_vec()),
                ChartSeries::new("pressure", "Pressure", averages.pressure().to_vec()),
            ],
        )
    }

    /// The shared x values
    pub fn time(&self) -> &[f64] {
        &self.time
    }

    /// The plotted series
    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    /// Horizontal axis label
    pub fn x_label(&self) -> &str {
        &self.x_label
    }

    /// Vertical axis label
    pub fn y_label(&self) -> &str {
        &self.y_label
    }

    /// Number of points per series
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when there are no time points
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}
