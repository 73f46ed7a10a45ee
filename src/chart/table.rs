use std::io::Write;

use super::{ChartData, ChartError, Plotter};

/// Writes the chart data as CSV columns for external plotting tools.
///
/// The header row is `time` followed by each series key.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvPlotter;

impl Plotter for CsvPlotter {
    fn write_to(&self, data: &ChartData, out: &mut dyn Write) -> Result<(), ChartError> {
        let mut writer = csv::Writer::from_writer(out);

        let mut header = Vec::with_capacity(data.series().len() + 1);
        header.push("time");
        header.extend(data.series().iter().map(|s| s.key.as_str()));
        writer.write_record(&header)?;

        for (i, time) in data.time().iter().enumerate() {
            let mut record = Vec::with_capacity(header.len());
            record.push(time.to_string());
            record.extend(data.series().iter().map(|s| s.values[i].to_string()));
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }
}
