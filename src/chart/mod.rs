//! # Running-Average Charts
//!
//! Hands the time sequence and the three running averages to a
//! [`Plotter`], which writes a chart file. Two plotters are provided:
//!
//! - [`SvgPlotter`]: a self-contained SVG line chart with axis labels and
//!   a legend, viewable in any browser
//! - [`CsvPlotter`]: the raw columns, for gnuplot, spreadsheets and the like
//!
//! [`plotter_for_path`] picks one from the output file extension.

mod data;
mod error;
mod svg;
mod table;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::debug;

pub use data::{ChartData, ChartSeries, X_LABEL, Y_LABEL};
pub use error::ChartError;
pub use svg::SvgPlotter;
pub use table::CsvPlotter;

/// Something that can turn [`ChartData`] into a chart
pub trait Plotter {
    /// Write the chart to an arbitrary sink
    fn write_to(&self, data: &ChartData, out: &mut dyn Write) -> Result<(), ChartError>;

    /// Write the chart to a file, replacing any existing one
    fn render(&self, data: &ChartData, path: &Path) -> Result<(), ChartError> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(data, &mut out)?;
        out.flush()?;
        debug!("Wrote chart with {} points to {}", data.len(), path.display());
        Ok(())
    }
}

/// Choose a plotter from the output extension: `.csv` gets CSV, anything else SVG
pub fn plotter_for_path(path: &Path) -> Box<dyn Plotter> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        Box::new(CsvPlotter)
    } else {
        Box::new(SvgPlotter::default())
    }
}
