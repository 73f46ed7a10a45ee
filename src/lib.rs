//! # mdavg - Running Averages of Simulation Observables
//!
//! `mdavg` reads the summary table a molecular dynamics run writes to its
//! output file and computes cumulative (running) means of potential
//! energy, total energy and pressure over elapsed time. A run is judged
//! equilibrated once these curves flatten out.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use mdavg::log_file::LogLayout;
//! use mdavg::pipeline::analyze_file;
//!
//! let analysis = analyze_file("lj_fluid.out", &LogLayout::default())?;
//! print!("{}", analysis.report());
//! # Ok::<(), mdavg::pipeline::AnalysisError>(())
//! ```
//!
//! which prints
//!
//! ```text
//! Potential: -5.37
//! Total: -3.12
//! Pressure: 1.04
//! -5.37,-3.12,1.04
//! ```
//!
//! ## Input Format
//!
//! Plain text. The first two lines are a header and are skipped. Every
//! other line holds whitespace-separated columns; by default column 0 is
//! the time, 2 the potential energy, 3 the kinetic energy and 5 the
//! pressure. See [`log_file::LogLayout`] to change this.
//!
//! ## Architecture
//!
//! - [`log_file`]: strict, all-or-nothing parsing of the log into samples
//! - [`running`]: O(n) cumulative means and whole-run statistics
//! - [`report`]: the four-line text report and its JSON form
//! - [`chart`]: SVG and CSV renderings of the running averages
//! - [`pipeline`]: the composition of the above

#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod chart;
pub mod log_file;
pub mod pipeline;
pub mod report;
pub mod running;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::chart::{
        plotter_for_path, ChartData, ChartError, ChartSeries, CsvPlotter, Plotter, SvgPlotter,
    };
    pub use crate::log_file::{parse_log, read_log_file, LogFileError, LogLayout, Sample};
    pub use crate::pipeline::{analyze_file, analyze_reader, Analysis, AnalysisError};
    pub use crate::report::{write_report, Report};
    pub use crate::running::{
        aggregate, summarize, AggregateError, FinalAverages, QuantityStats, RunningAverageSeries,
        RunningMean, Summary,
    };
}
