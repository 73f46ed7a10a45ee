//! Parse, then average: the composition the command-line tool runs.

use std::io::BufRead;
use std::path::Path;

use log::info;

use crate::chart::{ChartData, ChartError};
use crate::log_file::{parse_log, read_log_file, LogFileError, LogLayout, Sample};
use crate::report::Report;
use crate::running::{aggregate, summarize, AggregateError, RunningAverageSeries, Summary};

/// Errors that can abort an analysis
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Reading or parsing the log failed
    #[error(transparent)]
    LogFile(#[from] LogFileError),

    /// The log had no data rows
    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

/// Parsed samples with their running averages and whole-run statistics
#[derive(Debug, Clone)]
pub struct Analysis {
    samples: Vec<Sample>,
    averages: RunningAverageSeries,
    summary: Summary,
}

impl Analysis {
    /// Average an already parsed sample sequence
    pub fn from_samples(samples: Vec<Sample>) -> Result<Self, AggregateError> {
        let averages = aggregate(&samples)?;
        let summary = summarize(&samples)?;
        Ok(Self {
            samples,
            averages,
            summary,
        })
    }

    /// The parsed samples, in file order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Running averages for every prefix of the samples
    pub fn averages(&self) -> &RunningAverageSeries {
        &self.averages
    }

    /// Whole-run statistics
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Final values for printing
    pub fn report(&self) -> Report {
        Report::from(self.averages.last())
    }

    /// Data for the running-average chart
    pub fn chart_data(&self) -> Result<ChartData, ChartError> {
        ChartData::running_averages(&self.samples, &self.averages)
    }
}

/// Run the analysis on a log file
pub fn analyze_file<P: AsRef<Path>>(path: P, layout: &LogLayout) -> Result<Analysis, AnalysisError> {
    let path = path.as_ref();
    info!("Analyzing {}", path.display());

    let samples = read_log_file(path, layout)?;
    finish(samples)
}

/// Run the analysis on log content from any reader
pub fn analyze_reader<R: BufRead>(reader: R, layout: &LogLayout) -> Result<Analysis, AnalysisError> {
    let samples = parse_log(reader, layout)?;
    finish(samples)
}

fn finish(samples: Vec<Sample>) -> Result<Analysis, AnalysisError> {
    let analysis = Analysis::from_samples(samples)?;
    analysis.summary().log();
    Ok(analysis)
}
