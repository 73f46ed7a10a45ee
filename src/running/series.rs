use log::debug;

use super::{AggregateError, RunningMean};
use crate::log_file::Sample;

/// Final values of the three running averages
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinalAverages {
    /// Mean potential energy over the whole run
    pub potential: f64,
    /// Mean total energy over the whole run
    pub total: f64,
    /// Mean pressure over the whole run
    pub pressure: f64,
}

/// Cumulative means of potential energy, total energy and pressure.
///
/// Element `i` of each sequence is the mean of the raw quantity over
/// samples `0..=i`. All three sequences have the same, non-zero length.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningAverageSeries {
    potential: Vec<f64>,
    total: Vec<f64>,
    pressure: Vec<f64>,
}

impl RunningAverageSeries {
    /// Running average of potential energy
    pub fn potential(&self) -> &[f64] {
        &self.potential
    }

    /// Running average of total (potential + kinetic) energy
    pub fn total(&self) -> &[f64] {
        &self.total
    }

    /// Running average of pressure
    pub fn pressure(&self) -> &[f64] {
        &self.pressure
    }

    /// Number of points in each sequence
    pub fn len(&self) -> usize {
        self.potential.len()
    }

    /// Always false; an empty series is never constructed
    pub fn is_empty(&self) -> bool {
        self.potential.is_empty()
    }

    /// The averages over the complete sample sequence
    pub fn last(&self) -> FinalAverages {
        let last = self.len() - 1;
        FinalAverages {
            potential: self.potential[last],
            total: self.total[last],
            pressure: self.pressure[last],
        }
    }
}

/// Compute the running averages for every prefix of `samples`.
///
/// Fails with [`AggregateError::EmptyInput`] when there are no samples.
/// Non-finite inputs are not filtered: once a NaN or infinity enters a
/// sum, every later mean of that quantity carries it.
pub fn aggregate(samples: &[Sample]) -> Result<RunningAverageSeries, AggregateError> {
    if samples.is_empty() {
        return Err(AggregateError::EmptyInput);
    }

    let mut potential_mean = RunningMean::new();
    let mut total_mean = RunningMean::new();
    let mut pressure_mean = RunningMean::new();

    let mut potential = Vec::with_capacity(samples.len());
    let mut total = Vec::with_capacity(samples.len());
    let mut pressure = Vec::with_capacity(samples.len());

    for sample in samples {
        potential.push(potential_mean.push(sample.potential_energy));
        total.push(total_mean.push(sample.total_energy()));
        pressure.push(pressure_mean.push(sample.pressure));
    }

    debug!("Computed running averages over {} samples", samples.len());

    Ok(RunningAverageSeries {
        potential,
        total,
        pressure,
    })
}
