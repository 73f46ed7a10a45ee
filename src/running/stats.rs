use std::fmt;

use log::info;
use serde::Serialize;

use super::AggregateError;
use crate::log_file::Sample;

/// Whole-run statistics of one quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuantityStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator), zero for one sample
    pub std_dev: f64,
    /// Smallest value seen
    pub min: f64,
    /// Largest value seen
    pub max: f64,
    /// Number of values
    pub count: usize,
}

impl fmt::Display for QuantityStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.6} ± {:.6} (min {:.6}, max {:.6})",
            self.mean, self.std_dev, self.min, self.max
        )
    }
}

/// Welford accumulator for mean and variance
#[derive(Debug, Clone, Copy)]
struct Moments {
    count: usize,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Moments {
    fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    fn add(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);

        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    fn finish(&self) -> QuantityStats {
        let std_dev = if self.count > 1 {
            (self.m2 / (self.count - 1) as f64).sqrt()
        } else {
            0.0
        };
        QuantityStats {
            mean: self.mean,
            std_dev,
            min: self.min,
            max: self.max,
            count: self.count,
        }
    }
}

/// Whole-run statistics of every quantity in a log
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of samples
    pub samples: usize,
    /// Time of the first sample
    pub start_time: f64,
    /// Time of the last sample
    pub end_time: f64,
    /// Potential energy statistics
    pub potential: QuantityStats,
    /// Kinetic energy statistics
    pub kinetic: QuantityStats,
    /// Total energy statistics
    pub total: QuantityStats,
    /// Pressure statistics
    pub pressure: QuantityStats,
}

impl Summary {
    /// Elapsed time covered by the samples
    pub fn time_span(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Emit the summary through the `log` facade at info level
    pub fn log(&self) {
        info!(
            "{} samples, t = {} .. {}",
            self.samples, self.start_time, self.end_time
        );
        info!("  Potential energy: {}", self.potential);
        info!("  Kinetic energy:   {}", self.kinetic);
        info!("  Total energy:     {}", self.total);
        info!("  Pressure:         {}", self.pressure);
    }
}

/// Compute whole-run statistics for `samples`
pub fn summarize(samples: &[Sample]) -> Result<Summary, AggregateError> {
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(AggregateError::EmptyInput),
    };

    let mut potential = Moments::new();
    let mut kinetic = Moments::new();
    let mut total = Moments::new();
    let mut pressure = Moments::new();

    for sample in samples {
        potential.add(sample.potential_energy);
        kinetic.add(sample.kinetic_energy);
        total.add(sample.total_energy());
        pressure.add(sample.pressure);
    }

    Ok(Summary {
        samples: samples.len(),
        start_time: first.time,
        end_time: last.time,
        potential: potential.finish(),
        kinetic: kinetic.finish(),
        total: total.finish(),
        pressure: pressure.finish(),
    })
}
