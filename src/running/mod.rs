//! # Running Averages
//!
//! Turns a time-ordered sequence of [`Sample`](crate::log_file::Sample)s
//! into cumulative means: the value at index `i` is the mean over every
//! sample up to and including `i`, not a fixed-window moving average.
//!
//! Averaged quantities are potential energy, total energy (potential plus
//! kinetic) and pressure. [`summarize`] additionally reports whole-run
//! spread for each quantity, which helps judge whether a run has settled.

mod error;
mod mean;
mod series;
mod stats;


pub use error::AggregateError;
pub use mean::RunningMean;
pub use series::{aggregate, FinalAverages, RunningAverageSeries};
pub use stats::{summarize, QuantityStats, Summary};
