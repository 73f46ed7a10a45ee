//! TOML configuration file support.
//!
//! Logs from other simulation codes put the quantities in different
//! columns. Instead of repeating flags, describe the layout once:
//!
//! ```toml
//! # running-avg.toml
//! [layout]
//! header_lines = 1
//! time_column = 1
//! potential_column = 3
//! kinetic_column = 2
//! pressure_column = 4
//!
//! [output]
//! chart = "running_avg.svg"
//! json = false
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use mdavg::log_file::LogLayout;

/// Root configuration structure for running-avg.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Input column layout.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Overrides for the input column layout.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    /// Header lines to skip.
    pub header_lines: Option<usize>,

    /// Column of the elapsed time.
    pub time_column: Option<usize>,

    /// Column of the potential energy.
    pub potential_column: Option<usize>,

    /// Column of the kinetic energy.
    pub kinetic_column: Option<usize>,

    /// Column of the pressure.
    pub pressure_column: Option<usize>,
}

/// Output settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Where to write the chart (.svg or .csv).
    pub chart: Option<PathBuf>,

    /// Print JSON instead of the text report.
    pub json: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Apply the layout overrides on top of `base`.
    pub fn apply_layout(&self, base: LogLayout) -> LogLayout {
        let l = &self.layout;
        LogLayout {
            header_lines: l.header_lines.unwrap_or(base.header_lines),
            time_column: l.time_column.unwrap_or(base.time_column),
            potential_column: l.potential_column.unwrap_or(base.potential_column),
            kinetic_column: l.kinetic_column.unwrap_or(base.kinetic_column),
            pressure_column: l.pressure_column.unwrap_or(base.pressure_column),
        }
    }
}
