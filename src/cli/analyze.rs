use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use mdavg::chart::{plotter_for_path, ChartError};
use mdavg::log_file::LogLayout;
use mdavg::pipeline::analyze_file;
use mdavg::report::write_report;

use super::config::Config;

/// Settings for one run, after merging flags, config file and defaults
#[derive(Debug)]
pub struct Settings {
    pub layout: LogLayout,
    pub chart: Option<PathBuf>,
    pub json: bool,
}

impl Settings {
    /// Flags win over the config file, which wins over built-in defaults
    pub fn resolve(
        config: Option<PathBuf>,
        chart: Option<PathBuf>,
        json: bool,
        header_lines: Option<usize>,
    ) -> Result<Self> {
        let config = match config {
            Some(path) => Config::from_file(&path)?,
            None => Config::default(),
        };

        let mut layout = config.apply_layout(LogLayout::default());
        if let Some(header_lines) = header_lines {
            layout.header_lines = header_lines;
        }

        Ok(Self {
            layout,
            chart: chart.or(config.output.chart),
            json: json || config.output.json.unwrap_or(false),
        })
    }
}

/// Parse, average, optionally chart, then print
pub fn run(input: PathBuf, settings: Settings) -> Result<()> {
    info!("Input:  {}", input.display());
    info!("Layout: {:?}", settings.layout);

    let analysis = analyze_file(&input, &settings.layout)
        .with_context(|| format!("Failed to analyze {}", input.display()))?;

    // Chart first, so a write failure leaves stdout empty
    if let Some(chart) = &settings.chart {
        let data = analysis.chart_data().context("Failed to build chart data")?;
        match plotter_for_path(chart).render(&data, chart) {
            Ok(()) => info!("Chart written to {}", chart.display()),
            Err(ChartError::NoData) => {
                warn!("Chart skipped: no finite running averages to plot");
                // Drop the empty file the plotter created
                if let Err(err) = fs::remove_file(chart) {
                    debug!("Could not remove {}: {}", chart.display(), err);
                }
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to write chart: {}", chart.display()));
            }
        }
    }

    let report = analysis.report();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if settings.json {
        let json = report
            .to_json(Some(analysis.summary()))
            .context("Failed to serialize report")?;
        writeln!(out, "{}", json)?;
    } else {
        write_report(&mut out, &report)?;
    }

    Ok(())
}
