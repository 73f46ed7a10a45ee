//! # Final Value Report
//!
//! Renders the last point of each running average as the four-line text
//! block printed by the command-line tool:
//!
//! ```text
//! Potential: 2.0
//! Total: 3.0
//! Pressure: 20.0
//! 2.0,3.0,20.0
//! ```
//!
//! Values use the shortest digits that round-trip. Integral values keep a
//! trailing `.0`, so `2.0` never collapses to `2`. Magnitudes below `1e-4`
//! or from `1e16` up switch to an exponent with an explicit sign and at
//! least two digits (`1e-05`, `1.5e+16`). Non-finite values print as
//! `nan`, `inf` and `-inf`.

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::running::{FinalAverages, Summary};

/// Final running averages ready to print
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Report {
    /// Final potential energy average
    pub potential: f64,
    /// Final total energy average
    pub total: f64,
    /// Final pressure average
    pub pressure: f64,
}

impl From<FinalAverages> for Report {
    fn from(averages: FinalAverages) -> Self {
        Self {
            potential: averages.potential,
            total: averages.total,
            pressure: averages.pressure,
        }
    }
}

impl Report {
    /// The comma-separated line on its own
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{}",
            format_value(self.potential),
            format_value(self.total),
            format_value(self.pressure)
        )
    }

    /// Render as a JSON document together with an optional summary
    pub fn to_json(&self, summary: Option<&Summary>) -> Result<String, serde_json::Error> {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            running_average: &'a Report,
            #[serde(skip_serializing_if = "Option::is_none")]
            summary: Option<&'a Summary>,
        }

        serde_json::to_string_pretty(&JsonReport {
            running_average: self,
            summary,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Potential: {}", format_value(self.potential))?;
        writeln!(f, "Total: {}", format_value(self.total))?;
        writeln!(f, "Pressure: {}", format_value(self.pressure))?;
        writeln!(f, "{}", self.csv_line())
    }
}

/// Write the four-line report to `out`
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> std::io::Result<()> {
    write!(out, "{}", report)?;
    out.flush()
}

/// Shortest round-trip text for one report value
fn format_value(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.25e-5` or `1e16`
    let scientific = format!("{:e}", v);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if (-4..16).contains(&exponent) {
        let fixed = v.to_string();
        if fixed.contains('.') {
            fixed
        } else {
            format!("{fixed}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.abs())
    }
}
