use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod analyze;
mod config;

/// Running averages of energy and pressure from a simulation log
#[derive(Parser)]
#[command(name = "running-avg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Simulation output file (two header lines, then whitespace-separated columns)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Load layout and output settings from a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the running-average chart to this file (.svg, or .csv for raw columns)
    #[arg(long, value_name = "PATH")]
    chart: Option<PathBuf>,

    /// Print the final averages and run statistics as JSON
    #[arg(long)]
    json: bool,

    /// Number of header lines to skip
    #[arg(long, value_name = "N")]
    header_lines: Option<usize>,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    let settings = analyze::Settings::resolve(cli.config, cli.chart, cli.json, cli.header_lines)?;
    analyze::run(cli.input, settings)
}

/// Report a fatal error on stderr
pub fn print_error(err: &anyhow::Error) {
    #[cfg(feature = "colorized_output")]
    {
        use console::style;
        eprintln!("{} {:#}", style("error:").red().bold().for_stderr(), err);
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        eprintln!("error: {:#}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_input_is_required() {
        assert!(Cli::try_parse_from(["running-avg"]).is_err());
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "running-avg",
            "-vv",
            "--chart",
            "out.svg",
            "--header-lines",
            "3",
            "run.out",
        ])
        .unwrap();

        assert_eq!(cli.verbosity(), 2);
        assert_eq!(cli.input, PathBuf::from("run.out"));
        assert_eq!(cli.chart, Some(PathBuf::from("out.svg")));
        assert_eq!(cli.header_lines, Some(3));
        assert!(!cli.json);
    }

    #[test]
    fn test_flags_override_defaults() {
        let settings = analyze::Settings::resolve(None, None, true, Some(0)).unwrap();
        assert_eq!(settings.layout.header_lines, 0);
        assert_eq!(settings.layout.pressure_column, 5);
        assert!(settings.json);
        assert!(settings.chart.is_none());
    }
}
