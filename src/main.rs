//! # running-avg
//!
//! Prints the running averages of potential energy, total energy and
//! pressure at the end of a molecular dynamics log, and optionally writes
//! a chart of how they evolved.
//!
//! ## Usage
//!
//! ```bash
//! # Final averages
//! running-avg lj_fluid.out
//!
//! # Also chart the running averages
//! running-avg lj_fluid.out --chart lj_fluid.svg
//! ```

use clap::Parser;
use std::process::ExitCode;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::init_logging(cli.verbosity());

    match cli::dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            cli::print_error(&err);
            ExitCode::FAILURE
        }
    }
}
