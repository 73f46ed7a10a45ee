//! End-to-end tests for the running-avg binary
//!
//! These run the built executable on temporary log files and check stdout,
//! stderr and the exit status.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const HEADER: &str = "step\ttime\tvcm\tKE\tTE\tP\tlattice\n\
                      ----------------------------------\n";

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_running-avg"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch running-avg")
}

fn write_log(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, format!("{}{}", HEADER, body)).unwrap();
    path.to_string_lossy().into_owned()
}

/// Three data lines produce the documented final averages
#[test]
fn test_three_line_scenario() {
    let dir = tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "run.out",
        "0 _ 1.0 2.0 _ 10.0\n1 _ 3.0 1.0 _ 20.0\n2 _ 2.0 0.0 _ 30.0\n",
    );

    let output = run(&[&log]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Potential: 2.0\nTotal: 3.0\nPressure: 20.0\n2.0,3.0,20.0\n"
    );
}

/// A log holding only its header fails without printing a report
#[test]
fn test_header_only_fails() {
    let dir = tempdir().unwrap();
    let log = write_log(dir.path(), "empty.out", "");

    let output = run(&[&log]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No data rows"));
}

/// A short data line aborts the run with no report
#[test]
fn test_short_line_fails() {
    let dir = tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "short.out",
        "0 _ 1.0 2.0 _ 10.0\n1 _ 3.0 1.0\n",
    );

    let output = run(&[&log]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Line 4"));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.out");

    let output = run(&[&missing.to_string_lossy()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_argument_fails() {
    let output = run(&[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_chart_is_written() {
    let dir = tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "run.out",
        "0 _ 1.0 2.0 _ 10.0\n1 _ 3.0 1.0 _ 20.0\n2 _ 2.0 0.0 _ 30.0\n",
    );
    let svg = dir.path().join("run.svg");
    let csv = dir.path().join("run.csv");

    let output = run(&[&log, "--chart", &svg.to_string_lossy()]);
    assert!(output.status.success());
    let content = fs::read_to_string(&svg).unwrap();
    assert!(content.contains("Elapsed time"));
    assert!(content.contains("Total Energy"));

    let output = run(&[&log, "--chart", &csv.to_string_lossy()]);
    assert!(output.status.success());
    let content = fs::read_to_string(&csv).unwrap();
    assert_eq!(
        content,
        "time,potential,total,pressure\n0,1,3,10\n1,2,3.5,15\n2,2,3,20\n"
    );
}

/// NaN data is valid input: the report is printed even though nothing can be charted
#[test]
fn test_nan_log_with_chart_still_reports() {
    let dir = tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "nan.out",
        "0 _ nan 1.0 _ nan\n1 _ 1.0 1.0 _ 2.0\n",
    );
    let svg = dir.path().join("nan.svg");

    let output = run(&[&log, "--chart", &svg.to_string_lossy()]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Potential: nan\nTotal: nan\nPressure: nan\nnan,nan,nan\n"
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Chart skipped"));
    assert!(!svg.exists());
}

#[test]
fn test_json_output() {
    let dir = tempdir().unwrap();
    let log = write_log(
        dir.path(),
        "run.out",
        "0 _ 1.0 2.0 _ 10.0\n1 _ 3.0 1.0 _ 20.0\n2 _ 2.0 0.0 _ 30.0\n",
    );

    let output = run(&[&log, "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["running_average"]["total"], 3.0);
    assert_eq!(value["summary"]["samples"], 3);
    assert_eq!(value["summary"]["pressure"]["std_dev"], 10.0);
}

#[test]
fn test_config_file_layout() {
    let dir = tempdir().unwrap();
    let log_path = dir.path().join("custom.out");
    // One header line; columns: step, time, potential, kinetic, pressure
    fs::write(&log_path, "# step time pe ke p\n0 0.0 1.0 2.0 10.0\n1 0.5 3.0 1.0 20.0\n").unwrap();

    let config = dir.path().join("layout.toml");
    fs::write(
        &config,
        "[layout]\nheader_lines = 1\ntime_column = 1\npotential_column = 2\nkinetic_column = 3\npressure_column = 4\n",
    )
    .unwrap();

    let output = run(&[
        &log_path.to_string_lossy(),
        "--config",
        &config.to_string_lossy(),
    ]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Potential: 2.0\nTotal: 3.5\nPressure: 15.0\n2.0,3.5,15.0\n"
    );
}
