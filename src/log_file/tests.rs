use super::*;

const SAMPLE_LOG: &str = "step time vcm kinetic total pressure\n\
                          ---------------------------------------\n\
                          0 _ 1.0 2.0 _ 10.0\n\
                          1 _ 3.0 1.0 _ 20.0\n\
                          2 _ 2.0 0.0 _ 30.0\n";

#[test]
fn test_parse_skips_header_and_reads_columns() {
    let samples = parse_log(SAMPLE_LOG.as_bytes(), &LogLayout::default()).unwrap();

    assert_eq!(samples.len(), 3);
    assert_eq!(samples[0], Sample::new(0.0, 1.0, 2.0, 10.0));
    assert_eq!(samples[1], Sample::new(1.0, 3.0, 1.0, 20.0));
    assert_eq!(samples[2], Sample::new(2.0, 2.0, 0.0, 30.0));
    assert_eq!(samples[1].total_energy(), 4.0);
}

#[test]
fn test_header_is_not_inspected() {
    // Header lines are discarded even when they look like data
    let log = "1 2 3 4 5 6\nnot numbers at all\n0.5 x -1.5 0.25 y 1e-3\n";
    let samples = parse_log(log.as_bytes(), &LogLayout::default()).unwrap();

    assert_eq!(samples, vec![Sample::new(0.5, -1.5, 0.25, 0.001)]);
}

#[test]
fn test_runs_of_whitespace_and_extra_columns() {
    let log = "h\nh\n  0.0\t\t_   4.0  5.0 _\t6.0  0.93 extra\n";
    let samples = parse_log(log.as_bytes(), &LogLayout::default()).unwrap();

    assert_eq!(samples, vec![Sample::new(0.0, 4.0, 5.0, 6.0)]);
}

#[test]
fn test_only_header_yields_no_samples() {
    let log = "header one\nheader two\n";
    let samples = parse_log(log.as_bytes(), &LogLayout::default()).unwrap();
    assert!(samples.is_empty());
}

#[test]
fn test_short_file_yields_no_samples() {
    let samples = parse_log("only one line".as_bytes(), &LogLayout::default()).unwrap();
    assert!(samples.is_empty());

    let samples = parse_log("".as_bytes(), &LogLayout::default()).unwrap();
    assert!(samples.is_empty());
}

#[test]
fn test_too_few_tokens() {
    let log = "h\nh\n0 _ 1.0 2.0 _ 10.0\n1 _ 3.0 1.0\n";
    let err = parse_log(log.as_bytes(), &LogLayout::default()).unwrap_err();

    match err {
        LogFileError::MissingColumns {
            line,
            found,
            required,
        } => {
            assert_eq!(line, 4);
            assert_eq!(found, 4);
            assert_eq!(required, 6);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_blank_data_line_is_rejected() {
    let log = "h\nh\n0 _ 1.0 2.0 _ 10.0\n\n";
    let err = parse_log(log.as_bytes(), &LogLayout::default()).unwrap_err();
    assert!(err.is_parse_error());
    assert!(matches!(err, LogFileError::MissingColumns { line: 4, found: 0, .. }));
}

#[test]
fn test_invalid_number() {
    let log = "h\nh\n0 _ 1.0 abc _ 10.0\n";
    let err = parse_log(log.as_bytes(), &LogLayout::default()).unwrap_err();

    match err {
        LogFileError::InvalidNumber {
            line,
            column,
            field,
            ref token,
        } => {
            assert_eq!(line, 3);
            assert_eq!(column, 3);
            assert_eq!(field, "kinetic energy");
            assert_eq!(token, "abc");
        }
        ref other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("abc"));
}

#[test]
fn test_unused_columns_are_not_parsed() {
    let log = "h\nh\n0 not-a-number 1.0 2.0 also-not 10.0\n";
    let samples = parse_log(log.as_bytes(), &LogLayout::default()).unwrap();
    assert_eq!(samples.len(), 1);
}

#[test]
fn test_non_finite_values_are_kept() {
    let log = "h\nh\n0 _ NaN 2.0 _ inf\n";
    let samples = parse_log(log.as_bytes(), &LogLayout::default()).unwrap();

    assert_eq!(samples.len(), 1);
    assert!(samples[0].potential_energy.is_nan());
    assert!(samples[0].pressure.is_infinite());
    assert!(!samples[0].is_finite());
}

#[test]
fn test_custom_layout() {
    let layout = LogLayout {
        header_lines: 0,
        time_column: 1,
        potential_column: 0,
        kinetic_column: 3,
        pressure_column: 2,
    };
    assert_eq!(layout.min_tokens(), 4);

    let samples = parse_log("5.0 0.1 7.0 6.0\n".as_bytes(), &layout).unwrap();
    assert_eq!(samples, vec![Sample::new(0.1, 5.0, 6.0, 7.0)]);
}

#[test]
fn test_layout_rejects_shared_columns() {
    let layout = LogLayout {
        pressure_column: 2,
        ..LogLayout::default()
    };
    let err = layout.validate().unwrap_err();
    assert!(matches!(err, LogFileError::InvalidLayout(_)));
    assert!(parse_log("".as_bytes(), &layout).is_err());
}

#[test]
fn test_default_layout() {
    let layout = LogLayout::default();
    assert_eq!(layout.header_lines, DEFAULT_HEADER_LINES);
    assert_eq!(layout.min_tokens(), 6);
    assert!(layout.validate().is_ok());
}

#[test]
fn test_invalid_utf8_data_line() {
    let mut log = b"step time\n---\n0 _ 1.0 2.0 _ 10.0\n".to_vec();
    log.extend_from_slice(b"1 _ 3.0 \xff\xfe _ 20.0\n");

    let err = parse_log(log.as_slice(), &LogLayout::default()).unwrap_err();
    assert!(matches!(err, LogFileError::InvalidEncoding { line: 4 }));
    assert!(err.is_parse_error());
    assert!(err.to_string().starts_with("Line 4"));
}

#[test]
fn test_binary_header_is_skipped() {
    let log = b"\xff\xfe\x00 header\n---\n0 _ 1.0 2.0 _ 10.0\n";
    let samples = parse_log(&log[..], &LogLayout::default()).unwrap();
    assert_eq!(samples, vec![Sample::new(0.0, 1.0, 2.0, 10.0)]);
}

#[test]
fn test_crlf_line_endings() {
    let log = "h\r\n-\r\n0 _ 1.0 2.0 _ 10.0\r\n";
    let samples = parse_log(log.as_bytes(), &LogLayout::default()).unwrap();
    assert_eq!(samples, vec![Sample::new(0.0, 1.0, 2.0, 10.0)]);
}

#[test]
fn test_invalid_utf8_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("binary.out");
    std::fs::write(&path, b"h\n-\n\x80 _ 1.0 2.0 _ 10.0\n").unwrap();

    let err = read_log_file(&path, &LogLayout::default()).unwrap_err();
    assert!(matches!(err, LogFileError::InvalidEncoding { line: 3 }));
    assert!(err.is_parse_error());
}

#[test]
fn test_missing_file() {
    let err = read_log_file("/definitely/not/here.out", &LogLayout::default()).unwrap_err();
    assert!(matches!(err, LogFileError::FileAccess { .. }));
    assert!(!err.is_parse_error());
    assert!(err.to_string().contains("/definitely/not/here.out"));
}
