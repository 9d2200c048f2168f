//! Integration tests for the file sink.
//!
//! These tests verify the append-with-create contract, call-order
//! preservation, byte-level agreement between console and file lines, and
//! the partial-delivery policy when the file path is unusable.

use std::fs;

use logging::{LINE_TERMINATOR, Logger, Severity, SinkError};

// ============================================================================
// Round-Trip Behaviour
// ============================================================================

/// Verifies N passing calls produce exactly N lines in call order.
#[test]
fn sequential_calls_append_in_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");

    let logger = Logger::with_console_and_file(Vec::new(), &path);
    logger.set_verbose(true);
    for n in 0..5 {
        logger.log(Severity::Info, &[&"call", &n]).expect("log succeeds");
    }

    let contents = fs::read_to_string(&path).expect("file exists");
    let lines: Vec<&str> = contents.split(LINE_TERMINATOR).collect();
    // One trailing empty segment after the final terminator.
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[5], "");
    for (n, line) in lines[..5].iter().enumerate() {
        assert_eq!(*line, format!("[Info] call\t{n}\t"));
    }
}

/// Verifies the file line equals the console line minus the extra newline.
#[test]
fn file_and_console_lines_agree() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");

    let logger = Logger::with_console_and_file(Vec::new(), &path);
    logger.critical(&[&"boom"]).expect("log succeeds");

    let file = fs::read(&path).expect("file exists");
    let console = logger.into_console();
    assert_eq!(console, [file.as_slice(), b"\n"].concat());
}

/// Verifies suppressed calls write nothing to the file.
#[test]
fn suppressed_calls_do_not_touch_the_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");

    let logger = Logger::with_console_and_file(Vec::new(), &path);
    logger.info(&[&"hidden"]).expect("log succeeds");
    logger.debug(&[&"hidden"]).expect("log succeeds");

    assert!(!path.exists());
}

/// Verifies an existing file is appended to, never truncated.
#[test]
fn existing_content_is_preserved() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");
    fs::write(&path, "earlier run\r\n").expect("seed file");

    let logger = Logger::with_console_and_file(Vec::new(), &path);
    logger.critical(&[&"later"]).expect("log succeeds");

    let contents = fs::read_to_string(&path).expect("file exists");
    assert_eq!(contents, "earlier run\r\n[Critical] later\t\r\n");
}

/// Verifies two loggers sharing a path interleave whole lines only.
#[test]
fn separate_loggers_share_the_append_contract() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("app.log");

    let first = Logger::with_console_and_file(Vec::new(), &path);
    let second = Logger::with_console_and_file(Vec::new(), &path);
    first.critical(&[&"one"]).expect("log succeeds");
    second.critical(&[&"two"]).expect("log succeeds");
    first.critical(&[&"three"]).expect("log succeeds");

    let contents = fs::read_to_string(&path).expect("file exists");
    assert_eq!(
        contents,
        "[Critical] one\t\r\n[Critical] two\t\r\n[Critical] three\t\r\n"
    );
}

// ============================================================================
// Failure Policy
// ============================================================================

/// Verifies an unusable path fails the call with the file error.
#[test]
fn unusable_path_reports_a_file_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("app.log");

    let logger = Logger::with_console_and_file(Vec::new(), &path);
    let err = logger.critical(&[&"boom"]).expect_err("file sink must fail");

    match &err {
        SinkError::File { path: reported, .. } => assert_eq!(reported, &path),
        SinkError::Console { .. } => panic!("expected the file sink to fail"),
    }
}

/// Verifies the console still receives the line when the file sink fails.
#[test]
fn console_delivery_survives_a_file_failure() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("app.log");

    let logger = Logger::with_console_and_file(Vec::new(), &path);
    assert!(logger.critical(&[&"boom"]).is_err());

    assert_eq!(logger.into_console(), b"[Critical] boom\t\r\n\n");
}

/// Verifies a failed call is not retried by the next call.
#[test]
fn no_retry_after_a_failed_call() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("missing").join("app.log");

    let logger = Logger::with_console_and_file(Vec::new(), &missing);
    assert!(logger.critical(&[&"lost"]).is_err());

    fs::create_dir(dir.path().join("missing")).expect("mkdir");
    logger.critical(&[&"kept"]).expect("log succeeds");

    let contents = fs::read_to_string(&missing).expect("file exists");
    assert_eq!(contents, "[Critical] kept\t\r\n");
}
