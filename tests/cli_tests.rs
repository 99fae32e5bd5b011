//! Integration tests for the CLI application
//!
//! These tests verify that the CLI commands work correctly with real data files.

use std::io::Write;
use std::process::Command;
use tempfile::{NamedTempFile, TempDir};

/// Helper to create test data files
struct TestDataFiles {
    pub labeled_csv_file: NamedTempFile,
    pub plain_csv_file: NamedTempFile,
}

impl TestDataFiles {
    fn new() -> std::io::Result<Self> {
        // CSV with a header and a trailing label column
        let mut labeled_csv_file = NamedTempFile::with_suffix(".csv")?;
        writeln!(labeled_csv_file, "feature1,feature2,label")?;
        writeln!(labeled_csv_file, "2.0,1.0,1")?;
        writeln!(labeled_csv_file, "-2.0,-1.0,-1")?;
        writeln!(labeled_csv_file, "1.5,0.8,1")?;
        writeln!(labeled_csv_file, "-1.5,-0.8,-1")?;
        labeled_csv_file.flush()?;

        // CSV where every column is a feature, no header
        let mut plain_csv_file = NamedTempFile::with_suffix(".csv")?;
        writeln!(plain_csv_file, "1.0,0.5")?;
        writeln!(plain_csv_file, "0.2,0.9")?;
        writeln!(plain_csv_file, "-1.0,-0.5")?;
        plain_csv_file.flush()?;

        Ok(TestDataFiles {
            labeled_csv_file,
            plain_csv_file,
        })
    }
}

/// Get the path to the compiled CLI binary
fn get_cli_binary_path() -> String {
    // Try to find the binary in target/debug or target/release
    let debug_path = "target/debug/depmax";
    let release_path = "target/release/depmax";

    if std::path::Path::new(debug_path).exists() {
        debug_path.to_string()
    } else if std::path::Path::new(release_path).exists() {
        release_path.to_string()
    } else {
        // Build the binary if it doesn't exist
        let output = Command::new("cargo")
            .args(["build", "--bin", "depmax"])
            .output()
            .expect("Failed to build CLI binary");

        if !output.status.success() {
            panic!(
                "Failed to build CLI binary: {}",
                String::from_utf8_lossy(&output.stderr)
            );
        }

        debug_path.to_string()
    }
}

#[test]
fn test_cli_precompute_label_column() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let gram_path = temp_dir.path().join("gram.json");

    let output = Command::new(get_cli_binary_path())
        .args([
            "precompute",
            "--data",
            test_data.labeled_csv_file.path().to_str().unwrap(),
            "--output",
            gram_path.to_str().unwrap(),
            "--label-column",
            "--kernel",
            "linear",
        ])
        .output()
        .expect("Failed to run CLI precompute command");

    assert!(
        output.status.success(),
        "Precompute command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(gram_path.exists(), "Gram file was not created");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Precomputed 4 x 4 Gram matrix"));
}

#[test]
fn test_cli_precompute_all_columns_rbf() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let gram_path = temp_dir.path().join("gram.json");

    let output = Command::new(get_cli_binary_path())
        .args([
            "precompute",
            "--data",
            test_data.plain_csv_file.path().to_str().unwrap(),
            "--output",
            gram_path.to_str().unwrap(),
            "--kernel",
            "rbf",
            "--gamma",
            "0.5",
        ])
        .output()
        .expect("Failed to run CLI precompute command");

    assert!(
        output.status.success(),
        "Precompute command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(gram_path.exists(), "Gram file was not created");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Precomputed 3 x 3 Gram matrix"));
}

#[test]
fn test_cli_info_command() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let gram_path = temp_dir.path().join("gram.json");

    // First precompute a Gram matrix
    let precompute_output = Command::new(get_cli_binary_path())
        .args([
            "precompute",
            "--data",
            test_data.labeled_csv_file.path().to_str().unwrap(),
            "--output",
            gram_path.to_str().unwrap(),
            "--label-column",
        ])
        .output()
        .expect("Failed to precompute Gram matrix");

    assert!(precompute_output.status.success());

    // Then get info about it
    let info_output = Command::new(get_cli_binary_path())
        .args(["info", gram_path.to_str().unwrap()])
        .output()
        .expect("Failed to run CLI info command");

    assert!(
        info_output.status.success(),
        "Info command failed: {}",
        String::from_utf8_lossy(&info_output.stderr)
    );

    let stdout = String::from_utf8_lossy(&info_output.stdout);
    assert!(stdout.contains("Precomputed Gram Matrix"));
    assert!(stdout.contains("Kernel Type: linear"));
    assert!(stdout.contains("Size: 4 x 4"));
}

#[test]
fn test_cli_precompute_rejects_nonpositive_gamma() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let gram_path = temp_dir.path().join("gram.json");

    let output = Command::new(get_cli_binary_path())
        .args([
            "precompute",
            "--data",
            test_data.plain_csv_file.path().to_str().unwrap(),
            "--output",
            gram_path.to_str().unwrap(),
            "--kernel",
            "rbf",
            "--gamma",
            "0",
        ])
        .output()
        .expect("Failed to run CLI precompute command");

    // Bad gamma is a clean error exit, not a panic abort
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("panicked"), "Stderr: {}", stderr);
    assert!(stderr.contains("gamma must be positive"));
    assert!(!gram_path.exists(), "Gram file should not be created");
}

#[test]
fn test_cli_error_handling_invalid_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let gram_path = temp_dir.path().join("gram.json");

    let output = Command::new(get_cli_binary_path())
        .args([
            "precompute",
            "--data",
            "/nonexistent/features.csv",
            "--output",
            gram_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run CLI command");

    assert!(
        !output.status.success(),
        "Command should have failed with invalid file"
    );
}

#[test]
fn test_cli_info_invalid_file() {
    let output = Command::new(get_cli_binary_path())
        .args(["info", "/nonexistent/gram.json"])
        .output()
        .expect("Failed to run CLI info command");

    assert!(
        !output.status.success(),
        "Command should have failed with invalid file"
    );
}

#[test]
fn test_cli_verbose_and_debug_flags() {
    let test_data = TestDataFiles::new().expect("Failed to create test data");
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let gram_path = temp_dir.path().join("gram.json");

    // Test verbose flag
    let verbose_output = Command::new(get_cli_binary_path())
        .args([
            "-v",
            "precompute",
            "--data",
            test_data.labeled_csv_file.path().to_str().unwrap(),
            "--output",
            gram_path.to_str().unwrap(),
            "--label-column",
        ])
        .output()
        .expect("Failed to run CLI command with verbose flag");

    assert!(verbose_output.status.success());

    // Test debug flag
    let debug_output = Command::new(get_cli_binary_path())
        .args([
            "-d",
            "precompute",
            "--data",
            test_data.labeled_csv_file.path().to_str().unwrap(),
            "--output",
            gram_path.to_str().unwrap(),
            "--label-column",
        ])
        .output()
        .expect("Failed to run CLI command with debug flag");

    assert!(debug_output.status.success());
}

#[test]
fn test_cli_help_output() {
    let output = Command::new(get_cli_binary_path())
        .args(["--help"])
        .output()
        .expect("Failed to run CLI help command");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Kernel-based dependence maximization preprocessor"));
    assert!(stdout.contains("precompute"));
    assert!(stdout.contains("info"));
}

#[test]
fn test_cli_version_output() {
    let output = Command::new(get_cli_binary_path())
        .args(["--version"])
        .output()
        .expect("Failed to run CLI version command");

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("depmax"));
}
