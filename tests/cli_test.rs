//! CLI Tests for xlsxroutes
//!
//! Runs the built binary against workbooks written to a temporary directory.

use rust_xlsxwriter::*;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_workbook(path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    let key = workbook.add_worksheet();
    key.set_name("Key")?;
    key.write_string(0, 0, "LOCATION")?;
    key.write_string(0, 1, "ROUTE")?;
    key.write_string(0, 2, "NOTES")?;
    key.write_string(1, 0, "Legend")?;
    key.write_string(1, 1, "L1")?;

    let forest = workbook.add_worksheet();
    forest.set_name("Forest")?;
    forest.write_string(0, 0, "LOCATION")?;
    forest.write_string(0, 1, "ROUTE")?;
    forest.write_string(0, 2, "NOTES")?;
    forest.write_string(1, 0, "Town A")?;
    forest.write_string(1, 1, "R1")?;
    forest.write_string(1, 2, "n1")?;

    workbook.save(path)
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_xlsxroutes"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run xlsxroutes")
}

#[test]
fn test_cli_converts_with_default_ignore_set() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("routes.xlsx");
    let output = dir.path().join("routes.md");
    write_workbook(&input).unwrap();

    let result = run(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    assert!(
        result.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&result.stderr)
    );
    let markdown = fs::read_to_string(&output).unwrap();
    assert_eq!(
        markdown,
        "\n\n\n## Town A\n| ROUTE   | NOTES   |\n|:--------|:--------|\n| R1      | n1      |"
    );
}

#[test]
fn test_cli_ignore_sheets_override() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("routes.xlsx");
    let output = dir.path().join("routes.md");
    write_workbook(&input).unwrap();

    let result = run(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
        "--ignore-sheets",
        " Forest , ",
    ]);

    assert!(result.status.success());
    let markdown = fs::read_to_string(&output).unwrap();
    assert!(markdown.contains("## Legend"));
    assert!(!markdown.contains("## Town A"));
}

#[test]
fn test_cli_overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("routes.xlsx");
    let output = dir.path().join("routes.md");
    write_workbook(&input).unwrap();
    fs::write(&output, "stale content from an earlier run").unwrap();

    let result = run(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    assert!(result.status.success());
    let markdown = fs::read_to_string(&output).unwrap();
    assert!(!markdown.contains("stale"));
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("missing.xlsx");
    let output = dir.path().join("routes.md");

    let result = run(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Input file not found"), "{stderr}");
    assert!(!output.exists());
}

#[test]
fn test_cli_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("routes.xlsx");
    let output = dir.path().join("no-such-dir").join("routes.md");
    write_workbook(&input).unwrap();

    let result = run(&[
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);

    assert!(!result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Failed to write output file"), "{stderr}");
}

#[test]
fn test_cli_requires_input_and_output() {
    let result = run(&["--input", "routes.xlsx"]);
    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("--output"));
}

#[test]
fn test_cli_help() {
    let result = run(&["--help"]);
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("--ignore-sheets"));
}
