//! End-to-end tests for the demonstration sequence.
//!
//! Runs the binary in an empty temp directory so no settings file or
//! workspace `.reckon` directory leaks into the output.

use std::process::Command;
use tempfile::TempDir;

const DEMO_LINES: [&str; 6] = [
    "5 + 3 = 8",
    "10 - 4 = 6",
    "6 * 7 = 42",
    "15 / 3 = 5",
    "2 ^ 8 = 256",
    "√25 = 5",
];

fn run_demo(args: &[&str], settings: Option<&str>) -> std::process::Output {
    let temp_dir = TempDir::new().unwrap();

    if let Some(content) = settings {
        let config_dir = temp_dir.path().join(".reckon");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("settings.toml"), content).unwrap();
    }

    Command::new(env!("CARGO_BIN_EXE_reckon"))
        .args(args)
        .current_dir(temp_dir.path())
        .output()
        .expect("Failed to run reckon")
}

#[test]
fn test_bare_invocation_runs_demo() {
    let output = run_demo(&[], None);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Calculator Demo"));
    assert!(stdout.contains("==============="));
    for line in DEMO_LINES {
        assert!(stdout.contains(line), "missing demo line: {line}");
    }
}

#[test]
fn test_demo_subcommand_prints_same_sequence() {
    let output = run_demo(&["demo"], None);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Calculator Demo"));
    for line in DEMO_LINES {
        assert!(stdout.contains(line), "missing demo line: {line}");
    }
}

#[test]
fn test_demo_renders_history_table() {
    let output = run_demo(&["demo"], None);
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("History (6 operations recorded)"));

    // One table row per operation, carrying kind and expression
    for kind in ["add", "subtract", "multiply", "divide", "power", "square_root"] {
        assert!(stdout.contains(kind), "missing table row for: {kind}");
    }
    assert!(stdout.contains("√25"));
}

#[test]
fn test_demo_honors_table_limit() {
    let settings = "[history]\ntable_limit = 2\n";
    let output = run_demo(&["demo"], Some(settings));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();

    // The header still counts every recorded operation
    assert!(stdout.contains("History (6 operations recorded)"));

    // Only the last two rows survive the limit
    assert!(stdout.contains("power"));
    assert!(stdout.contains("square_root"));
    assert!(!stdout.contains("multiply"));
    assert!(!stdout.contains("subtract"));
}

#[test]
fn test_demo_honors_display_precision() {
    let settings = "[display]\nprecision = 1\n";
    let output = run_demo(&["demo"], Some(settings));
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("5 + 3 = 8.0"));
    assert!(stdout.contains("15 / 3 = 5.0"));
    assert!(stdout.contains("√25 = 5.0"));
}
