//! CLI argument parsing and startup-failure integration tests
//!
//! Marked serial because each test spawns `cargo run` and concurrent
//! invocations contend on the build lock.

mod support;

use serial_test::serial;
use support::run_cli;

#[test]
#[serial]
fn test_cli_help_lists_analyze_command() {
    let output = run_cli(&["--help"], &[]);
    assert!(output.success);
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("analyze"));
}

#[test]
#[serial]
fn test_cli_analyze_requires_repourl() {
    let output = run_cli(&["analyze"], &[("GITHUB_TOKEN", Some("dummy"))]);
    assert!(!output.success);
    assert!(output.stderr.contains("required") || output.stderr.contains("--repourl"));
}

#[test]
#[serial]
fn test_cli_missing_token_aborts_before_any_request() {
    let output = run_cli(
        &["analyze", "--repourl", "https://github.com/acme/widgets"],
        &[("GITHUB_TOKEN", None)],
    );
    assert!(!output.success);
    assert!(output.stderr.contains("GITHUB_TOKEN"));
    // No report is rendered
    assert!(!output.stdout.contains("GitHub Security Compliance"));
}

#[test]
#[serial]
fn test_cli_invalid_url_aborts_before_any_request() {
    let output = run_cli(
        &["analyze", "--repourl", "https://github.com/just-an-owner"],
        &[("GITHUB_TOKEN", Some("dummy"))],
    );
    assert!(!output.success);
    assert!(output.stderr.contains("Invalid GitHub URL format"));
    assert!(!output.stdout.contains("GitHub Security Compliance"));
}

#[test]
#[serial]
fn test_cli_invalid_subcommand() {
    let output = run_cli(&["audit"], &[]);
    assert!(!output.success);
    assert!(output.stderr.contains("unrecognized subcommand") || output.stderr.contains("invalid"));
}
