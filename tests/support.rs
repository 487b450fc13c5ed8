//! Common test support utilities
//!
//! Shared helpers for integration tests: building a client pointed at a
//! local mock server and running the CLI as a subprocess.

use gitsecure::github::GitHubClient;
use std::process::Command;
use wiremock::MockServer;

/// Result of running the gitsecure CLI
#[derive(Debug)]
pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Build a client that talks to the given mock server
pub fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new("test-token".to_string()).with_base_url(server.uri())
}

/// Run the gitsecure CLI with the given arguments and environment overrides
///
/// `Some(value)` sets the variable for the child process, `None` removes it.
pub fn run_cli(args: &[&str], env: &[(&str, Option<&str>)]) -> CliOutput {
    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--quiet", "--"]).args(args);

    for (key, value) in env {
        match value {
            Some(value) => {
                cmd.env(key, value);
            }
            None => {
                cmd.env_remove(key);
            }
        }
    }

    let output = cmd.output().expect("Failed to execute cargo run");
    CliOutput {
        success: output.status.success(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
