//! GitSecure - A CLI tool for auditing GitHub repository security compliance

pub mod commands;
pub mod constants;
pub mod github;
pub mod report;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{AnalyzeCommand, Command, CommandContext};
pub use github::GitHubClient;
pub use report::Report;
