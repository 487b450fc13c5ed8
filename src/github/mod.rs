//! GitHub API integration module
//!
//! This module provides the interface for the GitHub REST API calls the
//! analysis needs. API operations are organized into sub-modules that
//! extend [`GitHubClient`] with `impl` blocks:
//!
//! - [`client`]: core client with authentication state and URL parsing
//! - [`auth`]: token handling
//! - [`security`]: the three security feature checks
//! - [`issues`]: issue creation
//! - [`types`]: data structures and type definitions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gitsecure::github::GitHubClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GitHubClient::new("your_token".to_string());
//! let repo = client.parse_repo_url("https://github.com/rust-lang/rust")?;
//! let policy = client.check_security_policy(&repo.owner, &repo.name).await;
//! println!("SECURITY.md present: {}", policy.exists);
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod issues;
pub mod security;
pub mod types;

// Re-export commonly used items for convenience
pub use auth::GitHubAuth;
pub use client::GitHubClient;
pub use types::{CodeScanning, DependabotAlerts, IssueOutcome, RepoRef, SecurityPolicy};
