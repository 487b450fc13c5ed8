//! GitHub API client implementation
//!
//! This module provides the main `GitHubClient` struct which serves as the
//! entry point for all GitHub API operations. The client is a stateless
//! value holding only the HTTP client, the API base URL, and the token.
//!
//! API operations are organized into separate modules that extend the
//! client with `impl` blocks:
//! - `security.rs` - security feature checks
//! - `issues.rs` - issue creation

use super::auth::GitHubAuth;
use super::types::RepoRef;
use crate::constants;
use anyhow::Result;
use reqwest::{Client, RequestBuilder};
use url::Url;

/// GitHub API client for interacting with GitHub's REST API
///
/// Every request carries the same `User-Agent`, `Accept`, and
/// `Authorization` headers. No request is retried and no timeout is set
/// beyond the transport default.
pub struct GitHubClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
    pub(crate) auth: GitHubAuth,
}

impl GitHubClient {
    /// Create a new GitHub client
    ///
    /// # Arguments
    /// * `token` - GitHub personal access token used for every request
    pub fn new(token: String) -> Self {
        Self {
            client: Client::new(),
            base_url: constants::github::API_BASE.to_string(),
            auth: GitHubAuth::new(token),
        }
    }

    /// Override the API base URL
    ///
    /// Used by tests to point the client at a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Parse a GitHub repository URL to extract owner and repository name
    ///
    /// Takes the URL path, strips surrounding slashes, and splits on `/`.
    /// The first two non-empty segments become owner and name; extra
    /// segments (branches, subdirectories) are ignored.
    ///
    /// # Errors
    /// Returns an error if the URL cannot be parsed or fewer than two path
    /// segments are present
    ///
    /// # Example
    /// ```rust
    /// use gitsecure::github::GitHubClient;
    ///
    /// let client = GitHubClient::new("token".to_string());
    /// let repo = client.parse_repo_url("https://github.com/rust-lang/rust").unwrap();
    /// assert_eq!(repo.owner, "rust-lang");
    /// assert_eq!(repo.name, "rust");
    /// ```
    pub fn parse_repo_url(&self, url: &str) -> Result<RepoRef> {
        let parsed =
            Url::parse(url).map_err(|_| anyhow::anyhow!("Invalid GitHub URL format: {}", url))?;

        let segments: Vec<&str> = parsed
            .path()
            .trim_matches('/')
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        if segments.len() < 2 {
            anyhow::bail!("Invalid GitHub URL format: {}", url);
        }

        Ok(RepoRef::new(
            segments[0].to_string(),
            segments[1].to_string(),
        ))
    }

    /// Build a GET request with the standard GitHub API headers
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.client
            .get(url)
            .header("User-Agent", constants::github::DEFAULT_USER_AGENT)
            .header("Accept", constants::github::ACCEPT_HEADER)
            .header("Authorization", self.auth.get_auth_header())
    }

    /// Build a POST request with the standard GitHub API headers
    pub(crate) fn post(&self, url: &str) -> RequestBuilder {
        self.client
            .post(url)
            .header("User-Agent", constants::github::DEFAULT_USER_AGENT)
            .header("Accept", constants::github::ACCEPT_HEADER)
            .header("Authorization", self.auth.get_auth_header())
    }
}
