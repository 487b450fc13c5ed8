//! Authentication handling for GitHub API requests

/// Holds the GitHub token used to authenticate API requests
///
/// The token is read once at startup and kept for the process lifetime;
/// it is never written anywhere.
#[derive(Clone)]
pub struct GitHubAuth {
    token: String,
}

impl GitHubAuth {
    /// Create a new auth wrapper around a personal access token
    pub fn new(token: String) -> Self {
        Self { token }
    }

    /// Value for the `Authorization` header
    pub fn get_auth_header(&self) -> String {
        format!("token {}", self.token)
    }

    /// Access the raw token
    pub fn token(&self) -> &str {
        &self.token
    }
}
