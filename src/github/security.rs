//! Security feature checks against the GitHub REST API
//!
//! Each check maps HTTP status codes to a single boolean. Network and API
//! failures fold into the negative flag rather than surfacing as errors,
//! so the report always renders; a transient failure is indistinguishable
//! from a disabled feature.

use super::client::GitHubClient;
use super::types::{CodeScanning, DependabotAlerts, SecurityPolicy};
use reqwest::StatusCode;

impl GitHubClient {
    /// Check whether the repository publishes a security policy file
    ///
    /// Looks for `SECURITY.md` at the repository root first, then under
    /// `.github/`, short-circuiting on the first `200 OK`.
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    pub async fn check_security_policy(&self, owner: &str, repo: &str) -> SecurityPolicy {
        let candidates = [
            format!(
                "{}/repos/{}/{}/contents/SECURITY.md",
                self.base_url, owner, repo
            ),
            format!(
                "{}/repos/{}/{}/contents/.github/SECURITY.md",
                self.base_url, owner, repo
            ),
        ];

        for url in &candidates {
            match self.get(url).send().await {
                Ok(response) if response.status() == StatusCode::OK => {
                    return SecurityPolicy { exists: true };
                }
                _ => {}
            }
        }

        SecurityPolicy { exists: false }
    }

    /// Check whether Dependabot alerts are enabled
    ///
    /// GitHub answers `204 No Content` when the feature is on; any other
    /// status counts as disabled.
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    pub async fn check_dependabot_alerts(&self, owner: &str, repo: &str) -> DependabotAlerts {
        let url = format!(
            "{}/repos/{}/{}/vulnerability-alerts",
            self.base_url, owner, repo
        );

        let enabled = match self.get(&url).send().await {
            Ok(response) => response.status() == StatusCode::NO_CONTENT,
            Err(_) => false,
        };

        DependabotAlerts { enabled }
    }

    /// Check whether code scanning is enabled
    ///
    /// The analyses endpoint answers `404` when code scanning is off.
    /// Every other status counts as enabled, which conflates a `200` with
    /// zero findings and a `403` on restricted access. That coarse mapping
    /// is deliberate and must not be tightened.
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    pub async fn check_code_scanning(&self, owner: &str, repo: &str) -> CodeScanning {
        let url = format!(
            "{}/repos/{}/{}/code-scanning/analyses",
            self.base_url, owner, repo
        );

        let enabled = match self.get(&url).send().await {
            Ok(response) => response.status() != StatusCode::NOT_FOUND,
            Err(_) => false,
        };

        CodeScanning { enabled }
    }
}
