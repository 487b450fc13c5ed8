//! GitHub issue creation

use super::client::GitHubClient;
use super::types::IssueOutcome;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// JSON payload for the issue creation endpoint
#[derive(Serialize)]
struct IssueRequest<'a> {
    title: &'a str,
    body: &'a str,
}

/// The slice of the creation response we care about
#[derive(Deserialize)]
struct IssueCreated {
    html_url: String,
}

/// Error shape returned by the GitHub API on failed requests
#[derive(Deserialize)]
struct ApiError {
    message: Option<String>,
}

impl GitHubClient {
    /// Create an issue on the repository
    ///
    /// # Arguments
    /// * `owner` - Repository owner (username or organization)
    /// * `repo` - Repository name
    /// * `title` - Issue title
    /// * `body` - Issue body (Markdown)
    ///
    /// # Returns
    /// [`IssueOutcome::Created`] with the issue's web URL on `201 Created`;
    /// [`IssueOutcome::Failed`] with the API's `message` field (or
    /// "Unknown error" when absent) on any other status. Transport errors
    /// become `Failed` with the error text; this call never aborts the run.
    pub async fn create_issue(
        &self,
        owner: &str,
        repo: &str,
        title: &str,
        body: &str,
    ) -> IssueOutcome {
        let url = format!("{}/repos/{}/{}/issues", self.base_url, owner, repo);
        let payload = IssueRequest { title, body };

        let response = match self.post(&url).json(&payload).send().await {
            Ok(response) => response,
            Err(e) => {
                return IssueOutcome::Failed {
                    error: e.to_string(),
                };
            }
        };

        if response.status() == StatusCode::CREATED {
            match response.json::<IssueCreated>().await {
                Ok(issue) => IssueOutcome::Created {
                    url: issue.html_url,
                },
                Err(_) => IssueOutcome::Failed {
                    error: "Unknown error".to_string(),
                },
            }
        } else {
            let message = response
                .json::<ApiError>()
                .await
                .ok()
                .and_then(|error| error.message)
                .unwrap_or_else(|| "Unknown error".to_string());

            IssueOutcome::Failed { error: message }
        }
    }
}
