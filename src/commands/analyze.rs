//! Analyze command implementation

use super::{Command, CommandContext};
use crate::constants;
use crate::github::{GitHubClient, IssueOutcome};
use crate::report::{self, Report};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;

/// Analyze command: check a repository's security posture and optionally
/// file a GitHub issue with the findings
pub struct AnalyzeCommand {
    /// URL of the repository to analyze
    pub repourl: String,
    /// Whether to create a GitHub issue with the analysis report
    pub create_issue: bool,
}

#[async_trait]
impl Command for AnalyzeCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = GitHubClient::new(context.token.clone());

        // A malformed URL is fatal; no partial report is shown
        let repository = client.parse_repo_url(&self.repourl)?;

        let report = Report::collect(&client, repository).await;
        report::print_report(&report);

        if self.create_issue {
            let body = report::build_issue_body(&report);
            let outcome = client
                .create_issue(
                    &report.repository.owner,
                    &report.repository.name,
                    constants::report::ISSUE_TITLE,
                    &body,
                )
                .await;

            match outcome {
                IssueOutcome::Created { url } => {
                    println!(
                        "{} {}",
                        "GitHub issue created successfully:".green().bold(),
                        url
                    );
                }
                IssueOutcome::Failed { error } => {
                    println!(
                        "{} {}",
                        "Failed to create GitHub issue:".red().bold(),
                        error
                    );
                }
            }
        }

        Ok(())
    }
}
