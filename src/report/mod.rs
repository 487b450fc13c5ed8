//! Report assembly and recommendation derivation

pub mod issue;
pub mod render;

use crate::constants;
use crate::github::{CodeScanning, DependabotAlerts, GitHubClient, RepoRef, SecurityPolicy};

// Re-export the rendering entry points
pub use issue::build_issue_body;
pub use render::print_report;

/// Security compliance report for a single repository
///
/// Assembled once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub repository: RepoRef,
    pub security_policy: SecurityPolicy,
    pub dependabot_alerts: DependabotAlerts,
    pub code_scanning: CodeScanning,
}

impl Report {
    /// Run the feature checks and assemble the report
    ///
    /// The checks run strictly sequentially in a fixed order: security
    /// policy, Dependabot alerts, code scanning.
    pub async fn collect(client: &GitHubClient, repository: RepoRef) -> Report {
        let security_policy = client
            .check_security_policy(&repository.owner, &repository.name)
            .await;
        let dependabot_alerts = client
            .check_dependabot_alerts(&repository.owner, &repository.name)
            .await;
        let code_scanning = client
            .check_code_scanning(&repository.owner, &repository.name)
            .await;

        Report {
            repository,
            security_policy,
            dependabot_alerts,
            code_scanning,
        }
    }

    /// One fixed-text recommendation per failing feature, in check order
    ///
    /// Empty when all three features pass.
    pub fn recommendations(&self) -> Vec<&'static str> {
        let mut recommendations = Vec::new();

        if !self.security_policy.exists {
            recommendations.push(constants::report::RECOMMEND_POLICY);
        }
        if !self.dependabot_alerts.enabled {
            recommendations.push(constants::report::RECOMMEND_DEPENDABOT);
        }
        if !self.code_scanning.enabled {
            recommendations.push(constants::report::RECOMMEND_CODE_SCANNING);
        }

        recommendations
    }
}
