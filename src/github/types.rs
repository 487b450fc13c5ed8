//! Data structures for GitHub API results

/// Owner and repository name extracted from a repository URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub name: String,
}

impl RepoRef {
    pub fn new(owner: String, name: String) -> Self {
        Self { owner, name }
    }

    /// The `owner/name` slug used in report output
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Whether the repository publishes a SECURITY.md policy file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityPolicy {
    pub exists: bool,
}

/// Whether Dependabot alerts are enabled for the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependabotAlerts {
    pub enabled: bool,
}

/// Whether code scanning is enabled for the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeScanning {
    pub enabled: bool,
}

/// Outcome of filing the analysis issue
///
/// Carries exactly one of the created issue's web URL or the API error
/// text. Issue creation failures are reported to the user but never abort
/// the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueOutcome {
    Created { url: String },
    Failed { error: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_ref_slug() {
        let repo = RepoRef::new("acme".to_string(), "widgets".to_string());
        assert_eq!(repo.slug(), "acme/widgets");
    }
}
