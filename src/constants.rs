//! Central constants for the gitsecure application

/// Default values for GitHub API requests
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("gitsecure/", env!("CARGO_PKG_VERSION"));

    /// Accept header pinning the REST API version
    pub const ACCEPT_HEADER: &str = "application/vnd.github.v3+json";
}

/// Fixed strings used in report output
pub mod report {
    /// Title used when filing the analysis issue
    pub const ISSUE_TITLE: &str = "GitSecure Analysis Report";

    /// Recommendation shown when no security policy file is found
    pub const RECOMMEND_POLICY: &str = "Add a SECURITY.md file.";

    /// Recommendation shown when Dependabot alerts are disabled
    pub const RECOMMEND_DEPENDABOT: &str = "Enable Dependabot alerts.";

    /// Recommendation shown when code scanning is disabled
    pub const RECOMMEND_CODE_SCANNING: &str = "Enable code scanning.";
}
