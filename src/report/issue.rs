//! Markdown template for the analysis issue

use super::Report;

/// Static remediation guides, included in every issue regardless of which
/// checks passed
const REMEDIATION_GUIDES: &str = r#"1. **Add a Security Policy (`SECURITY.md`)**:
   - **Why Enable**:
     - A `SECURITY.md` file provides contributors and users with clear instructions on how to report vulnerabilities responsibly.
     - Helps secure your repository by promoting responsible disclosure practices.
   - **How to Enable**:
     - Go to your repository on GitHub.
     - Navigate to the **"Security"** section from the navigation bar.
     - Under **"Policy"**, click **"Set up a Security Policy"** to create a `SECURITY.md` file.
     - Add contact details or procedures for reporting vulnerabilities.
   - **Learn More**: [GitHub Security Policies Documentation](https://docs.github.com/en/code-security/getting-started/github-security-features#adding-a-security-policy-to-your-repository)

2. **Enable Dependabot Alerts**:
   - **Why Enable**:
     - Dependabot helps you identify and fix vulnerabilities in your dependencies automatically.
     - Keeps your project secure by notifying you of outdated or vulnerable packages.
   - **How to Enable**:
     - Go to your repository on GitHub.
     - Navigate to the **"Security"** section from the navigation bar.
     - Look for the **"Dependency Graph"** section and enable **Dependabot Alerts**.
   - **Learn More**: [GitHub Dependabot Alerts Documentation](https://docs.github.com/en/code-security/dependabot/dependabot-alerts/about-dependabot-alerts)

3. **Enable Code Scanning**:
   - **Why Enable**:
     - Code scanning automatically analyzes your code for potential security vulnerabilities.
     - Integrates with tools like **CodeQL** to identify vulnerabilities in your codebase.
   - **How to Enable**:
     - Go to your repository on GitHub.
     - Navigate to the **"Security"** section from the navigation bar.
     - Under **"Code Scanning Alerts"**, click **"Set up code scanning"**.
     - Choose **CodeQL Analysis** or configure a custom scanning tool.
     - Optionally, set up a workflow for continuous scanning by configuring a `.yaml` file in your repository.
   - **Learn More**: [GitHub Code Scanning Documentation](https://docs.github.com/en/code-security/code-scanning)
"#;

fn glyph(ok: bool) -> &'static str {
    if ok { "✓" } else { "✗" }
}

/// Build the Markdown body for the analysis issue
///
/// The status table reflects the check results; the remediation guides are
/// static and cover all three features unconditionally.
pub fn build_issue_body(report: &Report) -> String {
    format!(
        "### Security Analysis for {repo}\n\n\
         ---\n\n\
         #### Security Compliance Table\n\n\
         | Feature           | Status |\n\
         | ----------------- | ------ |\n\
         | Security Policy   | {policy} |\n\
         | Dependabot Alerts | {dependabot} |\n\
         | Code Scanning     | {scanning} |\n\n\
         ---\n\n\
         #### Recommendations and Benefits\n\n\
         {guides}\n\
         ---\n\n\
         #### Why It Matters\n\
         Enabling these security features helps protect your codebase from vulnerabilities, \
         encourages best practices, and builds trust with your collaborators and users. \
         GitHub provides tools to automate and simplify the security process, making it \
         easy to safeguard your projects.\n\n\
         ---\n\n\
         #### Generated by GitSecure\n",
        repo = report.repository.name,
        policy = glyph(report.security_policy.exists),
        dependabot = glyph(report.dependabot_alerts.enabled),
        scanning = glyph(report.code_scanning.enabled),
        guides = REMEDIATION_GUIDES,
    )
}
