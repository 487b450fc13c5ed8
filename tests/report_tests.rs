//! Tests for the issue body template and report rendering

use gitsecure::github::{CodeScanning, DependabotAlerts, RepoRef, SecurityPolicy};
use gitsecure::report::{Report, build_issue_body, print_report};

fn report(policy: bool, dependabot: bool, scanning: bool) -> Report {
    Report {
        repository: RepoRef::new("acme".to_string(), "widgets".to_string()),
        security_policy: SecurityPolicy { exists: policy },
        dependabot_alerts: DependabotAlerts { enabled: dependabot },
        code_scanning: CodeScanning { enabled: scanning },
    }
}

#[test]
fn test_issue_body_names_the_repository() {
    let body = build_issue_body(&report(true, true, true));
    assert!(body.starts_with("### Security Analysis for widgets"));
}

#[test]
fn test_issue_body_status_table_reflects_results() {
    let body = build_issue_body(&report(true, false, true));
    assert!(body.contains("| Security Policy   | ✓ |"));
    assert!(body.contains("| Dependabot Alerts | ✗ |"));
    assert!(body.contains("| Code Scanning     | ✓ |"));
}

#[test]
fn test_issue_body_includes_all_guides_even_when_passing() {
    // The remediation guides are static and always present
    let body = build_issue_body(&report(true, true, true));
    assert!(body.contains("Add a Security Policy (`SECURITY.md`)"));
    assert!(body.contains("Enable Dependabot Alerts"));
    assert!(body.contains("Enable Code Scanning"));
    assert!(body.contains("docs.github.com"));
}

#[test]
fn test_issue_body_is_deterministic() {
    let a = build_issue_body(&report(false, true, false));
    let b = build_issue_body(&report(false, true, false));
    assert_eq!(a, b);
}

#[test]
fn test_print_report_does_not_panic() {
    // Rendering smoke test for both all-pass and all-fail shapes
    print_report(&report(true, true, true));
    print_report(&report(false, false, false));
}
