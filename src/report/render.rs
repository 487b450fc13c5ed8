//! Terminal rendering for compliance reports

use super::Report;
use colored::*;

fn format_status(ok: bool) -> ColoredString {
    if ok { "✓".green() } else { "✗".red() }
}

/// Print the compliance report
///
/// Repository identity, a feature/status table, and a recommendations
/// block with one bullet per failing feature. The block stays empty when
/// everything passes.
pub fn print_report(report: &Report) {
    println!(
        "{} {}",
        "Repository:".blue().bold(),
        report.repository.slug().bold()
    );
    println!();

    println!("{}", "GitHub Security Compliance".cyan().bold());
    println!(
        "  {:<20} {}",
        "Security Policy",
        format_status(report.security_policy.exists)
    );
    println!(
        "  {:<20} {}",
        "Dependabot Alerts",
        format_status(report.dependabot_alerts.enabled)
    );
    println!(
        "  {:<20} {}",
        "Code Scanning",
        format_status(report.code_scanning.enabled)
    );
    println!();

    println!("{}", "Recommendations".yellow().bold());
    for recommendation in report.recommendations() {
        println!("  {} {}", "-".yellow(), recommendation);
    }
}
