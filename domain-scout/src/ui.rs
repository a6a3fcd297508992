//! Pretty-mode display logic for domain-scout CLI.
//!
//! This module handles all `--pretty` output: colored verdict lines,
//! per-TLD scan progress, headers, and summaries. Uses only the
//! `console` crate (already a dependency).

use console::{pad_str, style, Alignment};
use domain_scout_lib::{DomainStatus, DomainVerdict, ScanOutcome, UNKNOWN};

// ── Single verdict ───────────────────────────────────────────────────────────

/// Print a resolved verdict with colors.
pub fn print_verdict(verdict: &DomainVerdict) {
    let status = match verdict.status {
        DomainStatus::Available => style("AVAILABLE").green().bold(),
        DomainStatus::Registered => style("REGISTERED").red().bold(),
    };

    println!("  {}  {}", style(&verdict.domain).white().bold(), status);

    match &verdict.record {
        Some(record) => {
            print_field("Registrar", &record.registrar);
            print_field("Registered", &record.registration_date);
            print_field("Expires", &record.expiration_date);
        }
        None => {
            println!("  {}", style(verdict.evidence.to_string()).dim());
        }
    }
}

fn print_field(label: &str, value: &str) {
    if value == UNKNOWN {
        return;
    }
    println!("  {:<12} {}", style(label).dim(), value);
}

// ── Keyword scans ────────────────────────────────────────────────────────────

/// Print a styled header at the start of a pretty scan.
pub fn print_scan_header(keyword: &str, tld_count: usize) {
    println!(
        "{} {} {}",
        style("domain-scout").bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim(),
        style(format!(
            "— Scanning '{}' across {} TLD{}",
            keyword,
            tld_count,
            if tld_count == 1 { "" } else { "s" }
        ))
        .dim(),
    );
    println!();
}

/// Print one scan result line with a `[3/14]` progress prefix.
pub fn print_scan_line(outcome: &ScanOutcome, counter: (usize, usize)) {
    let (current, total) = counter;
    let prefix = style(format!("[{}/{}]", current, total)).dim();
    let padded_domain = pad_str(&outcome.domain, 30, Alignment::Left, Some(".."));

    if outcome.available {
        println!(
            "  {} {}  {}",
            prefix,
            style(&padded_domain).white(),
            style("AVAILABLE").green().bold(),
        );
    } else {
        println!(
            "  {} {}  {}",
            prefix,
            style(&padded_domain).white(),
            style("TAKEN").red().bold(),
        );
    }
}

/// Print the closing summary: counts plus the available names.
pub fn print_scan_summary(keyword: &str, total: usize, available: &[String]) {
    println!();

    if available.is_empty() {
        println!(
            "{}",
            style(format!(
                "No available domains found for '{}' ({} TLDs checked).",
                keyword, total
            ))
            .yellow(),
        );
        return;
    }

    println!(
        "{} {}",
        style(format!("{} available:", available.len())).green().bold(),
        style(format!("({} TLDs checked)", total)).dim(),
    );
    for domain in available {
        println!("  {} {}", style("-").dim(), style(domain).green());
    }
}
