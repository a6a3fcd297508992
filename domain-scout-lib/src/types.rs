//! Core data types for domain availability resolution.
//!
//! This module defines the main data structures used throughout the library:
//! probe signals, verdicts, scan reports, and configuration options.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placeholder used for registration fields the registry did not supply.
///
/// Verdict fields are never empty or absent in rendered output; anything
/// the RDAP document doesn't carry is reported as this literal.
pub const UNKNOWN: &str = "Unknown";

/// The fixed TLD list used for bulk keyword scans, in report order.
pub const DEFAULT_SCAN_TLDS: &[&str] = &[
    "com", "net", "org", "io", "co", "app", "dev", "ai", "me", "info", "xyz", "online", "site",
    "tech",
];

/// Outcome of a single external probe (DNS lookup or RDAP fetch).
///
/// Transport failures are not swallowed into "absent": a timeout or a
/// 5xx from a registry is `Indeterminate`, which the resolver and the
/// scanner treat differently from a confirmed absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The probe positively confirmed the record exists.
    Present,
    /// The probe positively confirmed the record does not exist.
    Absent,
    /// The probe could not be completed (timeout, transport error, 5xx).
    Indeterminate,
}

impl Signal {
    pub fn is_present(self) -> bool {
        self == Signal::Present
    }

    pub fn is_absent(self) -> bool {
        self == Signal::Absent
    }
}

/// Final registration determination for one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    /// At least one signal shows the domain exists.
    Registered,
    /// No DNS and no RDAP evidence of registration.
    Available,
}

impl std::fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainStatus::Registered => write!(f, "Registered"),
            DomainStatus::Available => write!(f, "Available"),
        }
    }
}

/// Which combination of signals produced a verdict.
///
/// This makes the resolver's reconciliation policy visible in the type
/// system instead of hiding it behind caught-and-ignored failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evidence {
    /// DNS records exist and the registry returned an RDAP document.
    DnsAndRdap,
    /// DNS records exist but RDAP data couldn't be retrieved.
    DnsOnly,
    /// No DNS delegation, but the domain is in the RDAP registry.
    RdapOnly,
    /// Both probes positively confirmed absence.
    NoEvidence,
    /// Neither probe found the domain, but a lookup could not be
    /// completed, so absence is not fully confirmed.
    Unconfirmed,
}

impl std::fmt::Display for Evidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Evidence::DnsAndRdap => write!(f, "Confirmed via DNS and RDAP"),
            Evidence::DnsOnly => {
                write!(f, "Domain has DNS records but RDAP data couldn't be retrieved")
            }
            Evidence::RdapOnly => write!(f, "Domain found in RDAP registry"),
            Evidence::NoEvidence => write!(f, "No DNS records or RDAP data found"),
            Evidence::Unconfirmed => {
                write!(f, "No DNS or RDAP evidence found, but a lookup could not be completed")
            }
        }
    }
}

/// Registration details extracted from an RDAP document.
///
/// Every field defaults to [`UNKNOWN`]; extraction never fails, it just
/// leaves the placeholder in place when the document lacks the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RdapRecord {
    /// The registrar that manages this domain
    pub registrar: String,
    /// When the domain was first registered (ISO-8601 as supplied)
    pub registration_date: String,
    /// When the domain registration expires (ISO-8601 as supplied)
    pub expiration_date: String,
}

impl Default for RdapRecord {
    fn default() -> Self {
        Self {
            registrar: UNKNOWN.to_string(),
            registration_date: UNKNOWN.to_string(),
            expiration_date: UNKNOWN.to_string(),
        }
    }
}

/// Result of resolving one domain.
///
/// `Display` renders the report text handed to callers:
///
/// ```text
/// Domain: example.com
/// Status: Registered
/// Registrar: Example Registrar, Inc.
/// Registration Date: 1995-08-14T04:00:00Z
/// Expiration Date: 2026-08-13T04:00:00Z
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainVerdict {
    /// The domain name that was resolved (e.g., "example.com")
    pub domain: String,

    /// Whether the domain is registered or available
    pub status: DomainStatus,

    /// Registration details, present only for RDAP-confirmed verdicts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<RdapRecord>,

    /// Which signal combination produced this verdict
    pub evidence: Evidence,
}

impl std::fmt::Display for DomainVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Domain: {}", self.domain)?;
        write!(f, "Status: {}", self.status)?;

        match &self.record {
            Some(record) => {
                writeln!(f)?;
                writeln!(f, "Registrar: {}", record.registrar)?;
                writeln!(f, "Registration Date: {}", record.registration_date)?;
                write!(f, "Expiration Date: {}", record.expiration_date)
            }
            None => {
                writeln!(f)?;
                write!(f, "Note: {}", self.evidence)
            }
        }
    }
}

/// Result of scanning one keyword across a TLD list.
///
/// `available` holds only domains for which both the DNS probe and the
/// RDAP probe positively confirmed absence, in TLD-list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// The keyword that was scanned
    pub keyword: String,
    /// How many TLDs were checked, regardless of outcome
    pub tlds_checked: usize,
    /// Candidate domains confirmed available, in TLD-list order
    pub available: Vec<String>,
}

impl std::fmt::Display for ScanReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Keyword: {}", self.keyword)?;
        writeln!(f, "TLDs checked: {}", self.tlds_checked)?;
        writeln!(f, "Available domains: {}", self.available.len())?;
        writeln!(f)?;

        if self.available.is_empty() {
            writeln!(f, "No available domains found for this keyword.")
        } else {
            writeln!(f, "Available domains:")?;
            for domain in &self.available {
                writeln!(f, "- {}", domain)?;
            }
            Ok(())
        }
    }
}

/// Configuration options for resolution and scanning.
///
/// Constant tables (the scan TLD list) and timeouts are injected at
/// resolver construction and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Timeout for each DNS lookup
    /// Default: 5 seconds
    pub dns_timeout: Duration,

    /// Timeout for each RDAP request
    /// Default: 5 seconds
    pub rdap_timeout: Duration,

    /// TLD list for bulk keyword scans
    /// If None, the built-in 14-entry list is used
    pub tlds: Option<Vec<String>>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            dns_timeout: Duration::from_secs(5),
            rdap_timeout: Duration::from_secs(5),
            tlds: None,
        }
    }
}

impl CheckConfig {
    /// Set a custom timeout for DNS lookups.
    pub fn with_dns_timeout(mut self, timeout: Duration) -> Self {
        self.dns_timeout = timeout;
        self
    }

    /// Set a custom timeout for RDAP requests.
    pub fn with_rdap_timeout(mut self, timeout: Duration) -> Self {
        self.rdap_timeout = timeout;
        self
    }

    /// Set the TLD list used for bulk keyword scans.
    pub fn with_tlds(mut self, tlds: Vec<String>) -> Self {
        self.tlds = Some(tlds);
        self
    }

    /// The scan TLD list in effect: the configured list, or the built-in one.
    pub fn scan_tlds(&self) -> Vec<String> {
        match &self.tlds {
            Some(tlds) => tlds.clone(),
            None => DEFAULT_SCAN_TLDS.iter().map(|t| t.to_string()).collect(),
        }
    }
}
