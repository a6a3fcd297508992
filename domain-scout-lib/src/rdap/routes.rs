//! TLD-to-RDAP-endpoint routing.
//!
//! A small hand-maintained override table with a generic fallback, rather
//! than a live fetch of the IANA bootstrap registry. Extending coverage is
//! a data change to [`ROUTE_OVERRIDES`], not a logic change.

use std::collections::HashMap;

/// Registry-specific RDAP bases, keyed by TLD. The query domain is
/// appended verbatim to the base URL.
const ROUTE_OVERRIDES: &[(&str, &str)] = &[
    ("ch", "https://rdap.nic.ch/domain/"),
    ("li", "https://rdap.nic.li/domain/"),
    ("com", "https://rdap.verisign.com/com/v1/domain/"),
    ("net", "https://rdap.verisign.com/net/v1/domain/"),
    ("org", "https://rdap.publicinterestregistry.org/rdap/domain/"),
];

/// Generic bootstrap redirector used for every TLD without an override.
const FALLBACK_BASE: &str = "https://rdap.org/domain/";

/// Immutable TLD-to-endpoint routing table.
///
/// Built once at startup; routing is a pure, total function — every input
/// maps to exactly one URL, including dotless input (empty TLD falls
/// through to the generic redirector).
#[derive(Debug, Clone)]
pub struct RoutingTable {
    overrides: HashMap<&'static str, &'static str>,
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingTable {
    pub fn new() -> Self {
        Self {
            overrides: ROUTE_OVERRIDES.iter().copied().collect(),
        }
    }

    /// Build the full RDAP query URL for a domain.
    pub fn route_for(&self, domain: &str) -> String {
        let tld = tld_of(domain);
        let base = self
            .overrides
            .get(tld.as_str())
            .copied()
            .unwrap_or(FALLBACK_BASE);
        format!("{}{}", base, domain)
    }

    /// TLDs with a registry-specific override, for diagnostics.
    pub fn override_tlds(&self) -> Vec<&'static str> {
        let mut tlds: Vec<&'static str> = self.overrides.keys().copied().collect();
        tlds.sort_unstable();
        tlds
    }
}

/// The substring after the last dot, lowercased. Dotless input yields an
/// empty string, which no override matches.
pub fn tld_of(domain: &str) -> String {
    match domain.rsplit_once('.') {
        Some((_, tld)) => tld.to_lowercase(),
        None => String::new(),
    }
}
