//! # Domain Scout Library
//!
//! A library for resolving domain availability from two independent sources
//! of evidence: live DNS presence and RDAP registration records.
//!
//! Each check probes DNS (A then NS records) and the TLD's RDAP endpoint,
//! then reconciles the two signals into a single verdict. A domain is only
//! reported as available when DNS shows no records *and* the registry
//! affirmatively answers "not found" - transient failures never masquerade
//! as availability.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domain_scout_lib::DomainResolver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = DomainResolver::new()?;
//!     let verdict = resolver.resolve("example.com").await?;
//!
//!     println!("{} is {}", verdict.domain, verdict.status);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **DNS Presence Probing**: A-record lookup with NS fallback
//! - **RDAP Protocol**: Modern registration data access with per-TLD routing
//! - **Evidence Reconciliation**: Conservative tri-state signal handling
//! - **Bulk Keyword Scans**: Check a keyword across a configurable TLD list
//! - **Configurable**: Timeouts and TLD lists via API or TOML config files

// Re-export main public API types and functions
// This makes them available as domain_scout_lib::TypeName
pub use config::{parse_timeout, ConfigManager, DefaultsConfig, FileConfig};
pub use dns::DnsProbe;
pub use error::DomainScoutError;
pub use rdap::{extract_record, tld_of, RdapClient, RdapProbe, RoutingTable};
pub use resolver::DomainResolver;
pub use scanner::ScanOutcome;
pub use types::{
    CheckConfig, DomainStatus, DomainVerdict, Evidence, RdapRecord, ScanReport, Signal,
    DEFAULT_SCAN_TLDS, UNKNOWN,
};
pub use utils::{validate_domain, validate_keyword};

// Internal modules - these are not part of the public API
mod config;
mod dns;
mod error;
mod rdap;
mod resolver;
mod scanner;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, DomainScoutError>;

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
