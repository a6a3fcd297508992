//! Domain availability resolution.
//!
//! This module provides the primary [`DomainResolver`] struct that
//! orchestrates the DNS presence probe, the RDAP client, and the record
//! extractor into a single verdict per domain.
//!
//! The checking process for one domain:
//! 1. Probe DNS (A, then NS) for presence.
//! 2. Fetch the RDAP document — even when DNS shows nothing, since
//!    domains without delegation can still be registered.
//! 3. Reconcile the two signals into a [`DomainVerdict`].
//!
//! Resolution is fail-soft: transport failures on either side degrade to
//! weaker signals, they never become errors. The only error a caller can
//! see is invalid input.

use tracing::debug;

use crate::dns::DnsProbe;
use crate::error::DomainScoutError;
use crate::rdap::{extract_record, RdapClient, RdapProbe};
use crate::types::{CheckConfig, DomainStatus, DomainVerdict, Evidence, Signal};
use crate::utils::validate_domain;

/// Main resolver coordinating DNS and RDAP signals.
///
/// # Example
///
/// ```rust,no_run
/// use domain_scout_lib::DomainResolver;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let resolver = DomainResolver::new()?;
///     let verdict = resolver.resolve("example.com").await?;
///     println!("{}", verdict);
///     Ok(())
/// }
/// ```
pub struct DomainResolver {
    /// Configuration settings for this resolver instance
    config: CheckConfig,
    /// DNS presence probe
    pub(crate) dns: DnsProbe,
    /// RDAP client for registry queries
    pub(crate) rdap: RdapClient,
}

impl DomainResolver {
    /// Create a new resolver with default configuration.
    pub fn new() -> Result<Self, DomainScoutError> {
        Self::with_config(CheckConfig::default())
    }

    /// Create a new resolver with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use domain_scout_lib::{CheckConfig, DomainResolver};
    /// use std::time::Duration;
    ///
    /// let config = CheckConfig::default()
    ///     .with_rdap_timeout(Duration::from_secs(10))
    ///     .with_tlds(vec!["com".to_string(), "io".to_string()]);
    /// let resolver = DomainResolver::with_config(config).unwrap();
    /// ```
    pub fn with_config(config: CheckConfig) -> Result<Self, DomainScoutError> {
        let dns = DnsProbe::new().with_timeout(config.dns_timeout);
        let rdap = RdapClient::with_timeout(config.rdap_timeout)?;

        Ok(Self { config, dns, rdap })
    }

    /// Get the current configuration for this resolver.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Resolve one domain to a verdict.
    ///
    /// # Errors
    ///
    /// Returns [`DomainScoutError::InvalidInput`] for empty or clearly
    /// malformed input. Network conditions never produce an error; they
    /// are reconciled into the verdict's evidence.
    pub async fn resolve(&self, domain: &str) -> Result<DomainVerdict, DomainScoutError> {
        validate_domain(domain)?;
        let domain = domain.trim();

        let dns = self.dns.probe(domain).await;
        debug!(domain, ?dns, "DNS presence probe");

        let rdap = self.rdap.fetch(domain).await;

        let verdict = reconcile(domain, dns, rdap);
        debug!(domain, status = %verdict.status, "verdict");
        Ok(verdict)
    }

    /// Resolve one domain and render the report text for the caller.
    pub async fn check_domain(&self, domain: &str) -> Result<String, DomainScoutError> {
        Ok(self.resolve(domain).await?.to_string())
    }
}

/// Reconcile the two probe signals into a verdict.
///
/// The policy, in order:
/// 1. DNS present + RDAP document → Registered with extracted fields.
/// 2. DNS present, no RDAP data → Registered, partial-data note.
/// 3. DNS absent but RDAP document → Registered (registry-only note);
///    covers registered domains without delegation.
/// 4. Both confirmed absent → Available.
/// 5. Anything else → Available, but flagged unconfirmed — an outage is
///    never mistaken for positive evidence of availability.
fn reconcile(domain: &str, dns: Signal, rdap: RdapProbe) -> DomainVerdict {
    let (status, record, evidence) = match (dns, rdap) {
        (Signal::Present, RdapProbe::Found(doc)) => (
            DomainStatus::Registered,
            Some(extract_record(&doc)),
            Evidence::DnsAndRdap,
        ),
        (Signal::Present, _) => (DomainStatus::Registered, None, Evidence::DnsOnly),
        (_, RdapProbe::Found(_)) => (DomainStatus::Registered, None, Evidence::RdapOnly),
        (Signal::Absent, RdapProbe::NotFound) => {
            (DomainStatus::Available, None, Evidence::NoEvidence)
        }
        _ => (DomainStatus::Available, None, Evidence::Unconfirmed),
    };

    DomainVerdict {
        domain: domain.to_string(),
        status,
        record,
        evidence,
    }
}
