//! RDAP (Registration Data Access Protocol) client.
//!
//! One HTTP GET per query, fixed short timeout, no retries. The client
//! never errors out of a fetch: every failure mode collapses into a
//! [`RdapProbe`] variant so the resolver's reconciliation policy stays
//! visible at the call site.

use std::time::Duration;

use reqwest::{header, StatusCode};
use tracing::{debug, warn};

use crate::error::DomainScoutError;
use crate::rdap::routes::RoutingTable;

/// Default timeout for RDAP requests (5 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Bot-identifying user agent sent to registries.
const USER_AGENT: &str = "DomainScoutBot/1.0";

/// Outcome of one RDAP fetch.
#[derive(Debug, Clone)]
pub enum RdapProbe {
    /// HTTP 200 with a parseable JSON body — the domain has a record.
    Found(serde_json::Value),
    /// HTTP 404 — the registry positively reports no record.
    NotFound,
    /// Anything else: network error, timeout, 429/5xx, malformed body.
    /// A registry outage must not read as availability.
    Indeterminate,
}

impl RdapProbe {
    pub fn is_found(&self) -> bool {
        matches!(self, RdapProbe::Found(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RdapProbe::NotFound)
    }
}

/// RDAP client issuing registry queries through the routing table.
#[derive(Debug, Clone)]
pub struct RdapClient {
    /// HTTP client for making RDAP requests
    http: reqwest::Client,
    /// Immutable TLD-to-endpoint routing
    routes: RoutingTable,
}

impl RdapClient {
    /// Create a new RDAP client with the default timeout.
    pub fn new() -> Result<Self, DomainScoutError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a new RDAP client with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, DomainScoutError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                DomainScoutError::network_with_source(
                    "Failed to create RDAP HTTP client",
                    e.to_string(),
                )
            })?;

        Ok(Self {
            http,
            routes: RoutingTable::new(),
        })
    }

    /// The routing table this client queries through.
    pub fn routes(&self) -> &RoutingTable {
        &self.routes
    }

    /// Fetch the RDAP document for a domain.
    ///
    /// Exactly one GET to the routed endpoint with
    /// `Accept: application/rdap+json`; no retries, no redirect handling
    /// beyond the transport default.
    pub async fn fetch(&self, domain: &str) -> RdapProbe {
        let url = self.routes.route_for(domain);
        debug!(domain, %url, "RDAP fetch");

        let response = match self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/rdap+json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                debug!(domain, error = %e, "RDAP request failed");
                return RdapProbe::Indeterminate;
            }
        };

        match response.status() {
            StatusCode::OK => match response.json::<serde_json::Value>().await {
                Ok(doc) => RdapProbe::Found(doc),
                Err(e) => {
                    warn!(domain, error = %e, "RDAP body was not valid JSON");
                    RdapProbe::Indeterminate
                }
            },
            StatusCode::NOT_FOUND => RdapProbe::NotFound,
            status => {
                // 429 and 5xx are indistinguishable outages from our side;
                // neither confirms absence.
                debug!(domain, %status, "RDAP registry returned non-200 status");
                RdapProbe::Indeterminate
            }
        }
    }
}
