//! RDAP protocol support.
//!
//! This module contains the endpoint routing table, the HTTP client that
//! queries registries, and the extractor that shapes registry documents
//! into registration records.

/// HTTP client issuing RDAP queries
pub mod client;

/// Registrar/date extraction from RDAP documents
pub mod extract;

/// TLD-to-endpoint routing
pub mod routes;

// Re-export commonly used types and functions
pub use client::{RdapClient, RdapProbe};
pub use extract::extract_record;
pub use routes::{tld_of, RoutingTable};
