//! DNS presence probing.
//!
//! A domain with any authoritative DNS footprint is registered, so the
//! probe only needs a yes/no/unknown answer. It tries an A lookup first
//! and, if that shows nothing, an NS lookup as a second independent
//! signal — some registered domains (parked ones in particular) carry
//! only NS delegation and no address record.

use std::time::Duration;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;
use tracing::debug;

use crate::types::Signal;

/// Default timeout for DNS queries (5 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// DNS probe answering whether a name has any A or NS records.
///
/// Never returns an error: lookup failures fold into [`Signal::Absent`]
/// (authoritative no-records answers) or [`Signal::Indeterminate`]
/// (timeouts and transport failures). One attempt per record type, no
/// retries.
#[derive(Debug, Clone)]
pub struct DnsProbe {
    timeout: Duration,
}

impl Default for DnsProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsProbe {
    /// Creates a new DNS probe with default settings.
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the timeout for DNS queries.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn create_resolver(&self) -> TokioAsyncResolver {
        let mut opts = ResolverOpts::default();
        opts.timeout = self.timeout;
        opts.attempts = 1;
        opts.use_hosts_file = false;

        TokioAsyncResolver::tokio(ResolverConfig::google(), opts)
    }

    /// Probe a name for DNS presence.
    ///
    /// `Present` if either the A or the NS lookup answers, `Absent` only
    /// if both lookups authoritatively report no records, `Indeterminate`
    /// when a deciding lookup could not be completed.
    pub async fn probe(&self, domain: &str) -> Signal {
        let resolver = self.create_resolver();

        let a_signal = match resolver.ipv4_lookup(domain).await {
            Ok(answer) => {
                if answer.iter().next().is_some() {
                    Signal::Present
                } else {
                    Signal::Absent
                }
            }
            Err(e) => {
                debug!(domain, error = %e, "A lookup failed");
                classify(&e)
            }
        };

        if a_signal.is_present() {
            return Signal::Present;
        }

        let ns_signal = match resolver.ns_lookup(domain).await {
            Ok(answer) => {
                if answer.iter().next().is_some() {
                    Signal::Present
                } else {
                    Signal::Absent
                }
            }
            Err(e) => {
                debug!(domain, error = %e, "NS lookup failed");
                classify(&e)
            }
        };

        if ns_signal.is_present() {
            Signal::Present
        } else if a_signal.is_absent() && ns_signal.is_absent() {
            Signal::Absent
        } else {
            Signal::Indeterminate
        }
    }

    /// The plain boolean contract: true iff the probe confirmed presence.
    pub async fn has_presence(&self, domain: &str) -> bool {
        self.probe(domain).await.is_present()
    }
}

/// Map a resolver error to a probe signal.
///
/// NXDOMAIN and empty-answer responses are authoritative absence; anything
/// else (timeout, SERVFAIL, transport) leaves the question open.
fn classify(err: &ResolveError) -> Signal {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { .. } => Signal::Absent,
        _ => Signal::Indeterminate,
    }
}
