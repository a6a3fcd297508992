//! Bulk keyword scanning across a fixed TLD list.
//!
//! TLDs are probed strictly in sequence, one at a time, in list order.
//! Each candidate's checks are independent, so nothing prevents
//! parallelizing this loop — the sequential walk is a deliberate trade of
//! latency for simplicity that also avoids burst load on third-party
//! registries.

use std::pin::Pin;

use futures_util::stream::{Stream, StreamExt};
use tracing::debug;

use crate::error::DomainScoutError;
use crate::resolver::DomainResolver;
use crate::types::ScanReport;
use crate::utils::validate_keyword;

/// Per-TLD outcome yielded while a scan is in progress.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// The candidate domain that was probed (keyword.tld)
    pub domain: String,
    /// True only when both DNS and RDAP positively confirmed absence
    pub available: bool,
}

impl DomainResolver {
    /// Scan one keyword across the configured TLD list.
    ///
    /// Per TLD: DNS probe first; a domain with DNS presence is known
    /// registered and is never RDAP-checked. Otherwise RDAP confirms, and
    /// the candidate is recorded available only when **both** probes show
    /// absence. The report preserves TLD-list order and counts every TLD
    /// checked regardless of outcome.
    pub async fn scan(&self, keyword: &str) -> Result<ScanReport, DomainScoutError> {
        let tlds_checked = self.config().scan_tlds().len();
        let mut stream = self.scan_stream(keyword)?;

        let mut available = Vec::new();
        while let Some(outcome) = stream.next().await {
            if outcome.available {
                available.push(outcome.domain);
            }
        }

        Ok(ScanReport {
            keyword: keyword.trim().to_string(),
            tlds_checked,
            available,
        })
    }

    /// Scan as a stream of per-TLD outcomes.
    ///
    /// Yields one [`ScanOutcome`] per TLD as it completes, still one TLD
    /// at a time in list order — useful for progress display without
    /// changing the scan's semantics.
    pub fn scan_stream(
        &self,
        keyword: &str,
    ) -> Result<Pin<Box<dyn Stream<Item = ScanOutcome> + Send + '_>>, DomainScoutError> {
        validate_keyword(keyword)?;
        let keyword = keyword.trim().to_string();
        let tlds = self.config().scan_tlds();

        let stream = futures_util::stream::iter(tlds).then(move |tld| {
            let domain = format!("{}.{}", keyword, tld);
            async move { self.probe_candidate(domain).await }
        });

        Ok(Box::pin(stream))
    }

    /// Scan one keyword and render the report text for the caller.
    pub async fn scan_keyword(&self, keyword: &str) -> Result<String, DomainScoutError> {
        Ok(self.scan(keyword).await?.to_string())
    }

    async fn probe_candidate(&self, domain: String) -> ScanOutcome {
        let dns = self.dns.probe(&domain).await;

        if dns.is_present() {
            // Known registered; no need to confirm with the registry.
            debug!(%domain, "DNS present, skipping RDAP confirmation");
            return ScanOutcome {
                domain,
                available: false,
            };
        }

        let rdap = self.rdap.fetch(&domain).await;
        let available = dns.is_absent() && rdap.is_not_found();
        debug!(%domain, available, "scan candidate probed");

        ScanOutcome { domain, available }
    }
}
