// ── Runtime portfolio configuration ──
//
// Describes *where* the backend lives and how the client should behave.
// Never touches disk: the CLI builds a `PortfolioConfig` from its config
// file and flags and hands it in.

use std::time::Duration;

use folio_api::{DEFAULT_TTL, RetryPolicy, transport::DEFAULT_TIMEOUT};
use url::Url;

use crate::blog::DEFAULT_PER_PAGE;
use crate::filter::SearchPolicy;

/// Configuration for talking to a single portfolio backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioConfig {
    /// API origin including any path prefix (e.g. `http://localhost:5000/api`).
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// How long collection responses stay cached.
    pub cache_ttl: Duration,
    /// Retry behaviour for reads.
    pub retry: RetryPolicy,
    /// How search combines with the other project filters.
    pub search_policy: SearchPolicy,
    /// Blog posts per listing page.
    pub per_page: usize,
}

impl PortfolioConfig {
    /// Defaults for everything except the origin.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
            cache_ttl: DEFAULT_TTL,
            retry: RetryPolicy::none(),
            search_policy: SearchPolicy::default(),
            per_page: DEFAULT_PER_PAGE,
        }
    }
}
