// Portfolio API HTTP client
//
// Wraps `reqwest::Client` with base-URL path construction, response-status
// handling, TTL caching of collection resources, and bounded retries for
// reads. Endpoint methods live in `sections`, `projects` and `blog` as
// inherent impls so this module stays focused on transport mechanics.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::cache::ResponseCache;
use crate::error::Error;
use crate::resource::ResourceKey;
use crate::retry::RetryPolicy;
use crate::transport::TransportConfig;

/// Default API origin of a locally running backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// How much of an error body is kept for diagnostics.
const BODY_PREVIEW_LEN: usize = 200;

/// Async client for the portfolio REST API.
///
/// Collection resources (`ResourceKey`) go through the shared
/// [`ResponseCache`]; parameterized lookups always hit the network. Two
/// callers missing the cache at the same time both fetch, and the later
/// response wins the cache slot.
pub struct PortfolioClient {
    http: reqwest::Client,
    base_url: Url,
    cache: Arc<ResponseCache>,
    retry: RetryPolicy,
    timeout: Duration,
}

impl PortfolioClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build a client for `base_url` (e.g. `http://localhost:5000/api`).
    pub fn new(
        base_url: &str,
        transport: &TransportConfig,
        cache: Arc<ResponseCache>,
    ) -> Result<Self, Error> {
        let http = transport.build_client()?;
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            cache,
            retry: RetryPolicy::none(),
            timeout: transport.timeout,
        })
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(
        http: reqwest::Client,
        base_url: &str,
        cache: Arc<ResponseCache>,
    ) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            cache,
            retry: RetryPolicy::none(),
            timeout: crate::transport::DEFAULT_TIMEOUT,
        })
    }

    /// Enable bounded retries for GET requests.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Parse the origin and make sure it can take path segments.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let url = Url::parse(raw.trim())?;
        if url.cannot_be_a_base() {
            return Err(Error::InvalidBaseUrl(raw.to_owned()));
        }
        Ok(url)
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The shared response cache.
    pub fn cache(&self) -> &Arc<ResponseCache> {
        &self.cache
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append percent-encoded path segments to the base URL.
    pub(crate) fn url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// GET a cacheable collection, consulting the cache first.
    pub(crate) async fn get_cached<T: DeserializeOwned>(
        &self,
        key: ResourceKey,
    ) -> Result<T, Error> {
        if let Some(payload) = self.cache.get(key) {
            debug!(%key, "cache hit");
            return decode(&payload);
        }

        debug!(%key, "cache miss");
        let url = self.url(key.segments())?;
        let payload = self.get_json(url).await?;
        let value = decode(&payload)?;
        self.cache.set(key, Arc::new(payload));
        Ok(value)
    }

    /// GET a resource without touching the cache.
    pub(crate) async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, Error> {
        let url = self.url(segments)?;
        let payload = self.get_json(url).await?;
        decode(&payload)
    }

    /// POST a JSON body. Never retried.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, Error> {
        let url = self.url(segments)?;
        debug!("POST {url}");

        let path = url.path().to_owned();
        let resp = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let payload = self.handle_response(resp, &path).await?;
        decode(&payload)
    }

    /// GET with the configured retry policy applied.
    async fn get_json(&self, url: Url) -> Result<serde_json::Value, Error> {
        let mut attempt = 0;
        loop {
            match self.get_once(url.clone()).await {
                Ok(payload) => return Ok(payload),
                Err(e) if self.retry.should_retry(attempt, &e) => {
                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        %url,
                        attempt = attempt + 1,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %e,
                        "retrying request"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_once(&self, url: Url) -> Result<serde_json::Value, Error> {
        debug!("GET {url}");

        let path = url.path().to_owned();
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.handle_response(resp, &path).await
    }

    /// Map a non-2xx status to `Error::Status`, otherwise parse the body
    /// as JSON.
    async fn handle_response(
        &self,
        resp: reqwest::Response,
        path: &str,
    ) -> Result<serde_json::Value, Error> {
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Status {
                status: status.as_u16(),
                path: path.to_owned(),
                body: preview(&body),
            });
        }

        let body = resp.text().await.map_err(|e| self.transport_error(e))?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout_secs: self.timeout.as_secs(),
            }
        } else {
            Error::Transport(err)
        }
    }
}

/// Decode a typed value out of a JSON payload.
fn decode<T: DeserializeOwned>(payload: &serde_json::Value) -> Result<T, Error> {
    T::deserialize(payload).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body: preview(&payload.to_string()),
    })
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_LEN).collect()
}
