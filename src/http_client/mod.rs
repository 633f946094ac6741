//! HTTP fetching with browser impersonation and a fallback client.

mod user_agent;

pub use user_agent::{BrowserProfile, CHROME_DESKTOP, FIREFOX_DESKTOP};

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::config::REQUEST_TIMEOUT;

/// A fetched page body with its HTTP status.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: String,
    pub status: u16,
}

impl FetchedPage {
    /// Whether the response carried a usable 200 body.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Errors from a fetch where every attempt failed at the transport level.
///
/// Non-200 statuses are not errors; they come back as a normal
/// [`FetchedPage`] for the caller to interpret.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Both the impersonating client and the fallback client failed.
    #[error("primary and fallback requests both failed: {primary}; {fallback}")]
    Exhausted {
        primary: reqwest::Error,
        fallback: reqwest::Error,
    },
    /// Transport unavailable for reasons outside the request itself.
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

/// Pluggable page transport.
///
/// The pipeline only ever fetches through this trait, so tests can swap in
/// a canned transport.
#[async_trait]
pub trait Fetch: Send + Sync {
    /// GET a URL and return its body and status.
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Two-client fetcher: a Chrome-impersonating primary, and a Firefox-profile
/// fallback with a cookie store for anti-bot challenge flows.
///
/// The fallback runs only when the primary fails at the transport level; a
/// non-200 from the primary is returned as-is. There is no retry loop.
pub struct HttpFetcher {
    primary: Client,
    fallback: Client,
}

impl HttpFetcher {
    /// Create a new fetcher with both clients pre-built.
    pub fn new() -> Self {
        let primary = Client::builder()
            .user_agent(CHROME_DESKTOP.user_agent)
            .default_headers(CHROME_DESKTOP.header_map())
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        let fallback = Client::builder()
            .user_agent(FIREFOX_DESKTOP.user_agent)
            .default_headers(FIREFOX_DESKTOP.header_map())
            .cookie_store(true)
            .timeout(REQUEST_TIMEOUT)
            .gzip(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { primary, fallback }
    }

    async fn attempt(client: &Client, url: &str) -> Result<FetchedPage, reqwest::Error> {
        let response = client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(FetchedPage { body, status })
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        match Self::attempt(&self.primary, url).await {
            Ok(page) => Ok(page),
            Err(primary) => {
                debug!(
                    "primary fetch failed for {}, retrying with {} profile: {}",
                    url, FIREFOX_DESKTOP.name, primary
                );
                Self::attempt(&self.fallback, url)
                    .await
                    .map_err(|fallback| FetchError::Exhausted { primary, fallback })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_page_ok() {
        let page = FetchedPage {
            body: "hi".to_string(),
            status: 200,
        };
        assert!(page.is_ok());

        let blocked = FetchedPage {
            body: String::new(),
            status: 403,
        };
        assert!(!blocked.is_ok());
    }

    #[test]
    fn test_fetcher_builds() {
        // Client construction must not panic with the profile header sets.
        let _ = HttpFetcher::new();
    }

    #[test]
    fn test_unavailable_display() {
        let err = FetchError::Unavailable("no route".to_string());
        assert_eq!(err.to_string(), "transport unavailable: no route");
    }

    #[tokio::test]
    async fn test_both_attempts_failing_surface_one_error() {
        // Nothing listens on port 1; the primary fails, the fallback runs
        // and fails too, and the caller sees a single exhausted error.
        let fetcher = HttpFetcher::new();
        let err = fetcher.fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, FetchError::Exhausted { .. }));
    }
}
