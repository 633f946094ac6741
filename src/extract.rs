//! Extraction of raw tab markup from the tab host's pages.
//!
//! Tab pages embed their whole application state as a JSON blob in the
//! `data-content` attribute of a single `.js-store` element. The raw tab
//! text lives at a fixed path inside that blob; the host's own search page
//! carries its result list at a sibling path.

use std::sync::Arc;

use scraper::{Html, Selector};
use serde_json::Value;
use tracing::debug;

use crate::http_client::{Fetch, FetchError};
use crate::search::query;

/// Selector for the element carrying the embedded application state.
const APP_STORE_SELECTOR: &str = ".js-store";

/// Attribute holding the JSON-encoded state.
const APP_STORE_ATTR: &str = "data-content";

/// JSON pointer to the raw tab markup on a tab page.
const TAB_CONTENT_PATH: &str = "/store/page/data/tab_view/wiki_tab/content";

/// JSON pointer to the result list on the host's search page.
const SEARCH_RESULTS_PATH: &str = "/store/page/data/results";

/// Outcome of extracting one candidate page.
///
/// `NotFound` covers every recoverable-empty case: non-200 fetch, missing
/// store element or attribute, unparsable JSON, missing or empty content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    Found(String),
    NotFound,
}

/// Fetches candidate tab pages and pulls out their raw markup.
pub struct TabExtractor {
    fetcher: Arc<dyn Fetch>,
}

impl TabExtractor {
    /// Create an extractor using the given transport.
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self { fetcher }
    }

    /// Extract the raw tab markup from a single candidate page.
    ///
    /// Only transport failure is an error; every malformed or empty page
    /// maps to `Extraction::NotFound`.
    pub async fn extract(&self, tab_page_url: &str) -> Result<Extraction, FetchError> {
        let page = self.fetcher.fetch(tab_page_url).await?;
        if !page.is_ok() {
            debug!("tab page {} returned {}", tab_page_url, page.status);
            return Ok(Extraction::NotFound);
        }

        match raw_tab_from_page(&page.body) {
            Some(content) => Ok(Extraction::Found(content)),
            None => Ok(Extraction::NotFound),
        }
    }

    /// Check whether the tab host has any chord tab for a song.
    ///
    /// Queries the host's own search page and inspects its embedded result
    /// list. Non-200 or a missing/empty list both mean "not available".
    pub async fn check_availability(
        &self,
        song_name: &str,
        artist_name: &str,
    ) -> Result<bool, FetchError> {
        let url = query::site_search_url(song_name, artist_name);
        debug!("availability check via {}", url);

        let page = self.fetcher.fetch(&url).await?;
        if !page.is_ok() {
            debug!("site search returned {}", page.status);
            return Ok(false);
        }

        Ok(search_has_results(&page.body))
    }
}

/// Parse the embedded application-state JSON out of a page, if present.
fn app_store_json(html: &str) -> Option<Value> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(APP_STORE_SELECTOR).ok()?;
    let element = document.select(&selector).next()?;
    let data = element.value().attr(APP_STORE_ATTR)?;
    serde_json::from_str(data).ok()
}

/// Pull the raw tab markup out of a tab page, if the page carries one.
pub fn raw_tab_from_page(html: &str) -> Option<String> {
    let store = app_store_json(html)?;
    let content = store.pointer(TAB_CONTENT_PATH)?.as_str()?;
    if content.is_empty() {
        return None;
    }
    Some(content.to_string())
}

/// Whether a host search page carries a non-empty result list.
pub fn search_has_results(html: &str) -> bool {
    app_store_json(html)
        .and_then(|store| {
            store
                .pointer(SEARCH_RESULTS_PATH)
                .and_then(Value::as_array)
                .map(|results| !results.is_empty())
        })
        .unwrap_or(false)
}
