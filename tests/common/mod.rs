//! Shared test fixtures: a canned transport and synthetic upstream pages.

// Each integration test crate compiles this module separately and uses a
// different subset of it.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use chordscout::http_client::{Fetch, FetchError, FetchedPage};

/// Transport serving canned pages and recording every requested URL.
///
/// URLs without a fixture fail the way a dead network would, which is what
/// the fetch-fatal tests lean on.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, FetchedPage>,
    pub requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, status: u16, body: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            FetchedPage {
                body: body.to_string(),
                status,
            },
        );
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requested(&self, url: &str) -> bool {
        self.requests.lock().unwrap().iter().any(|r| r == url)
    }
}

#[async_trait]
impl Fetch for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.pages.get(url) {
            Some(page) => Ok(page.clone()),
            None => Err(FetchError::Unavailable(format!("no fixture for {}", url))),
        }
    }
}

/// A search-engine results page linking to the given targets.
pub fn results_page(hrefs: &[&str]) -> String {
    let links: Vec<String> = hrefs
        .iter()
        .map(|href| format!("<a class=\"result__a\" href=\"{}\">result</a>", href))
        .collect();
    format!("<html><body>{}</body></html>", links.join("\n"))
}

/// A tab-host page with the given payload embedded in its `.js-store`
/// element. Single-quoted attribute so the JSON's double quotes survive.
pub fn store_page(payload: &serde_json::Value) -> String {
    format!(
        "<html><body><div class=\"js-store\" data-content='{}'></div></body></html>",
        payload
    )
}

/// A tab page whose wiki_tab content is `content`.
pub fn tab_page(content: &str) -> String {
    store_page(&serde_json::json!({
        "store": {"page": {"data": {"tab_view": {"wiki_tab": {"content": content}}}}}
    }))
}

/// The tab host's search page with the given number of results.
pub fn site_search_page(result_count: usize) -> String {
    let results: Vec<serde_json::Value> =
        (0..result_count).map(|id| serde_json::json!({"id": id})).collect();
    store_page(&serde_json::json!({
        "store": {"page": {"data": {"results": results}}}
    }))
}

/// Candidate tab URL for a numbered fixture song.
pub fn tab_url(n: usize) -> String {
    format!(
        "https://tabs.ultimate-guitar.com/tab/fixture/song-{}-chords-{}",
        n, n
    )
}
