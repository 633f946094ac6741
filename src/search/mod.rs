//! Candidate tab-page resolution via a general-purpose search engine.
//!
//! The tab host's own search sits behind anti-bot defenses, so candidates
//! are resolved from a DuckDuckGo HTML results page instead: every href is
//! extracted, redirect wrappers are unwrapped, and the survivors are
//! filtered down to canonical chord-tab URLs.

pub mod query;

use std::sync::{Arc, LazyLock};

use regex::Regex;
use tracing::{debug, warn};

use crate::http_client::{Fetch, FetchError};

/// Canonical prefix of a real tab page on the tab host.
pub const TAB_URL_PREFIX: &str = "https://tabs.ultimate-guitar.com/tab/";

/// Distinguishes chord tabs from "official", "guitar pro" and other variants.
pub const CHORD_VARIANT_MARKER: &str = "-chords-";

/// DuckDuckGo's redirect-wrapper query parameter holding the destination URL.
const REDIRECT_PARAM: &str = "uddg=";

static HREF_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="([^"]+)""#).unwrap());

/// Resolves candidate tab-page URLs for a song/artist pair.
pub struct SearchResolver {
    fetcher: Arc<dyn Fetch>,
}

impl SearchResolver {
    /// Create a resolver using the given transport.
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self { fetcher }
    }

    /// Resolve candidate URLs in search-ranking order.
    ///
    /// A non-200 from the search engine is a recoverable "no results"
    /// outcome and yields an empty list; only transport failure is an error.
    pub async fn resolve(
        &self,
        song_name: &str,
        artist_name: &str,
    ) -> Result<Vec<String>, FetchError> {
        let search_query = query::tab_search_query(song_name, artist_name);
        let url = query::search_results_url(&search_query);
        debug!("resolving candidates via {}", url);

        let page = self.fetcher.fetch(&url).await?;
        if !page.is_ok() {
            warn!(
                "search engine returned {} for query {:?}",
                page.status, search_query
            );
            return Ok(Vec::new());
        }

        let candidates = candidates_from_html(&page.body);
        debug!("resolved {} candidate tab pages", candidates.len());
        Ok(candidates)
    }
}

/// Extract, unwrap, filter and deduplicate candidate URLs from a results page.
///
/// The engine's markup is treated as text; hrefs are pulled with a regex
/// rather than a DOM parse. First-seen order is kept because it reflects
/// search ranking.
pub fn candidates_from_html(html: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    for caps in HREF_PATTERN.captures_iter(html) {
        let target = unwrap_redirect(&caps[1]);

        if target.starts_with(TAB_URL_PREFIX)
            && target.contains(CHORD_VARIANT_MARKER)
            && !candidates.contains(&target)
        {
            candidates.push(target);
        }
    }

    candidates
}

/// Unwrap DuckDuckGo's redirect wrapper, if present.
///
/// Wrapped hrefs look like `//duckduckgo.com/l/?uddg=<encoded>&rut=...`;
/// the parameter value is the percent-encoded destination URL.
fn unwrap_redirect(href: &str) -> String {
    match href.find(REDIRECT_PARAM) {
        Some(pos) => {
            let encoded = &href[pos + REDIRECT_PARAM.len()..];
            let end = encoded.find('&').unwrap_or(encoded.len());
            match urlencoding::decode(&encoded[..end]) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => href.to_string(),
            }
        }
        None => href.to_string(),
    }
}
