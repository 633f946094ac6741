//! End-to-end tab pipeline: resolve, fetch, extract, transform.

use std::sync::Arc;

use futures::future;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::MAX_TAB_RESULTS;
use crate::extract::{Extraction, TabExtractor};
use crate::http_client::Fetch;
use crate::markup;
use crate::search::SearchResolver;

/// One successfully extracted tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabResult {
    /// Rendered HTML fragment of the tab.
    pub chords: String,
    /// Tab page the markup came from.
    pub url: String,
}

/// Orchestrates the full discovery-and-extraction pipeline.
pub struct TabPipeline {
    resolver: SearchResolver,
    extractor: TabExtractor,
}

impl TabPipeline {
    /// Create a pipeline using the given transport.
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            resolver: SearchResolver::new(fetcher.clone()),
            extractor: TabExtractor::new(fetcher),
        }
    }

    /// Fetch and render tabs for a song.
    ///
    /// At most [`MAX_TAB_RESULTS`] candidates are fetched, concurrently;
    /// result order always follows candidate order, which follows search
    /// ranking. Candidates that fail or come back empty are skipped, so the
    /// returned list may be shorter than the candidate list, or empty.
    /// Never an error.
    pub async fn get_tabs(&self, song_name: &str, artist_name: &str) -> Vec<TabResult> {
        let mut candidates = match self.resolver.resolve(song_name, artist_name).await {
            Ok(urls) => urls,
            Err(e) => {
                warn!("candidate resolution failed: {}", e);
                return Vec::new();
            }
        };
        candidates.truncate(MAX_TAB_RESULTS);

        // join_all keeps candidate order regardless of completion order
        let fetched = future::join_all(
            candidates
                .into_iter()
                .map(|url| self.extract_one(url)),
        )
        .await;

        fetched.into_iter().flatten().collect()
    }

    /// Extract and transform a single candidate, isolating its failures.
    async fn extract_one(&self, url: String) -> Option<TabResult> {
        match self.extractor.extract(&url).await {
            Ok(Extraction::Found(raw)) => match markup::transform(&raw) {
                Ok(chords) => Some(TabResult { chords, url }),
                Err(e) => {
                    warn!("malformed tab markup at {}: {}", url, e);
                    None
                }
            },
            Ok(Extraction::NotFound) => {
                debug!("no tab content at {}", url);
                None
            }
            Err(e) => {
                warn!("fetch failed for {}: {}", url, e);
                None
            }
        }
    }

    /// Check whether the tab host has any chord tab for a song.
    pub async fn check_availability(&self, song_name: &str, artist_name: &str) -> bool {
        match self
            .extractor
            .check_availability(song_name, artist_name)
            .await
        {
            Ok(available) => available,
            Err(e) => {
                warn!("availability check failed: {}", e);
                false
            }
        }
    }
}
