//! Configuration for chordscout.
//!
//! The pipeline itself runs on compile-time constants; only the server bind
//! address is runtime-configurable.

use std::time::Duration;

/// Per-request timeout for both fetch attempts.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Maximum number of candidate tab pages fetched per query.
///
/// Bounds worst-case latency and the cost of fallback fetch chains.
pub const MAX_TAB_RESULTS: usize = 6;

/// Default bind address for the API server.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Address the API server listens on (host:port).
    pub bind: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
        }
    }
}
