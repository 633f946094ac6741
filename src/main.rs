//! chordscout - guitar tab discovery and extraction.
//!
//! A tool for locating guitar-chord tablature for a song/artist pair and
//! rendering the tab host's inline markup as HTML.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if chordscout::cli::is_verbose() {
        "chordscout=info"
    } else {
        "chordscout=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    chordscout::cli::run().await
}
