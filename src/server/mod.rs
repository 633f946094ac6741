//! Web server exposing the tab pipeline.
//!
//! Two endpoints, both JSON:
//! - `GET /api/tabs?artist_name=..&song_name=..` - rendered tabs, at most
//!   six, in search-ranking order
//! - `GET /api/onug?artist_name=..&song_name=..` - whether the tab host has
//!   any chord tab for the song

mod handlers;
mod routes;

pub use routes::create_router;

use std::net::SocketAddr;
use std::sync::Arc;

use crate::config::Settings;
use crate::http_client::{Fetch, HttpFetcher};
use crate::pipeline::TabPipeline;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<TabPipeline>,
}

impl AppState {
    pub fn new(fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            pipeline: Arc::new(TabPipeline::new(fetcher)),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let fetcher: Arc<dyn Fetch> = Arc::new(HttpFetcher::new());
    let state = AppState::new(fetcher);
    let app = create_router(state);

    let addr: SocketAddr = settings.bind.parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
