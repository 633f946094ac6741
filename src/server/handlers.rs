//! HTTP request handlers for the web server.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::pipeline::TabResult;

/// Query parameters shared by both endpoints.
///
/// Both fields are required in practice; a request missing either gets an
/// empty answer rather than an error.
#[derive(Debug, Deserialize)]
pub struct SongQuery {
    pub artist_name: Option<String>,
    pub song_name: Option<String>,
}

/// Fetch and render tabs for a song.
pub async fn get_tabs(
    State(state): State<AppState>,
    Query(params): Query<SongQuery>,
) -> Json<Vec<TabResult>> {
    let (artist_name, song_name) = match (params.artist_name, params.song_name) {
        (Some(artist), Some(song)) => (artist, song),
        _ => return Json(Vec::new()),
    };

    Json(state.pipeline.get_tabs(&song_name, &artist_name).await)
}

/// Check whether the tab host has any chord tab for a song.
pub async fn check_tabs(
    State(state): State<AppState>,
    Query(params): Query<SongQuery>,
) -> Json<bool> {
    let (artist_name, song_name) = match (params.artist_name, params.song_name) {
        (Some(artist), Some(song)) => (artist, song),
        _ => return Json(false),
    };

    Json(
        state
            .pipeline
            .check_availability(&song_name, &artist_name)
            .await,
    )
}
