//! API endpoint tests over a canned transport.

mod common;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use chordscout::pipeline::TabResult;
use chordscout::search::query;
use chordscout::server::{create_router, AppState};

use common::{results_page, site_search_page, tab_page, tab_url, FakeFetcher};

fn router_with(fake: FakeFetcher) -> axum::Router {
    create_router(AppState::new(Arc::new(fake)))
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn tabs_endpoint_returns_rendered_tabs() {
    let search_url = query::search_results_url(&query::tab_search_query("Yesterday", "Beatles"));
    let fake = FakeFetcher::new()
        .with_page(&search_url, 200, &results_page(&[&tab_url(1)]))
        .with_page(&tab_url(1), 200, &tab_page("[ch]G[/ch] hello"));

    let response = router_with(fake)
        .oneshot(
            Request::builder()
                .uri("/api/tabs?artist_name=Beatles&song_name=Yesterday")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let results: Vec<TabResult> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, tab_url(1));
    assert!(results[0].chords.contains("data-name=\"G\""));
}

#[tokio::test]
async fn tabs_endpoint_missing_parameter_is_empty_list() {
    let response = router_with(FakeFetcher::new())
        .oneshot(
            Request::builder()
                .uri("/api/tabs?artist_name=Beatles")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"[]");
}

#[tokio::test]
async fn onug_endpoint_reports_availability() {
    let url = query::site_search_url("Yesterday", "Beatles");
    let fake = FakeFetcher::new().with_page(&url, 200, &site_search_page(3));

    let response = router_with(fake)
        .oneshot(
            Request::builder()
                .uri("/api/onug?artist_name=Beatles&song_name=Yesterday")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"true");
}

#[tokio::test]
async fn onug_endpoint_false_when_no_results() {
    let url = query::site_search_url("Nonexistent", "Nobody");
    let fake = FakeFetcher::new().with_page(&url, 200, &site_search_page(0));

    let response = router_with(fake)
        .oneshot(
            Request::builder()
                .uri("/api/onug?artist_name=Nobody&song_name=Nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(body_bytes(response).await, b"false");
}

#[tokio::test]
async fn onug_endpoint_missing_parameter_is_false() {
    let response = router_with(FakeFetcher::new())
        .oneshot(
            Request::builder()
                .uri("/api/onug?song_name=Yesterday")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(body_bytes(response).await, b"false");
}
