//! chordscout - guitar tab discovery and extraction.
//!
//! Core library exposing the discovery pipeline: search-engine candidate
//! resolution, anti-bot-resistant page fetching, and conversion of the tab
//! host's inline markup into renderable HTML.

pub mod cli;
pub mod config;
pub mod extract;
pub mod http_client;
pub mod markup;
pub mod pipeline;
pub mod search;
pub mod server;
