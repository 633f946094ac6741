//! CLI commands implementation.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use console::style;

use crate::config::{Settings, DEFAULT_BIND};
use crate::http_client::{Fetch, HttpFetcher};
use crate::pipeline::TabPipeline;
use crate::search::SearchResolver;

#[derive(Parser)]
#[command(name = "chordscout")]
#[command(about = "Guitar tab discovery and extraction")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve candidate tab-page URLs for a song (does not fetch tabs)
    Search {
        /// Artist name
        artist: String,
        /// Song title
        song: String,
    },

    /// Fetch and render tabs for a song
    Tabs {
        /// Artist name
        artist: String,
        /// Song title
        song: String,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether the tab host has any chord tab for a song
    Check {
        /// Artist name
        artist: String,
        /// Song title
        song: String,
    },

    /// Start the HTTP API server
    Serve {
        /// Bind address (host:port)
        #[arg(long, env = "CHORDSCOUT_BIND", default_value = DEFAULT_BIND)]
        bind: String,
    },
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { artist, song } => cmd_search(&artist, &song).await,
        Commands::Tabs { artist, song, json } => cmd_tabs(&artist, &song, json).await,
        Commands::Check { artist, song } => cmd_check(&artist, &song).await,
        Commands::Serve { bind } => cmd_serve(bind).await,
    }
}

fn default_fetcher() -> Arc<dyn Fetch> {
    Arc::new(HttpFetcher::new())
}

/// Resolve and print candidate tab-page URLs.
async fn cmd_search(artist: &str, song: &str) -> anyhow::Result<()> {
    let resolver = SearchResolver::new(default_fetcher());
    let candidates = resolver.resolve(song, artist).await?;

    if candidates.is_empty() {
        println!("{} No candidate tab pages found", style("!").yellow());
        return Ok(());
    }

    for url in &candidates {
        println!("{}", url);
    }
    println!(
        "{} {} candidate(s) for {} - {}",
        style("✓").green(),
        candidates.len(),
        style(artist).bold(),
        style(song).bold()
    );
    Ok(())
}

/// Run the full pipeline and print the rendered tabs.
async fn cmd_tabs(artist: &str, song: &str, json: bool) -> anyhow::Result<()> {
    let pipeline = TabPipeline::new(default_fetcher());
    let results = pipeline.get_tabs(song, artist).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{} No tabs found", style("!").yellow());
        return Ok(());
    }

    for result in &results {
        println!("{}", style(&result.url).cyan().bold());
        println!("{}\n", result.chords);
    }
    println!("{} {} tab(s) extracted", style("✓").green(), results.len());
    Ok(())
}

/// Check tab availability on the host's own search.
async fn cmd_check(artist: &str, song: &str) -> anyhow::Result<()> {
    let pipeline = TabPipeline::new(default_fetcher());

    if pipeline.check_availability(song, artist).await {
        println!(
            "{} Tabs available for {} - {}",
            style("✓").green(),
            style(artist).bold(),
            style(song).bold()
        );
    } else {
        println!(
            "{} No tabs for {} - {}",
            style("✗").red(),
            style(artist).bold(),
            style(song).bold()
        );
    }
    Ok(())
}

/// Start the API server.
async fn cmd_serve(bind: String) -> anyhow::Result<()> {
    let settings = Settings { bind };

    println!(
        "{} Starting chordscout server at http://{}",
        style("→").cyan(),
        settings.bind
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(&settings).await
}
