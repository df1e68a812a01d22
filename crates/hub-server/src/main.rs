//! Hub Server - HTTP API for the Hub content site.
//!
//! Serves members, spokespeople, platforms and articles from the JSON data
//! files, plus a cached featured-articles list.

mod handlers;
mod server;

use anyhow::Result;
use clap::Parser;
use hub_core::{
    ContentStore, FeedAggregator, FeedHighlights, HighlightsSource, HttpFeedFetcher,
    StaticHighlights, TtlCache,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "hub-server")]
#[command(about = "HTTP API for the Hub content site")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, env = "HUB_PORT", default_value = "0")]
    port: u16,

    /// Host to bind to
    #[arg(long, env = "HUB_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Directory holding db.json and artigos.json
    #[arg(long, env = "HUB_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Lifetime of the cached highlights, in seconds
    #[arg(long, default_value = "3600")]
    cache_ttl_secs: u64,

    /// Build highlights from member RSS feeds instead of artigos.json
    #[arg(long)]
    feeds: bool,

    /// Per-source feed timeout, in seconds
    #[arg(long, default_value = "15")]
    feed_timeout_secs: u64,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Print a validation report for the data files and exit
    #[arg(long)]
    validate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the port line
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("Loading content from {}", args.data_dir.display());
    let store = ContentStore::load(&args.data_dir);

    if args.validate {
        let report = store.validation_report();
        println!("{}", report);
        if !report.is_ok() {
            warn!("Validation found problems in {}", args.data_dir.display());
        }
        // Only db.json is required; a broken artigos.json is reported but tolerated.
        if report.db_error {
            std::process::exit(1);
        }
        return Ok(());
    }

    if store.is_degraded() {
        warn!("Content data is degraded; serving fallback collections");
    }

    let feed_timeout = Duration::from_secs(args.feed_timeout_secs);
    let highlights: Arc<dyn HighlightsSource> = if args.feeds {
        let fetcher = HttpFeedFetcher::with_timeout(feed_timeout)?;
        let aggregator =
            FeedAggregator::new(Arc::new(fetcher)).with_fetch_timeout(feed_timeout);
        Arc::new(FeedHighlights::new(aggregator, store.clone()))
    } else {
        Arc::new(StaticHighlights::new(store.clone()))
    };
    info!("Highlights source: {}", highlights.name());

    let cache = Arc::new(TtlCache::with_default_ttl(Duration::from_secs(
        args.cache_ttl_secs,
    )));
    let state = server::AppState::new(store, highlights, cache);

    let addr = server::start_server(state, &args.host, args.port).await?;

    // Intentional stdout for launchers and tests
    println!("SERVER_PORT={}", addr.port());

    info!("Hub server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
