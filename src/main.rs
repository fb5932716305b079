//! Gamedash API Server
//!
//! Run with: cargo run --bin gamedash -- --config config.toml
//!
//! # Configuration
//!
//! Without `--config` the first of `$CONFIG_DIR/gamedash/config.toml`,
//! `/etc/gamedash/config.toml` and `./config.toml` is used. Environment
//! variables override file settings:
//! - `GAMEDASH_DATASET`: CSV dataset path (default: video_games.csv)
//! - `GAMEDASH_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `GAMEDASH_API_PORT`: Port to listen on (default: 8273)
//! - `GAMEDASH_LOG_LEVEL`: Log level (default: info)
//! - `GAMEDASH_LOG_FORMAT`: pretty or json
//! - `RUST_LOG`: Full filter directive, wins over the log level

use anyhow::Context;
use clap::Parser;
use gamedash::api::{serve, AppState};
use gamedash::config::{Config, LoggingConfig};
use gamedash::dataset::load_dataset;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "gamedash")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Video game sales dashboard API server")]
struct Args {
    /// Config file (default: search standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset CSV, overrides the configured path
    #[arg(short, long)]
    dataset: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(dataset) = &args.dataset {
        config.dataset.path = dataset.display().to_string();
    }

    init_tracing(&config.logging);

    tracing::info!("Starting Gamedash API server v{}", env!("CARGO_PKG_VERSION"));

    // Dataset is loaded once and never changes
    let path = Path::new(&config.dataset.path);
    let dataset = load_dataset(path)
        .with_context(|| format!("Failed to load dataset from {:?}", path))?;
    tracing::info!("Dataset: {}", dataset.summary());

    let state = AppState::new(Arc::new(dataset), config.api.clone());

    // Run server
    tracing::info!("Starting server on {}", config.api.addr());
    serve(state, &config.api).await?;

    tracing::info!("Gamedash API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| logging.filter_directive().into());

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
