//! Dashboard HTTP Server Binary
//!
//! This is the main entry point for the launch dashboard.
//! It loads the launch dataset, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin spacex-dash-server
//!
//! # Serve a different dataset on all interfaces
//! HOST=0.0.0.0 DATASET_PATH=/srv/spacex_launch_dash.csv cargo run --bin spacex-dash-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 127.0.0.1)
//! - `PORT`: Server port (default: 8050)
//! - `DATASET_PATH`: Launch CSV (default: data/spacex_launch_dash.csv)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::sync::Arc;

use anyhow::Context;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use spacex_dash::config::DashboardConfig;
use spacex_dash::db;
use spacex_dash::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting SpaceX launch dashboard");

    let config = DashboardConfig::load().context("loading dashboard configuration")?;

    // The dataset is the only thing that can fail; without it there is nothing to serve
    let dataset = db::load(&config.dataset.path)
        .with_context(|| format!("loading launch dataset {}", config.dataset.path.display()))?;
    info!(records = dataset.len(), sites = dataset.sites().len(), "Dataset loaded");

    let state = AppState::new(Arc::new(dataset));
    let app = create_router(state);

    let addr = config.bind_addr()?;
    info!("Dashboard listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
