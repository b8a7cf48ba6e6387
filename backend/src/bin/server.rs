//! Lunar HTTP Server Binary
//!
//! This is the main entry point for the lunar REST API server.
//! It loads configuration, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin lunar-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (overrides `lunar.toml`, default: 0.0.0.0)
//! - `PORT`: Server port (overrides `lunar.toml`, default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use lunar_rust::config::AppConfig;
use lunar_rust::http::{create_router, AppState};
use lunar_rust::services::compute_phase;

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

    info!("Starting lunar HTTP server");

    let config = AppConfig::load()?;
    let addr = config.bind_address()?;

    let state = AppState::with_system_clock(config);
    let today = compute_phase(state.clock.now());
    info!(
        "Current phase: {} ({}% illuminated, next full moon {})",
        today.phase_name, today.illumination, today.next_full_moon
    );

    let app = create_router(state);

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
