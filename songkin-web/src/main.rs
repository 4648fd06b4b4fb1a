//! songkin-web
//!
//! Web front end for the songkin recommendation engine:
//! - Loads the clustered song catalog from SQLite at startup
//! - Serves the song picker UI and the JSON recommendation API
//! - Keeps serving (with recommendations unavailable) when the catalog
//!   cannot be loaded

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use songkin_web::{build_router, config, db, AppState};

#[derive(Parser, Debug)]
#[command(name = "songkin-web")]
#[command(about = "Song recommendation web service")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8000", env = "SONGKIN_PORT")]
    port: u16,

    /// Path to the song database (overrides env and config file)
    #[arg(short, long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!(
        "songkin-web v{} starting (git: {}, built: {}, profile: {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let db_path = config::resolve_database_path(args.database.as_deref());
    info!("Song database: {}", db_path.display());

    let catalog = match db::load_catalog(&db_path).await {
        Ok(catalog) => {
            info!(
                "✓ Loaded song catalog: {} songs, {} distinct titles, {} clusters",
                catalog.len(),
                catalog.distinct_titles().len(),
                catalog.cluster_count()
            );
            Some(Arc::new(catalog))
        }
        Err(e) => {
            error!("Failed to load song catalog: {:#}", e);
            warn!("Continuing without a catalog; recommendations will be unavailable");
            None
        }
    };

    let state = AppState::new(catalog);
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("✓ songkin-web listening on http://{}", addr);
    info!("  UI:     http://{}/", addr);
    info!("  Health: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("songkin-web shut down cleanly");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
