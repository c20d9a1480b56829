//! HTTP server initialization and runtime setup.
//!
//! Handles store setup, service wiring, worker spawning, and Axum server lifecycle.

use crate::application::refresh_worker::run_refresh_worker;
use crate::application::services::{ReferenceCache, StatusService};
use crate::config::Config;
use crate::domain::ports::{KeyValueStore, SystemClock};
use crate::infrastructure::fetch::HttpFetcher;
use crate::infrastructure::indicator::IndicatorBoard;
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Opens the key/value store: Redis when configured and reachable, memory otherwise.
pub async fn connect_store(redis_url: Option<&str>) -> Arc<dyn KeyValueStore> {
    if let Some(redis_url) = redis_url {
        match RedisStore::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Store: Redis");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using MemoryStore.", e);
            }
        }
    } else {
        tracing::info!("Store: in-memory (REDIS_URL not set)");
    }
    Arc::new(MemoryStore::new())
}

/// Builds the reference cache on top of `store` with the HTTP fetcher.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_cache(config: &Config, store: Arc<dyn KeyValueStore>) -> Result<ReferenceCache> {
    let fetcher = HttpFetcher::new(config.fetch_settings())?;

    Ok(
        ReferenceCache::new(store, Arc::new(fetcher), Arc::new(SystemClock))
            .with_staleness(config.cache_staleness())
            .with_default_source(config.source_url.clone()),
    )
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Key/value store (Redis or MemoryStore fallback)
/// - Reference cache and status service
/// - Background refresh worker
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = connect_store(config.redis_url.as_deref()).await;
    let cache = Arc::new(build_cache(&config, store.clone())?);

    let indicators = Arc::new(IndicatorBoard::new());
    let status_service = Arc::new(StatusService::new(cache, indicators.clone()));

    tokio::spawn(run_refresh_worker(
        status_service.clone(),
        config.refresh_initial_delay(),
        config.refresh_interval(),
    ));
    tracing::info!("Refresh worker started");

    let state = AppState::new(status_service, indicators, store);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
