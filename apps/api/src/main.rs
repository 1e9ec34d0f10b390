//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level faults are handled
//! inside the coordinator crate.

use anyhow::Context;
use axum::Router;
use coordinator::{CoordinatorConfig, coordinator_router};
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,coordinator=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Bounded dispatch: a fixed worker pool rather than one task thread
    // per connection
    let worker_threads: usize = env_or("WORKER_THREADS", 10)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    tracing::info!(worker_threads, "Runtime started");

    runtime.block_on(serve())
}

async fn serve() -> anyhow::Result<()> {
    let difficulty_min: i64 = env_or("DIFFICULTY_MIN", 1)?;
    let difficulty_max: i64 = env_or("DIFFICULTY_MAX", 7)?;
    let config = CoordinatorConfig::with_difficulty_bounds(difficulty_min, difficulty_max);

    let addr: SocketAddr = env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()
        .context("LISTEN_ADDR is not a valid socket address")?;

    // Build router
    let app = Router::new()
        .merge(coordinator_router(config))
        .layer(TraceLayer::new_for_http());

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Read an environment variable, falling back to `default` when unset
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{key} is not a valid value: {raw}")),
        Err(_) => Ok(default),
    }
}
