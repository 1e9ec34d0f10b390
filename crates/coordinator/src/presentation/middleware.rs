//! Request Logging Middleware
//!
//! Wraps every RPC with a timing/outcome log line. Purely observational:
//! handlers and the domain never depend on this layer being present.

use axum::body::Body;
use axum::extract::ConnectInfo;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::client::{extract_client_ip, peer_label};
use std::net::SocketAddr;
use std::time::Instant;

/// Log method, path, peer, status and latency for each request
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let direct_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip());
    let peer = peer_label(extract_client_ip(req.headers(), direct_ip));

    tracing::info!(%method, path = %path, peer = %peer, "RPC in");

    let start = Instant::now();
    let response = next.run(req).await;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(
        %method,
        path = %path,
        peer = %peer,
        status = %response.status(),
        elapsed_ms = format!("{elapsed_ms:.2}"),
        "RPC out"
    );

    response
}
