//! Client identification utilities
//!
//! Identifies the request peer for log lines. Behind a reverse proxy the
//! connection address is the proxy, so X-Forwarded-For wins when present.

use axum::http::HeaderMap;
use std::net::IpAddr;

/// Extract the client IP address from request headers
///
/// Checks the X-Forwarded-For header first (first entry in the list),
/// then falls back to the direct connection IP.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    if let Some(xff) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first_ip) = xff.split(',').next() {
            if let Ok(ip) = first_ip.trim().parse::<IpAddr>() {
                return Some(ip);
            }
        }
    }
    direct_ip
}

/// Render a peer for log output; "unknown" when no address is available
pub fn peer_label(ip: Option<IpAddr>) -> String {
    match ip {
        Some(ip) => ip.to_string(),
        None => "unknown".to_string(),
    }
}
