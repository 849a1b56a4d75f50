//! Health check endpoint for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks, no auth)

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Used to check if the server is accepting connections.
/// Does NOT touch the product store.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
