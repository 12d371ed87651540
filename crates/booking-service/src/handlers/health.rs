//! Health check handler.
//!
//! Provides the health check endpoint used for liveness probes and as a
//! smoke test target.

use crate::models::HealthResponse;
use axum::Json;
use tracing::instrument;

/// Health check handler.
///
/// The service keeps all state in process memory and has no external
/// dependencies to probe, so this always reports healthy while the
/// process is serving requests.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy"
/// }
/// ```
#[instrument(skip_all, name = "booking.health.check")]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}
