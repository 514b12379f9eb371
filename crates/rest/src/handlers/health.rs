//! Health check endpoint handlers.
//!
//! Simple probes for monitoring systems and load balancers.

use advisor_persistence::AdvisorRepository;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for the health check endpoint.
///
/// # HTTP Request
///
/// `GET [base]/health`
pub async fn health_handler<R>(State(state): State<AppState<R>>) -> RestResult<Response>
where
    R: AdvisorRepository + 'static,
{
    debug!("Processing health check request");

    let health_response = serde_json::json!({
        "status": "healthy",
        "backend": state.repository().backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    Ok((StatusCode::OK, Json(health_response)).into_response())
}

/// Handler for a liveness probe.
///
/// # HTTP Request
///
/// `GET [base]/_liveness`
pub async fn liveness_handler() -> impl IntoResponse {
    StatusCode::OK
}

/// Handler for a readiness probe.
///
/// Reads from the repository to confirm it is reachable.
///
/// # HTTP Request
///
/// `GET [base]/_readiness`
///
/// # Response
///
/// - `200 OK` - Repository answered
/// - `503 Service Unavailable` - Repository failed
pub async fn readiness_handler<R>(State(state): State<AppState<R>>) -> Response
where
    R: AdvisorRepository + 'static,
{
    debug!("Processing readiness check request");

    let backend_name = state.repository().backend_name();
    match state.repository().get_advisors().await {
        Ok(advisors) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ready",
                "backend": backend_name,
                "advisors": advisors.len()
            })),
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unavailable",
                    "backend": backend_name,
                    "error": e.to_string()
                })),
            )
                .into_response()
        }
    }
}
