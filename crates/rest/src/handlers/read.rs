//! Read handler.
//!
//! `GET [base]/api/advisors/{id}`

use advisor_persistence::AdvisorRepository;
use axum::{extract::State, response::Response};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::AdvisorIdPath;
use crate::state::AppState;

/// Handler for reading one advisor.
///
/// # Response
///
/// - `200 OK` - The advisor
/// - `404 Not Found` - No advisor with this id (empty body)
/// - `400 Bad Request` - Non-numeric id
///
/// # Example
///
/// ```http
/// GET /api/advisors/3 HTTP/1.1
/// Accept: application/json
/// ```
pub async fn read_handler<R>(
    State(state): State<AppState<R>>,
    AdvisorIdPath(id): AdvisorIdPath,
) -> RestResult<Response>
where
    R: AdvisorRepository + 'static,
{
    debug!(id = %id, "Processing read request");

    let result = state.controller().get_advisor(id).await?;

    if result.is_not_found() {
        debug!(id = %id, "Advisor not found");
    }
    result.into_http_response(state.base_url())
}
