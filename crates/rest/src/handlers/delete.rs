//! Delete handler.
//!
//! `DELETE [base]/api/advisors/{id}`

use advisor_persistence::AdvisorRepository;
use axum::{extract::State, response::Response};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::AdvisorIdPath;
use crate::state::AppState;

/// Handler for deleting an advisor.
///
/// # Response
///
/// - `200 OK` - Advisor deleted (empty body)
/// - `404 Not Found` - No advisor with this id (empty body)
/// - `400 Bad Request` - Non-numeric id
pub async fn delete_handler<R>(
    State(state): State<AppState<R>>,
    AdvisorIdPath(id): AdvisorIdPath,
) -> RestResult<Response>
where
    R: AdvisorRepository + 'static,
{
    debug!(id = %id, "Processing delete request");

    let result = state.controller().delete_advisor(id).await?;

    if result.is_not_found() {
        debug!(id = %id, "Advisor not found, nothing deleted");
    } else {
        debug!(id = %id, "Advisor deleted");
    }
    result.into_http_response(state.base_url())
}
