//! Update handler.
//!
//! `PUT [base]/api/advisors/{id}`

use advisor_persistence::AdvisorRepository;
use axum::{extract::State, response::Response};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::{AdvisorBody, AdvisorIdPath};
use crate::state::AppState;

/// Handler for replacing an existing advisor.
///
/// The `id` in the path is authoritative; an `id` in the body is overwritten.
///
/// # Response
///
/// - `200 OK` - The updated advisor
/// - `404 Not Found` - No advisor with this id (empty body, nothing staged)
/// - `400 Bad Request` - Malformed body or non-numeric id
pub async fn update_handler<R>(
    State(state): State<AppState<R>>,
    AdvisorIdPath(id): AdvisorIdPath,
    AdvisorBody(advisor): AdvisorBody,
) -> RestResult<Response>
where
    R: AdvisorRepository + 'static,
{
    debug!(id = %id, body_id = %advisor.id, "Processing update request");

    let result = state.controller().put_advisor(id, advisor).await?;

    if result.is_not_found() {
        debug!(id = %id, "Advisor not found, nothing updated");
    } else {
        debug!(id = %id, "Advisor updated");
    }
    result.into_http_response(state.base_url())
}
