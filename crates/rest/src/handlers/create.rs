//! Create handler.
//!
//! `POST [base]/api/advisors`

use advisor_persistence::AdvisorRepository;
use axum::{extract::State, response::Response};
use tracing::debug;

use crate::error::RestResult;
use crate::extractors::AdvisorBody;
use crate::state::AppState;

/// Handler for creating an advisor.
///
/// An `id` of `0` (or no `id` at all) lets the repository assign one.
///
/// # Response
///
/// - `201 Created` - The created advisor, with a `Location` header
/// - `400 Bad Request` - Malformed body
/// - `409 Conflict` - The supplied id is taken
///
/// # Example
///
/// ```http
/// POST /api/advisors HTTP/1.1
/// Content-Type: application/json
///
/// {"name": "Ada Lovelace", "email": "ada@example.com"}
/// ```
pub async fn create_handler<R>(
    State(state): State<AppState<R>>,
    AdvisorBody(advisor): AdvisorBody,
) -> RestResult<Response>
where
    R: AdvisorRepository + 'static,
{
    debug!(requested_id = %advisor.id, "Processing create request");

    let result = state.controller().post_advisor(advisor).await?;

    if let Some(created) = result.value() {
        debug!(id = %created.id, "Advisor created");
    }
    result.into_http_response(state.base_url())
}
