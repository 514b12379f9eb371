//! List handler.
//!
//! `GET [base]/api/advisors`

use advisor_persistence::AdvisorRepository;
use axum::{extract::State, response::Response};
use tracing::debug;

use crate::error::RestResult;
use crate::state::AppState;

/// Handler for listing advisors.
///
/// # Response
///
/// - `200 OK` - JSON array of every advisor, possibly empty
pub async fn list_handler<R>(State(state): State<AppState<R>>) -> RestResult<Response>
where
    R: AdvisorRepository + 'static,
{
    debug!("Processing list request");

    let result = state.controller().get_advisors().await?;

    debug!(
        count = result.value().map(Vec::len).unwrap_or(0),
        "Returning advisors"
    );
    result.into_http_response(state.base_url())
}
