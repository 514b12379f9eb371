//! Advisor id path extractor.
//!
//! Wraps axum's [`Path`] so a non-numeric id is rendered as a problem-details
//! 400 like every other malformed request.

use advisor_persistence::AdvisorId;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::RestError;

/// Axum extractor for the `{id}` route segment.
///
/// # Example
///
/// ```rust,ignore
/// use advisor_rest::extractors::AdvisorIdPath;
///
/// async fn read_handler(AdvisorIdPath(id): AdvisorIdPath) {
///     println!("Advisor id: {}", id);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisorIdPath(pub AdvisorId);

impl<S> FromRequestParts<S> for AdvisorIdPath
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<AdvisorId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| RestError::BadRequest {
                message: rejection.body_text(),
            })?;
        Ok(AdvisorIdPath(id))
    }
}
