//! Advisor request-body extractor.
//!
//! Extracts and validates an [`Advisor`] from a JSON request body.

use advisor_persistence::Advisor;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::RestError;

/// Axum extractor for an advisor payload.
///
/// # Example
///
/// ```rust,ignore
/// use advisor_rest::extractors::AdvisorBody;
///
/// async fn create_handler(AdvisorBody(advisor): AdvisorBody) {
///     println!("Advisor id: {}", advisor.id);
/// }
/// ```
#[derive(Debug)]
pub struct AdvisorBody(pub Advisor);

impl AdvisorBody {
    /// Consumes the extractor and returns the inner Advisor.
    pub fn into_inner(self) -> Advisor {
        self.0
    }
}

/// Error type for advisor extraction failures.
#[derive(Debug)]
pub enum AdvisorBodyRejection {
    /// The body could not be read or parsed.
    InvalidJson(String),
    /// The body exceeds the configured size limit.
    TooLarge(String),
    /// Unsupported content type.
    UnsupportedMediaType(String),
}

impl IntoResponse for AdvisorBodyRejection {
    fn into_response(self) -> Response {
        let error = match self {
            AdvisorBodyRejection::InvalidJson(msg) => RestError::BadRequest {
                message: format!("Invalid JSON: {}", msg),
            },
            AdvisorBodyRejection::TooLarge(msg) => RestError::PayloadTooLarge { message: msg },
            AdvisorBodyRejection::UnsupportedMediaType(ct) => {
                RestError::UnsupportedMediaType { content_type: ct }
            }
        };
        error.into_response()
    }
}

/// Returns true for `application/json` and any `+json` media type.
fn is_json_content_type(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();
    media_type == "application/json" || media_type.ends_with("+json")
}

impl<S> FromRequest<S> for AdvisorBody
where
    S: Send + Sync,
{
    type Rejection = AdvisorBodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Missing Content-Type is treated as JSON
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if !is_json_content_type(&content_type) {
            return Err(AdvisorBodyRejection::UnsupportedMediaType(content_type));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AdvisorBodyRejection::TooLarge(e.body_text())
            } else {
                AdvisorBodyRejection::InvalidJson(e.body_text())
            }
        })?;

        let advisor: Advisor = serde_json::from_slice(&bytes)
            .map_err(|e| AdvisorBodyRejection::InvalidJson(e.to_string()))?;

        Ok(AdvisorBody(advisor))
    }
}
