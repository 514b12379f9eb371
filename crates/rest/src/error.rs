//! Error types for the Advisor REST API.
//!
//! The controller itself only ever reports "found" or "not found". Everything
//! else (malformed requests, repository failures) is a [`RestError`], rendered
//! as a problem-details JSON body with the matching status:
//!
//! | Source | HTTP Status |
//! |--------|-------------|
//! | Malformed body or non-numeric id | 400 |
//! | Body over the size limit | 413 |
//! | Non-JSON content type | 415 |
//! | `RepositoryError::AlreadyExists` | 409 |
//! | `RepositoryError::NotFound` (target vanished before commit) | 409 |
//! | `RepositoryError::ConnectionFailed` | 503 |
//! | `RepositoryError::Internal` | 500 |

use advisor_persistence::RepositoryError;
use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::fmt;

/// The primary error type for REST API operations.
#[derive(Debug)]
pub enum RestError {
    /// Bad request - malformed body or id (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Request body exceeds the configured limit (HTTP 413).
    PayloadTooLarge {
        /// Error message.
        message: String,
    },

    /// Unsupported media type (HTTP 415).
    UnsupportedMediaType {
        /// The unsupported content type.
        content_type: String,
    },

    /// The commit conflicted with the stored state (HTTP 409).
    Conflict {
        /// Message describing the conflict.
        message: String,
    },

    /// The storage backend is unreachable (HTTP 503).
    ServiceUnavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    InternalError {
        /// Error message.
        message: String,
    },
}

impl RestError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            RestError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            RestError::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            RestError::Conflict { .. } => StatusCode::CONFLICT,
            RestError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            RestError::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => write!(f, "Bad request: {}", message),
            RestError::PayloadTooLarge { message } => write!(f, "Payload too large: {}", message),
            RestError::UnsupportedMediaType { content_type } => {
                write!(f, "Unsupported media type: {}", content_type)
            }
            RestError::Conflict { message } => write!(f, "Conflict: {}", message),
            RestError::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            RestError::InternalError { message } => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let details = match &self {
            RestError::UnsupportedMediaType { content_type } => {
                format!("Content type '{}' is not supported", content_type)
            }
            RestError::BadRequest { message }
            | RestError::PayloadTooLarge { message }
            | RestError::Conflict { message }
            | RestError::ServiceUnavailable { message }
            | RestError::InternalError { message } => message.clone(),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        }

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(create_problem_details(status, &details)),
        )
            .into_response()
    }
}

/// Creates a problem-details body (RFC 9457).
fn create_problem_details(status: StatusCode, details: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "about:blank",
        "title": status.canonical_reason().unwrap_or("Error"),
        "status": status.as_u16(),
        "detail": details
    })
}

impl From<RepositoryError> for RestError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists { id } => RestError::Conflict {
                message: format!("Advisor {} already exists", id),
            },
            RepositoryError::NotFound { id } => RestError::Conflict {
                message: format!("Advisor {} was removed before the change was saved", id),
            },
            RepositoryError::ConnectionFailed { .. } => RestError::ServiceUnavailable {
                message: err.to_string(),
            },
            RepositoryError::Internal { .. } => RestError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for RestError {
    fn from(err: serde_json::Error) -> Self {
        RestError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_request_display() {
        let err = RestError::BadRequest {
            message: "missing body".to_string(),
        };
        assert_eq!(err.to_string(), "Bad request: missing body");
    }

    #[test]
    fn test_already_exists_maps_to_conflict() {
        let err: RestError = RepositoryError::AlreadyExists { id: 4 }.into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert!(err.to_string().contains("4"));
    }

    #[test]
    fn test_connection_failure_maps_to_503() {
        let err: RestError = RepositoryError::ConnectionFailed {
            backend_name: "sqlite".to_string(),
            message: "pool exhausted".to_string(),
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let err: RestError = RepositoryError::internal("sqlite", "boom").into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_create_problem_details() {
        let body = create_problem_details(StatusCode::CONFLICT, "Advisor 4 already exists");
        assert_eq!(body["status"], 409);
        assert_eq!(body["title"], "Conflict");
        assert_eq!(body["detail"], "Advisor 4 already exists");
    }

    #[test]
    fn test_into_response_content_type() {
        let response = RestError::BadRequest {
            message: "x".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );
    }
}
