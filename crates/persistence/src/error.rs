//! Error types for the persistence layer.
//!
//! "Not found" on a read is not an error here: lookups return `Option` and
//! existence checks return `bool`. The variants below cover the failures a
//! backend can hit while staging or committing mutations.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

use crate::model::AdvisorId;

/// The error type for all repository operations.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// An inserted advisor collides with an existing id.
    #[error("advisor already exists: {id}")]
    AlreadyExists { id: AdvisorId },

    /// A staged update or delete targets an advisor that is gone at commit time.
    #[error("advisor not found: {id}")]
    NotFound { id: AdvisorId },

    /// The backend could not be reached.
    #[error("connection to {backend_name} failed: {message}")]
    ConnectionFailed {
        backend_name: String,
        message: String,
    },

    /// Any other backend failure.
    #[error("{backend_name} error: {message}")]
    Internal {
        backend_name: String,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RepositoryError {
    /// Builds an [`RepositoryError::Internal`] without a source.
    pub fn internal(backend_name: &str, message: impl Into<String>) -> Self {
        RepositoryError::Internal {
            backend_name: backend_name.to_string(),
            message: message.into(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Internal {
            backend_name: "serde_json".to_string(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// Result type alias for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_display() {
        let err = RepositoryError::AlreadyExists { id: 12 };
        assert_eq!(err.to_string(), "advisor already exists: 12");
    }

    #[test]
    fn test_internal_display() {
        let err = RepositoryError::internal("sqlite", "disk full");
        assert_eq!(err.to_string(), "sqlite error: disk full");
    }

    #[test]
    fn test_from_serde_json_keeps_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RepositoryError = json_err.into();
        assert!(std::error::Error::source(&err).is_some());
    }
}
