//! Application state for the Advisor REST API.
//!
//! Holds the controller (and through it the repository) plus the server
//! configuration. Cloned into every request handler.

use std::sync::Arc;

use advisor_persistence::AdvisorRepository;

use crate::config::ServerConfig;
use crate::controller::AdvisorController;

/// Shared application state for the REST API.
///
/// # Type Parameters
///
/// * `R` - The repository backend type (must implement [`AdvisorRepository`])
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use advisor_persistence::backends::memory::InMemoryBackend;
/// use advisor_rest::{AppState, ServerConfig};
///
/// let state = AppState::new(Arc::new(InMemoryBackend::new()), ServerConfig::default());
/// ```
pub struct AppState<R> {
    /// The advisor controller.
    controller: AdvisorController<R>,

    /// Server configuration.
    config: Arc<ServerConfig>,
}

// Manually implement Clone since R is wrapped in Arc and doesn't need to be Clone
impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R: AdvisorRepository> AppState<R> {
    /// Creates a new AppState with the given repository and configuration.
    pub fn new(repository: Arc<R>, config: ServerConfig) -> Self {
        Self {
            controller: AdvisorController::new(repository),
            config: Arc::new(config),
        }
    }

    /// Returns the advisor controller.
    pub fn controller(&self) -> &AdvisorController<R> {
        &self.controller
    }

    /// Returns a reference to the repository backend.
    pub fn repository(&self) -> &R {
        self.controller.repository()
    }

    /// Returns a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the base URL for the server.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}
