//! # advisor-rest - Advisor Registration HTTP API
//!
//! This crate exposes CRUD operations over the Advisor resource. Request
//! handling is centred on the [`AdvisorController`](controller::AdvisorController),
//! which talks to an injected [`AdvisorRepository`] and reports each outcome
//! as an [`ActionResult`](responses::ActionResult).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use advisor_rest::{create_app, ServerConfig};
//! use advisor_persistence::backends::memory::InMemoryBackend;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let app = create_app(InMemoryBackend::new());
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, app).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## API Endpoints
//!
//! | Interaction | HTTP Method | URL Pattern | Success | Not found |
//! |------------|-------------|-------------|---------|-----------|
//! | list | GET | `/api/advisors` | 200 | - |
//! | read | GET | `/api/advisors/{id}` | 200 | 404 |
//! | create | POST | `/api/advisors` | 201 + `Location` | - |
//! | update | PUT | `/api/advisors/{id}` | 200 | 404 |
//! | delete | DELETE | `/api/advisors/{id}` | 200 (empty) | 404 |
//!
//! Not-found responses have an empty body. Request and repository failures
//! are reported as problem-details JSON; see [`error`].
//!
//! ## Architecture
//!
//! - [`controller`] - The request-handling contract
//! - [`error`] - Error types and problem-details rendering
//! - [`config`] - Server configuration
//! - [`state`] - Application state (controller, configuration)
//! - [`handlers`] - HTTP request handlers for each interaction
//! - [`extractors`] - Request body extraction
//! - [`responses`] - Outcome types and header generation
//! - [`routing`] - Route configuration

// Enforce documentation
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod responses;
pub mod routing;
pub mod state;

// Re-export commonly used types
pub use config::{ServerConfig, StorageBackendMode};
pub use error::{RestError, RestResult};
pub use state::AppState;

use std::sync::Arc;

use advisor_persistence::AdvisorRepository;
use axum::{Router, extract::DefaultBodyLimit};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the Axum application with default configuration.
///
/// For more control, use [`create_app_with_config`].
pub fn create_app<R>(repository: R) -> Router
where
    R: AdvisorRepository + 'static,
{
    create_app_with_config(repository, ServerConfig::default())
}

/// Creates the Axum application with custom configuration.
///
/// Sets up the routes and the middleware stack: tracing, request timeout,
/// body size limit, and optionally request IDs and CORS.
///
/// # Example
///
/// ```rust,ignore
/// use advisor_rest::{create_app_with_config, ServerConfig};
/// use advisor_persistence::backends::memory::InMemoryBackend;
///
/// let config = ServerConfig {
///     port: 3000,
///     enable_cors: false,
///     ..Default::default()
/// };
/// let app = create_app_with_config(InMemoryBackend::new(), config);
/// ```
pub fn create_app_with_config<R>(repository: R, config: ServerConfig) -> Router
where
    R: AdvisorRepository + 'static,
{
    info!(
        "Creating Advisor API server with backend: {}",
        repository.backend_name()
    );

    let state = AppState::new(Arc::new(repository), config.clone());

    let router = routing::create_routes(state).layer(DefaultBodyLimit::max(config.max_body_size));

    let router = if config.enable_request_id {
        router
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    } else {
        router
    };

    let router = if config.enable_cors {
        router.layer(build_cors_layer(&config))
    } else {
        router
    };

    let service_builder = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            axum::http::StatusCode::REQUEST_TIMEOUT,
            std::time::Duration::from_secs(config.request_timeout),
        ));

    router.layer(service_builder)
}

/// Builds the CORS layer based on configuration.
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let mut cors = CorsLayer::new();

    if config.cors_origins == "*" {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    if config.cors_methods == "*" {
        cors = cors.allow_methods(Any);
    } else {
        let methods: Vec<_> = config
            .cors_methods
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_methods(methods);
    }

    if config.cors_headers == "*" {
        cors = cors.allow_headers(Any);
    } else {
        let headers: Vec<_> = config
            .cors_headers
            .split(',')
            .filter_map(|s| s.trim().parse().ok())
            .collect();
        cors = cors.allow_headers(headers);
    }

    cors
}

/// Initializes the tracing subscriber for logging.
///
/// Call once at application startup. `RUST_LOG` overrides `level`.
///
/// # Arguments
///
/// * `level` - The log level (error, warn, info, debug, trace)
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "advisor_rest={level},advisor_persistence={level},tower_http=debug"
        ))
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
