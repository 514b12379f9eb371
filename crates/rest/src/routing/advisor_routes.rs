//! Advisor route configuration.

use advisor_persistence::AdvisorRepository;
use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Collection path of the Advisor resource.
pub const ADVISORS_PATH: &str = "/api/advisors";

/// Creates all Advisor REST API routes.
///
/// # Routes
///
/// ## System-level
/// - `GET /health` - Health check
/// - `GET /_liveness` - Liveness probe
/// - `GET /_readiness` - Readiness probe
///
/// ## Collection
/// - `GET /api/advisors` - List
/// - `POST /api/advisors` - Create
///
/// ## Instance
/// - `GET /api/advisors/{id}` - Read
/// - `PUT /api/advisors/{id}` - Update
/// - `DELETE /api/advisors/{id}` - Delete
pub fn create_routes<R>(state: AppState<R>) -> Router
where
    R: AdvisorRepository + 'static,
{
    let instance_path = format!("{}/{{id}}", ADVISORS_PATH);

    Router::new()
        // System-level routes
        .route("/health", get(handlers::health_handler::<R>))
        .route("/_liveness", get(handlers::liveness_handler))
        .route("/_readiness", get(handlers::readiness_handler::<R>))
        // Collection routes
        .route(
            ADVISORS_PATH,
            get(handlers::list_handler::<R>).post(handlers::create_handler::<R>),
        )
        // Instance routes
        .route(
            &instance_path,
            get(handlers::read_handler::<R>)
                .put(handlers::update_handler::<R>)
                .delete(handlers::delete_handler::<R>),
        )
        // State
        .with_state(state)
}
