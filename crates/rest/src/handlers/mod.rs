//! HTTP request handlers for advisor interactions.
//!
//! Each handler extracts the request, calls the matching
//! [`AdvisorController`](crate::controller::AdvisorController) operation and
//! renders the outcome:
//!
//! - [`list`] - List every advisor
//! - [`read`] - Read an advisor by id
//! - [`create`] - Create an advisor
//! - [`update`] - Replace an advisor
//! - [`delete`] - Delete an advisor
//! - [`health`] - Health, liveness and readiness probes

pub mod create;
pub mod delete;
pub mod health;
pub mod list;
pub mod read;
pub mod update;

// Re-export handlers for convenience
pub use create::create_handler;
pub use delete::delete_handler;
pub use health::{health_handler, liveness_handler, readiness_handler};
pub use list::list_handler;
pub use read::read_handler;
pub use update::update_handler;
