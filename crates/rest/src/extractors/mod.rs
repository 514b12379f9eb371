//! Axum extractors for advisor requests.
//!
//! - [`AdvisorBody`] - Extract and validate an advisor payload
//! - [`AdvisorIdPath`] - Extract the advisor id from the route

mod advisor_body;
mod advisor_id;

pub use advisor_body::{AdvisorBody, AdvisorBodyRejection};
pub use advisor_id::AdvisorIdPath;
