//! Route configuration for the Advisor REST API.

pub mod advisor_routes;

pub use advisor_routes::{ADVISORS_PATH, create_routes};
