//! Common test utilities for the Advisor REST API.
//!
//! - [`harness`] - HTTP test server over a seeded in-memory repository
//! - [`fixtures`] - Generated advisor records
//! - [`recording`] - Repository double that records every call
//! - [`assertions`] - HTTP response assertions

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;
pub mod harness;
pub mod recording;
