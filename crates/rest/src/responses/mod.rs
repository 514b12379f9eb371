//! Response types and formatting.
//!
//! - [`action_result`] - controller outcomes and their HTTP rendering
//! - [`headers`] - `Location` header construction

pub mod action_result;
pub mod headers;

pub use action_result::{ActionResult, CreatedAtAction};
