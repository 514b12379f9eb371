//! SQLite backend implementation.
//!
//! Committed advisors live in a single table; staged mutations are held in
//! memory and applied inside one SQLite transaction by `save`. Supports both
//! in-memory databases (great for testing) and file-based databases.
//!
//! # Example
//!
//! ```no_run
//! use advisor_persistence::backends::sqlite::SqliteBackend;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let backend = SqliteBackend::open("advisors.db")?;
//! backend.init_schema()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE advisors (
//!     id INTEGER PRIMARY KEY,
//!     attributes TEXT NOT NULL  -- JSON object
//! );
//! ```

mod backend;
mod schema;

pub use backend::{SqliteBackend, SqliteBackendConfig};
