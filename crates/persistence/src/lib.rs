//! Advisor persistence layer.
//!
//! This crate owns the Advisor data model and the [`AdvisorRepository`]
//! contract the REST layer depends on, plus the backends implementing it.
//!
//! # Architecture
//!
//! - [`model`] - the [`Advisor`] record
//! - [`error`] - [`RepositoryError`] and [`RepositoryResult`]
//! - [`core`] - the repository trait and staged-mutation machinery
//! - [`backends`] - in-memory and SQLite implementations
//!
//! # Quick Start
//!
//! ```
//! use advisor_persistence::backends::memory::InMemoryBackend;
//! use advisor_persistence::{Advisor, AdvisorRepository, ChangeSet};
//!
//! # async fn example() -> advisor_persistence::RepositoryResult<()> {
//! let repo = InMemoryBackend::new();
//! let mut changes = ChangeSet::new();
//!
//! // Mutations are staged in the caller's change set...
//! let staged = repo.insert_advisor(&mut changes, Advisor::new(0).with_attribute("name", "Ada"))?;
//!
//! // ...and become visible once saved.
//! repo.save(&mut changes).await?;
//! assert!(repo.any(staged.id).await?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod core;
pub mod error;
pub mod model;

pub use core::{AdvisorRepository, ChangeSet};
pub use error::{RepositoryError, RepositoryResult};
pub use model::{Advisor, AdvisorId};
