//! Repository trait and shared staging machinery.
//!
//! - [`AdvisorRepository`] - the contract every backend implements
//! - [`ChangeSet`] / [`PendingChange`] - a caller's staged mutations awaiting `save`
//! - [`IdAllocator`] - overflow-safe id reservation

mod ids;
mod repository;
mod staging;

pub use ids::IdAllocator;
pub use repository::AdvisorRepository;
pub use staging::{ChangeSet, PendingChange, apply_changes};
