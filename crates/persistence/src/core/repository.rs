//! Advisor repository trait.
//!
//! This module defines the [`AdvisorRepository`] trait, the contract the REST
//! layer programs against. Reads see committed state only. Mutations are
//! staged into a caller-owned [`ChangeSet`] and become durable when
//! [`AdvisorRepository::save`] commits that change set.

use async_trait::async_trait;

use crate::core::{ChangeSet, PendingChange};
use crate::error::RepositoryResult;
use crate::model::{Advisor, AdvisorId};

/// Storage contract for advisors.
///
/// # Staging
///
/// `insert_advisor`, `update_advisor` and `delete_advisor` only record the
/// intent in the caller's [`ChangeSet`]. Nothing is visible to
/// `get_advisors`, `get_advisor_by_id` or `any` until `save` commits that
/// change set. Each unit of work owns its change set, so concurrent callers
/// sharing one repository never commit or discard each other's changes.
///
/// # Example
///
/// ```ignore
/// use advisor_persistence::core::ChangeSet;
/// use advisor_persistence::{Advisor, AdvisorRepository, RepositoryResult};
///
/// async fn rename<R: AdvisorRepository>(repo: &R, id: i64) -> RepositoryResult<()> {
///     if repo.any(id).await? {
///         let mut changes = ChangeSet::new();
///         repo.update_advisor(&mut changes, Advisor::new(id).with_attribute("name", "Renamed"))?;
///         repo.save(&mut changes).await?;
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait AdvisorRepository: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn backend_name(&self) -> &'static str;

    /// Returns every committed advisor, ordered by id.
    async fn get_advisors(&self) -> RepositoryResult<Vec<Advisor>>;

    /// Returns the committed advisor with the given id, or `None`.
    async fn get_advisor_by_id(&self, id: AdvisorId) -> RepositoryResult<Option<Advisor>>;

    /// Returns whether a committed advisor with the given id exists.
    async fn any(&self, id: AdvisorId) -> RepositoryResult<bool> {
        Ok(self.get_advisor_by_id(id).await?.is_some())
    }

    /// Stages an insert into `changes`.
    ///
    /// Returns the staged record. When `advisor.id` is `0` the returned
    /// record carries the id the backend reserved for it.
    fn insert_advisor(
        &self,
        changes: &mut ChangeSet,
        advisor: Advisor,
    ) -> RepositoryResult<Advisor>;

    /// Stages a full replacement of the advisor with `advisor.id`.
    fn update_advisor(&self, changes: &mut ChangeSet, advisor: Advisor) -> RepositoryResult<()> {
        changes.push(PendingChange::Update(advisor));
        Ok(())
    }

    /// Stages a delete.
    fn delete_advisor(&self, changes: &mut ChangeSet, id: AdvisorId) -> RepositoryResult<()> {
        changes.push(PendingChange::Delete(id));
        Ok(())
    }

    /// Commits `changes` and returns how many were applied.
    ///
    /// Either every change is applied or none is. `changes` is emptied in
    /// both cases. Changes staged by other callers are never touched.
    ///
    /// # Errors
    ///
    /// * `RepositoryError::AlreadyExists` - a staged insert collides with a committed id
    /// * `RepositoryError::NotFound` - a staged update or delete lost its target
    async fn save(&self, changes: &mut ChangeSet) -> RepositoryResult<usize>;
}
