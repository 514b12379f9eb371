//! The Advisor controller.
//!
//! Translates the five advisor operations into repository calls and maps the
//! outcome onto an [`ActionResult`]. Every mutating action stages into its
//! own [`ChangeSet`] and saves it in the same call, and update/delete check
//! existence before staging anything. Repository failures propagate
//! unchanged through `?`.

use std::sync::Arc;

use advisor_persistence::{Advisor, AdvisorId, AdvisorRepository, ChangeSet, RepositoryResult};

use crate::responses::{ActionResult, CreatedAtAction};

/// Name of the read-by-id action, referenced by created responses.
pub const GET_ADVISOR_ACTION: &str = "get_advisor";

/// Request-handling contract for the Advisor resource.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use advisor_persistence::backends::memory::InMemoryBackend;
/// use advisor_rest::controller::AdvisorController;
///
/// let controller = AdvisorController::new(Arc::new(InMemoryBackend::new()));
/// let result = controller.get_advisor(7).await?;
/// assert!(result.is_not_found());
/// ```
pub struct AdvisorController<R> {
    repository: Arc<R>,
}

impl<R> Clone for AdvisorController<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: AdvisorRepository> AdvisorController<R> {
    /// Creates a controller over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the repository this controller delegates to.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Lists every advisor. Always succeeds at this layer, even when empty.
    pub async fn get_advisors(&self) -> RepositoryResult<ActionResult<Vec<Advisor>>> {
        let advisors = self.repository.get_advisors().await?;
        Ok(ActionResult::Ok(advisors))
    }

    /// Reads one advisor.
    pub async fn get_advisor(&self, id: AdvisorId) -> RepositoryResult<ActionResult<Advisor>> {
        match self.repository.get_advisor_by_id(id).await? {
            Some(advisor) => Ok(ActionResult::Ok(advisor)),
            None => Ok(ActionResult::NotFound),
        }
    }

    /// Inserts an advisor and commits it.
    ///
    /// No existence check is made; collisions surface as repository errors.
    pub async fn post_advisor(&self, advisor: Advisor) -> RepositoryResult<ActionResult<Advisor>> {
        let mut changes = ChangeSet::new();
        let created = self.repository.insert_advisor(&mut changes, advisor)?;
        self.repository.save(&mut changes).await?;

        Ok(ActionResult::Created(CreatedAtAction {
            action_name: GET_ADVISOR_ACTION,
            route_id: created.id,
            value: created,
        }))
    }

    /// Replaces an existing advisor and commits it.
    ///
    /// The route `id` is authoritative: it overwrites whatever id the payload
    /// carries before the update is staged.
    pub async fn put_advisor(
        &self,
        id: AdvisorId,
        advisor: Advisor,
    ) -> RepositoryResult<ActionResult<Advisor>> {
        if !self.repository.any(id).await? {
            return Ok(ActionResult::NotFound);
        }

        let advisor = Advisor { id, ..advisor };
        let mut changes = ChangeSet::new();
        self.repository.update_advisor(&mut changes, advisor.clone())?;
        self.repository.save(&mut changes).await?;

        Ok(ActionResult::Ok(advisor))
    }

    /// Deletes an existing advisor and commits it.
    pub async fn delete_advisor(&self, id: AdvisorId) -> RepositoryResult<ActionResult<()>> {
        if !self.repository.any(id).await? {
            return Ok(ActionResult::NotFound);
        }

        let mut changes = ChangeSet::new();
        self.repository.delete_advisor(&mut changes, id)?;
        self.repository.save(&mut changes).await?;

        Ok(ActionResult::OkEmpty)
    }
}
