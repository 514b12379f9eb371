//! In-memory backend.
//!
//! Keeps committed advisors in an ordered map. Callers stage mutations in
//! their own [`ChangeSet`]; `save` applies one change set under the write
//! lock. Useful for tests, demos and the default server mode.

use std::collections::BTreeMap;
use std::fmt::Debug;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::warn;

use crate::core::{AdvisorRepository, ChangeSet, IdAllocator, PendingChange, apply_changes};
use crate::error::RepositoryResult;
use crate::model::{Advisor, AdvisorId};

const BACKEND_NAME: &str = "memory";

/// In-memory advisor repository.
///
/// # Example
///
/// ```
/// use advisor_persistence::backends::memory::InMemoryBackend;
/// use advisor_persistence::Advisor;
///
/// let backend = InMemoryBackend::with_advisors(vec![
///     Advisor::new(1).with_attribute("name", "Ada"),
/// ]);
/// assert_eq!(backend.len(), 1);
/// ```
pub struct InMemoryBackend {
    committed: RwLock<BTreeMap<AdvisorId, Advisor>>,
    ids: IdAllocator,
}

impl Debug for InMemoryBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryBackend")
            .field("committed", &self.committed.read().len())
            .field("next_id", &self.ids.peek())
            .finish()
    }
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self {
            committed: RwLock::new(BTreeMap::new()),
            ids: IdAllocator::new(),
        }
    }

    /// Creates a backend pre-populated with committed advisors.
    ///
    /// Advisors with id `0` get an id assigned; they are skipped once the id
    /// space is exhausted.
    pub fn with_advisors(advisors: impl IntoIterator<Item = Advisor>) -> Self {
        let backend = Self::new();
        {
            let mut committed = backend.committed.write();
            for mut advisor in advisors {
                if advisor.needs_id() {
                    match backend.ids.reserve(BACKEND_NAME) {
                        Ok(id) => advisor.id = id,
                        Err(e) => {
                            warn!(error = %e, "Skipping seed advisor without id");
                            continue;
                        }
                    }
                } else {
                    backend.ids.observe(advisor.id);
                }
                committed.insert(advisor.id, advisor);
            }
        }
        backend
    }

    /// Number of committed advisors.
    pub fn len(&self) -> usize {
        self.committed.read().len()
    }

    /// Returns true when no advisor is committed.
    pub fn is_empty(&self) -> bool {
        self.committed.read().is_empty()
    }
}

#[async_trait]
impl AdvisorRepository for InMemoryBackend {
    fn backend_name(&self) -> &'static str {
        BACKEND_NAME
    }

    async fn get_advisors(&self) -> RepositoryResult<Vec<Advisor>> {
        Ok(self.committed.read().values().cloned().collect())
    }

    async fn get_advisor_by_id(&self, id: AdvisorId) -> RepositoryResult<Option<Advisor>> {
        Ok(self.committed.read().get(&id).cloned())
    }

    async fn any(&self, id: AdvisorId) -> RepositoryResult<bool> {
        Ok(self.committed.read().contains_key(&id))
    }

    fn insert_advisor(
        &self,
        changes: &mut ChangeSet,
        mut advisor: Advisor,
    ) -> RepositoryResult<Advisor> {
        if advisor.needs_id() {
            advisor.id = self.ids.reserve(BACKEND_NAME)?;
        } else {
            self.ids.observe(advisor.id);
        }
        changes.push(PendingChange::Insert(advisor.clone()));
        Ok(advisor)
    }

    async fn save(&self, changes: &mut ChangeSet) -> RepositoryResult<usize> {
        let changes = changes.take();
        if changes.is_empty() {
            return Ok(0);
        }

        let mut committed = self.committed.write();
        let applied = apply_changes(&mut committed, changes)?;
        tracing::debug!(applied, "Committed staged advisor changes");
        Ok(applied)
    }
}
