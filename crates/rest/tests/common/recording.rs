//! A repository double that records calls.
//!
//! [`RecordingRepository`] answers lookups from data programmed up front and
//! logs every call in order, so tests can assert exactly which repository
//! operations a controller action performed.

use std::collections::{HashMap, HashSet};

use advisor_persistence::core::PendingChange;
use advisor_persistence::{
    Advisor, AdvisorId, AdvisorRepository, ChangeSet, RepositoryError, RepositoryResult,
};
use async_trait::async_trait;
use parking_lot::Mutex;

/// One observed repository call.
#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryCall {
    /// `get_advisors`
    GetAll,
    /// `get_advisor_by_id`
    GetById(AdvisorId),
    /// `any`
    Any(AdvisorId),
    /// `insert_advisor`
    Insert(Advisor),
    /// `update_advisor`
    Update(Advisor),
    /// `delete_advisor`
    Delete(AdvisorId),
    /// `save`
    Save,
}

impl RepositoryCall {
    /// Returns true for calls that stage or commit a change.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            RepositoryCall::Insert(_)
                | RepositoryCall::Update(_)
                | RepositoryCall::Delete(_)
                | RepositoryCall::Save
        )
    }
}

/// Ordered log of repository calls.
#[derive(Debug, Default)]
pub struct RepositoryCallLog {
    calls: Mutex<Vec<RepositoryCall>>,
}

impl RepositoryCallLog {
    fn push(&self, call: RepositoryCall) {
        self.calls.lock().push(call);
    }

    fn snapshot(&self) -> Vec<RepositoryCall> {
        self.calls.lock().clone()
    }
}

/// Repository double with programmable answers.
#[derive(Debug, Default)]
pub struct RecordingRepository {
    all: Vec<Advisor>,
    by_id: HashMap<AdvisorId, Advisor>,
    existing: HashSet<AdvisorId>,
    assigned_id: Option<AdvisorId>,
    fail_save: bool,
    log: RepositoryCallLog,
    saved: Mutex<Vec<Vec<PendingChange>>>,
}

impl RecordingRepository {
    /// Creates a repository that knows no advisors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Programs the answer of `get_advisors`.
    pub fn returning_all(mut self, advisors: Vec<Advisor>) -> Self {
        self.all = advisors;
        self
    }

    /// Programs `get_advisor_by_id` and `any` to find `advisor`.
    pub fn with_advisor(mut self, advisor: Advisor) -> Self {
        self.existing.insert(advisor.id);
        self.by_id.insert(advisor.id, advisor);
        self
    }

    /// Programs `any` to report `id` as present without a stored record.
    pub fn with_existing(mut self, id: AdvisorId) -> Self {
        self.existing.insert(id);
        self
    }

    /// Programs the id `insert_advisor` assigns to advisors with id 0.
    pub fn assigning_id(mut self, id: AdvisorId) -> Self {
        self.assigned_id = Some(id);
        self
    }

    /// Makes every `save` fail with a connection error.
    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<RepositoryCall> {
        self.log.snapshot()
    }

    /// Number of calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&RepositoryCall) -> bool) -> usize {
        self.calls().iter().filter(|c| predicate(c)).count()
    }

    /// The change set handed to each `save`, in call order.
    pub fn saved_change_sets(&self) -> Vec<Vec<PendingChange>> {
        self.saved.lock().clone()
    }

    /// Number of `save` calls.
    pub fn saves(&self) -> usize {
        self.count(|c| matches!(c, RepositoryCall::Save))
    }

    /// Returns true when no change was staged or committed.
    pub fn untouched(&self) -> bool {
        self.count(RepositoryCall::is_mutation) == 0
    }
}

#[async_trait]
impl AdvisorRepository for RecordingRepository {
    fn backend_name(&self) -> &'static str {
        "recording"
    }

    async fn get_advisors(&self) -> RepositoryResult<Vec<Advisor>> {
        self.log.push(RepositoryCall::GetAll);
        Ok(self.all.clone())
    }

    async fn get_advisor_by_id(&self, id: AdvisorId) -> RepositoryResult<Option<Advisor>> {
        self.log.push(RepositoryCall::GetById(id));
        Ok(self.by_id.get(&id).cloned())
    }

    async fn any(&self, id: AdvisorId) -> RepositoryResult<bool> {
        self.log.push(RepositoryCall::Any(id));
        Ok(self.existing.contains(&id))
    }

    fn insert_advisor(
        &self,
        changes: &mut ChangeSet,
        advisor: Advisor,
    ) -> RepositoryResult<Advisor> {
        self.log.push(RepositoryCall::Insert(advisor.clone()));
        let mut staged = advisor;
        if staged.needs_id() {
            if let Some(id) = self.assigned_id {
                staged.id = id;
            }
        }
        changes.push(PendingChange::Insert(staged.clone()));
        Ok(staged)
    }

    fn update_advisor(&self, changes: &mut ChangeSet, advisor: Advisor) -> RepositoryResult<()> {
        self.log.push(RepositoryCall::Update(advisor.clone()));
        changes.push(PendingChange::Update(advisor));
        Ok(())
    }

    fn delete_advisor(&self, changes: &mut ChangeSet, id: AdvisorId) -> RepositoryResult<()> {
        self.log.push(RepositoryCall::Delete(id));
        changes.push(PendingChange::Delete(id));
        Ok(())
    }

    async fn save(&self, changes: &mut ChangeSet) -> RepositoryResult<usize> {
        self.log.push(RepositoryCall::Save);
        let changes = changes.take();
        let applied = changes.len();
        self.saved.lock().push(changes);
        if self.fail_save {
            return Err(RepositoryError::ConnectionFailed {
                backend_name: "recording".to_string(),
                message: "connection refused".to_string(),
            });
        }
        Ok(applied)
    }
}
