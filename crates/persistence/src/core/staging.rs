//! Staged mutations shared by the backends.

use std::collections::BTreeMap;

use crate::error::{RepositoryError, RepositoryResult};
use crate::model::{Advisor, AdvisorId};

/// A single staged mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingChange {
    /// Insert a new advisor.
    Insert(Advisor),
    /// Replace an existing advisor.
    Update(Advisor),
    /// Remove an existing advisor.
    Delete(AdvisorId),
}

impl PendingChange {
    /// Returns the id the change applies to.
    pub fn id(&self) -> AdvisorId {
        match self {
            PendingChange::Insert(advisor) | PendingChange::Update(advisor) => advisor.id,
            PendingChange::Delete(id) => *id,
        }
    }
}

/// Ordered list of staged mutations awaiting a commit.
///
/// A change set is the unit of work: whoever stages into it passes it to
/// `save`, which commits exactly these changes.
#[derive(Debug, Default)]
pub struct ChangeSet {
    changes: Vec<PendingChange>,
}

impl ChangeSet {
    /// Creates an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a change.
    pub fn push(&mut self, change: PendingChange) {
        self.changes.push(change);
    }

    /// Number of staged changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns true when nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Removes and returns every staged change, in staging order.
    pub fn take(&mut self) -> Vec<PendingChange> {
        std::mem::take(&mut self.changes)
    }
}

/// Applies changes to an ordered map, all or nothing.
///
/// The changes are replayed against a copy of `committed`; `committed` is only
/// replaced once every change has applied cleanly.
pub fn apply_changes(
    committed: &mut BTreeMap<AdvisorId, Advisor>,
    changes: Vec<PendingChange>,
) -> RepositoryResult<usize> {
    let mut next = committed.clone();
    let applied = changes.len();

    for change in changes {
        match change {
            PendingChange::Insert(advisor) => {
                if next.contains_key(&advisor.id) {
                    return Err(RepositoryError::AlreadyExists { id: advisor.id });
                }
                next.insert(advisor.id, advisor);
            }
            PendingChange::Update(advisor) => match next.get_mut(&advisor.id) {
                Some(slot) => *slot = advisor,
                None => return Err(RepositoryError::NotFound { id: advisor.id }),
            },
            PendingChange::Delete(id) => {
                if next.remove(&id).is_none() {
                    return Err(RepositoryError::NotFound { id });
                }
            }
        }
    }

    *committed = next;
    Ok(applied)
}
