//! Identifier allocation.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::error::{RepositoryError, RepositoryResult};
use crate::model::AdvisorId;

/// Hands out advisor ids for inserts that do not carry one.
///
/// Ids are reserved when an insert is staged, so a reserved id is never
/// reused even if the insert is later discarded. Explicit ids seen by the
/// backend push the next reserved id past them.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicI64,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Creates an allocator whose first id is `1`.
    pub fn new() -> Self {
        Self {
            next: AtomicI64::new(1),
        }
    }

    /// Reserves the next free id.
    ///
    /// # Errors
    ///
    /// `RepositoryError::Internal` once the id space is exhausted.
    pub fn reserve(&self, backend_name: &str) -> RepositoryResult<AdvisorId> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|_| RepositoryError::internal(backend_name, "advisor id space exhausted"))
    }

    /// Records an explicitly chosen id so later reservations skip it.
    ///
    /// `AdvisorId::MAX` has no successor and leaves the allocator unchanged.
    pub fn observe(&self, id: AdvisorId) {
        if let Some(next) = id.checked_add(1) {
            self.next.fetch_max(next, Ordering::SeqCst);
        }
    }

    /// The id the next reservation will return.
    pub fn peek(&self) -> AdvisorId {
        self.next.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserve_is_sequential() {
        let ids = IdAllocator::new();
        assert_eq!(ids.reserve("test").unwrap(), 1);
        assert_eq!(ids.reserve("test").unwrap(), 2);
    }

    #[test]
    fn test_observe_skips_past_explicit_ids() {
        let ids = IdAllocator::new();
        ids.observe(10);
        ids.observe(4);
        assert_eq!(ids.reserve("test").unwrap(), 11);
    }

    #[test]
    fn test_observe_max_id_does_not_overflow() {
        let ids = IdAllocator::new();
        ids.observe(AdvisorId::MAX);
        assert_eq!(ids.peek(), 1);
        assert_eq!(ids.reserve("test").unwrap(), 1);
    }

    #[test]
    fn test_exhausted_id_space_is_an_error() {
        let ids = IdAllocator::new();
        ids.observe(AdvisorId::MAX - 1);

        let err = ids.reserve("test").unwrap_err();

        assert!(matches!(err, RepositoryError::Internal { .. }));
        assert_eq!(ids.peek(), AdvisorId::MAX);
    }

    #[test]
    fn test_negative_ids_do_not_move_the_allocator() {
        let ids = IdAllocator::new();
        ids.observe(-5);
        assert_eq!(ids.peek(), 1);
    }
}
