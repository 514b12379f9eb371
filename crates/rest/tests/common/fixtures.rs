//! Test fixtures for advisor tests.
//!
//! [`AdvisorFixture`] hands out advisors with distinct ids and plausible
//! attributes, so tests only spell out the fields they care about.

use std::sync::atomic::{AtomicI64, Ordering};

use advisor_persistence::{Advisor, AdvisorId};

const NAMES: [&str; 5] = [
    "Ada Lovelace",
    "Grace Hopper",
    "Alan Turing",
    "Edsger Dijkstra",
    "Barbara Liskov",
];

/// Generator of distinct advisor records.
#[derive(Debug)]
pub struct AdvisorFixture {
    next_id: AtomicI64,
}

impl Default for AdvisorFixture {
    fn default() -> Self {
        Self::starting_at(100)
    }
}

impl AdvisorFixture {
    /// Creates a generator whose first advisor gets `first_id`.
    pub fn starting_at(first_id: AdvisorId) -> Self {
        Self {
            next_id: AtomicI64::new(first_id),
        }
    }

    /// Returns a fresh id, never handed out before by this generator.
    pub fn id(&self) -> AdvisorId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Creates an advisor with a fresh id.
    pub fn advisor(&self) -> Advisor {
        let id = self.id();
        Self::advisor_with_id(id)
    }

    /// Creates an advisor with the given id.
    pub fn advisor_with_id(id: AdvisorId) -> Advisor {
        let name = NAMES[(id.unsigned_abs() as usize) % NAMES.len()];
        let email = format!(
            "{}.{}@example.com",
            name.split(' ').next().unwrap_or("advisor").to_lowercase(),
            id
        );
        Advisor::new(id)
            .with_attribute("name", name)
            .with_attribute("email", email)
            .with_attribute("active", true)
    }

    /// Creates `count` advisors with fresh ids.
    pub fn advisors(&self, count: usize) -> Vec<Advisor> {
        (0..count).map(|_| self.advisor()).collect()
    }
}

