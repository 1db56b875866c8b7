//! Opaque id generation for schedules and matches.
//!
//! The engine never mints ids itself; it draws them from an injected
//! [`IdSource`] so that tests can run with a deterministic sequence while
//! production uses random UUIDs.

use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of unique opaque string ids.
///
/// One id is consumed per match and one per schedule. Round ids are derived
/// from the round index and never come from here.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Production id source backed by random v4 UUIDs.
#[derive(Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic id source for tests: `m-1`, `m-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    counter: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("m")
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        format!("{}-{}", self.prefix, n)
    }
}
