use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::domain::{models::EntryId, ports::outbound::IdGenerator};

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> EntryId {
        EntryId::new(Uuid::new_v4().to_string())
    }
}

/// `<prefix>-1`, `<prefix>-2`, ... Deterministic, for tests and fixtures.
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

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> EntryId {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        EntryId::new(format!("{}-{}", self.prefix, n))
    }
}
