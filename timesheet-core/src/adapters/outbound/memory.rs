//! In-memory entry store, for tests and throwaway sessions.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, RwLock,
};

use crate::domain::{
    models::{EntryId, EntryRecord},
    ports::outbound::EntryStore,
    StoreError,
};

/// Entry store backed by a HashMap.
///
/// Clones share the same records.
#[derive(Clone, Default)]
pub struct MemoryEntryStore {
    records: Arc<RwLock<HashMap<EntryId, EntryRecord>>>,
    /// When set, every put and delete fails with an I/O error.
    fail_writes: Arc<AtomicBool>,
    /// When set, puts fail while deletes still succeed.
    fail_puts: Arc<AtomicBool>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with records.
    pub fn with_records(self, records: Vec<(EntryId, EntryRecord)>) -> Self {
        {
            let mut map = self.records.write().expect("entry store lock poisoned");
            map.extend(records);
        }
        self
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.records.read().expect("entry store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The stored record for `id` (for assertions).
    pub fn record(&self, id: &EntryId) -> Option<EntryRecord> {
        self.records
            .read()
            .expect("entry store lock poisoned")
            .get(id)
            .cloned()
    }

    fn check_writable(&self, id: &EntryId, is_put: bool) -> Result<(), StoreError> {
        let failing = self.fail_writes.load(Ordering::SeqCst)
            || (is_put && self.fail_puts.load(Ordering::SeqCst));
        if failing {
            return Err(StoreError::io(
                format!("memory://{}", id),
                io::Error::other("writes disabled"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn list_keys(&self) -> Result<Vec<EntryId>, StoreError> {
        let mut keys: Vec<EntryId> = self
            .records
            .read()
            .expect("entry store lock poisoned")
            .keys()
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }

    async fn get(&self, id: &EntryId) -> Result<Option<EntryRecord>, StoreError> {
        Ok(self.record(id))
    }

    async fn put(&self, id: &EntryId, record: &EntryRecord) -> Result<(), StoreError> {
        self.check_writable(id, true)?;
        self.records
            .write()
            .expect("entry store lock poisoned")
            .insert(id.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        self.check_writable(id, false)?;
        self.records
            .write()
            .expect("entry store lock poisoned")
            .remove(id);
        Ok(())
    }
}
