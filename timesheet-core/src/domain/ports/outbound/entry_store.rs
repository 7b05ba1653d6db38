//! Entry store port (outbound).
//!
//! A key-value collection of entry records keyed by entry id. The core only
//! ever lists, reads, writes and deletes by key; all filtering happens in
//! memory.

use async_trait::async_trait;

use crate::domain::{
    models::{EntryId, EntryRecord},
    StoreError,
};

/// Outbound port for entry persistence.
///
/// Implementations do not keep anything open between calls: each operation
/// acquires and releases whatever it needs.
#[async_trait]
pub trait EntryStore: Send + Sync + 'static {
    /// All keys currently in the collection.
    async fn list_keys(&self) -> Result<Vec<EntryId>, StoreError>;

    /// The record stored under `id`, if any.
    async fn get(&self, id: &EntryId) -> Result<Option<EntryRecord>, StoreError>;

    /// Insert or replace the record stored under `id`.
    async fn put(&self, id: &EntryId, record: &EntryRecord) -> Result<(), StoreError>;

    /// Remove the record stored under `id`. Removing a missing key succeeds.
    async fn delete(&self, id: &EntryId) -> Result<(), StoreError>;
}
