//! File-backed entry store: one JSON document per key.
//!
//! Layout: `<root>/<collection>/<key>.json`.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::{
    models::{EntryId, EntryRecord},
    ports::outbound::EntryStore,
    StoreError,
};

const RECORD_EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct FileEntryStore {
    dir: PathBuf,
}

impl FileEntryStore {
    pub fn new(root: impl AsRef<Path>, collection: &str) -> Self {
        Self {
            dir: root.as_ref().join(collection),
        }
    }

    /// Directory holding the collection's records.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn record_path(&self, id: &EntryId) -> Result<PathBuf, StoreError> {
        if !is_valid_key(id.as_str()) {
            return Err(StoreError::InvalidKey(id.to_string()));
        }
        Ok(self.dir.join(format!("{}.{}", id, RECORD_EXTENSION)))
    }
}

/// Keys become file names, so only `[A-Za-z0-9_-]+` is accepted.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[async_trait]
impl EntryStore for FileEntryStore {
    async fn list_keys(&self) -> Result<Vec<EntryId>, StoreError> {
        let mut dir = match tokio::fs::read_dir(&self.dir).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StoreError::io(&self.dir, e)),
        };

        let mut keys = Vec::new();
        while let Some(item) = dir
            .next_entry()
            .await
            .map_err(|e| StoreError::io(&self.dir, e))?
        {
            let path = item.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(RECORD_EXTENSION) {
                continue;
            }
            match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) if is_valid_key(stem) => keys.push(EntryId::new(stem)),
                _ => tracing::debug!(path = %path.display(), "ignoring foreign file in store"),
            }
        }
        keys.sort();
        Ok(keys)
    }

    async fn get(&self, id: &EntryId) -> Result<Option<EntryRecord>, StoreError> {
        let path = self.record_path(id)?;
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::io(path, e)),
        };
        let record = serde_json::from_str(&raw).map_err(|source| StoreError::Serialization {
            key: id.to_string(),
            source,
        })?;
        Ok(Some(record))
    }

    async fn put(&self, id: &EntryId, record: &EntryRecord) -> Result<(), StoreError> {
        let path = self.record_path(id)?;
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::io(&self.dir, e))?;

        let raw =
            serde_json::to_string_pretty(record).map_err(|source| StoreError::Serialization {
                key: id.to_string(),
                source,
            })?;

        // Readers never observe a half-written record.
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, raw)
            .await
            .map_err(|e| StoreError::io(&tmp, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| StoreError::io(&path, e))?;
        Ok(())
    }

    async fn delete(&self, id: &EntryId) -> Result<(), StoreError> {
        let path = self.record_path(id)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Category;
    use tempfile::TempDir;
    use time::macros::{date, time};

    fn record(description: &str) -> EntryRecord {
        EntryRecord {
            date: date!(2024 - 01 - 01),
            start: time!(8:00),
            end: time!(9:00),
            category: Category::Meeting,
            description: description.to_string(),
        }
    }

    #[tokio::test]
    async fn missing_collection_lists_nothing() {
        let root = TempDir::new().unwrap();
        let store = FileEntryStore::new(root.path(), "entries");
        assert!(store.list_keys().await.unwrap().is_empty());
        assert_eq!(store.get(&EntryId::new("a")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_then_get_and_list() {
        let root = TempDir::new().unwrap();
        let store = FileEntryStore::new(root.path(), "entries");
        store.put(&EntryId::new("b"), &record("two")).await.unwrap();
        store.put(&EntryId::new("a"), &record("one")).await.unwrap();

        assert_eq!(
            store.list_keys().await.unwrap(),
            vec![EntryId::new("a"), EntryId::new("b")]
        );
        assert_eq!(
            store.get(&EntryId::new("b")).await.unwrap(),
            Some(record("two"))
        );
        assert!(root.path().join("entries").join("a.json").exists());
    }

    #[tokio::test]
    async fn put_replaces_existing_record() {
        let root = TempDir::new().unwrap();
        let store = FileEntryStore::new(root.path(), "entries");
        let id = EntryId::new("a");
        store.put(&id, &record("first")).await.unwrap();
        store.put(&id, &record("second")).await.unwrap();

        assert_eq!(store.get(&id).await.unwrap(), Some(record("second")));
        assert_eq!(store.list_keys().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let root = TempDir::new().unwrap();
        let store = FileEntryStore::new(root.path(), "entries");
        let id = EntryId::new("a");
        store.put(&id, &record("x")).await.unwrap();
        store.delete(&id).await.unwrap();
        store.delete(&id).await.unwrap();
        assert_eq!(store.get(&id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn unsafe_keys_are_rejected() {
        let root = TempDir::new().unwrap();
        let store = FileEntryStore::new(root.path(), "entries");
        for key in ["", "../escape", "a/b", "a.json"] {
            let err = store
                .put(&EntryId::new(key), &record("x"))
                .await
                .unwrap_err();
            assert!(matches!(err, StoreError::InvalidKey(_)), "{key:?}");
        }
    }

    #[tokio::test]
    async fn foreign_files_are_ignored() {
        let root = TempDir::new().unwrap();
        let store = FileEntryStore::new(root.path(), "entries");
        store.put(&EntryId::new("a"), &record("x")).await.unwrap();
        std::fs::write(store.dir().join("notes.txt"), "hello").unwrap();
        std::fs::write(store.dir().join("b.json.tmp"), "{").unwrap();

        assert_eq!(store.list_keys().await.unwrap(), vec![EntryId::new("a")]);
    }

    #[tokio::test]
    async fn corrupt_record_is_a_serialization_error() {
        let root = TempDir::new().unwrap();
        let store = FileEntryStore::new(root.path(), "entries");
        std::fs::create_dir_all(store.dir()).unwrap();
        std::fs::write(store.dir().join("bad.json"), "{ not json").unwrap();

        let err = store.get(&EntryId::new("bad")).await.unwrap_err();
        assert!(matches!(err, StoreError::Serialization { .. }));
    }

    #[tokio::test]
    async fn stored_document_is_readable_json() {
        let root = TempDir::new().unwrap();
        let store = FileEntryStore::new(root.path(), "entries");
        store.put(&EntryId::new("a"), &record("x")).await.unwrap();

        let raw = std::fs::read_to_string(store.dir().join("a.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["start"], "08:00");
        assert_eq!(value["category"], "Meeting");
    }
}
