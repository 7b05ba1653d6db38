use std::path::PathBuf;

use thiserror::Error;

use super::{models::EntryId, timesheet::Timesheet};

/// Errors that can occur while applying timesheet events.
///
/// A failed validation is not an error: the entry just stays dirty.
#[derive(Debug, Error)]
pub enum TimesheetError {
    #[error("entry not found: {0}")]
    EntryNotFound(EntryId),
    #[error("entry already exists: {0}")]
    DuplicateEntry(EntryId),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A store call failed while writing an event's effects.
    ///
    /// `sheet` matches what the store holds now: entries whose write did not
    /// run are dirty, and a delete that did not run is undone.
    #[error("{source}")]
    Interrupted {
        sheet: Box<Timesheet>,
        #[source]
        source: StoreError,
    },
}

/// Errors raised by an [`EntryStore`](super::ports::outbound::EntryStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed record {key}: {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
