//! Interval validation.
//!
//! An entry is valid when `start < end` and its `[start, end)` interval does
//! not overlap any other entry on the same date. Validity is pairwise, so any
//! change to one entry's date or times requires [`update_all`].

use std::fmt;

use super::{
    filter::{filter_by, EntryFilter},
    models::{Entry, EntryId},
};

/// Why an entry failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    NotBeforeEnd,
    Overlaps(EntryId),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::NotBeforeEnd => write!(f, "start must be before end"),
            Rejection::Overlaps(other) => write!(f, "overlaps entry {}", other),
        }
    }
}

/// Check `entry` (stored under `id`) against every entry in `all`.
///
/// `all` may contain the entry itself; it is skipped by id.
pub fn check(id: &EntryId, entry: &Entry, all: &[(EntryId, Entry)]) -> Result<(), Rejection> {
    if !entry.is_well_formed() {
        return Err(Rejection::NotBeforeEnd);
    }
    match filter_by(all, EntryFilter::Date(entry.date))
        .into_iter()
        .find(|(other_id, other)| other_id != id && entry.overlaps(other))
    {
        Some((other_id, _)) => Err(Rejection::Overlaps(other_id.clone())),
        None => Ok(()),
    }
}

/// Validate a detached entry and record the outcome in `entry.valid`.
pub fn validate(entry: &mut Entry, id: &EntryId, all: &[(EntryId, Entry)]) -> bool {
    entry.valid = check(id, entry, all).is_ok();
    entry.valid
}

/// Revalidate every entry in place.
pub fn update_all(all: &mut [(EntryId, Entry)]) {
    let outcomes: Vec<bool> = all
        .iter()
        .map(|(id, entry)| check(id, entry, all).is_ok())
        .collect();
    for ((id, entry), valid) in all.iter_mut().zip(outcomes) {
        if entry.valid != valid {
            tracing::debug!(entry_id = %id, valid, "entry validity changed");
        }
        entry.valid = valid;
    }
}
