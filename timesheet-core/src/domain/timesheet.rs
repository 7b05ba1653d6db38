//! The in-memory timesheet and its save reconciler.
//!
//! [`Timesheet::update`] is a pure transition: it takes the current state and
//! an [`Event`], and returns the next state together with the store
//! [`Effect`]s that bring persistence in line with it. Executing the effects
//! is the service's job.

use time::Date;

use super::{
    defaults,
    filter::{filter_by, EntryFilter},
    models::{Entry, EntryId, EntryRecord, FieldEdit},
    ordering, validation, TimesheetError,
};

/// A user action against the timesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Edit { id: EntryId, edit: FieldEdit },
    /// Create an entry with defaults for `today` under a freshly generated id.
    Add { id: EntryId, today: Date },
    Delete { id: EntryId },
}

/// A store operation produced by a transition, to be executed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Put { id: EntryId, record: EntryRecord },
    Delete { id: EntryId },
}

/// All entries, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timesheet {
    entries: Vec<(EntryId, Entry)>,
}

impl Timesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the state for entries read from the store: sorted once, then validated.
    pub fn from_loaded(mut entries: Vec<(EntryId, Entry)>) -> Self {
        ordering::sort_for_load(&mut entries);
        validation::update_all(&mut entries);
        Self { entries }
    }

    pub fn entries(&self) -> &[(EntryId, Entry)] {
        &self.entries
    }

    pub fn get(&self, id: &EntryId) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, entry)| entry)
    }

    pub fn contains(&self, id: &EntryId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn dirty_count(&self) -> usize {
        filter_by(&self.entries, EntryFilter::Dirty).len()
    }

    pub fn invalid_count(&self) -> usize {
        filter_by(&self.entries, EntryFilter::Invalid).len()
    }

    /// Apply `event` and return the next state plus the store effects.
    ///
    /// Every event ends with a full revalidation and a sweep over the dirty
    /// entries, so after any transition no entry is both valid and dirty.
    pub fn update(&self, event: Event) -> Result<(Timesheet, Vec<Effect>), TimesheetError> {
        let mut next = self.clone();
        let mut effects = Vec::new();

        match event {
            Event::Edit { id, edit } => {
                tracing::debug!(entry_id = %id, field = %edit.field(), "applying edit");
                let interval_changed = edit.touches_interval();
                next.entry_mut(&id)?.apply(edit);
                if interval_changed {
                    next.update_all();
                }
                next.try_save(&id, &mut effects)?;
            }
            Event::Add { id, today } => {
                if next.contains(&id) {
                    return Err(TimesheetError::DuplicateEntry(id));
                }
                let entry = defaults::new_entry(&next.entries, today);
                next.entries.push((id.clone(), entry));
                next.update_all();
                next.try_save(&id, &mut effects)?;
            }
            Event::Delete { id } => next.delete(&id, &mut effects)?,
        }

        next.save_dirty(&mut effects);
        Ok((next, effects))
    }

    /// The state to keep when only some of a transition's effects reached
    /// the store.
    ///
    /// `self` is the state before the transition, `next` the state it
    /// produced, and `pending` the effects that did not run, the failing one
    /// first. A pending put leaves its entry dirty so the next sweep retries
    /// it. A pending delete puts the entry back as it was in `self`.
    pub fn settle_partial(&self, mut next: Timesheet, pending: &[Effect]) -> Timesheet {
        for effect in pending {
            match effect {
                Effect::Put { id, .. } => {
                    if let Ok(entry) = next.entry_mut(id) {
                        entry.dirty = true;
                    }
                }
                Effect::Delete { id } => {
                    if next.contains(id) {
                        continue;
                    }
                    if let Some(idx) = self.entries.iter().position(|(entry_id, _)| entry_id == id)
                    {
                        let at = idx.min(next.entries.len());
                        next.entries.insert(at, self.entries[idx].clone());
                    }
                }
            }
        }
        next.update_all();
        next
    }

    fn entry_mut(&mut self, id: &EntryId) -> Result<&mut Entry, TimesheetError> {
        self.entries
            .iter_mut()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, entry)| entry)
            .ok_or_else(|| TimesheetError::EntryNotFound(id.clone()))
    }

    fn update_all(&mut self) {
        validation::update_all(&mut self.entries);
    }

    /// Persist the entry if it validates, otherwise mark it dirty.
    ///
    /// An invalid entry is never written and its previously stored copy is
    /// left alone.
    fn try_save(&mut self, id: &EntryId, effects: &mut Vec<Effect>) -> Result<(), TimesheetError> {
        let idx = self
            .entries
            .iter()
            .position(|(entry_id, _)| entry_id == id)
            .ok_or_else(|| TimesheetError::EntryNotFound(id.clone()))?;

        let verdict = {
            let (id, entry) = &self.entries[idx];
            validation::check(id, entry, &self.entries)
        };

        let entry = &mut self.entries[idx].1;
        entry.valid = verdict.is_ok();
        match verdict {
            Ok(()) => {
                entry.dirty = false;
                effects.push(Effect::Put {
                    id: id.clone(),
                    record: entry.to_record(),
                });
            }
            Err(reason) => {
                tracing::debug!(entry_id = %id, %reason, "entry not saved");
                entry.dirty = true;
            }
        }
        Ok(())
    }

    /// Remove from memory and from the store.
    fn delete(&mut self, id: &EntryId, effects: &mut Vec<Effect>) -> Result<(), TimesheetError> {
        let idx = self
            .entries
            .iter()
            .position(|(entry_id, _)| entry_id == id)
            .ok_or_else(|| TimesheetError::EntryNotFound(id.clone()))?;
        self.entries.remove(idx);
        self.update_all();
        effects.push(Effect::Delete { id: id.clone() });
        Ok(())
    }

    /// Cascade save: persist every dirty entry that is now valid.
    ///
    /// Validity only depends on intervals and saving never changes one, so
    /// after `update_all` a single sweep is already a fixed point.
    fn save_dirty(&mut self, effects: &mut Vec<Effect>) {
        for (id, entry) in self.entries.iter_mut() {
            if entry.dirty && entry.valid {
                tracing::debug!(entry_id = %id, "cascade save of previously blocked entry");
                entry.dirty = false;
                effects.push(Effect::Put {
                    id: id.clone(),
                    record: entry.to_record(),
                });
            }
        }
    }
}
