//! Order-preserving entry filters, shared by display and by the validator.

use time::Date;

use super::models::{CategoryFilter, Entry, EntryId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFilter {
    Date(Date),
    Category(CategoryFilter),
    /// Entries whose current form is not persisted.
    Dirty,
    Invalid,
}

impl EntryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            EntryFilter::Date(date) => entry.date == *date,
            EntryFilter::Category(filter) => filter.matches(entry.category),
            EntryFilter::Dirty => entry.dirty,
            EntryFilter::Invalid => !entry.valid,
        }
    }
}

/// Entries matching `filter`, in their original relative order.
pub fn filter_by<'a>(
    entries: &'a [(EntryId, Entry)],
    filter: EntryFilter,
) -> Vec<&'a (EntryId, Entry)> {
    entries
        .iter()
        .filter(|(_, entry)| filter.matches(entry))
        .collect()
}

/// The date and category filters the UI shows. Independent of validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayFilter {
    pub date: Option<Date>,
    pub category: CategoryFilter,
}

impl DisplayFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        self.date
            .map_or(true, |date| EntryFilter::Date(date).matches(entry))
            && EntryFilter::Category(self.category).matches(entry)
    }

    pub fn apply<'a>(&self, entries: &'a [(EntryId, Entry)]) -> Vec<&'a (EntryId, Entry)> {
        entries
            .iter()
            .filter(|(_, entry)| self.matches(entry))
            .collect()
    }
}
