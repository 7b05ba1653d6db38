use serde::{Deserialize, Serialize};
use time::{Date, PrimitiveDateTime, Time};

use super::{Category, FieldEdit};

time::serde::format_description!(date_text, Date, "[year]-[month]-[day]");
time::serde::format_description!(time_text, Time, "[hour]:[minute]");

/// One time-tracking record as held in memory.
///
/// `valid` and `dirty` are derived state: they are recomputed by the
/// validator and the save reconciler and never written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: Date,
    pub start: Time,
    pub end: Time,
    pub category: Category,
    pub description: String,
    pub valid: bool,
    /// Set while the current form of the entry is not persisted.
    pub dirty: bool,
}

impl Entry {
    /// A fresh, unsaved entry. It counts as invalid until validated.
    pub fn new(date: Date, start: Time, end: Time, category: Category) -> Self {
        Self {
            date,
            start,
            end,
            category,
            description: String::new(),
            valid: false,
            dirty: true,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// An entry read back from the store: clean, validity still unknown.
    pub fn from_record(record: EntryRecord) -> Self {
        Self {
            date: record.date,
            start: record.start,
            end: record.end,
            category: record.category,
            description: record.description,
            valid: false,
            dirty: false,
        }
    }

    pub fn to_record(&self) -> EntryRecord {
        EntryRecord {
            date: self.date,
            start: self.start,
            end: self.end,
            category: self.category,
            description: self.description.clone(),
        }
    }

    pub fn starts_at(&self) -> PrimitiveDateTime {
        PrimitiveDateTime::new(self.date, self.start)
    }

    /// Whether `start < end`.
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }

    /// Same date and overlapping half-open `[start, end)` intervals.
    pub fn overlaps(&self, other: &Entry) -> bool {
        self.date == other.date
            && intervals_overlap((self.start, self.end), (other.start, other.end))
    }

    pub fn apply(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Date(date) => self.date = date,
            FieldEdit::Start(start) => self.start = start,
            FieldEdit::End(end) => self.end = end,
            FieldEdit::Category(category) => self.category = category,
            FieldEdit::Description(description) => self.description = description,
        }
    }
}

/// `[s1, e1)` and `[s2, e2)` overlap iff `s2 <= s1 < e2 || s1 <= s2 < e1`.
pub fn intervals_overlap((s1, e1): (Time, Time), (s2, e2): (Time, Time)) -> bool {
    (s2 <= s1 && s1 < e2) || (s1 <= s2 && s2 < e1)
}

/// The persisted form of an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(with = "date_text")]
    pub date: Date,
    #[serde(with = "time_text")]
    pub start: Time,
    #[serde(with = "time_text")]
    pub end: Time,
    pub category: Category,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    fn entry(start: Time, end: Time) -> Entry {
        Entry::new(date!(2024 - 01 - 01), start, end, Category::Development)
    }

    #[test]
    fn new_entries_start_dirty_and_invalid() {
        let e = entry(time!(8:00), time!(9:00));
        assert!(e.dirty);
        assert!(!e.valid);
        assert!(e.description.is_empty());
    }

    #[test]
    fn touching_intervals_do_not_overlap() {
        let a = entry(time!(8:00), time!(9:00));
        let b = entry(time!(9:00), time!(10:00));
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn nested_and_partial_intervals_overlap() {
        let outer = entry(time!(8:00), time!(12:00));
        let inner = entry(time!(9:00), time!(10:00));
        let partial = entry(time!(11:30), time!(13:00));
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
        assert!(outer.overlaps(&partial));
    }

    #[test]
    fn different_dates_never_overlap() {
        let a = entry(time!(8:00), time!(9:00));
        let mut b = a.clone();
        b.date = date!(2024 - 01 - 02);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn record_uses_plain_text_dates_and_times() {
        let e = entry(time!(8:00), time!(9:30)).with_description("standup");
        let json = serde_json::to_value(e.to_record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "date": "2024-01-01",
                "start": "08:00",
                "end": "09:30",
                "category": "Development",
                "description": "standup",
            })
        );
    }

    #[test]
    fn record_reads_text_fields_and_rejects_bad_times() {
        let record: EntryRecord = serde_json::from_value(serde_json::json!({
            "date": "2024-03-09",
            "start": "07:45",
            "end": "12:00",
            "category": "Meeting",
        }))
        .unwrap();
        assert_eq!(record.date, date!(2024 - 03 - 09));
        assert_eq!(record.start, time!(7:45));
        assert_eq!(record.end, time!(12:00));
        assert!(record.description.is_empty());

        let bad = serde_json::from_value::<EntryRecord>(serde_json::json!({
            "date": "2024-03-09",
            "start": "25:00",
            "end": "12:00",
            "category": "Meeting",
        }));
        assert!(bad.is_err());
    }

    #[test]
    fn loaded_entries_are_clean() {
        let record = entry(time!(8:00), time!(9:00)).to_record();
        let loaded = Entry::from_record(record);
        assert!(!loaded.dirty);
    }

    #[test]
    fn apply_replaces_the_edited_field_only() {
        let mut e = entry(time!(8:00), time!(9:00));
        e.apply(FieldEdit::End(time!(9:15)));
        e.apply(FieldEdit::Category(Category::Meeting));
        assert_eq!(e.start, time!(8:00));
        assert_eq!(e.end, time!(9:15));
        assert_eq!(e.category, Category::Meeting);
    }
}
