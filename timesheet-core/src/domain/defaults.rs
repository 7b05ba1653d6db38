//! Defaults for entries created with "add new".

use time::{macros::time, Date, Time};

use super::models::{Category, Entry, EntryId};

/// Start of a new entry when nothing else is recorded for the day.
pub const DAY_FLOOR: Time = time!(8:00);
/// Last representable time of day at minute precision.
pub const LAST_MINUTE: Time = time!(23:59);
pub const DEFAULT_MINUTES: u16 = 30;
pub const DEFAULT_CATEGORY: Category = Category::Development;

/// Latest end time among entries dated `day`, or [`DAY_FLOOR`].
pub fn default_start(entries: &[(EntryId, Entry)], day: Date) -> Time {
    entries
        .iter()
        .filter(|(_, entry)| entry.date == day)
        .map(|(_, entry)| entry.end)
        .max()
        .unwrap_or(DAY_FLOOR)
}

/// `start` plus [`DEFAULT_MINUTES`], capped at [`LAST_MINUTE`].
pub fn default_end(start: Time) -> Time {
    let minutes = u16::from(start.hour()) * 60 + u16::from(start.minute()) + DEFAULT_MINUTES;
    let last = u16::from(LAST_MINUTE.hour()) * 60 + u16::from(LAST_MINUTE.minute());
    if minutes > last {
        return LAST_MINUTE;
    }
    Time::from_hms((minutes / 60) as u8, (minutes % 60) as u8, 0).unwrap_or(LAST_MINUTE)
}

pub fn new_entry(entries: &[(EntryId, Entry)], today: Date) -> Entry {
    let start = default_start(entries, today);
    Entry::new(today, start, default_end(start), DEFAULT_CATEGORY)
}
