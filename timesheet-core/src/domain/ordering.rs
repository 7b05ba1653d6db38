//! Initial load order. Applied once, when entries come back from the store.

use std::cmp::Ordering;

use super::models::{Entry, EntryId};

/// Ascending by date + start, then category name, then description.
pub fn load_order(a: &Entry, b: &Entry) -> Ordering {
    a.starts_at()
        .cmp(&b.starts_at())
        .then_with(|| a.category.as_ref().cmp(b.category.as_ref()))
        .then_with(|| a.description.cmp(&b.description))
}

pub fn sort_for_load(entries: &mut [(EntryId, Entry)]) {
    entries.sort_by(|(_, a), (_, b)| load_order(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Category;
    use time::{
        macros::{date, time},
        Date, Time,
    };

    fn row(
        id: &str,
        date: Date,
        start: Time,
        category: Category,
        description: &str,
    ) -> (EntryId, Entry) {
        (
            EntryId::new(id),
            Entry::new(date, start, time!(23:00), category).with_description(description),
        )
    }

    fn ids(entries: &[(EntryId, Entry)]) -> Vec<&str> {
        entries.iter().map(|(id, _)| id.as_str()).collect()
    }

    #[test]
    fn earlier_start_comes_first() {
        let day = date!(2024 - 01 - 01);
        let mut entries = vec![
            row("nine", day, time!(9:00), Category::Development, ""),
            row("eight", day, time!(8:00), Category::Development, ""),
        ];
        sort_for_load(&mut entries);
        assert_eq!(ids(&entries), vec!["eight", "nine"]);
    }

    #[test]
    fn date_dominates_time() {
        let mut entries = vec![
            row("later", date!(2024 - 01 - 02), time!(7:00), Category::Other, ""),
            row("earlier", date!(2024 - 01 - 01), time!(17:00), Category::Other, ""),
        ];
        sort_for_load(&mut entries);
        assert_eq!(ids(&entries), vec!["earlier", "later"]);
    }

    #[test]
    fn ties_break_on_category_name_then_description() {
        let day = date!(2024 - 01 - 01);
        let mut entries = vec![
            row("support", day, time!(9:00), Category::Support, "a"),
            row("meeting-b", day, time!(9:00), Category::Meeting, "b"),
            row("meeting-a", day, time!(9:00), Category::Meeting, "a"),
            row("development", day, time!(9:00), Category::Development, "z"),
        ];
        sort_for_load(&mut entries);
        assert_eq!(
            ids(&entries),
            vec!["development", "meeting-a", "meeting-b", "support"]
        );
    }
}
