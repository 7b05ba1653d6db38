use crate::bootstrap;
use crate::config::TimesheetConfig;
use anyhow::{anyhow, Context, Result};
use timesheet_core::{
    format_date, format_time, parse_date, CategoryFilter, DisplayFilter, Entry, EntryId,
};

/// Print the stored entries matching the given filters, in load order.
pub async fn run(
    config: &TimesheetConfig,
    date: Option<String>,
    category: Option<String>,
) -> Result<()> {
    let filter = parse_filter(date.as_deref(), category.as_deref())?;
    let service = bootstrap::build_service(config, false)?;
    let sheet = service.load().await.context("Failed to load timesheet")?;

    let rows = filter.apply(sheet.entries());
    if rows.is_empty() {
        println!("No entries");
        return Ok(());
    }
    for (id, entry) in rows {
        println!("{}", format_row(id, entry));
    }
    Ok(())
}

pub fn parse_filter(date: Option<&str>, category: Option<&str>) -> Result<DisplayFilter> {
    let date = date
        .map(|raw| {
            parse_date(raw.trim())
                .ok_or_else(|| anyhow!("Invalid date '{}', expected YYYY-MM-DD", raw))
        })
        .transpose()?;
    let category = match category {
        Some(raw) => raw
            .parse::<CategoryFilter>()
            .map_err(|_| anyhow!("Unknown category '{}'", raw))?,
        None => CategoryFilter::Any,
    };
    Ok(DisplayFilter { date, category })
}

/// One line per entry; `!` marks entries that are invalid against the rest.
pub fn format_row(id: &EntryId, entry: &Entry) -> String {
    let marker = if entry.valid { ' ' } else { '!' };
    let mut row = format!(
        "{} {}  {}-{}  {:<11}",
        marker,
        format_date(entry.date),
        format_time(entry.start),
        format_time(entry.end),
        entry.category.as_ref(),
    );
    if !entry.description.is_empty() {
        row.push_str("  ");
        row.push_str(&entry.description);
    }
    row.push_str(&format!("  [{}]", id));
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};
    use timesheet_core::Category;

    #[test]
    fn filter_parses_date_and_category() {
        let filter = parse_filter(Some("2024-03-05"), Some("support")).unwrap();
        assert_eq!(filter.date, Some(date!(2024 - 03 - 05)));
        assert_eq!(filter.category, CategoryFilter::Only(Category::Support));

        assert_eq!(parse_filter(None, None).unwrap(), DisplayFilter::default());
    }

    #[test]
    fn filter_rejects_bad_input() {
        assert!(parse_filter(Some("05/03/2024"), None).is_err());
        assert!(parse_filter(None, Some("lunch")).is_err());
    }

    #[test]
    fn row_shows_marker_for_invalid_entries() {
        let mut entry = Entry::new(
            date!(2024 - 01 - 01),
            time!(8:00),
            time!(9:30),
            Category::Meeting,
        )
        .with_description("standup");
        entry.valid = true;
        let id = EntryId::new("k1");
        assert_eq!(
            format_row(&id, &entry),
            "  2024-01-01  08:00-09:30  Meeting      standup  [k1]"
        );

        entry.valid = false;
        assert!(format_row(&id, &entry).starts_with("! 2024-01-01"));
    }
}
