use super::*;
use timesheet_core::{format_date, parse_date, CategoryFilter};

impl App {
    pub fn select_next(&mut self) {
        let len = self.visible_entries().len();
        if len == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if let Some(i) = self.table_state.selected() {
            self.table_state.select(Some(i.saturating_sub(1)));
        }
    }

    pub fn clamp_selection(&mut self) {
        let len = self.visible_entries().len();
        let selected = match (len, self.table_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.table_state.select(selected);
    }

    /// Select `id` if it passes the current filter.
    pub fn focus_entry(&mut self, id: &EntryId) -> bool {
        let position = self
            .visible_entries()
            .iter()
            .position(|(other, _)| other == id);
        if let Some(idx) = position {
            self.table_state.select(Some(idx));
        }
        position.is_some()
    }

    /// Loosen the filter just enough to show `id`, then select it.
    pub fn reveal_entry(&mut self, id: &EntryId) {
        if self.focus_entry(id) {
            return;
        }
        let Some(entry) = self.sheet.get(id) else {
            return;
        };
        let (date, category) = (entry.date, entry.category);
        if self.filter.date.is_some_and(|d| d != date) {
            self.filter.date = Some(date);
        }
        if !self.filter.category.matches(category) {
            self.filter.category = CategoryFilter::Any;
        }
        self.focus_entry(id);
    }

    pub fn cycle_category_filter(&mut self) {
        self.filter.category = self.filter.category.next();
        self.clamp_selection();
    }

    pub fn filter_today(&mut self) {
        self.filter.date = Some(self.today);
        self.clamp_selection();
    }

    pub fn clear_filters(&mut self) {
        self.filter = DisplayFilter::default();
        self.clamp_selection();
    }

    pub fn begin_date_filter_edit(&mut self) {
        let current = self.filter.date.map(format_date).unwrap_or_default();
        self.date_filter_input = TextInput::from_str(&current);
        self.navigate_to(View::EditDateFilter);
    }

    /// Apply the typed date filter. An empty input means any date.
    /// On a parse error the filter is left alone and the error is shown.
    pub fn apply_date_filter_input(&mut self) -> bool {
        let raw = self.date_filter_input.value.trim();
        let date = if raw.is_empty() {
            None
        } else {
            match parse_date(raw) {
                Some(date) => Some(date),
                None => {
                    let message = format!("Invalid date '{}', expected YYYY-MM-DD", raw);
                    self.set_error(message);
                    return false;
                }
            }
        };
        self.filter.date = date;
        self.clamp_selection();
        self.navigate_to(View::Table);
        true
    }

    pub fn request_delete(&mut self) {
        if let Some(id) = self.focused_entry_id() {
            self.delete_target = Some(id);
            self.navigate_to(View::ConfirmDelete);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
        self.navigate_to(View::Table);
    }
}
