use ratatui::widgets::TableState;
use time::Date;
use timesheet_core::{check, DisplayFilter, Entry, EntryId, Timesheet};

mod edit;
mod navigation;
mod state;
pub use state::{field_text, EntryEditState, StatusKind, StatusMessage, TextInput, View};

pub struct App {
    pub running: bool,
    pub sheet: Timesheet,
    /// Local date, refreshed every frame; new entries default to it.
    pub today: Date,
    pub current_view: View,
    pub status: Option<StatusMessage>,

    // Filters
    pub filter: DisplayFilter,
    pub date_filter_input: TextInput,

    // Table selection, indexed into `visible_entries()`
    pub table_state: TableState,

    pub edit_state: Option<EntryEditState>,
    pub delete_target: Option<EntryId>,
}

impl App {
    pub fn new(today: Date) -> Self {
        Self {
            running: true,
            sheet: Timesheet::new(),
            today,
            current_view: View::Table,
            status: None,
            filter: DisplayFilter::default(),
            date_filter_input: TextInput::new(),
            table_state: TableState::default(),
            edit_state: None,
            delete_target: None,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        self.clear_status();
    }

    /// Swap in a new timesheet state, keeping the selection in range.
    pub fn replace_sheet(&mut self, sheet: Timesheet) {
        self.sheet = sheet;
        self.clamp_selection();
    }

    /// Entries passing the display filter, in display order.
    pub fn visible_entries(&self) -> Vec<&(EntryId, Entry)> {
        self.filter.apply(self.sheet.entries())
    }

    pub fn focused_entry(&self) -> Option<&(EntryId, Entry)> {
        let idx = self.table_state.selected()?;
        self.visible_entries().get(idx).copied()
    }

    pub fn focused_entry_id(&self) -> Option<EntryId> {
        self.focused_entry().map(|(id, _)| id.clone())
    }

    pub fn set_status(&mut self, message: String) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Info,
            text: message,
        });
    }

    pub fn set_warning(&mut self, message: String) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Warning,
            text: message,
        });
    }

    pub fn set_error(&mut self, message: String) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Error,
            text: message,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    /// Report whether the entry's latest change reached the store.
    pub fn report_entry_outcome(&mut self, id: &EntryId, done: &str) {
        let Some(entry) = self.sheet.get(id) else {
            self.set_status(done.to_string());
            return;
        };
        if !entry.dirty {
            self.set_status(done.to_string());
            return;
        }
        let reason = match check(id, entry, self.sheet.entries()) {
            Err(rejection) => rejection.to_string(),
            Ok(()) => "waiting to be saved".to_string(),
        };
        self.set_warning(format!("Not saved: {}", reason));
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use timesheet_core::{Category, EntryRecord};

    /// A clean, loaded sheet built from `(id, date, start, end)` rows.
    pub fn sheet(rows: &[(&str, Date, time::Time, time::Time)]) -> Timesheet {
        Timesheet::from_loaded(
            rows.iter()
                .map(|(id, date, start, end)| {
                    let record = EntryRecord {
                        date: *date,
                        start: *start,
                        end: *end,
                        category: Category::Development,
                        description: String::new(),
                    };
                    (EntryId::new(*id), Entry::from_record(record))
                })
                .collect(),
        )
    }
}
