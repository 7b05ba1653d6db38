use super::*;
use timesheet_core::FieldEdit;

impl App {
    /// Open the focused row for editing.
    pub fn enter_edit_mode(&mut self) {
        let Some((id, entry)) = self.focused_entry() else {
            return;
        };
        self.edit_state = Some(EntryEditState::from_entry(id, entry));
        self.navigate_to(View::EditEntry);
    }

    pub fn exit_edit_mode(&mut self) {
        self.edit_state = None;
        self.navigate_to(View::Table);
    }

    pub fn edit_next_field(&mut self) {
        if let Some(state) = &mut self.edit_state {
            state.focused_field = state.focused_field.next();
        }
    }

    pub fn edit_previous_field(&mut self) {
        if let Some(state) = &mut self.edit_state {
            state.focused_field = state.focused_field.previous();
        }
    }

    /// Run `f` on the focused field's input.
    pub fn with_edit_input(&mut self, f: impl FnOnce(&mut TextInput)) {
        if let Some(state) = &mut self.edit_state {
            f(state.focused_input_mut());
            self.clear_status();
        }
    }

    /// Parse the form. On success edit mode is closed and the changed fields
    /// are returned for the given entry; an untouched form yields nothing.
    /// A parse error keeps the form open and applies nothing.
    pub fn submit_edit(&mut self) -> Option<(EntryId, Vec<FieldEdit>)> {
        let state = self.edit_state.as_mut()?;
        match state.changed_edits() {
            Ok(edits) => {
                let id = state.entry_id.clone();
                self.exit_edit_mode();
                if edits.is_empty() {
                    return None;
                }
                Some((id, edits))
            }
            Err(e) => {
                self.set_error(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::sheet;
    use super::*;
    use time::macros::{date, time};
    use timesheet_core::EntryField;

    const DAY: Date = date!(2024 - 01 - 01);

    fn editing_app() -> App {
        let mut app = App::new(DAY);
        app.replace_sheet(sheet(&[("a", DAY, time!(8:00), time!(9:00))]));
        app.enter_edit_mode();
        app
    }

    fn type_text(app: &mut App, text: &str) {
        app.with_edit_input(|input| {
            input.clear();
            text.chars().for_each(|c| input.insert(c));
        });
    }

    #[test]
    fn edit_mode_starts_on_start_time() {
        let app = editing_app();
        assert_eq!(app.current_view, View::EditEntry);
        let state = app.edit_state.as_ref().unwrap();
        assert_eq!(state.focused_field, EntryField::Start);
        assert_eq!(state.input(EntryField::End).value, "09:00");
    }

    #[test]
    fn submit_returns_changed_fields() {
        let mut app = editing_app();
        app.edit_next_field();
        type_text(&mut app, "9:30");

        let (id, edits) = app.submit_edit().unwrap();
        assert_eq!(id, EntryId::new("a"));
        assert_eq!(edits, vec![FieldEdit::End(time!(9:30))]);
        assert!(app.edit_state.is_none());
        assert_eq!(app.current_view, View::Table);
    }

    #[test]
    fn untouched_submit_just_closes() {
        let mut app = editing_app();
        assert!(app.submit_edit().is_none());
        assert!(app.edit_state.is_none());
    }

    #[test]
    fn parse_error_keeps_form_open() {
        let mut app = editing_app();
        type_text(&mut app, "25:00");

        assert!(app.submit_edit().is_none());
        assert!(app.edit_state.is_some());
        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Error);

        type_text(&mut app, "10:00");
        assert!(app.status.is_none());
    }
}
