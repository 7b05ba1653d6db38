use timesheet_core::{format_date, format_time, EditError, Entry, EntryField, EntryId, FieldEdit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Table,
    EditEntry,
    EditDateFilter,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.value.split_at(self.cursor)
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.value[..pos]
            .char_indices()
            .next_back()
            .map_or(0, |(idx, _)| idx)
    }

    fn next_boundary(&self, pos: usize) -> usize {
        self.value[pos..]
            .chars()
            .next()
            .map_or(pos, |c| pos + c.len_utf8())
    }
}

/// The row being edited: one text input per field, plus the text each field
/// started with so only touched fields are submitted.
#[derive(Debug, Clone)]
pub struct EntryEditState {
    pub entry_id: EntryId,
    pub focused_field: EntryField,
    inputs: [TextInput; 5],
    originals: [String; 5],
}

fn field_index(field: EntryField) -> usize {
    match field {
        EntryField::Date => 0,
        EntryField::Start => 1,
        EntryField::End => 2,
        EntryField::Category => 3,
        EntryField::Description => 4,
    }
}

pub fn field_text(entry: &Entry, field: EntryField) -> String {
    match field {
        EntryField::Date => format_date(entry.date),
        EntryField::Start => format_time(entry.start),
        EntryField::End => format_time(entry.end),
        EntryField::Category => entry.category.to_string(),
        EntryField::Description => entry.description.clone(),
    }
}

impl EntryEditState {
    pub fn from_entry(id: &EntryId, entry: &Entry) -> Self {
        let originals = EntryField::ALL.map(|field| field_text(entry, field));
        Self {
            entry_id: id.clone(),
            focused_field: EntryField::Start,
            inputs: originals.clone().map(|text| TextInput::from_str(&text)),
            originals,
        }
    }

    pub fn input(&self, field: EntryField) -> &TextInput {
        &self.inputs[field_index(field)]
    }

    pub fn focused_input_mut(&mut self) -> &mut TextInput {
        &mut self.inputs[field_index(self.focused_field)]
    }

    pub fn is_changed(&self, field: EntryField) -> bool {
        let idx = field_index(field);
        self.inputs[idx].value != self.originals[idx]
    }

    /// Parse every changed field, in field order.
    ///
    /// Either all changed fields parse or nothing is returned, so a typo in
    /// one field never applies half a form.
    pub fn changed_edits(&self) -> Result<Vec<FieldEdit>, EditError> {
        EntryField::ALL
            .into_iter()
            .filter(|field| self.is_changed(*field))
            .map(|field| FieldEdit::parse(field, &self.input(field).value))
            .collect()
    }
}
