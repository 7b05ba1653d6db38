use super::widgets::input_spans;
use super::*;
use crate::app::{field_text, EntryEditState};
use timesheet_core::{Entry, EntryField};

const COLUMNS: [EntryField; 5] = EntryField::ALL;

pub fn render_entry_table(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Entries ");

    let rows = build_rows(app);
    if rows.is_empty() {
        let hint = if app.sheet.is_empty() {
            "No entries yet. Press a to add one."
        } else {
            "No entries match the filter. Press x to clear it."
        };
        let paragraph = Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(["", "Date", "Start", "End", "Category", "Description"]).style(
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );
    let widths = [
        Constraint::Length(2),
        Constraint::Length(10),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(11),
        Constraint::Min(10),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(2)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn build_rows(app: &App) -> Vec<Row<'static>> {
    app.visible_entries()
        .into_iter()
        .map(|(id, entry)| match &app.edit_state {
            Some(state) if &state.entry_id == id => edit_row(entry, state),
            _ => entry_row(entry),
        })
        .collect()
}

/// `!` for entries that fail validation, `*` for changes not yet stored.
fn marker_cell(entry: &Entry) -> Cell<'static> {
    let invalid = if entry.valid {
        Span::raw(" ")
    } else {
        Span::styled(
            "!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };
    let dirty = if entry.dirty {
        Span::styled("*", Style::default().fg(Color::Yellow))
    } else {
        Span::raw(" ")
    };
    Cell::from(Line::from(vec![invalid, dirty]))
}

fn entry_row(entry: &Entry) -> Row<'static> {
    let mut cells = vec![marker_cell(entry)];
    cells.extend(
        COLUMNS
            .into_iter()
            .map(|field| Cell::from(field_text(entry, field))),
    );
    let style = if entry.valid {
        Style::default()
    } else {
        Style::default().fg(Color::Red)
    };
    Row::new(cells).style(style)
}

fn edit_row(entry: &Entry, state: &EntryEditState) -> Row<'static> {
    let mut cells = vec![marker_cell(entry)];
    cells.extend(COLUMNS.into_iter().map(|field| {
        let input = state.input(field);
        if field == state.focused_field {
            Cell::from(Line::from(input_spans(
                input,
                Style::default().fg(Color::Cyan),
            )))
        } else if state.is_changed(field) {
            Cell::from(Span::styled(
                input.value.clone(),
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Cell::from(input.value.clone())
        }
    }));
    Row::new(cells)
}
