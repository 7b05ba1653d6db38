use crate::app::{App, StatusKind, TextInput, View};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Padding, Paragraph, Row, Table},
    Frame,
};

mod delete_dialog;
mod entry_table;
mod filter_bar;
pub(super) mod utils;
pub(super) mod widgets;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    filter_bar::render_filter_bar(frame, app, root[0]);
    entry_table::render_entry_table(frame, app, root[1]);
    widgets::render_status_line(frame, app, root[2]);
    widgets::render_key_hints(frame, app, root[3]);

    if app.current_view == View::ConfirmDelete {
        delete_dialog::render_delete_confirm_dialog(frame, app);
    }
}
