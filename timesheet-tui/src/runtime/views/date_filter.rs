use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub(super) fn handle_date_filter_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            app.apply_date_filter_input();
        }
        KeyCode::Esc => app.navigate_to(View::Table),
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.date_filter_input.clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.date_filter_input.insert(c);
        }
        KeyCode::Backspace => app.date_filter_input.backspace(),
        KeyCode::Left => app.date_filter_input.move_left(),
        KeyCode::Right => app.date_filter_input.move_right(),
        KeyCode::Home => app.date_filter_input.home(),
        KeyCode::End => app.date_filter_input.end(),
        _ => {}
    }
}
