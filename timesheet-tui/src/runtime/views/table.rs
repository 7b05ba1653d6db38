use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_table_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('a') => enqueue_action(action_tx, Action::AddEntry),
        KeyCode::Enter | KeyCode::Char('e') => app.enter_edit_mode(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),
        KeyCode::Char('f') => app.begin_date_filter_edit(),
        KeyCode::Char('c') => app.cycle_category_filter(),
        KeyCode::Char('t') => app.filter_today(),
        KeyCode::Char('x') => app.clear_filters(),
        KeyCode::Char('r') => enqueue_action(action_tx, Action::Reload),
        KeyCode::Esc => app.clear_status(),
        _ => {}
    }
}
