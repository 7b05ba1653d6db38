use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_edit_entry_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab => app.edit_next_field(),
        KeyCode::BackTab => app.edit_previous_field(),
        KeyCode::Enter => {
            if let Some((id, edits)) = app.submit_edit() {
                enqueue_action(action_tx, Action::ApplyEdits { id, edits });
            }
        }
        KeyCode::Esc => app.exit_edit_mode(),
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.with_edit_input(|input| input.clear());
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.with_edit_input(|input| input.insert(c));
        }
        KeyCode::Backspace => app.with_edit_input(|input| input.backspace()),
        KeyCode::Left => app.with_edit_input(|input| input.move_left()),
        KeyCode::Right => app.with_edit_input(|input| input.move_right()),
        KeyCode::Home => app.with_edit_input(|input| input.home()),
        KeyCode::End => app.with_edit_input(|input| input.end()),
        _ => {}
    }
}
