use crate::app::App;
use crate::time_utils::local_today;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use time::UtcOffset;
use timesheet_core::TimesheetService;

use super::action_queue::channel;
use super::actions::run_action;
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    service: &dyn TimesheetService,
    local_offset: UtcOffset,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        app.today = local_today(local_offset);
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_view_key(key, app, &action_tx);
                }
            }
        }

        // Each action finishes its store writes before the next one starts.
        while let Ok(action) = action_rx.try_recv() {
            tracing::debug!(?action, "running action");
            run_action(action, app, service).await;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
