use crate::app::App;
use timesheet_core::{EntryId, FieldEdit, TimesheetError, TimesheetService};

use super::action_queue::Action;

/// Run one queued action against the store.
///
/// Store failures are reported in the status line and the UI keeps running.
/// Whatever part of the operation reached the store is kept; entries that
/// could not be written stay marked unsaved.
pub(super) async fn run_action(action: Action, app: &mut App, service: &dyn TimesheetService) {
    match action {
        Action::AddEntry => handle_add_entry(app, service).await,
        Action::ApplyEdits { id, edits } => handle_apply_edits(app, service, id, edits).await,
        Action::ConfirmDelete { id } => handle_confirm_delete(app, service, id).await,
        Action::Reload => handle_reload(app, service).await,
    }
}

async fn handle_add_entry(app: &mut App, service: &dyn TimesheetService) {
    match service.add_new(&app.sheet, app.today).await {
        Ok((sheet, id)) => {
            app.replace_sheet(sheet);
            app.reveal_entry(&id);
            app.report_entry_outcome(&id, "Entry added");
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to add entry");
            report_failure(app, "Could not add entry", e);
        }
    }
}

async fn handle_apply_edits(
    app: &mut App,
    service: &dyn TimesheetService,
    id: EntryId,
    edits: Vec<FieldEdit>,
) {
    let waiting_before = app.sheet.dirty_count();
    let mut sheet = app.sheet.clone();

    for edit in edits {
        match service.edit(&sheet, &id, edit).await {
            Ok(next) => sheet = next,
            Err(e) => {
                tracing::error!(entry_id = %id, error = %e, "failed to apply edit");
                // Edits before the failing one already reached the store.
                app.replace_sheet(sheet);
                report_failure(app, "Could not save entry", e);
                return;
            }
        }
    }

    let was_waiting = app.sheet.get(&id).is_some_and(|e| e.dirty);
    app.replace_sheet(sheet);
    let released = waiting_before
        .saturating_sub(app.sheet.dirty_count())
        .saturating_sub(usize::from(was_waiting));
    if released > 0 && app.sheet.get(&id).is_some_and(|e| !e.dirty) {
        app.set_status(format!(
            "Entry saved, along with {} waiting {}",
            released,
            if released == 1 { "entry" } else { "entries" }
        ));
    } else {
        app.report_entry_outcome(&id, "Entry saved");
    }
}

async fn handle_confirm_delete(app: &mut App, service: &dyn TimesheetService, id: EntryId) {
    match service.delete(&app.sheet, &id).await {
        Ok(sheet) => {
            app.replace_sheet(sheet);
            app.set_status("Entry deleted".to_string());
        }
        Err(e) => {
            tracing::error!(entry_id = %id, error = %e, "failed to delete entry");
            report_failure(app, "Could not delete entry", e);
        }
    }
}

/// Show `err`, adopting the state an interrupted write left behind.
fn report_failure(app: &mut App, context: &str, err: TimesheetError) {
    let message = format!("{}: {}", context, err);
    if let TimesheetError::Interrupted { sheet, .. } = err {
        app.replace_sheet(*sheet);
    }
    app.set_error(message);
}

async fn handle_reload(app: &mut App, service: &dyn TimesheetService) {
    match service.load().await {
        Ok(sheet) => {
            let unsaved = app.sheet.dirty_count();
            app.replace_sheet(sheet);
            if unsaved > 0 {
                app.set_warning(format!("Reloaded, {} unsaved changes discarded", unsaved));
            } else {
                app.set_status("Reloaded".to_string());
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to reload timesheet");
            app.set_error(format!("Could not reload: {}", e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::StatusKind;
    use std::sync::Arc;
    use time::macros::{date, time};
    use time::Date;
    use timesheet_core::adapters::outbound::{MemoryEntryStore, SequentialIds};
    use timesheet_core::TimesheetServiceImpl;

    const DAY: Date = date!(2024 - 01 - 01);

    fn setup() -> (
        App,
        MemoryEntryStore,
        TimesheetServiceImpl<MemoryEntryStore, SequentialIds>,
    ) {
        let store = MemoryEntryStore::new();
        let service =
            TimesheetServiceImpl::new(Arc::new(store.clone()), SequentialIds::new("entry"));
        (App::new(DAY), store, service)
    }

    fn entry(n: u32) -> EntryId {
        EntryId::new(format!("entry-{}", n))
    }

    #[tokio::test]
    async fn add_entry_focuses_new_row() {
        let (mut app, store, service) = setup();
        run_action(Action::AddEntry, &mut app, &service).await;
        run_action(Action::AddEntry, &mut app, &service).await;

        assert_eq!(store.len(), 2);
        assert_eq!(app.focused_entry_id(), Some(entry(2)));
        assert_eq!(app.status_text(), Some("Entry added"));
    }

    #[tokio::test]
    async fn overlapping_edit_reports_the_blocker() {
        let (mut app, store, service) = setup();
        run_action(Action::AddEntry, &mut app, &service).await;
        run_action(Action::AddEntry, &mut app, &service).await;

        let edits = vec![FieldEdit::Start(time!(8:15))];
        run_action(Action::ApplyEdits { id: entry(2), edits }, &mut app, &service).await;

        let status = app.status.clone().unwrap();
        assert_eq!(status.kind, StatusKind::Warning);
        assert_eq!(status.text, "Not saved: overlaps entry entry-1");
        assert_eq!(store.record(&entry(2)).unwrap().start, time!(8:30));
    }

    #[tokio::test]
    async fn resolving_an_overlap_reports_released_entries() {
        let (mut app, store, service) = setup();
        run_action(Action::AddEntry, &mut app, &service).await;
        run_action(Action::AddEntry, &mut app, &service).await;
        let lengthen = vec![FieldEdit::End(time!(9:00))];
        run_action(Action::ApplyEdits { id: entry(1), edits: lengthen }, &mut app, &service)
            .await;
        let lengthen = vec![FieldEdit::End(time!(9:30))];
        run_action(Action::ApplyEdits { id: entry(2), edits: lengthen }, &mut app, &service)
            .await;
        assert_eq!(app.sheet.dirty_count(), 2);

        let shift = vec![FieldEdit::Start(time!(9:00))];
        run_action(Action::ApplyEdits { id: entry(2), edits: shift }, &mut app, &service).await;

        assert_eq!(app.sheet.dirty_count(), 0);
        assert_eq!(
            app.status_text(),
            Some("Entry saved, along with 1 waiting entry")
        );
        assert_eq!(store.record(&entry(1)).unwrap().end, time!(9:00));
    }

    #[tokio::test]
    async fn store_failure_keeps_the_edit_unsaved() {
        let (mut app, store, service) = setup();
        run_action(Action::AddEntry, &mut app, &service).await;

        store.set_fail_writes(true);
        let edits = vec![FieldEdit::Description("retro".to_string())];
        run_action(Action::ApplyEdits { id: entry(1), edits }, &mut app, &service).await;

        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Error);
        let edited = app.sheet.get(&entry(1)).unwrap();
        assert_eq!(edited.description, "retro");
        assert!(edited.dirty);
        assert_eq!(store.record(&entry(1)).unwrap().description, "");

        store.set_fail_writes(false);
        run_action(Action::AddEntry, &mut app, &service).await;
        assert_eq!(app.sheet.dirty_count(), 0);
        assert_eq!(store.record(&entry(1)).unwrap().description, "retro");
    }

    #[tokio::test]
    async fn delete_with_failed_cascade_shows_the_deletion() {
        let (mut app, store, service) = setup();
        run_action(Action::AddEntry, &mut app, &service).await;
        run_action(Action::AddEntry, &mut app, &service).await;
        let overlap = vec![FieldEdit::Start(time!(8:15))];
        run_action(Action::ApplyEdits { id: entry(2), edits: overlap }, &mut app, &service)
            .await;

        store.set_fail_puts(true);
        run_action(Action::ConfirmDelete { id: entry(1) }, &mut app, &service).await;

        assert_eq!(app.status.as_ref().unwrap().kind, StatusKind::Error);
        assert!(!app.sheet.contains(&entry(1)));
        assert!(store.record(&entry(1)).is_none());
        assert!(app.sheet.get(&entry(2)).unwrap().dirty);
    }

    #[tokio::test]
    async fn delete_and_reload() {
        let (mut app, store, service) = setup();
        run_action(Action::AddEntry, &mut app, &service).await;
        run_action(Action::ConfirmDelete { id: entry(1) }, &mut app, &service).await;
        assert!(app.sheet.is_empty());
        assert!(store.is_empty());
        assert_eq!(app.status_text(), Some("Entry deleted"));

        run_action(Action::Reload, &mut app, &service).await;
        assert!(app.sheet.is_empty());
        assert_eq!(app.status_text(), Some("Reloaded"));
    }
}
