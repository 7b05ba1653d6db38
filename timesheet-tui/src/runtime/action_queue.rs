use timesheet_core::{EntryId, FieldEdit};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work that touches the store. Key handlers only enqueue these; the event
/// loop runs them one at a time, so no two store updates interleave.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    AddEntry,
    ApplyEdits { id: EntryId, edits: Vec<FieldEdit> },
    ConfirmDelete { id: EntryId },
    Reload,
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
