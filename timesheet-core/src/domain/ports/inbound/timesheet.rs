use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{EntryId, FieldEdit},
    timesheet::{Event, Timesheet},
    TimesheetError,
};

/// Inbound port for timesheet operations.
///
/// The timesheet state is passed in and a new state handed back; the service
/// itself only owns the store and the id generator.
#[async_trait]
pub trait TimesheetService: Send + Sync + 'static {
    /// Read every stored entry, sorted for display and validated.
    async fn load(&self) -> Result<Timesheet, TimesheetError>;

    /// Apply `event` and write the resulting changes to the store.
    ///
    /// If a write fails, the error is [`TimesheetError::Interrupted`] and
    /// carries the state to continue from instead of `sheet`.
    async fn apply(&self, sheet: &Timesheet, event: Event) -> Result<Timesheet, TimesheetError>;

    /// Create an entry with default values for `today`.
    async fn add_new(
        &self,
        sheet: &Timesheet,
        today: Date,
    ) -> Result<(Timesheet, EntryId), TimesheetError>;

    async fn edit(
        &self,
        sheet: &Timesheet,
        id: &EntryId,
        edit: FieldEdit,
    ) -> Result<Timesheet, TimesheetError> {
        self.apply(
            sheet,
            Event::Edit {
                id: id.clone(),
                edit,
            },
        )
        .await
    }

    async fn delete(&self, sheet: &Timesheet, id: &EntryId) -> Result<Timesheet, TimesheetError> {
        self.apply(sheet, Event::Delete { id: id.clone() }).await
    }
}
