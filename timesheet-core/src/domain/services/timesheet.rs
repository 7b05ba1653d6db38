use std::sync::Arc;

use async_trait::async_trait;
use time::Date;

use crate::domain::{
    models::{Entry, EntryId},
    ports::{
        inbound::TimesheetService,
        outbound::{EntryStore, IdGenerator},
    },
    timesheet::{Effect, Event, Timesheet},
    StoreError, TimesheetError,
};

/// Implementation of the TimesheetService inbound port.
///
/// Runs the pure [`Timesheet::update`] transition and then executes its
/// effects against the store, one at a time and in order. A failing store
/// call stops the batch; entries left unwritten stay dirty and are retried by
/// the next event's sweep.
pub struct TimesheetServiceImpl<S, G> {
    store: Arc<S>,
    ids: G,
}

impl<S, G> TimesheetServiceImpl<S, G> {
    pub fn new(store: Arc<S>, ids: G) -> Self {
        Self { store, ids }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

impl<S: EntryStore, G: IdGenerator> TimesheetServiceImpl<S, G> {
    /// Run `effects` in order, stopping at the first failure.
    ///
    /// On failure returns the index of the effect that failed; everything
    /// before it has been written.
    async fn execute(&self, effects: &[Effect]) -> Result<(), (usize, StoreError)> {
        for (idx, effect) in effects.iter().enumerate() {
            match effect {
                Effect::Put { id, record } => {
                    self.store.put(id, record).await.map_err(|e| (idx, e))?;
                    tracing::info!(entry_id = %id, date = %record.date, "entry saved");
                }
                Effect::Delete { id } => {
                    self.store.delete(id).await.map_err(|e| (idx, e))?;
                    tracing::info!(entry_id = %id, "entry deleted");
                }
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<S: EntryStore, G: IdGenerator> TimesheetService for TimesheetServiceImpl<S, G> {
    async fn load(&self) -> Result<Timesheet, TimesheetError> {
        let keys = self.store.list_keys().await?;
        let mut loaded = Vec::with_capacity(keys.len());

        for id in keys {
            match self.store.get(&id).await {
                Ok(Some(record)) => loaded.push((id, Entry::from_record(record))),
                Ok(None) => {
                    tracing::warn!(entry_id = %id, "entry disappeared while loading, skipping");
                }
                Err(err @ StoreError::Serialization { .. }) => {
                    tracing::warn!(entry_id = %id, error = %err, "skipping unreadable entry");
                }
                Err(err) => return Err(err.into()),
            }
        }

        let sheet = Timesheet::from_loaded(loaded);
        tracing::info!(
            entries = sheet.len(),
            invalid = sheet.invalid_count(),
            "timesheet loaded"
        );
        Ok(sheet)
    }

    async fn apply(&self, sheet: &Timesheet, event: Event) -> Result<Timesheet, TimesheetError> {
        let (next, effects) = sheet.update(event)?;
        if let Err((failed, source)) = self.execute(&effects).await {
            tracing::warn!(
                written = failed,
                pending = effects.len() - failed,
                error = %source,
                "store write interrupted"
            );
            let settled = sheet.settle_partial(next, &effects[failed..]);
            return Err(TimesheetError::Interrupted {
                sheet: Box::new(settled),
                source,
            });
        }
        Ok(next)
    }

    async fn add_new(
        &self,
        sheet: &Timesheet,
        today: Date,
    ) -> Result<(Timesheet, EntryId), TimesheetError> {
        let id = self.ids.next_id();
        let next = self
            .apply(
                sheet,
                Event::Add {
                    id: id.clone(),
                    today,
                },
            )
            .await?;
        Ok((next, id))
    }
}
