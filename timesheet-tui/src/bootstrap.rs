use crate::app::App;
use crate::config::TimesheetConfig;
use anyhow::{Context, Result};
use std::sync::Arc;
use timesheet_core::adapters::outbound::{FileEntryStore, MemoryEntryStore, UuidGenerator};
use timesheet_core::{TimesheetService, TimesheetServiceImpl};

/// Wire the service to its store: the file store under the configured data
/// directory, or an in-memory store when `ephemeral` is set.
pub fn build_service(
    config: &TimesheetConfig,
    ephemeral: bool,
) -> Result<Box<dyn TimesheetService>> {
    if ephemeral {
        tracing::info!("using in-memory store, nothing will be written to disk");
        let store = Arc::new(MemoryEntryStore::new());
        return Ok(Box::new(TimesheetServiceImpl::new(store, UuidGenerator)));
    }

    let store = FileEntryStore::new(config.data_dir()?, &config.collection);
    tracing::info!(dir = %store.dir().display(), "using file store");
    Ok(Box::new(TimesheetServiceImpl::new(Arc::new(store), UuidGenerator)))
}

pub async fn initialize_app_state(app: &mut App, service: &dyn TimesheetService) -> Result<()> {
    let sheet = service.load().await.context("Failed to load timesheet")?;
    app.replace_sheet(sheet);

    let invalid = app.sheet.invalid_count();
    if invalid > 0 {
        app.set_warning(format!(
            "{} stored entries overlap or end before they start",
            invalid
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use time::macros::date;

    fn config_in(dir: &TempDir) -> TimesheetConfig {
        TimesheetConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..TimesheetConfig::default()
        }
    }

    #[tokio::test]
    async fn file_store_persists_between_sessions() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let service = build_service(&config, false).unwrap();
        let sheet = service.load().await.unwrap();
        let (_, id) = service
            .add_new(&sheet, date!(2024 - 01 - 01))
            .await
            .unwrap();
        assert!(dir
            .path()
            .join("entries")
            .join(format!("{}.json", id))
            .exists());

        let service = build_service(&config, false).unwrap();
        let reloaded = service.load().await.unwrap();
        assert!(reloaded.contains(&id));
    }

    #[tokio::test]
    async fn ephemeral_store_leaves_data_dir_untouched() {
        let dir = TempDir::new().unwrap();
        let service = build_service(&config_in(&dir), true).unwrap();
        let sheet = service.load().await.unwrap();
        service
            .add_new(&sheet, date!(2024 - 01 - 01))
            .await
            .unwrap();
        assert!(!dir.path().join("entries").exists());
    }

    #[tokio::test]
    async fn stored_overlaps_are_reported_on_startup() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);
        let entries = dir.path().join("entries");
        std::fs::create_dir_all(&entries).unwrap();
        for (key, start, end) in [("a", "08:00", "09:00"), ("b", "08:30", "09:30")] {
            let raw = format!(
                r#"{{"date":"2024-01-01","start":"{start}","end":"{end}","category":"Support"}}"#
            );
            std::fs::write(entries.join(format!("{key}.json")), raw).unwrap();
        }

        let service = build_service(&config, false).unwrap();
        let mut app = App::new(date!(2024 - 01 - 01));
        initialize_app_state(&mut app, service.as_ref()).await.unwrap();

        assert_eq!(app.sheet.len(), 2);
        assert!(app.status_text().unwrap().contains("2 stored entries"));
    }
}
