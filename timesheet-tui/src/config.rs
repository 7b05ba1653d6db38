use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "TIMESHEET_DATA_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetConfig {
    /// Where entries and the log file live. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Store collection name; entries are kept under `<data_dir>/<collection>/`.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Filter used when `TIMESHEET_LOG` is unset, e.g. "info" or "timesheet_core=debug"
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_collection() -> String {
    "entries".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TimesheetConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            collection: default_collection(),
            log_level: default_log_level(),
        }
    }
}

impl TimesheetConfig {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("timesheet")
            .join("config.toml"))
    }

    /// Load config from disk and apply environment overrides.
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config = Self::load_from(&Self::config_path()?)?;
        Ok(config.with_data_dir_override(std::env::var_os(DATA_DIR_ENV).map(PathBuf::from)))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw)
            .with_context(|| format!("Failed to write config at {}", path.display()))?;
        Ok(())
    }

    fn with_data_dir_override(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir.filter(|dir| !dir.as_os_str().is_empty()) {
            self.data_dir = Some(dir);
        }
        self
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::data_dir()
                .context("Cannot determine data directory")?
                .join("timesheet")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = TimesheetConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, TimesheetConfig::default());
        assert_eq!(config.collection, "entries");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "data_dir = \"/tmp/sheets\"\n").unwrap();

        let config = TimesheetConfig::load_from(&path).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/sheets")));
        assert_eq!(config.collection, "entries");
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = TimesheetConfig {
            data_dir: Some(dir.path().join("data")),
            collection: "work".to_string(),
            log_level: "debug".to_string(),
        };
        config.save_to(&path).unwrap();
        assert_eq!(TimesheetConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "collection = [").unwrap();
        assert!(TimesheetConfig::load_from(&path).is_err());
    }

    #[test]
    fn env_override_replaces_data_dir() {
        let config = TimesheetConfig::default()
            .with_data_dir_override(Some(PathBuf::from("/srv/timesheet")));
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/srv/timesheet"));

        let config = TimesheetConfig::default().with_data_dir_override(Some(PathBuf::new()));
        assert_eq!(config.data_dir, None);
    }
}
