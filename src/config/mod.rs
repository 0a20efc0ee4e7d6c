use serde::{Deserialize, Serialize};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    errors::{DashboardError, Result},
    utils::{
        app_data_dir, ensure_dir, json_file_names, read_json, sort_newest_first,
        stamped_file_name, write_json_atomic,
    },
};

const CONFIG_FILE: &str = "config.json";
const CONFIG_BACKUP_DIR: &str = "config_backups";

/// User-facing preferences, persisted as JSON next to the dashboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_opened_dashboard: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "pt-BR".into(),
            currency: "BRL".into(),
            theme: None,
            default_company: None,
            last_opened_dashboard: None,
        }
    }
}

/// Loads, saves, and snapshots the configuration file under a base dir.
pub struct ConfigManager {
    base: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        ensure_dir(&base.join(CONFIG_BACKUP_DIR))?;
        Ok(Self { base })
    }

    /// The stored configuration, or defaults when none was saved yet.
    pub fn load(&self) -> Result<Config> {
        match read_json(&self.config_path()) {
            Ok(config) => Ok(config),
            Err(DashboardError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                Ok(Config::default())
            }
            Err(err) => Err(err),
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        write_json_atomic(&self.config_path(), config)
    }

    /// Snapshots the configuration under a timestamped name, returning it.
    pub fn backup(&self, config: &Config, note: Option<&str>) -> Result<String> {
        let name = stamped_file_name("config", note);
        write_json_atomic(&self.backups_dir().join(&name), config)?;
        Ok(name)
    }

    pub fn restore(&self, backup_name: &str) -> Result<Config> {
        let path = self.backups_dir().join(backup_name);
        if !path.exists() {
            return Err(DashboardError::ConfigError(format!(
                "configuration backup `{}` not found",
                backup_name
            )));
        }
        read_json(&path)
    }

    /// Backup names, newest first.
    pub fn list_backups(&self) -> Result<Vec<String>> {
        let mut names = json_file_names(&self.backups_dir())?;
        sort_newest_first(&mut names);
        Ok(names)
    }

    pub fn config_path(&self) -> PathBuf {
        self.base.join(CONFIG_FILE)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    fn backups_dir(&self) -> PathBuf {
        self.base.join(CONFIG_BACKUP_DIR)
    }
}
