use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    dashboard::Dashboard,
    errors::DashboardError,
    utils::{
        app_data_dir, ensure_dir, json_file_names, read_json, sort_newest_first,
        stamped_file_name, write_json_atomic,
    },
};

use super::{Result, StorageBackend};

const DASHBOARD_DIR: &str = "dashboards";
const BACKUP_DIR: &str = "backups";
const STATE_FILE: &str = "state.json";
const DEFAULT_RETENTION: usize = 5;

/// JSON-file storage rooted at the app data directory.
///
/// Stands in for the hosted backend: one file per dashboard, whole-file
/// reads and writes, timestamped snapshots under `backups/<name>/`.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
    retention: usize,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>, retention: Option<usize>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        ensure_dir(&root.join(DASHBOARD_DIR))?;
        ensure_dir(&root.join(BACKUP_DIR))?;
        Ok(Self {
            root,
            retention: retention.unwrap_or(DEFAULT_RETENTION).max(1),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None, None)
    }

    pub fn dashboard_path(&self, name: &str) -> PathBuf {
        self.root
            .join(DASHBOARD_DIR)
            .join(format!("{}.json", canonical_name(name)))
    }

    pub fn backup_path(&self, name: &str, backup_name: &str) -> PathBuf {
        self.backup_dir(name).join(backup_name)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    /// The last dashboard opened, tracked in the shared state file.
    pub fn last_dashboard(&self) -> Result<Option<String>> {
        Ok(self.read_state()?.last_dashboard)
    }

    pub fn record_last_dashboard(&self, name: Option<&str>) -> Result<()> {
        let mut state = self.read_state()?;
        state.last_dashboard = name.map(canonical_name);
        write_json_atomic(&self.root.join(STATE_FILE), &state)
    }

    fn backup_dir(&self, name: &str) -> PathBuf {
        self.root.join(BACKUP_DIR).join(canonical_name(name))
    }

    fn read_state(&self) -> Result<StoreState> {
        match read_json(&self.root.join(STATE_FILE)) {
            Ok(state) => Ok(state),
            Err(DashboardError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                Ok(StoreState::default())
            }
            Err(err) => Err(err),
        }
    }

    /// Snapshots the on-disk file before it gets overwritten.
    fn snapshot_existing(&self, name: &str, path: &Path) -> Result<()> {
        let dir = self.backup_dir(name);
        ensure_dir(&dir)?;
        let backup_name = stamped_file_name(&canonical_name(name), None);
        fs::copy(path, dir.join(backup_name))?;
        self.prune_backups(name)
    }

    fn prune_backups(&self, name: &str) -> Result<()> {
        let backups = self.list_backups(name)?;
        for stale in backups.iter().skip(self.retention) {
            if let Err(err) = fs::remove_file(self.backup_path(name, stale)) {
                tracing::warn!(backup = %stale, %err, "failed to prune backup");
            }
        }
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, dashboard: &Dashboard, name: &str) -> Result<()> {
        let path = self.dashboard_path(name);
        if path.exists() {
            self.snapshot_existing(name, &path)?;
        }
        write_json_atomic(&path, dashboard)
    }

    fn load(&self, name: &str) -> Result<Dashboard> {
        let path = self.dashboard_path(name);
        if !path.exists() {
            return Err(DashboardError::NotFound(format!(
                "dashboard `{}`",
                canonical_name(name)
            )));
        }
        load_dashboard_from_path(&path)
    }

    /// Backup names for a dashboard, newest first.
    fn list_backups(&self, name: &str) -> Result<Vec<String>> {
        let mut names = json_file_names(&self.backup_dir(name))?;
        sort_newest_first(&mut names);
        Ok(names)
    }

    fn backup(&self, dashboard: &Dashboard, name: &str, note: Option<&str>) -> Result<()> {
        let dir = self.backup_dir(name);
        ensure_dir(&dir)?;
        let backup_name = stamped_file_name(&canonical_name(name), note);
        write_json_atomic(&dir.join(backup_name), dashboard)?;
        self.prune_backups(name)
    }

    fn restore(&self, name: &str, backup_name: &str) -> Result<Dashboard> {
        let backup_path = self.backup_path(name, backup_name);
        if !backup_path.exists() {
            return Err(DashboardError::StorageError(format!(
                "backup `{}` not found",
                backup_name
            )));
        }
        let target = self.dashboard_path(name);
        if let Some(parent) = target.parent() {
            ensure_dir(parent)?;
        }
        fs::copy(&backup_path, &target)?;
        load_dashboard_from_path(&target)
    }
}

pub fn save_dashboard_to_path(dashboard: &Dashboard, path: &Path) -> Result<()> {
    write_json_atomic(path, dashboard)
}

/// Loads a dashboard and orders its records by date, the way the backend
/// returns its fetch-all queries.
pub fn load_dashboard_from_path(path: &Path) -> Result<Dashboard> {
    let mut dashboard: Dashboard = read_json(path)?;
    dashboard.sort_by_date();
    Ok(dashboard)
}

/// Non-fatal data quality findings. Anomalous rows are kept, never dropped;
/// these are for surfacing in logs only.
pub fn dashboard_warnings(dashboard: &Dashboard) -> Vec<String> {
    let mut warnings = Vec::new();
    for expense in &dashboard.expenses {
        if expense.date.is_none() && expense.due_date.is_none() {
            warnings.push(format!(
                "expense {} has no date and is excluded from period filters",
                expense.id
            ));
        }
        if let (Some(amount), Some(total)) = (expense.amount, expense.total_amount) {
            if total < amount {
                warnings.push(format!(
                    "expense {} has total {} below base amount {}",
                    expense.id, total, amount
                ));
            }
        }
        if expense.owner_id != dashboard.owner_id {
            warnings.push(format!(
                "expense {} belongs to a different owner",
                expense.id
            ));
        }
    }
    for revenue in &dashboard.revenues {
        if revenue.date.is_none() {
            warnings.push(format!(
                "revenue {} has no date and is excluded from period filters",
                revenue.id
            ));
        }
        if revenue.owner_id != dashboard.owner_id {
            warnings.push(format!(
                "revenue {} belongs to a different owner",
                revenue.id
            ));
        }
    }
    warnings
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    last_dashboard: Option<String>,
}

/// File-name-safe slug for a dashboard name. Never empty.
fn canonical_name(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| match c {
            'A'..='Z' => c.to_ascii_lowercase(),
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if slug.chars().all(|c| c == '_') {
        "dashboard".into()
    } else {
        slug
    }
}
