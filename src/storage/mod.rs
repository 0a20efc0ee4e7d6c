pub mod json_backend;

use std::path::Path;

use crate::{dashboard::Dashboard, errors::DashboardError};

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Abstraction over persistence backends capable of storing dashboards and
/// snapshots. Stands in for the hosted backend at the system boundary:
/// reads are whole-record-set fetches, writes replace single dashboards.
pub trait StorageBackend: Send + Sync {
    fn save(&self, dashboard: &Dashboard, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Dashboard>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, dashboard: &Dashboard, name: &str, note: Option<&str>) -> Result<()>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<Dashboard>;

    /// Optional helpers for ad-hoc file operations. Default implementations
    /// forward to managed storage when not overridden.
    fn save_to_path(&self, dashboard: &Dashboard, path: &Path) -> Result<()> {
        json_backend::save_dashboard_to_path(dashboard, path)
    }

    fn load_from_path(&self, path: &Path) -> Result<Dashboard> {
        json_backend::load_dashboard_from_path(path)
    }
}

pub use json_backend::{dashboard_warnings, JsonStorage};
