use std::sync::Once;
use std::{env, fs, path::Path, path::PathBuf};

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::Result;

const DEFAULT_DIR_NAME: &str = ".painel_core";
const STAMP_FORMAT: &str = "%Y%m%d_%H%M";

/// Returns the application data directory, defaulting to `~/.painel_core`.
/// `PAINEL_CORE_HOME` overrides it, which the tests rely on.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("PAINEL_CORE_HOME") {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Creates `path` and its parents when missing.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Serializes `value` as pretty JSON and writes it through a sibling tmp
/// file plus rename, so a crash mid-write never leaves a torn file.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, serde_json::to_string_pretty(value)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Names of the `.json` files in `dir`. An absent directory is an empty
/// list, not an error.
pub fn json_file_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

/// Reduces a free-text backup note to a file-name-safe slug, or `None`
/// when nothing usable remains.
pub fn note_slug(note: Option<&str>) -> Option<String> {
    let slug = note?
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    (!slug.is_empty()).then_some(slug)
}

/// Builds `{stem}_{YYYYMMDD_HHMM}[_{note-slug}].json` for backup files.
pub fn stamped_file_name(stem: &str, note: Option<&str>) -> String {
    let stamp = Utc::now().format(STAMP_FORMAT);
    match note_slug(note) {
        Some(slug) => format!("{stem}_{stamp}_{slug}.json"),
        None => format!("{stem}_{stamp}.json"),
    }
}

/// Recovers the timestamp embedded in a stamped file name, noted or not.
pub fn stamp_of(file_name: &str) -> Option<DateTime<Utc>> {
    let stem = file_name.strip_suffix(".json")?;
    let parts: Vec<&str> = stem.split('_').collect();
    for pair in parts.windows(2) {
        if !is_digits(pair[0], 8) || !is_digits(pair[1], 4) {
            continue;
        }
        let raw = format!("{}{}", pair[0], pair[1]);
        return NaiveDateTime::parse_from_str(&raw, "%Y%m%d%H%M")
            .ok()
            .map(|naive| DateTime::from_naive_utc_and_offset(naive, Utc));
    }
    None
}

/// Orders stamped file names newest first; names without a recoverable
/// timestamp sink to the end.
pub fn sort_newest_first(names: &mut [String]) {
    names.sort_by(|a, b| stamp_of(b).cmp(&stamp_of(a)));
}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("painel_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_slug_keeps_only_safe_characters() {
        assert_eq!(
            note_slug(Some("antes da limpeza")),
            Some("antes-da-limpeza".into())
        );
        assert_eq!(
            note_slug(Some("  Fechamento: Maio/2024  ")),
            Some("fechamento-maio-2024".into())
        );
        assert_eq!(note_slug(Some("!!!")), None);
        assert_eq!(note_slug(None), None);
    }

    #[test]
    fn stamp_roundtrips_through_file_names() {
        for name in [
            stamped_file_name("empresas", None),
            stamped_file_name("empresas", Some("fechamento maio")),
        ] {
            assert!(stamp_of(&name).is_some(), "no stamp recovered from {name}");
        }
        assert_eq!(stamp_of("sem_carimbo.json"), None);
    }
}
