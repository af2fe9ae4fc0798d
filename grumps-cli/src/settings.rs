//! Player settings (database location, config file location).
//!
//! The settings file is `~/.config/grumps-player/settings.toml`. Only the
//! `[storage]` table is owned here; other keys are preserved on write.

use std::io;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "grumps-player";

/// Canonical path to the settings file: `~/.config/grumps-player/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join(APP_DIR).join("settings.toml")
}

/// Where the database lives when nothing overrides it.
pub(crate) fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join(APP_DIR).join("grumps.db")
}

/// Where a database path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DatabaseSource {
    CommandLine,
    SettingsFile,
    Default,
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `storage.database` in `settings.toml`
/// 3. The platform data directory
pub(crate) fn resolve_database_path(
    cli_override: Option<PathBuf>,
    settings: &Path,
) -> (PathBuf, DatabaseSource) {
    if let Some(p) = cli_override {
        return (p, DatabaseSource::CommandLine);
    }
    if let Some(p) = load_database_path(settings) {
        return (p, DatabaseSource::SettingsFile);
    }
    (default_database_path(), DatabaseSource::Default)
}

/// Read `storage.database` from the settings file, if set.
fn load_database_path(settings: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let db = doc.get("storage")?.get("database")?.as_str()?;
    if db.is_empty() {
        None
    } else {
        Some(PathBuf::from(db))
    }
}

/// Save (or clear) the database path in the settings file.
///
/// Uses `toml::Value` for a surgical update so unrelated keys survive.
pub(crate) fn save_database_path(settings: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let storage = table
        .entry("storage")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let storage_table = storage
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[storage] is not a table"))?;

    match path {
        Some(p) => {
            storage_table.insert(
                "database".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            storage_table.remove("database");
        }
    }

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string(settings: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(settings).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
