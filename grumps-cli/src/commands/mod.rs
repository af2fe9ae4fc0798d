pub(crate) mod config;
pub(crate) mod parse;
pub(crate) mod playback;
pub(crate) mod skip;
pub(crate) mod videos;

use std::path::PathBuf;

use grumps_db::{SkippedGameStore, VideoLibrary};

use crate::CliError;
use crate::settings::{resolve_database_path, settings_path};

/// Resolve the database path and make sure its directory exists.
pub(crate) fn database_path(db: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let (path, source) = resolve_database_path(db, &settings_path());
    log::debug!("Using database {} ({:?})", path.display(), source);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::database(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    Ok(path)
}

/// The skip store and video library, both backed by the same database file.
pub(crate) fn open_player(db: Option<PathBuf>) -> Result<(SkippedGameStore, VideoLibrary), CliError> {
    let path = database_path(db)?;
    Ok((SkippedGameStore::new(&path), VideoLibrary::new(path)))
}

/// Format a millisecond offset as `m:ss` (or `h:mm:ss`).
pub(crate) fn format_position(position_ms: u64) -> String {
    let total = position_ms / 1000;
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::format_position;

    #[test]
    fn formats_positions() {
        assert_eq!(format_position(0), "0:00");
        assert_eq!(format_position(61_500), "1:01");
        assert_eq!(format_position(3_725_000), "1:02:05");
    }
}
