use std::path::{Path, PathBuf};

use grumps_core::VideoMetadata;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::open_player;

/// Load a catalog export (a JSON array of video records) into the cache.
pub(crate) fn run_videos_import(db: Option<PathBuf>, file: &Path) -> Result<(), CliError> {
    let contents = std::fs::read_to_string(file)?;
    let videos: Vec<VideoMetadata> = serde_json::from_str(&contents)
        .map_err(|e| CliError::catalog(format!("Failed to parse {}: {}", file.display(), e)))?;

    let (_, library) = open_player(db)?;
    let stats = library
        .import(videos)
        .map_err(|e| CliError::database(format!("Failed to import videos: {}", e)))?;

    log::info!(
        "{}",
        format!("Imported {} video(s)", stats.total()).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  New:        {:>6}", stats.inserted);
    log::info!("  Updated:    {:>6}", stats.updated);
    log::info!("  Unchanged:  {:>6}", stats.unchanged);
    Ok(())
}

/// List cached videos, newest first. Skipped games are hidden unless `all`.
pub(crate) fn run_videos_list(
    db: Option<PathBuf>,
    all: bool,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let (store, library) = open_player(db)?;
    let videos = library
        .all()
        .map_err(|e| CliError::database(format!("Failed to read videos: {}", e)))?;

    if videos.is_empty() {
        log::info!("No videos cached. Run 'grumps videos import <FILE>' first.");
        return Ok(());
    }

    let skipped = store.list();
    let shown: Vec<VideoMetadata> = if all {
        videos
    } else {
        grumps_core::retain_unskipped(videos, &skipped)
    };

    for video in shown.iter().take(limit.unwrap_or(usize::MAX)) {
        let line = format!(
            "{}  {}",
            video.uploaded_at().format("%Y-%m-%d"),
            video,
        );
        if skipped.contains(video.game()) {
            log::info!("{} {}", line.if_supports_color(Stdout, |t| t.dimmed()), "(skipped)");
        } else {
            log::info!("{}", line);
        }
    }
    Ok(())
}

pub(crate) fn run_videos_count(db: Option<PathBuf>) -> Result<(), CliError> {
    let (store, library) = open_player(db)?;
    let total = library
        .count()
        .map_err(|e| CliError::database(format!("Failed to count videos: {}", e)))?;
    let queued = library
        .queue(&store)
        .map_err(|e| CliError::database(format!("Failed to read videos: {}", e)))?
        .len();

    log::info!("  Cached videos:  {:>6}", total);
    log::info!("  In queue:       {:>6}", queued);
    log::info!("  Skipped:        {:>6}", total.saturating_sub(queued));
    Ok(())
}
