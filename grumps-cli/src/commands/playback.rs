use std::path::PathBuf;

use grumps_core::VideoMetadata;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::{format_position, open_player};

fn show_video(heading: &str, video: &VideoMetadata, position_ms: u64) {
    log::info!("{}", heading.if_supports_color(Stdout, |t| t.bold()));
    log::info!("  {}", video.title().if_supports_color(Stdout, |t| t.cyan()));
    log::info!("  Game:  {}", video.game());
    if !video.part().is_empty() {
        log::info!("  Part:  {}", video.part());
    }
    log::info!("  Id:    {}", video.video_id());
    if position_ms > 0 {
        log::info!("  From:  {}", format_position(position_ms));
    }
    if let Ok(short) = video.short_description() {
        crate::log_blank();
        log::info!("  {}", short);
    }
}

/// Show where playback resumes, and remember it.
pub(crate) fn run_play(db: Option<PathBuf>) -> Result<(), CliError> {
    let (store, library) = open_player(db)?;
    let start = library
        .start(&store)
        .map_err(|e| CliError::database(format!("Failed to find a video to play: {}", e)))?;

    let Some(start) = start else {
        log::info!("Nothing to play. Import videos or unskip some games.");
        return Ok(());
    };

    library
        .record_position(start.video.video_id(), start.position_ms)
        .map_err(|e| CliError::database(format!("Failed to save playback position: {}", e)))?;
    show_video("Now playing", &start.video, start.position_ms);
    Ok(())
}

/// Move on to the next video that isn't skipped.
pub(crate) fn run_next(db: Option<PathBuf>) -> Result<(), CliError> {
    let (store, library) = open_player(db)?;
    let next = library
        .advance(&store)
        .map_err(|e| CliError::database(format!("Failed to advance: {}", e)))?;

    match next {
        Some(video) => show_video("Up next", &video, 0),
        None => log::info!("You've reached the end of the catalog."),
    }
    Ok(())
}

/// Remember how far into the current video playback got.
pub(crate) fn run_record(db: Option<PathBuf>, position_ms: u64) -> Result<(), CliError> {
    let (store, library) = open_player(db)?;
    let start = library
        .start(&store)
        .map_err(|e| CliError::database(format!("Failed to find the current video: {}", e)))?;

    let Some(start) = start else {
        log::warn!("No video is playing; nothing to record.");
        return Ok(());
    };

    library
        .record_position(start.video.video_id(), position_ms)
        .map_err(|e| CliError::database(format!("Failed to save playback position: {}", e)))?;
    log::info!(
        "Saved {} at {}",
        start.video.video_id(),
        format_position(position_ms),
    );
    Ok(())
}
