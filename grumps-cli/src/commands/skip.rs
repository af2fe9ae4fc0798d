use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::open_player;

pub(crate) fn run_skip_add(db: Option<PathBuf>, game: &str) -> Result<(), CliError> {
    let (store, _) = open_player(db)?;
    let added = store
        .try_add(game)
        .map_err(|e| CliError::database(format!("Failed to skip '{}': {}", game, e)))?;

    if added {
        log::info!("Skipping {}", game.if_supports_color(Stdout, |t| t.bold()));
    } else {
        log::info!("{} is already skipped", game);
    }
    Ok(())
}

pub(crate) fn run_skip_remove(db: Option<PathBuf>, game: &str) -> Result<(), CliError> {
    let (store, _) = open_player(db)?;
    let removed = store
        .try_remove(game)
        .map_err(|e| CliError::database(format!("Failed to unskip '{}': {}", game, e)))?;

    if removed {
        log::info!("No longer skipping {}", game.if_supports_color(Stdout, |t| t.bold()));
    } else {
        log::warn!("{} was not being skipped", game);
    }
    Ok(())
}

pub(crate) fn run_skip_list(db: Option<PathBuf>) -> Result<(), CliError> {
    let (store, _) = open_player(db)?;
    let games = store
        .try_list()
        .map_err(|e| CliError::database(format!("Failed to read skipped games: {}", e)))?;

    if games.is_empty() {
        log::info!("No games are being skipped.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!("Skipped games ({})", games.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    for game in &games {
        log::info!("  {}", game);
    }
    Ok(())
}

pub(crate) fn run_skip_clear(db: Option<PathBuf>) -> Result<(), CliError> {
    let (store, _) = open_player(db)?;
    let removed = store
        .try_clear()
        .map_err(|e| CliError::database(format!("Failed to unskip all games: {}", e)))?;
    log::info!("Unskipped {} game(s)", removed);
    Ok(())
}
