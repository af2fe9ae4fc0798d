//! Durable set of games the user has chosen to skip.
//!
//! Each operation has two forms. The `try_` form reports storage failures.
//! The plain form degrades instead: reads fail open (nothing is skipped, so
//! every video stays visible) and writes become no-ops. Either way the
//! failure is logged and the next call simply tries again.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use grumps_core::{VideoMetadata, retain_unskipped};

use crate::connection::{with_connection, with_transaction};
use crate::error::StoreError;
use crate::operations::{
    clear_skipped_games, delete_skipped_game, insert_skipped_game, list_skipped_games,
};

/// Skip set persisted in the player database.
#[derive(Debug, Clone)]
pub struct SkippedGameStore {
    path: PathBuf,
}

impl SkippedGameStore {
    /// A store backed by the database file at `path`. Nothing is opened until
    /// the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Skip `game`. Returns `false` if it was already skipped.
    pub fn try_add(&self, game: &str) -> Result<bool, StoreError> {
        let added = with_transaction(&self.path, |tx| Ok(insert_skipped_game(tx, game)?))?;
        log::debug!("Skip '{}': {}", game, if added { "added" } else { "already skipped" });
        Ok(added)
    }

    /// Stop skipping `game`. Returns `false` if it wasn't skipped.
    pub fn try_remove(&self, game: &str) -> Result<bool, StoreError> {
        let removed = with_transaction(&self.path, |tx| Ok(delete_skipped_game(tx, game)?))?;
        log::debug!("Unskip '{}': {}", game, if removed { "removed" } else { "not skipped" });
        Ok(removed)
    }

    /// Every skipped game.
    pub fn try_list(&self) -> Result<BTreeSet<String>, StoreError> {
        with_connection(&self.path, |conn| Ok(list_skipped_games(conn)?))
    }

    /// Unskip every game at once. Returns how many were removed.
    pub fn try_clear(&self) -> Result<usize, StoreError> {
        let removed = with_transaction(&self.path, |tx| Ok(clear_skipped_games(tx)?))?;
        log::debug!("Cleared {} skipped game(s)", removed);
        Ok(removed)
    }

    /// Drop videos whose game is skipped, keeping the rest in order.
    pub fn try_filter(
        &self,
        videos: impl IntoIterator<Item = VideoMetadata>,
    ) -> Result<Vec<VideoMetadata>, StoreError> {
        let skipped = self.try_list()?;
        Ok(retain_unskipped(videos, &skipped))
    }

    pub fn add(&self, game: &str) {
        if let Err(e) = self.try_add(game) {
            log::warn!("Error while trying to skip '{}': {}", game, e);
        }
    }

    pub fn remove(&self, game: &str) {
        if let Err(e) = self.try_remove(game) {
            log::warn!("Error while trying to unskip '{}': {}", game, e);
        }
    }

    /// Every skipped game, or an empty set if the database is unusable.
    pub fn list(&self) -> BTreeSet<String> {
        self.try_list().unwrap_or_else(|e| {
            log::warn!("Error while reading skipped games, showing everything: {}", e);
            BTreeSet::new()
        })
    }

    pub fn clear(&self) {
        if let Err(e) = self.try_clear() {
            log::warn!("Error while trying to unskip all games: {}", e);
        }
    }

    /// Filter against the current snapshot of the skip set. Nothing is
    /// filtered out if the database is unusable.
    pub fn filter(&self, videos: impl IntoIterator<Item = VideoMetadata>) -> Vec<VideoMetadata> {
        retain_unskipped(videos, &self.list())
    }
}
