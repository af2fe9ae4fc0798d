//! Local cache of the video catalog and the playback resume point.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use grumps_core::{VideoMetadata, next_unskipped, resolve_start, sort_chronologically};
use rusqlite::Connection;

use crate::connection::{with_connection, with_transaction};
use crate::error::StoreError;
use crate::operations::{
    OperationError, PlaybackPosition, UpsertOutcome, clear_playback_position, count_videos,
    find_video, list_videos, load_playback_position, save_playback_position, upsert_video,
};
use crate::skipped::SkippedGameStore;

/// Counts from one catalog import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    pub inserted: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl ImportStats {
    pub fn total(&self) -> usize {
        self.inserted + self.updated + self.unchanged
    }
}

/// Where playback picks up: a video and the offset into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackStart {
    pub video: VideoMetadata,
    pub position_ms: u64,
}

/// Cached catalog stored alongside the skip set.
#[derive(Debug, Clone)]
pub struct VideoLibrary {
    path: PathBuf,
}

impl VideoLibrary {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a batch of catalog records in a single transaction.
    pub fn import(
        &self,
        videos: impl IntoIterator<Item = VideoMetadata>,
    ) -> Result<ImportStats, StoreError> {
        let stats = with_transaction(&self.path, |tx| {
            let mut stats = ImportStats::default();
            for video in videos {
                match upsert_video(tx, &video)? {
                    UpsertOutcome::Inserted => stats.inserted += 1,
                    UpsertOutcome::Updated => stats.updated += 1,
                    UpsertOutcome::Unchanged => stats.unchanged += 1,
                }
            }
            Ok(stats)
        })?;
        log::debug!(
            "Imported {} video(s): {} new, {} updated",
            stats.total(),
            stats.inserted,
            stats.updated
        );
        Ok(stats)
    }

    /// Every cached video, most recent first.
    pub fn all(&self) -> Result<Vec<VideoMetadata>, StoreError> {
        with_connection(&self.path, |conn| Ok(list_videos(conn)?))
    }

    pub fn find(&self, video_id: &str) -> Result<Option<VideoMetadata>, StoreError> {
        with_connection(&self.path, |conn| Ok(find_video(conn, video_id)?))
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        with_connection(&self.path, |conn| Ok(count_videos(conn)?))
    }

    /// Cached videos in play order with skipped games removed.
    pub fn queue(&self, skipped: &SkippedGameStore) -> Result<Vec<VideoMetadata>, StoreError> {
        let videos = with_connection(&self.path, |conn| Ok(play_order(conn)?))?;
        Ok(skipped.filter(videos))
    }

    pub fn resume_point(&self) -> Result<Option<PlaybackPosition>, StoreError> {
        with_connection(&self.path, |conn| Ok(load_playback_position(conn)?))
    }

    pub fn record_position(&self, video_id: &str, position_ms: u64) -> Result<(), StoreError> {
        with_transaction(&self.path, |tx| {
            Ok(save_playback_position(tx, video_id, position_ms)?)
        })
    }

    pub fn forget_position(&self) -> Result<(), StoreError> {
        with_transaction(&self.path, |tx| Ok(clear_playback_position(tx)?))
    }

    /// The video playback resumes at. The saved offset only applies when the
    /// saved video itself is resumed.
    pub fn start(&self, skipped: &SkippedGameStore) -> Result<Option<PlaybackStart>, StoreError> {
        let skip_set = skipped.list();
        with_connection(&self.path, |conn| {
            let videos = play_order(conn)?;
            let saved = load_playback_position(conn)?;
            Ok(start_within(&videos, saved.as_ref(), &skip_set))
        })
    }

    /// Move the resume point to the next unskipped video, from the start of it.
    ///
    /// Returns `None`, leaving the resume point alone, once the end of the
    /// catalog is reached. The read and the write share one transaction, so
    /// concurrent calls step through the catalog one video each.
    pub fn advance(&self, skipped: &SkippedGameStore) -> Result<Option<VideoMetadata>, StoreError> {
        let skip_set = skipped.list();
        with_transaction(&self.path, |tx| {
            let videos = play_order(tx)?;
            let saved = load_playback_position(tx)?;
            let Some(current) = start_within(&videos, saved.as_ref(), &skip_set) else {
                return Ok(None);
            };

            let next = next_unskipped(&videos, current.video.video_id(), &skip_set).cloned();
            if let Some(next) = &next {
                save_playback_position(tx, next.video_id(), 0)?;
            }
            Ok(next)
        })
    }
}

fn play_order(conn: &Connection) -> Result<Vec<VideoMetadata>, OperationError> {
    let mut videos = list_videos(conn)?;
    sort_chronologically(&mut videos);
    Ok(videos)
}

fn start_within(
    videos: &[VideoMetadata],
    saved: Option<&PlaybackPosition>,
    skip_set: &BTreeSet<String>,
) -> Option<PlaybackStart> {
    let saved_id = saved.map(|p| p.video_id.as_str());
    let video = resolve_start(videos, saved_id, skip_set)?;
    let position_ms = match saved {
        Some(p) if p.video_id == video.video_id() => p.position_ms,
        _ => 0,
    };
    Some(PlaybackStart {
        video: video.clone(),
        position_ms,
    })
}
