//! Statements for the skip set, the video cache and the resume point.
//!
//! Every function runs against whatever connection or transaction it is
//! given; callers decide the transaction boundaries.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use grumps_core::VideoMetadata;
use rusqlite::{Connection, OptionalExtension, Row, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Invalid upload timestamp {millis} for video '{video_id}'")]
    InvalidTimestamp { video_id: String, millis: i64 },
}

// ── Skipped Games ───────────────────────────────────────────────────────────

/// Insert a game into the skip set. Returns `false` if it was already there.
pub fn insert_skipped_game(conn: &Connection, game: &str) -> Result<bool, OperationError> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO skipped_games (game) VALUES (?1)",
        params![game],
    )?;
    Ok(changed > 0)
}

/// Remove a game from the skip set. Returns `false` if it wasn't there.
pub fn delete_skipped_game(conn: &Connection, game: &str) -> Result<bool, OperationError> {
    let changed = conn.execute("DELETE FROM skipped_games WHERE game = ?1", params![game])?;
    Ok(changed > 0)
}

/// All skipped games.
pub fn list_skipped_games(conn: &Connection) -> Result<BTreeSet<String>, OperationError> {
    let mut stmt = conn.prepare("SELECT game FROM skipped_games")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<BTreeSet<_>, _>>().map_err(Into::into)
}

/// Empty the skip set. Returns the number of games removed.
pub fn clear_skipped_games(conn: &Connection) -> Result<usize, OperationError> {
    Ok(conn.execute("DELETE FROM skipped_games", [])?)
}

// ── Videos ──────────────────────────────────────────────────────────────────

/// Outcome of writing one video into the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
    Unchanged,
}

/// Insert a video, or refresh the cached copy if its fields changed.
pub fn upsert_video(conn: &Connection, video: &VideoMetadata) -> Result<UpsertOutcome, OperationError> {
    let existing = find_video(conn, video.video_id())?;
    if existing.as_ref() == Some(video) {
        return Ok(UpsertOutcome::Unchanged);
    }

    conn.execute(
        "INSERT INTO videos (video_id, full_title, full_description, thumbnail_url, uploaded_at_ms)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(video_id) DO UPDATE SET
             full_title = excluded.full_title,
             full_description = excluded.full_description,
             thumbnail_url = excluded.thumbnail_url,
             uploaded_at_ms = excluded.uploaded_at_ms",
        params![
            video.video_id(),
            video.full_title(),
            video.full_description(),
            video.thumbnail_url(),
            video.uploaded_at().timestamp_millis(),
        ],
    )?;

    Ok(if existing.is_some() {
        UpsertOutcome::Updated
    } else {
        UpsertOutcome::Inserted
    })
}

/// Look up one cached video.
pub fn find_video(conn: &Connection, video_id: &str) -> Result<Option<VideoMetadata>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT video_id, full_title, full_description, thumbnail_url, uploaded_at_ms
         FROM videos WHERE video_id = ?1",
    )?;
    let raw = stmt.query_row(params![video_id], RawVideo::from_row).optional()?;
    raw.map(RawVideo::into_video).transpose()
}

/// Every cached video, most recent first.
pub fn list_videos(conn: &Connection) -> Result<Vec<VideoMetadata>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT video_id, full_title, full_description, thumbnail_url, uploaded_at_ms
         FROM videos ORDER BY uploaded_at_ms DESC, video_id",
    )?;
    let rows = stmt.query_map([], RawVideo::from_row)?;
    let mut videos = rows
        .map(|raw| raw.map_err(OperationError::from).and_then(RawVideo::into_video))
        .collect::<Result<Vec<_>, _>>()?;
    // SQL orders by id only; the model also breaks ties on the other fields.
    grumps_core::sort_videos(&mut videos);
    Ok(videos)
}

/// Number of cached videos.
pub fn count_videos(conn: &Connection) -> Result<usize, OperationError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM videos", [], |row| row.get(0))?;
    Ok(usize::try_from(count).unwrap_or_default())
}

struct RawVideo {
    video_id: String,
    full_title: String,
    full_description: String,
    thumbnail_url: String,
    uploaded_at_ms: i64,
}

impl RawVideo {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            video_id: row.get(0)?,
            full_title: row.get(1)?,
            full_description: row.get(2)?,
            thumbnail_url: row.get(3)?,
            uploaded_at_ms: row.get(4)?,
        })
    }

    fn into_video(self) -> Result<VideoMetadata, OperationError> {
        let uploaded_at = DateTime::<Utc>::from_timestamp_millis(self.uploaded_at_ms).ok_or(
            OperationError::InvalidTimestamp {
                video_id: self.video_id.clone(),
                millis: self.uploaded_at_ms,
            },
        )?;
        Ok(VideoMetadata::new(
            self.video_id,
            self.full_title,
            self.full_description,
            self.thumbnail_url,
            uploaded_at,
        ))
    }
}

// ── Playback ────────────────────────────────────────────────────────────────

/// The video playback resumes at and how far into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackPosition {
    pub video_id: String,
    pub position_ms: u64,
}

/// Store the resume point, replacing any earlier one.
pub fn save_playback_position(
    conn: &Connection,
    video_id: &str,
    position_ms: u64,
) -> Result<(), OperationError> {
    let position = i64::try_from(position_ms).unwrap_or(i64::MAX);
    conn.execute(
        "INSERT INTO playback_state (id, video_id, position_ms) VALUES (1, ?1, ?2)
         ON CONFLICT(id) DO UPDATE SET
             video_id = excluded.video_id,
             position_ms = excluded.position_ms,
             updated_at = datetime('now')",
        params![video_id, position],
    )?;
    Ok(())
}

/// The stored resume point, if any.
pub fn load_playback_position(conn: &Connection) -> Result<Option<PlaybackPosition>, OperationError> {
    conn.query_row(
        "SELECT video_id, position_ms FROM playback_state WHERE id = 1",
        [],
        |row| {
            Ok(PlaybackPosition {
                video_id: row.get(0)?,
                position_ms: u64::try_from(row.get::<_, i64>(1)?).unwrap_or_default(),
            })
        },
    )
    .optional()
    .map_err(Into::into)
}

/// Forget the resume point.
pub fn clear_playback_position(conn: &Connection) -> Result<(), OperationError> {
    conn.execute("DELETE FROM playback_state", [])?;
    Ok(())
}
