//! SQLite schema creation and migration.

use std::time::Duration;

use rusqlite::{Connection, TransactionBehavior};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Migration error: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 2;

/// How long a connection waits on another writer before giving up.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create all tables if they don't exist.
///
/// This is idempotent and safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SKIPPED_GAMES_SQL)?;
    conn.execute_batch(VIDEOS_SQL)?;
    conn.execute_batch(PLAYBACK_SQL)?;
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Open or create a player database at the given path.
///
/// Schema creation and migration run in one immediate transaction, so a
/// failure part way through leaves the file as it was.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let mut conn = Connection::open(path)?;
    conn.busy_timeout(BUSY_TIMEOUT)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;

    if get_schema_version(&conn)? != CURRENT_VERSION {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        // Another connection may have upgraded the file while this one waited.
        match get_schema_version(&tx)? {
            0 => create_schema(&tx)?,
            CURRENT_VERSION => {}
            version => migrate(&tx, version)?,
        }
        tx.commit()?;
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
pub fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Record a schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Run migrations from `from_version` up to `CURRENT_VERSION`.
fn migrate(conn: &Connection, from_version: i32) -> Result<(), SchemaError> {
    if from_version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: from_version,
        });
    }

    let mut version = from_version;
    while version < CURRENT_VERSION {
        match version {
            1 => {
                log::debug!("Migrating schema 1 -> 2: adding video cache and playback state");
                conn.execute_batch(VIDEOS_SQL)?;
                conn.execute_batch(PLAYBACK_SQL)?;
            }
            _ => {}
        }
        version += 1;
        set_schema_version(conn, version)?;
    }

    Ok(())
}

/// Version 1 layout: only the skip set.
pub const SKIPPED_GAMES_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Games the user chose to hide from the queue (exact, case-sensitive names)
CREATE TABLE IF NOT EXISTS skipped_games (
    game TEXT NOT NULL UNIQUE
);
"#;

const VIDEOS_SQL: &str = r#"
-- Local cache of the video catalog
CREATE TABLE IF NOT EXISTS videos (
    video_id TEXT PRIMARY KEY,
    full_title TEXT NOT NULL,
    full_description TEXT NOT NULL DEFAULT '',
    thumbnail_url TEXT NOT NULL DEFAULT '',
    uploaded_at_ms INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_videos_uploaded ON videos(uploaded_at_ms);
"#;

const PLAYBACK_SQL: &str = r#"
-- Where playback resumes; at most one row
CREATE TABLE IF NOT EXISTS playback_state (
    id INTEGER PRIMARY KEY CHECK (id = 1),
    video_id TEXT NOT NULL,
    position_ms INTEGER NOT NULL DEFAULT 0,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;
