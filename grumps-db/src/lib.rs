//! SQLite persistence for the episode player.
//!
//! Holds the skip set, a local cache of the video catalog, and the point
//! playback resumes from, all in one database file (via rusqlite with the
//! bundled feature).

mod connection;
pub mod error;
pub mod library;
pub mod operations;
pub mod schema;
pub mod skipped;

pub use error::StoreError;
pub use library::{ImportStats, PlaybackStart, VideoLibrary};
pub use operations::{OperationError, PlaybackPosition, UpsertOutcome};
pub use schema::{SchemaError, open_database, open_memory};
pub use skipped::SkippedGameStore;
