//! Video catalog model and title parsing for the episode player.
//!
//! This crate has no storage or I/O. It turns raw catalog records into
//! structured episodes, orders them, and walks the playback queue.
//! Persistence of the skip set and the catalog lives in `grumps-db`.

pub mod error;
pub mod queue;
pub mod title;
pub mod video;

pub use error::MetadataError;
pub use queue::{
    next_unskipped, next_video, resolve_start, retain_unskipped, sort_chronologically,
    sort_videos,
};
pub use title::{GameDivider, ParsedTitle, TitleLayout, parse_part, parse_title};
pub use video::VideoMetadata;
