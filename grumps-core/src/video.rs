//! Video records as supplied by the catalog source.

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::MetadataError;
use crate::title::{ParsedTitle, parse_title};

/// One uploaded video.
///
/// The raw fields are fixed at construction. The parsed title is derived from
/// `full_title` the first time it is asked for and cached afterwards.
///
/// Videos order most recent first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "VideoRecord", into = "VideoRecord")]
pub struct VideoMetadata {
    video_id: String,
    full_title: String,
    full_description: String,
    thumbnail_url: String,
    uploaded_at: DateTime<Utc>,
    parsed: OnceLock<ParsedTitle>,
}

/// Wire form of a video in a catalog export.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoRecord {
    video_id: String,
    full_title: String,
    #[serde(default)]
    full_description: String,
    #[serde(default)]
    thumbnail_url: String,
    uploaded_at: DateTime<Utc>,
}

impl From<VideoRecord> for VideoMetadata {
    fn from(r: VideoRecord) -> Self {
        Self::new(
            r.video_id,
            r.full_title,
            r.full_description,
            r.thumbnail_url,
            r.uploaded_at,
        )
    }
}

impl From<VideoMetadata> for VideoRecord {
    fn from(v: VideoMetadata) -> Self {
        Self {
            video_id: v.video_id,
            full_title: v.full_title,
            full_description: v.full_description,
            thumbnail_url: v.thumbnail_url,
            uploaded_at: v.uploaded_at,
        }
    }
}

impl VideoMetadata {
    /// Build a video record. The upload time is truncated to milliseconds,
    /// the precision it is stored with.
    pub fn new(
        video_id: impl Into<String>,
        full_title: impl Into<String>,
        full_description: impl Into<String>,
        thumbnail_url: impl Into<String>,
        uploaded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            video_id: video_id.into(),
            full_title: full_title.into(),
            full_description: full_description.into(),
            thumbnail_url: thumbnail_url.into(),
            uploaded_at: uploaded_at.trunc_subsecs(3),
            parsed: OnceLock::new(),
        }
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn full_title(&self) -> &str {
        &self.full_title
    }

    pub fn full_description(&self) -> &str {
        &self.full_description
    }

    pub fn thumbnail_url(&self) -> &str {
        &self.thumbnail_url
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    /// Structured fields of the title, parsed on first access.
    pub fn parsed_title(&self) -> &ParsedTitle {
        self.parsed.get_or_init(|| parse_title(&self.full_title))
    }

    pub fn team(&self) -> &str {
        &self.parsed_title().team
    }

    pub fn game(&self) -> &str {
        &self.parsed_title().game
    }

    pub fn title(&self) -> &str {
        &self.parsed_title().title
    }

    pub fn part(&self) -> &str {
        &self.parsed_title().part
    }

    /// First line of the description.
    ///
    /// A description without any line break is an anomaly in the catalog; it
    /// is logged and reported so the caller can pick its own fallback text.
    pub fn short_description(&self) -> Result<&str, MetadataError> {
        match self.full_description.split_once('\n') {
            Some((first_line, _)) => Ok(first_line.strip_suffix('\r').unwrap_or(first_line)),
            None => {
                log::warn!(
                    "Failed finding short description for {}: no line break",
                    self.video_id
                );
                Err(MetadataError::DescriptionFormat {
                    video_id: self.video_id.clone(),
                })
            }
        }
    }

    fn raw_fields(&self) -> (&str, &str, &str, &str) {
        (
            &self.video_id,
            &self.full_title,
            &self.full_description,
            &self.thumbnail_url,
        )
    }
}

impl PartialEq for VideoMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.uploaded_at == other.uploaded_at && self.raw_fields() == other.raw_fields()
    }
}

impl Eq for VideoMetadata {}

impl Ord for VideoMetadata {
    fn cmp(&self, other: &Self) -> Ordering {
        // Newest first; the raw fields only break timestamp ties.
        other
            .uploaded_at
            .cmp(&self.uploaded_at)
            .then_with(|| self.raw_fields().cmp(&other.raw_fields()))
    }
}

impl PartialOrd for VideoMetadata {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for VideoMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} ({})",
            self.game(),
            self.title(),
            self.part(),
            self.video_id
        )
    }
}

#[cfg(test)]
#[path = "tests/video_tests.rs"]
mod tests;
