use thiserror::Error;

/// Errors raised while deriving display fields from video metadata.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MetadataError {
    /// The description has no line break, so no short description can be cut from it.
    #[error("Description of video '{video_id}' has no line break")]
    DescriptionFormat { video_id: String },
}
