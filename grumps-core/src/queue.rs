//! Ordering and navigation over a list of videos.
//!
//! Listings show the newest upload first, while playback walks the catalog
//! from the oldest upload forward.

use std::collections::BTreeSet;

use crate::video::VideoMetadata;

/// Sort most recent first. The sort is stable.
pub fn sort_videos(videos: &mut [VideoMetadata]) {
    videos.sort();
}

/// Sort oldest first, the order episodes are played in.
pub fn sort_chronologically(videos: &mut [VideoMetadata]) {
    videos.sort_by(|a, b| b.cmp(a));
}

/// Keep only videos whose game is not in `skipped`, preserving their order.
pub fn retain_unskipped(
    videos: impl IntoIterator<Item = VideoMetadata>,
    skipped: &BTreeSet<String>,
) -> Vec<VideoMetadata> {
    videos
        .into_iter()
        .filter(|v| !skipped.contains(v.game()))
        .collect()
}

/// The entry right after `current_id`, if `current_id` is in the list and not last.
pub fn next_video<'a>(videos: &'a [VideoMetadata], current_id: &str) -> Option<&'a VideoMetadata> {
    let position = videos.iter().position(|v| v.video_id() == current_id)?;
    videos.get(position + 1)
}

/// The first entry after `current_id` whose game is not skipped.
pub fn next_unskipped<'a>(
    videos: &'a [VideoMetadata],
    current_id: &str,
    skipped: &BTreeSet<String>,
) -> Option<&'a VideoMetadata> {
    let position = videos.iter().position(|v| v.video_id() == current_id)?;
    videos[position + 1..]
        .iter()
        .find(|v| !skipped.contains(v.game()))
}

/// Where playback should pick up.
///
/// The saved video wins when it is still in the list and not skipped. If its
/// game has been skipped since, playback moves on to the next unskipped
/// video, or back to the first unskipped one when nothing follows it. Without
/// a usable saved video, playback starts at the first unskipped one.
pub fn resolve_start<'a>(
    videos: &'a [VideoMetadata],
    saved_id: Option<&str>,
    skipped: &BTreeSet<String>,
) -> Option<&'a VideoMetadata> {
    let first_unskipped = || videos.iter().find(|v| !skipped.contains(v.game()));

    let Some(saved_id) = saved_id else {
        return first_unskipped();
    };
    match videos.iter().find(|v| v.video_id() == saved_id) {
        Some(saved) if !skipped.contains(saved.game()) => Some(saved),
        Some(_) => next_unskipped(videos, saved_id, skipped).or_else(first_unskipped),
        None => first_unskipped(),
    }
}

#[cfg(test)]
#[path = "tests/queue_tests.rs"]
mod tests;
