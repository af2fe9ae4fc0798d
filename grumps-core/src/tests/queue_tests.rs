use super::*;
use chrono::{TimeZone, Utc};

fn video(id: &str, title: &str, ms: i64) -> VideoMetadata {
    VideoMetadata::new(id, title, "", "", Utc.timestamp_millis_opt(ms).unwrap())
}

fn ids(videos: &[VideoMetadata]) -> Vec<&str> {
    videos.iter().map(|v| v.video_id()).collect()
}

fn skip(games: &[&str]) -> BTreeSet<String> {
    games.iter().map(|g| g.to_string()).collect()
}

/// Oldest first, as played.
fn catalog() -> Vec<VideoMetadata> {
    vec![
        video("k1", "Kirby Super Star - Spring Breeze ADVENTURES! - GameGrumps", 1_000),
        video("k2", "Kirby Super Star - Dyna Blade - Part 2 - Game Grumps", 2_000),
        video("m1", "Mega Man 7 - This Game Rocks... Man - Part 1 - Game Grumps", 3_000),
        video("z6", "Zelda's Adventure: Vile Blue Vile - PART 6 - Game Grumps", 4_000),
        video("m2", "Mega Man 7 - Still Rocking - Part 2 - Game Grumps", 5_000),
    ]
}

#[test]
fn sort_orders_newest_first_and_chronological_reverses() {
    let mut videos = catalog();
    sort_videos(&mut videos);
    assert_eq!(ids(&videos), vec!["m2", "z6", "m1", "k2", "k1"]);

    sort_chronologically(&mut videos);
    assert_eq!(ids(&videos), vec!["k1", "k2", "m1", "z6", "m2"]);
}

#[test]
fn retain_unskipped_removes_exactly_skipped_games() {
    let kept = retain_unskipped(catalog(), &skip(&["Mega Man 7"]));
    assert_eq!(ids(&kept), vec!["k1", "k2", "z6"]);
}

#[test]
fn retain_unskipped_with_empty_set_keeps_everything() {
    let kept = retain_unskipped(catalog(), &BTreeSet::new());
    assert_eq!(ids(&kept), ids(&catalog()));
}

#[test]
fn retain_unskipped_is_case_sensitive() {
    let kept = retain_unskipped(catalog(), &skip(&["mega man 7"]));
    assert_eq!(kept.len(), 5);
}

#[test]
fn next_video_follows_list_order() {
    let videos = catalog();
    assert_eq!(next_video(&videos, "k2").map(|v| v.video_id()), Some("m1"));
    assert!(next_video(&videos, "m2").is_none());
    assert!(next_video(&videos, "missing").is_none());
}

#[test]
fn next_unskipped_jumps_over_skipped_games() {
    let videos = catalog();
    let skipped = skip(&["Mega Man 7"]);
    assert_eq!(
        next_unskipped(&videos, "k2", &skipped).map(|v| v.video_id()),
        Some("z6"),
    );
    assert!(next_unskipped(&videos, "z6", &skipped).is_none());
}

#[test]
fn resolve_start_prefers_saved_video() {
    let videos = catalog();
    let start = resolve_start(&videos, Some("m1"), &BTreeSet::new());
    assert_eq!(start.map(|v| v.video_id()), Some("m1"));
}

#[test]
fn resolve_start_without_saved_video_uses_first_unskipped() {
    let videos = catalog();
    let start = resolve_start(&videos, None, &skip(&["Kirby Super Star"]));
    assert_eq!(start.map(|v| v.video_id()), Some("m1"));

    let start = resolve_start(&videos, Some("gone"), &BTreeSet::new());
    assert_eq!(start.map(|v| v.video_id()), Some("k1"));
}

#[test]
fn resolve_start_moves_past_newly_skipped_game() {
    let videos = catalog();
    let start = resolve_start(&videos, Some("m1"), &skip(&["Mega Man 7"]));
    assert_eq!(start.map(|v| v.video_id()), Some("z6"));
}

#[test]
fn resolve_start_wraps_to_first_unskipped_when_nothing_follows() {
    let videos = catalog();
    let start = resolve_start(&videos, Some("m2"), &skip(&["Mega Man 7"]));
    assert_eq!(start.map(|v| v.video_id()), Some("k1"));

    let start = resolve_start(&videos, Some("m2"), &skip(&["Mega Man 7", "Kirby Super Star"]));
    assert_eq!(start.map(|v| v.video_id()), Some("z6"));
}

#[test]
fn resolve_start_with_everything_skipped() {
    let videos = catalog();
    let all = skip(&["Mega Man 7", "Kirby Super Star", "Zelda's Adventure"]);
    assert!(resolve_start(&videos, Some("m2"), &all).is_none());
}

#[test]
fn resolve_start_on_empty_list() {
    assert!(resolve_start(&[], Some("k1"), &BTreeSet::new()).is_none());
}
