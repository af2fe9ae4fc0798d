use super::*;
use chrono::TimeZone;

fn at(ms: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
}

fn video(id: &str, title: &str, description: &str, ms: i64) -> VideoMetadata {
    VideoMetadata::new(id, title, description, "https://i.ytimg.com/x.jpg", at(ms))
}

#[test]
fn parsed_fields_are_exposed() {
    let v = video(
        "abc",
        "Mega Man 7 - This Game Rocks... Man - Part 1 - Game Grumps",
        "",
        0,
    );
    assert_eq!(v.game(), "Mega Man 7");
    assert_eq!(v.title(), "This Game Rocks... Man");
    assert_eq!(v.part(), "Part 1");
    assert_eq!(v.team(), "Game Grumps");
}

#[test]
fn parsed_title_is_cached() {
    let v = video("abc", "Game - Title - Team", "", 0);
    let first: *const ParsedTitle = v.parsed_title();
    let second: *const ParsedTitle = v.parsed_title();
    assert_eq!(first, second);
}

#[test]
fn short_description_takes_first_line() {
    let v = video("abc", "t", "Arin and Dan play.\nFollow us on Twitter\n", 0);
    assert_eq!(v.short_description(), Ok("Arin and Dan play."));
}

#[test]
fn short_description_strips_carriage_return() {
    let v = video("abc", "t", "First line\r\nSecond", 0);
    assert_eq!(v.short_description(), Ok("First line"));
}

#[test]
fn short_description_without_line_break_is_an_error() {
    let v = video("abc", "t", "Just one line", 0);
    assert_eq!(
        v.short_description(),
        Err(MetadataError::DescriptionFormat {
            video_id: "abc".to_string()
        }),
    );
}

#[test]
fn newer_videos_sort_first() {
    let mut videos = vec![video("a", "t", "", 1_000), video("b", "t", "", 3_000), video("c", "t", "", 2_000)];
    videos.sort();
    let ids: Vec<_> = videos.iter().map(|v| v.video_id()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}

#[test]
fn timestamp_ties_break_on_video_id() {
    let a = video("a", "t", "", 5_000);
    let b = video("b", "t", "", 5_000);
    assert_eq!(a.cmp(&b), Ordering::Less);
    assert_eq!(b.cmp(&a), Ordering::Greater);
    assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
}

#[test]
fn equality_ignores_parse_cache() {
    let a = video("a", "Game - Title - Team", "", 0);
    let b = a.clone();
    let _ = a.parsed_title();
    assert_eq!(a, b);
}

#[test]
fn upload_time_is_truncated_to_millis() {
    let precise = Utc.timestamp_opt(10, 123_456_789).unwrap();
    let v = VideoMetadata::new("a", "t", "", "", precise);
    assert_eq!(v.uploaded_at().timestamp_millis(), 10_123);
    assert_eq!(v.uploaded_at(), at(10_123));
}

#[test]
fn display_shows_game_title_part_and_id() {
    let v = video(
        "xyz",
        "Zelda's Adventure: Vile Blue Vile - PART 6 - Game Grumps",
        "",
        0,
    );
    assert_eq!(v.to_string(), "Zelda's Adventure: Vile Blue Vile PART 6 (xyz)");
}
