use chrono::{TimeZone, Utc};
use grumps_core::VideoMetadata;
use grumps_db::open_memory;
use grumps_db::operations::*;

fn video(id: &str, title: &str, ms: i64) -> VideoMetadata {
    VideoMetadata::new(
        id,
        title,
        "First line\nSecond line",
        format!("https://i.ytimg.com/vi/{id}/default.jpg"),
        Utc.timestamp_millis_opt(ms).unwrap(),
    )
}

#[test]
fn skipped_game_insert_is_idempotent() {
    let conn = open_memory().unwrap();
    assert!(insert_skipped_game(&conn, "Mega Man 7").unwrap());
    assert!(!insert_skipped_game(&conn, "Mega Man 7").unwrap());

    let games = list_skipped_games(&conn).unwrap();
    assert_eq!(games.into_iter().collect::<Vec<_>>(), vec!["Mega Man 7"]);
}

#[test]
fn skipped_games_are_case_sensitive() {
    let conn = open_memory().unwrap();
    insert_skipped_game(&conn, "Sonic").unwrap();
    insert_skipped_game(&conn, "sonic").unwrap();
    assert_eq!(list_skipped_games(&conn).unwrap().len(), 2);
}

#[test]
fn delete_handles_quotes() {
    let conn = open_memory().unwrap();
    insert_skipped_game(&conn, "Zelda's Adventure").unwrap();
    assert!(delete_skipped_game(&conn, "Zelda's Adventure").unwrap());
    assert!(!delete_skipped_game(&conn, "Zelda's Adventure").unwrap());
    assert!(list_skipped_games(&conn).unwrap().is_empty());
}

#[test]
fn clear_reports_removed_count() {
    let conn = open_memory().unwrap();
    for game in ["A", "B", "C"] {
        insert_skipped_game(&conn, game).unwrap();
    }
    assert_eq!(clear_skipped_games(&conn).unwrap(), 3);
    assert!(list_skipped_games(&conn).unwrap().is_empty());
    assert_eq!(clear_skipped_games(&conn).unwrap(), 0);
}

#[test]
fn video_upsert_outcomes() {
    let conn = open_memory().unwrap();
    let original = video("abc", "Game - Title - Team", 1_000);
    assert_eq!(upsert_video(&conn, &original).unwrap(), UpsertOutcome::Inserted);
    assert_eq!(upsert_video(&conn, &original).unwrap(), UpsertOutcome::Unchanged);

    let retitled = video("abc", "Game - Better Title - Team", 1_000);
    assert_eq!(upsert_video(&conn, &retitled).unwrap(), UpsertOutcome::Updated);
    assert_eq!(count_videos(&conn).unwrap(), 1);

    let cached = find_video(&conn, "abc").unwrap().unwrap();
    assert_eq!(cached, retitled);
    assert_eq!(cached.title(), "Better Title");
}

#[test]
fn find_missing_video() {
    let conn = open_memory().unwrap();
    assert!(find_video(&conn, "nope").unwrap().is_none());
}

#[test]
fn list_videos_newest_first() {
    let conn = open_memory().unwrap();
    upsert_video(&conn, &video("old", "Old - T - Team", 1_000)).unwrap();
    upsert_video(&conn, &video("new", "New - T - Team", 3_000)).unwrap();
    upsert_video(&conn, &video("mid", "Mid - T - Team", 2_000)).unwrap();

    let ids: Vec<String> = list_videos(&conn)
        .unwrap()
        .iter()
        .map(|v| v.video_id().to_string())
        .collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[test]
fn playback_position_round_trip() {
    let conn = open_memory().unwrap();
    assert!(load_playback_position(&conn).unwrap().is_none());

    save_playback_position(&conn, "abc", 42_000).unwrap();
    save_playback_position(&conn, "def", 5_000).unwrap();
    assert_eq!(
        load_playback_position(&conn).unwrap(),
        Some(PlaybackPosition {
            video_id: "def".to_string(),
            position_ms: 5_000,
        }),
    );

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM playback_state", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    clear_playback_position(&conn).unwrap();
    assert!(load_playback_position(&conn).unwrap().is_none());
}
