use snoozer::error::SnoozerError;
use snoozer::stats::loader::{load_rosters_file, load_season, load_users_file};
use snoozer::stats::StatKey;
use std::io::Write;
use tempfile::NamedTempFile;

fn json_file(body: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", body).unwrap();
    file
}

// --- SEASON LOAD TESTS ---

#[test]
fn test_season_flattens_files_in_order() {
    let w1 = json_file(r#"[{"player_id": "a", "week": 1}, {"player_id": "b", "week": 1}]"#);
    let w2 = json_file(r#"[{"player_id": "a", "week": 2, "stats": {"rush_att": "n/a", "rush_yd": 7}}]"#);

    let records = load_season(&[w2.path(), w1.path()]).unwrap();
    let order: Vec<(String, u32)> = records
        .iter()
        .map(|r| (r.player_id.clone(), r.week))
        .collect();
    assert_eq!(
        order,
        vec![("a".into(), 2), ("a".into(), 1), ("b".into(), 1)]
    );

    // Non-numeric stat values read as missing.
    let row = records[0].normalize();
    assert_eq!(row.stats.get(StatKey::RushingAttempts), None);
    assert_eq!(row.stats.get(StatKey::RushingYards), Some(7.0));
}

#[test]
fn test_season_empty_week_is_fine() {
    let w1 = json_file("[]");
    assert!(load_season(&[w1.path()]).unwrap().is_empty());
}

#[test]
fn test_season_fails_when_any_file_fails() {
    let good = json_file(r#"[{"player_id": "a", "week": 1}]"#);
    let bad = json_file(r#"{"error": "rate limited"}"#);

    let err = load_season(&[good.path(), bad.path()]).unwrap_err();
    assert!(matches!(err, SnoozerError::Validation(_)));
}

#[test]
fn test_season_missing_file_is_config_error() {
    let good = json_file("[]");
    let missing = good.path().with_extension("missing");
    let err = load_season(&[good.path(), missing.as_path()]).unwrap_err();
    assert!(matches!(err, SnoozerError::Config(_)));
}

// --- LEAGUE LOAD TESTS ---

#[test]
fn test_rosters_and_users_accept_numeric_ids() {
    let rosters = json_file(r#"[{"owner_id": 12, "players": ["4034"]}, {"owner_id": null}]"#);
    let users = json_file(r#"[{"user_id": 12, "display_name": "Dana"}]"#);

    let rosters = load_rosters_file(rosters.path()).unwrap();
    assert_eq!(rosters.len(), 2);
    assert_eq!(rosters[0].owner_id.as_deref(), Some("12"));
    assert_eq!(rosters[1].players, None);

    let users = load_users_file(users.path()).unwrap();
    assert_eq!(users[0].user_id, "12");
}
