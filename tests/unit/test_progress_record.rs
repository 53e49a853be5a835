use chrono::NaiveDate;
use news_progress::models::{NewProgress, ProgressRecord, ProgressUpdate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_from_new_keeps_submitted_fields() {
    let new = NewProgress {
        name: "launch".to_string(),
        progress_time: date(2024, 1, 1),
    };

    let record = ProgressRecord::from_new(1, new);
    assert_eq!(record.id, 1);
    assert_eq!(record.name, "launch");
    assert_eq!(record.progress_time, date(2024, 1, 1));
}

#[test]
fn test_merge_never_changes_id() {
    let record = ProgressRecord {
        id: 9,
        name: "launch".to_string(),
        progress_time: date(2024, 1, 1),
    };
    let update = ProgressUpdate {
        name: Some("landing".to_string()),
        progress_time: Some(date(2024, 2, 1)),
    };

    let merged = record.merged(&update);
    assert_eq!(merged.id, 9);
    assert_eq!(merged.name, "landing");
    assert_eq!(merged.progress_time, date(2024, 2, 1));
    // the original is untouched
    assert_eq!(record.name, "launch");
}

#[test]
fn test_update_ignores_unknown_fields() {
    let update: ProgressUpdate =
        serde_json::from_str(r#"{"id": 100, "name": "renamed"}"#).unwrap();
    assert_eq!(update.name.as_deref(), Some("renamed"));
    assert_eq!(update.progress_time, None);
}

#[test]
fn test_leap_day_round_trips_through_json() {
    let record: ProgressRecord =
        serde_json::from_str(r#"{"id": 2, "name": "leap", "progress_time": "2024-02-29"}"#)
            .unwrap();
    assert_eq!(record.progress_time, date(2024, 2, 29));

    let invalid = serde_json::from_str::<ProgressRecord>(
        r#"{"id": 2, "name": "leap", "progress_time": "2023-02-29"}"#,
    );
    assert!(invalid.is_err());
}
