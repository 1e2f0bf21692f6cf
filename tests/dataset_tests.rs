use blocksched::{
    CourseEntry, CourseSession, Dataset, DatasetError, TimePeriod, load_dataset_from_json,
    save_dataset_to_json, validate_dataset,
};
use tempfile::{NamedTempFile, tempdir};

fn build_sample_dataset() -> Dataset {
    let mut dataset = Dataset::default();
    dataset.programs.insert(
        "BSIT".into(),
        vec![CourseEntry {
            code: "IT 101".into(),
            name: "Introduction to Computing".into(),
        }],
    );
    dataset.schedules.insert(
        "BSIT-1A".into(),
        vec![CourseSession {
            code: "IT 101".into(),
            designation: "Room 101".into(),
            instructor: "Marvin Reyes".into(),
            periods: vec![TimePeriod {
                start: 7.0,
                end: 8.5,
                days: vec![0, 2],
            }],
        }],
    );
    dataset
}

fn load_payload(payload: serde_json::Value) -> Result<Dataset, DatasetError> {
    let file = NamedTempFile::new().unwrap();
    serde_json::to_writer_pretty(file.as_file(), &payload).unwrap();
    load_dataset_from_json(file.path())
}

fn expect_invalid(payload: serde_json::Value, needle: &str) {
    match load_payload(payload) {
        Ok(_) => panic!("expected '{needle}' to be rejected"),
        Err(DatasetError::InvalidData(msg)) => {
            assert!(msg.contains(needle), "unexpected message: {msg}")
        }
        Err(other) => panic!("expected InvalidData error, got {other:?}"),
    }
}

#[test]
fn embedded_dataset_is_well_formed() {
    let dataset = Dataset::embedded();
    validate_dataset(&dataset).unwrap();

    assert!(dataset.block("BSIT-3A").is_some());
    assert!(dataset.programs.contains_key("BSIT"));
    assert_eq!(
        dataset.course_name("BSIT", "IT 301"),
        Some("Advanced Database Systems")
    );
}

#[test]
fn json_round_trip_preserves_the_dataset() {
    let dataset = build_sample_dataset();
    let file = NamedTempFile::new().unwrap();

    save_dataset_to_json(&dataset, file.path()).unwrap();
    let loaded = load_dataset_from_json(file.path()).unwrap();

    assert_eq!(loaded, dataset);
}

#[test]
fn load_rejects_misordered_periods() {
    expect_invalid(
        serde_json::json!({
            "programs": {},
            "schedules": {
                "BSIT-1A": [{
                    "code": "IT 101",
                    "designation": "Room 101",
                    "instructor": "Marvin Reyes",
                    "periods": [{ "start": 9.5, "end": 9.5, "days": [0] }]
                }]
            }
        }),
        "start 9.5 not before end 9.5",
    );
}

#[test]
fn load_rejects_quarter_hour_times() {
    expect_invalid(
        serde_json::json!({
            "programs": {},
            "schedules": {
                "BSIT-1A": [{
                    "code": "IT 101",
                    "designation": "Room 101",
                    "instructor": "Marvin Reyes",
                    "periods": [{ "start": 7.25, "end": 8.0, "days": [0] }]
                }]
            }
        }),
        "not on a half-hour step",
    );
}

#[test]
fn load_rejects_sunday_and_out_of_range_days() {
    expect_invalid(
        serde_json::json!({
            "programs": {},
            "schedules": {
                "BSIT-1A": [{
                    "code": "IT 101",
                    "designation": "Room 101",
                    "instructor": "Marvin Reyes",
                    "periods": [{ "start": 7.0, "end": 8.0, "days": [6] }]
                }]
            }
        }),
        "day index 6 out of range",
    );
}

#[test]
fn load_rejects_sessions_without_periods() {
    expect_invalid(
        serde_json::json!({
            "programs": {},
            "schedules": {
                "BSIT-1A": [{
                    "code": "IT 101",
                    "designation": "Room 101",
                    "instructor": "Marvin Reyes",
                    "periods": []
                }]
            }
        }),
        "has no time periods",
    );
}

#[test]
fn load_rejects_malformed_block_keys() {
    expect_invalid(
        serde_json::json!({
            "programs": {},
            "schedules": {
                "BSIT3A": [{
                    "code": "IT 101",
                    "designation": "Room 101",
                    "instructor": "Marvin Reyes",
                    "periods": [{ "start": 7.0, "end": 8.0, "days": [0] }]
                }]
            }
        }),
        "must have the form PROGRAM-SECTION",
    );
}

#[test]
fn load_rejects_blank_venues() {
    expect_invalid(
        serde_json::json!({
            "programs": {},
            "schedules": {
                "BSIT-1A": [{
                    "code": "IT 101",
                    "designation": "  ",
                    "instructor": "Marvin Reyes",
                    "periods": [{ "start": 7.0, "end": 8.0, "days": [0] }]
                }]
            }
        }),
        "empty venue",
    );
}

#[test]
fn missing_file_reports_an_io_error() {
    let dir = tempdir().unwrap();
    let result = load_dataset_from_json(dir.path().join("absent.json"));
    match result {
        Err(DatasetError::Io(_)) => {}
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn malformed_json_reports_a_serialization_error() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "{ not json").unwrap();
    match load_dataset_from_json(file.path()) {
        Err(DatasetError::Serialization(_)) => {}
        other => panic!("expected serialization error, got {other:?}"),
    }
}

#[test]
fn save_validates_before_writing() {
    let mut dataset = build_sample_dataset();
    dataset
        .schedules
        .get_mut("BSIT-1A")
        .unwrap()
        .first_mut()
        .unwrap()
        .periods[0]
        .days = vec![9];

    let dir = tempdir().unwrap();
    let path = dir.path().join("out.json");
    match save_dataset_to_json(&dataset, &path) {
        Err(DatasetError::InvalidData(msg)) => {
            assert!(msg.contains("day index 9"), "unexpected message: {msg}")
        }
        other => panic!("expected InvalidData error, got {other:?}"),
    }
    assert!(!path.exists());
}
