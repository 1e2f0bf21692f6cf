use blocksched::{
    CourseEntry, CourseSession, Dataset, FilterMode, ScheduleView, TimePeriod, ViewState,
};

fn dataset_with_block(key: &str, code: &str) -> Dataset {
    let mut dataset = Dataset::default();
    dataset.programs.insert(
        "BSIT".into(),
        vec![CourseEntry {
            code: code.into(),
            name: "Advanced Database Systems".into(),
        }],
    );
    dataset.schedules.insert(
        key.into(),
        vec![CourseSession {
            code: code.into(),
            designation: "Room 301".into(),
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

#[test]
fn new_view_waits_for_a_filter() {
    let view = ScheduleView::new(dataset_with_block("BSIT-3A", "IT 301"));
    assert_eq!(view.state(), ViewState::NoFilterSelected);
    assert_eq!(view.mode(), FilterMode::Block);
    assert_eq!(view.value(), None);
}

#[test]
fn matching_value_shows_rows() {
    let mut view = ScheduleView::new(dataset_with_block("BSIT-3A", "IT 301"));
    view.set_value("BSIT-3A");

    match view.state() {
        ViewState::Showing(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].code, "IT 301");
        }
        other => panic!("expected rows to show, got {other:?}"),
    }
    assert_eq!(view.value(), Some("BSIT-3A"));
}

#[test]
fn unmatched_value_reports_no_results() {
    let mut view = ScheduleView::new(dataset_with_block("BSIT-3A", "IT 301"));
    view.set_value("BSIT-9Z");
    assert_eq!(view.state(), ViewState::NoResults);
    assert_eq!(view.value(), Some("BSIT-9Z"));
}

#[test]
fn blank_value_clears_the_filter() {
    let mut view = ScheduleView::new(dataset_with_block("BSIT-3A", "IT 301"));
    view.set_value("BSIT-3A");
    view.set_value("   ");
    assert_eq!(view.state(), ViewState::NoFilterSelected);
    assert_eq!(view.value(), None);
}

#[test]
fn switching_mode_resets_the_filter() {
    let mut view = ScheduleView::new(dataset_with_block("BSIT-3A", "IT 301"));
    view.set_value("BSIT-3A");
    view.set_mode(FilterMode::Venue);

    assert_eq!(view.mode(), FilterMode::Venue);
    assert_eq!(view.state(), ViewState::NoFilterSelected);
    assert_eq!(view.value(), None);
}

#[test]
fn setting_the_active_mode_keeps_the_filter() {
    let mut view = ScheduleView::new(dataset_with_block("BSIT-3A", "IT 301"));
    view.set_value("BSIT-3A");
    view.set_mode(FilterMode::Block);

    assert!(matches!(view.state(), ViewState::Showing(_)));
    assert_eq!(view.value(), Some("BSIT-3A"));
}

#[test]
fn clearing_returns_to_the_banner_state() {
    let mut view = ScheduleView::new(dataset_with_block("BSIT-3A", "IT 301"));
    view.set_value("BSIT-3A");
    view.clear_value();
    assert_eq!(view.state(), ViewState::NoFilterSelected);
}

#[test]
fn mode_is_applied_to_later_values() {
    let mut view = ScheduleView::new(dataset_with_block("BSIT-3A", "IT 301"));
    view.set_mode(FilterMode::Instructor);
    view.set_value("reyes");

    match view.state() {
        ViewState::Showing(rows) => assert_eq!(rows[0].designator, "BSIT-3A"),
        other => panic!("expected instructor rows, got {other:?}"),
    }
}

#[test]
fn replacing_the_dataset_clears_the_filter() {
    let mut view = ScheduleView::new(dataset_with_block("BSIT-3A", "IT 301"));
    view.set_value("BSIT-3A");

    view.set_dataset(dataset_with_block("BSIS-1A", "IS 101"));
    assert_eq!(view.state(), ViewState::NoFilterSelected);

    view.set_value("BSIS-1A");
    assert!(matches!(view.state(), ViewState::Showing(_)));
    view.set_value("BSIT-3A");
    assert_eq!(view.state(), ViewState::NoResults);
}
