use crate::dataset::{Dataset, TimePeriod, program_prefix};
use crate::display::COURSE_NAME_NOT_FOUND;
use std::str::FromStr;

/// How a filter value is matched against the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    Block,
    Venue,
    Instructor,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::Block => "block",
            FilterMode::Venue => "venue",
            FilterMode::Instructor => "instructor",
        }
    }

    pub fn variants() -> [(&'static str, &'static str); 3] {
        [
            ("block", "exact block key, like BSIT-3A"),
            ("venue", "case-insensitive substring of a room name"),
            ("instructor", "case-insensitive substring of an instructor name"),
        ]
    }
}

impl FromStr for FilterMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(FilterMode::Block),
            "venue" => Ok(FilterMode::Venue),
            "instructor" => Ok(FilterMode::Instructor),
            _ => Err(()),
        }
    }
}

/// One session that survived the filter, with display fields already
/// rewritten for the chosen mode.
///
/// In block mode `designation` is the venue and `designator` the instructor.
/// Venue mode replaces `designation` with the owning block key; instructor
/// mode keeps the venue and puts the block key in `designator`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredRow {
    pub code: String,
    pub name: String,
    pub designation: String,
    pub designator: String,
    pub periods: Vec<TimePeriod>,
}

/// Applies a filter to the dataset. Returns `None` when the value is blank
/// or nothing matches, so callers can tell "no filter" apart from "no rows"
/// by remembering whether they passed a value.
///
/// Rows come out grouped by block in ascending key order, keeping each
/// block's own session order. Row position decides the palette color and
/// which session wins a contested grid cell.
pub fn resolve_filter(dataset: &Dataset, mode: FilterMode, value: &str) -> Option<Vec<FilteredRow>> {
    if value.trim().is_empty() {
        return None;
    }
    let rows = match mode {
        FilterMode::Block => block_rows(dataset, value),
        FilterMode::Venue => venue_rows(dataset, value),
        FilterMode::Instructor => instructor_rows(dataset, value),
    };
    if rows.is_empty() { None } else { Some(rows) }
}

fn block_rows(dataset: &Dataset, key: &str) -> Vec<FilteredRow> {
    let Some(sessions) = dataset.block(key) else {
        return Vec::new();
    };
    sessions
        .iter()
        .map(|session| FilteredRow {
            code: session.code.clone(),
            name: resolved_name(dataset, key, &session.code),
            designation: session.designation.clone(),
            designator: session.instructor.clone(),
            periods: session.periods.clone(),
        })
        .collect()
}

fn venue_rows(dataset: &Dataset, query: &str) -> Vec<FilteredRow> {
    let needle = query.to_lowercase();
    let mut rows = Vec::new();
    for (block_key, sessions) in dataset.blocks() {
        for session in sessions {
            if session.designation.to_lowercase().contains(&needle) {
                rows.push(FilteredRow {
                    code: session.code.clone(),
                    name: resolved_name(dataset, block_key, &session.code),
                    designation: block_key.to_string(),
                    designator: session.instructor.clone(),
                    periods: session.periods.clone(),
                });
            }
        }
    }
    rows
}

fn instructor_rows(dataset: &Dataset, query: &str) -> Vec<FilteredRow> {
    let needle = query.to_lowercase();
    let mut rows = Vec::new();
    for (block_key, sessions) in dataset.blocks() {
        for session in sessions {
            if session.instructor.to_lowercase().contains(&needle) {
                rows.push(FilteredRow {
                    code: session.code.clone(),
                    name: resolved_name(dataset, block_key, &session.code),
                    designation: session.designation.clone(),
                    designator: block_key.to_string(),
                    periods: session.periods.clone(),
                });
            }
        }
    }
    rows
}

fn resolved_name(dataset: &Dataset, block_key: &str, code: &str) -> String {
    dataset
        .course_name(program_prefix(block_key), code)
        .map(str::to_string)
        .unwrap_or_else(|| COURSE_NAME_NOT_FOUND.to_string())
}
