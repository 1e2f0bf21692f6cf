use chrono::Weekday;
use serde::{Deserialize, Serialize};
use serde_json::Error as SerdeJsonError;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

const EMBEDDED_JSON: &str = include_str!("../data/schedule.json");

#[derive(Debug)]
pub enum DatasetError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    InvalidData(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Serialization(err) => write!(f, "serialization error: {err}"),
            DatasetError::Io(err) => write!(f, "io error: {err}"),
            DatasetError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for DatasetError {}

impl From<SerdeJsonError> for DatasetError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for DatasetError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

pub type DatasetResult<T> = Result<T, DatasetError>;

/// One row of a program's course catalog: maps a course code to its full name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub code: String,
    pub name: String,
}

/// A weekly recurring meeting. `start` and `end` are clock hours in half-hour
/// steps (7.5 means 7:30), `days` are weekday indices with 0 = Monday through
/// 5 = Saturday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePeriod {
    pub start: f64,
    pub end: f64,
    pub days: Vec<u8>,
}

impl TimePeriod {
    pub fn start_slot(&self) -> u32 {
        hours_to_slots(self.start)
    }

    pub fn end_slot(&self) -> u32 {
        hours_to_slots(self.end)
    }

    /// Number of half-hour slots the period occupies.
    pub fn slot_count(&self) -> usize {
        self.end_slot().saturating_sub(self.start_slot()) as usize
    }

    pub fn covers_day(&self, day: Weekday) -> bool {
        self.days
            .iter()
            .any(|&index| weekday_from_index(index) == Some(day))
    }
}

/// A class meeting of one block: what is taught, where, by whom, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSession {
    pub code: String,
    pub designation: String,
    pub instructor: String,
    pub periods: Vec<TimePeriod>,
}

/// The full timetable: course catalogs keyed by program code and session
/// lists keyed by block key (`BSIT-3A` is section A of third-year BSIT).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub programs: BTreeMap<String, Vec<CourseEntry>>,
    pub schedules: BTreeMap<String, Vec<CourseSession>>,
}

impl Dataset {
    pub fn from_json_str(data: &str) -> DatasetResult<Self> {
        let dataset: Dataset = serde_json::from_str(data)?;
        validate_dataset(&dataset)?;
        Ok(dataset)
    }

    /// The dataset bundled into the binary.
    pub fn embedded() -> Self {
        Self::from_json_str(EMBEDDED_JSON).expect("bundled dataset is valid")
    }

    pub fn block(&self, key: &str) -> Option<&[CourseSession]> {
        self.schedules.get(key).map(Vec::as_slice)
    }

    /// All blocks in ascending key order.
    pub fn blocks(&self) -> impl Iterator<Item = (&str, &[CourseSession])> {
        self.schedules
            .iter()
            .map(|(key, sessions)| (key.as_str(), sessions.as_slice()))
    }

    /// Looks up a course name in one program's catalog. The first entry with
    /// a matching code wins.
    pub fn course_name(&self, program: &str, code: &str) -> Option<&str> {
        self.programs
            .get(program)?
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.name.as_str())
    }
}

/// The program part of a block key: everything before the first dash.
pub fn program_prefix(block_key: &str) -> &str {
    block_key.split('-').next().unwrap_or(block_key)
}

pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    let day = match index {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => return None,
    };
    Some(day)
}

/// Converts clock hours to half-hour slot numbers (9.5 becomes slot 19).
pub fn hours_to_slots(hours: f64) -> u32 {
    (hours * 2.0).round() as u32
}

pub fn slots_to_hours(slot: u32) -> f64 {
    f64::from(slot) / 2.0
}

fn is_half_step(hours: f64) -> bool {
    hours.is_finite() && (hours * 2.0).fract() == 0.0
}

pub fn validate_dataset(dataset: &Dataset) -> DatasetResult<()> {
    for (key, sessions) in &dataset.schedules {
        let well_formed = key
            .split_once('-')
            .is_some_and(|(program, section)| !program.is_empty() && !section.is_empty());
        if !well_formed {
            return Err(DatasetError::InvalidData(format!(
                "block key '{key}' must have the form PROGRAM-SECTION (like BSIT-3A)"
            )));
        }
        if sessions.is_empty() {
            return Err(DatasetError::InvalidData(format!(
                "block '{key}' has no sessions"
            )));
        }
        for session in sessions {
            if session.code.trim().is_empty() {
                return Err(DatasetError::InvalidData(format!(
                    "block '{key}' has a session with an empty course code"
                )));
            }
            if session.designation.trim().is_empty() {
                return Err(DatasetError::InvalidData(format!(
                    "session '{}' in block '{key}' has an empty venue",
                    session.code
                )));
            }
            if session.periods.is_empty() {
                return Err(DatasetError::InvalidData(format!(
                    "session '{}' in block '{key}' has no time periods",
                    session.code
                )));
            }
            for period in &session.periods {
                validate_period(key, &session.code, period)?;
            }
        }
    }
    for (program, entries) in &dataset.programs {
        if program.trim().is_empty() {
            return Err(DatasetError::InvalidData(
                "program code must not be empty".to_string(),
            ));
        }
        for entry in entries {
            if entry.code.trim().is_empty() {
                return Err(DatasetError::InvalidData(format!(
                    "program '{program}' has a catalog entry with an empty course code"
                )));
            }
        }
    }
    Ok(())
}

fn validate_period(key: &str, code: &str, period: &TimePeriod) -> DatasetResult<()> {
    for &bound in &[period.start, period.end] {
        if !is_half_step(bound) {
            return Err(DatasetError::InvalidData(format!(
                "session '{code}' in block '{key}' has time {bound} not on a half-hour step"
            )));
        }
        if !(0.0..=24.0).contains(&bound) {
            return Err(DatasetError::InvalidData(format!(
                "session '{code}' in block '{key}' has time {bound} outside 0..24"
            )));
        }
    }
    if period.start >= period.end {
        return Err(DatasetError::InvalidData(format!(
            "session '{code}' in block '{key}' has start {} not before end {}",
            period.start, period.end
        )));
    }
    if period.days.is_empty() {
        return Err(DatasetError::InvalidData(format!(
            "session '{code}' in block '{key}' has a period with no days"
        )));
    }
    for &day in &period.days {
        if weekday_from_index(day).is_none() {
            return Err(DatasetError::InvalidData(format!(
                "session '{code}' in block '{key}' has day index {day} out of range \
                 (0 = Monday through 5 = Saturday)"
            )));
        }
    }
    Ok(())
}

pub fn load_dataset_from_json<P: AsRef<Path>>(path: P) -> DatasetResult<Dataset> {
    let file = File::open(path)?;
    let dataset: Dataset = serde_json::from_reader(file)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

pub fn save_dataset_to_json<P: AsRef<Path>>(dataset: &Dataset, path: P) -> DatasetResult<()> {
    validate_dataset(dataset)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, dataset)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_conversion_round_trips_on_half_hours() {
        assert_eq!(hours_to_slots(7.0), 14);
        assert_eq!(hours_to_slots(7.5), 15);
        assert_eq!(slots_to_hours(27), 13.5);
        assert_eq!(hours_to_slots(slots_to_hours(39)), 39);
    }

    #[test]
    fn weekday_index_covers_monday_through_saturday() {
        assert_eq!(weekday_from_index(0), Some(Weekday::Mon));
        assert_eq!(weekday_from_index(5), Some(Weekday::Sat));
        assert_eq!(weekday_from_index(6), None);
    }

    #[test]
    fn program_prefix_stops_at_first_dash() {
        assert_eq!(program_prefix("BSIT-3A"), "BSIT");
        assert_eq!(program_prefix("AB-COMM-1A"), "AB");
        assert_eq!(program_prefix("NODASH"), "NODASH");
    }

    #[test]
    fn period_helpers_use_half_hour_slots() {
        let period = TimePeriod {
            start: 9.0,
            end: 10.5,
            days: vec![1, 3],
        };
        assert_eq!(period.start_slot(), 18);
        assert_eq!(period.end_slot(), 21);
        assert_eq!(period.slot_count(), 3);
        assert!(period.covers_day(Weekday::Tue));
        assert!(!period.covers_day(Weekday::Mon));
    }
}
