use crate::dataset::Dataset;
use std::collections::{BTreeMap, BTreeSet};

/// Blocks of one program and year level, in ascending key order.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockGroup {
    pub program: String,
    pub year_label: String,
    pub blocks: Vec<String>,
}

/// Venues under one heading: a floor of numbered rooms, the labs, or
/// everything else.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueGroup {
    pub label: String,
    pub venues: Vec<String>,
}

pub fn year_level_label(year: char) -> String {
    match year {
        '1' => "Freshman (1st Year)".to_string(),
        '2' => "Sophomore (2nd Year)".to_string(),
        '3' => "Junior (3rd Year)".to_string(),
        '4' => "Senior (4th Year)".to_string(),
        '5' => "Super Senior (5th Year)".to_string(),
        other => format!("Year {other}"),
    }
}

/// Groups block keys by program and then by the year digit that opens the
/// section part. Keys without the PROGRAM-SECTION shape are skipped.
pub fn block_groups(dataset: &Dataset) -> Vec<BlockGroup> {
    let mut groups: Vec<BlockGroup> = Vec::new();
    for (key, _) in dataset.blocks() {
        let Some((program, section)) = key.split_once('-') else {
            continue;
        };
        let Some(year) = section.chars().next() else {
            continue;
        };
        let year_label = year_level_label(year);
        let existing = groups
            .iter_mut()
            .find(|group| group.program == program && group.year_label == year_label);
        match existing {
            Some(group) => group.blocks.push(key.to_string()),
            None => groups.push(BlockGroup {
                program: program.to_string(),
                year_label,
                blocks: vec![key.to_string()],
            }),
        }
    }
    groups
}

/// Distinct venues grouped for browsing: `Room NNN` venues by their floor
/// digit, then anything containing "lab", then the rest. Every list is
/// sorted.
pub fn venue_groups(dataset: &Dataset) -> Vec<VenueGroup> {
    let mut venues: BTreeSet<&str> = BTreeSet::new();
    for (_, sessions) in dataset.blocks() {
        for session in sessions {
            venues.insert(session.designation.as_str());
        }
    }

    let mut floors: BTreeMap<char, Vec<String>> = BTreeMap::new();
    let mut labs: Vec<String> = Vec::new();
    let mut others: Vec<String> = Vec::new();
    for venue in venues {
        if let Some(floor) = numbered_room_floor(venue) {
            floors.entry(floor).or_default().push(venue.to_string());
        } else if venue.to_lowercase().contains("lab") {
            labs.push(venue.to_string());
        } else {
            others.push(venue.to_string());
        }
    }

    let mut groups: Vec<VenueGroup> = floors
        .into_iter()
        .map(|(floor, venues)| VenueGroup {
            label: format!("Room - {floor}F"),
            venues,
        })
        .collect();
    if !labs.is_empty() {
        groups.push(VenueGroup {
            label: "Labs".to_string(),
            venues: labs,
        });
    }
    if !others.is_empty() {
        groups.push(VenueGroup {
            label: "Others".to_string(),
            venues: others,
        });
    }
    groups
}

// "Room " followed by exactly three digits; the first digit names the floor.
fn numbered_room_floor(venue: &str) -> Option<char> {
    let number = venue.strip_prefix("Room ")?;
    if number.len() == 3 && number.chars().all(|c| c.is_ascii_digit()) {
        number.chars().next()
    } else {
        None
    }
}

/// Every instructor that appears in the dataset, deduplicated and sorted.
/// Sessions with a blank instructor are left out.
pub fn instructors(dataset: &Dataset) -> Vec<String> {
    let mut names: BTreeSet<&str> = BTreeSet::new();
    for (_, sessions) in dataset.blocks() {
        for session in sessions {
            if !session.instructor.is_empty() {
                names.insert(session.instructor.as_str());
            }
        }
    }
    names.into_iter().map(str::to_string).collect()
}
