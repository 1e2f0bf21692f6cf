use crate::dataset::{TimePeriod, weekday_from_index};
use crate::filter::FilteredRow;
use chrono::Weekday;

/// One cell of the weekly grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    /// A session begins here. `row` indexes into the filtered rows and
    /// `span` is how many half-hour slots it runs for, this one included.
    Start { row: usize, span: usize },
    /// Continuation of a session that started in an earlier slot.
    Covered,
}

/// The computed grid: visible days, half-hour slots, and per-cell occupancy
/// stored row-major by slot.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub days: Vec<Weekday>,
    pub slots: Vec<u32>,
    cells: Vec<CellState>,
}

impl GridGeometry {
    /// Cell at `slot_index` down and `day_index` across. Both must be in
    /// range of `slots` and `days`.
    pub fn cell(&self, slot_index: usize, day_index: usize) -> CellState {
        self.cells[slot_index * self.days.len() + day_index]
    }
}

pub fn is_hour_start(slot: u32) -> bool {
    slot % 2 == 0
}

/// Contiguous run of weekdays from the earliest to the latest day any row
/// meets on. Days without sessions inside that span stay visible; with no
/// usable days at all the full Monday..Saturday week is kept.
pub fn day_range(rows: &[FilteredRow]) -> Vec<Weekday> {
    let mut bounds: Option<(u8, u8)> = None;
    for row in rows {
        for period in &row.periods {
            for &day in &period.days {
                if weekday_from_index(day).is_none() {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (day, day),
                    Some((lo, hi)) => (lo.min(day), hi.max(day)),
                });
            }
        }
    }
    let (lo, hi) = bounds.unwrap_or((0, 5));
    (lo..=hi).filter_map(weekday_from_index).collect()
}

/// Half-hour slots from the earliest start rounded down to a whole hour up
/// to the latest end rounded up, end exclusive.
pub fn time_slots(rows: &[FilteredRow]) -> Vec<u32> {
    let mut earliest: Option<u32> = None;
    let mut latest: Option<u32> = None;
    for row in rows {
        for period in &row.periods {
            let start = period.start_slot();
            let end = period.end_slot();
            earliest = Some(earliest.map_or(start, |slot| slot.min(start)));
            latest = Some(latest.map_or(end, |slot| slot.max(end)));
        }
    }
    let (Some(earliest), Some(latest)) = (earliest, latest) else {
        return Vec::new();
    };
    let first = earliest - earliest % 2;
    let last = latest + latest % 2;
    (first..last).collect()
}

/// Places every row onto the grid. Cells are visited top to bottom, left to
/// right; the first row with a period starting at a free cell claims it and
/// covers the slots below it for its span. Later rows never displace a
/// claimed or covered cell, so overlapping sessions resolve in row order.
pub fn layout(rows: &[FilteredRow]) -> GridGeometry {
    let days = day_range(rows);
    let slots = time_slots(rows);
    let mut cells = vec![CellState::Empty; slots.len() * days.len()];
    for (slot_index, &slot) in slots.iter().enumerate() {
        for (day_index, &day) in days.iter().enumerate() {
            let index = slot_index * days.len() + day_index;
            if cells[index] != CellState::Empty {
                continue;
            }
            let Some((row_index, period)) = starting_period(rows, slot, day) else {
                continue;
            };
            let span = period.slot_count().max(1);
            cells[index] = CellState::Start {
                row: row_index,
                span,
            };
            for offset in 1..span {
                let below = slot_index + offset;
                if below >= slots.len() {
                    break;
                }
                cells[below * days.len() + day_index] = CellState::Covered;
            }
        }
    }
    GridGeometry { days, slots, cells }
}

fn starting_period(rows: &[FilteredRow], slot: u32, day: Weekday) -> Option<(usize, &TimePeriod)> {
    for (row_index, row) in rows.iter().enumerate() {
        for period in &row.periods {
            if period.start_slot() == slot && period.covers_day(day) {
                return Some((row_index, period));
            }
        }
    }
    None
}
