use chrono::Weekday;

pub const COURSE_NAME_NOT_FOUND: &str = "Course Name Not Found";
pub const DESIGNATOR_NOT_FOUND: &str = "Designator Not Found";

pub const SOFT_HYPHEN: char = '\u{ad}';

/// Words of this many characters or more get soft break points inserted.
const LONG_WORD_LEN: usize = 17;
const CHUNK_LEN: usize = 12;

/// Background and foreground of one schedule cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColor {
    pub bg: (u8, u8, u8),
    pub fg: (u8, u8, u8),
}

const WHITE: (u8, u8, u8) = (255, 255, 255);

/// Gray fallback for rows past the end of the palette.
pub const NEUTRAL: CellColor = CellColor {
    bg: (212, 212, 216),
    fg: (39, 39, 42),
};

const PALETTE: [CellColor; 17] = [
    CellColor { bg: (185, 28, 28), fg: WHITE },   // red
    CellColor { bg: (180, 83, 9), fg: WHITE },    // amber
    CellColor { bg: (77, 124, 15), fg: WHITE },   // lime
    CellColor { bg: (21, 128, 61), fg: WHITE },   // green
    CellColor { bg: (15, 118, 110), fg: WHITE },  // teal
    CellColor { bg: (29, 78, 216), fg: WHITE },   // blue
    CellColor { bg: (109, 40, 217), fg: WHITE },  // violet
    CellColor { bg: (190, 24, 93), fg: WHITE },   // pink
    CellColor { bg: (190, 18, 60), fg: WHITE },   // rose
    CellColor { bg: (194, 65, 12), fg: WHITE },   // orange
    CellColor { bg: (161, 98, 7), fg: WHITE },    // yellow
    CellColor { bg: (4, 120, 87), fg: WHITE },    // emerald
    CellColor { bg: (3, 105, 161), fg: WHITE },   // sky
    CellColor { bg: (14, 116, 144), fg: WHITE },  // cyan
    CellColor { bg: (67, 56, 202), fg: WHITE },   // indigo
    CellColor { bg: (126, 34, 206), fg: WHITE },  // purple
    CellColor { bg: (162, 28, 175), fg: WHITE },  // fuchsia
];

/// Color assigned to a filtered row by its position. The palette is not
/// cycled: every row from the eighteenth on gets the neutral gray.
pub fn class_color(row_index: usize) -> CellColor {
    PALETTE.get(row_index).copied().unwrap_or(NEUTRAL)
}

pub fn designator_or_placeholder(designator: &str) -> &str {
    if designator.is_empty() {
        DESIGNATOR_NOT_FOUND
    } else {
        designator
    }
}

/// Inserts soft hyphens into words too long to fit a schedule cell, so the
/// renderer can break them. Spacing between words is preserved.
pub fn soft_break_words(text: &str) -> String {
    text.split(' ')
        .map(soft_break_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn soft_break_word(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < LONG_WORD_LEN {
        return word.to_string();
    }
    chars
        .chunks(CHUNK_LEN)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(&SOFT_HYPHEN.to_string())
}

/// 12-hour label for a half-hour slot number: slot 15 is "7:30 AM",
/// slot 24 is "12:00 PM", slot 48 wraps to "12:00 AM".
pub fn clock_label(slot: u32) -> String {
    let hour = slot / 2;
    let minute = if slot % 2 == 0 { 0 } else { 30 };
    let display_hour = if hour % 12 == 0 { 12 } else { hour % 12 };
    let suffix = if hour < 12 || hour == 24 { "AM" } else { "PM" };
    format!("{display_hour}:{minute:02} {suffix}")
}

pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
