use crate::display::{
    CellColor, SOFT_HYPHEN, class_color, clock_label, day_label, designator_or_placeholder,
    soft_break_words,
};
use crate::filter::FilteredRow;
use crate::grid::{CellState, is_hour_start, layout};
use crate::view::{ScheduleView, ViewState};
use colored::Colorize;
use std::collections::VecDeque;

pub const NO_FILTER_BANNER: &str = "Set a filter to view the schedule.";
pub const NO_RESULTS_BANNER: &str = "No sessions match the current filter.";

/// Inner text width of the time column and of each day column.
const TIME_WIDTH: usize = 10;
const DAY_WIDTH: usize = 14;
/// Text lines per half-hour slot.
const SLOT_LINES: usize = 2;

/// Renders whatever the view currently calls for: a banner or the grid.
pub fn render_view(view: &ScheduleView, use_color: bool) -> String {
    match view.state() {
        ViewState::NoFilterSelected => NO_FILTER_BANNER.to_string(),
        ViewState::NoResults => NO_RESULTS_BANNER.to_string(),
        ViewState::Showing(rows) => render_grid(rows, use_color),
    }
}

/// Draws filtered rows as a bordered weekly grid. Hour boundaries get solid
/// rules, half-hour boundaries dashed ones, and both are interrupted where
/// a session cell spans through them.
pub fn render_grid(rows: &[FilteredRow], use_color: bool) -> String {
    let grid = layout(rows);
    let day_count = grid.days.len();
    let mut out = String::new();

    // Top border and day header
    push_rule_line(&mut out, day_count, '┌', '┬', '┐');
    out.push('│');
    out.push_str(&pad_centered("Time", TIME_WIDTH));
    for &day in &grid.days {
        out.push('│');
        out.push_str(&pad_centered(day_label(day), DAY_WIDTH));
    }
    out.push('│');
    out.push('\n');
    push_rule_line(&mut out, day_count, '├', '┼', '┤');

    if grid.slots.is_empty() {
        push_rule_line(&mut out, day_count, '└', '┴', '┘');
        out.pop();
        return out;
    }

    let mut time_lines: VecDeque<String> = VecDeque::new();
    let mut columns: Vec<ColumnCursor> = vec![ColumnCursor::idle(); day_count];

    for slot_index in 0..grid.slots.len() {
        let slot = grid.slots[slot_index];
        if is_hour_start(slot) {
            time_lines = hour_label_lines(slot);
        }
        for (day_index, column) in columns.iter_mut().enumerate() {
            if column.slots_left == 0 {
                *column = match grid.cell(slot_index, day_index) {
                    CellState::Start { row, span } => ColumnCursor::session(&rows[row], row, span),
                    _ => ColumnCursor::blank(),
                };
            }
        }

        for _ in 0..SLOT_LINES {
            out.push('│');
            out.push_str(&pad(&time_lines.pop_front().unwrap_or_default(), TIME_WIDTH));
            for column in columns.iter_mut() {
                out.push('│');
                let (text, color) = column.next_line();
                push_cell_text(&mut out, &text, color, use_color);
            }
            out.push('│');
            out.push('\n');
        }
        for column in columns.iter_mut() {
            column.slots_left = column.slots_left.saturating_sub(1);
        }

        if slot_index + 1 == grid.slots.len() {
            push_rule_line(&mut out, day_count, '└', '┴', '┘');
        } else {
            let next_is_hour = is_hour_start(grid.slots[slot_index + 1]);
            push_boundary_line(&mut out, next_is_hour, &mut time_lines, &mut columns, use_color);
        }
    }

    out.pop();
    out
}

#[derive(Clone)]
struct ColumnCursor {
    lines: VecDeque<String>,
    color: Option<CellColor>,
    slots_left: usize,
}

impl ColumnCursor {
    fn idle() -> Self {
        Self {
            lines: VecDeque::new(),
            color: None,
            slots_left: 0,
        }
    }

    fn blank() -> Self {
        Self {
            lines: VecDeque::new(),
            color: None,
            slots_left: 1,
        }
    }

    fn session(row: &FilteredRow, row_index: usize, span: usize) -> Self {
        Self {
            lines: cell_lines(row, span),
            color: Some(class_color(row_index)),
            slots_left: span,
        }
    }

    fn next_line(&mut self) -> (String, Option<CellColor>) {
        (self.lines.pop_front().unwrap_or_default(), self.color)
    }
}

/// Text of one session cell: code, then name, venue or block, and the
/// designator, wrapped to the column and clipped to the lines the span has.
fn cell_lines(row: &FilteredRow, span: usize) -> VecDeque<String> {
    let mut lines: Vec<String> = Vec::new();
    lines.extend(wrap_text(&row.code, DAY_WIDTH));
    lines.extend(wrap_text(&soft_break_words(&row.name), DAY_WIDTH));
    lines.extend(wrap_text(&row.designation, DAY_WIDTH));
    lines.extend(wrap_text(
        &soft_break_words(designator_or_placeholder(&row.designator)),
        DAY_WIDTH,
    ));
    lines.truncate(span * SLOT_LINES + (span - 1));
    lines.into()
}

// The hour's time cell reads top down as "7:00 AM", "-", "8:00 AM"; the
// remaining lines of its two slots stay blank.
fn hour_label_lines(slot: u32) -> VecDeque<String> {
    VecDeque::from([
        clock_label(slot),
        "-".to_string(),
        clock_label(slot + 2),
    ])
}

fn push_rule_line(out: &mut String, day_count: usize, left: char, mid: char, right: char) {
    out.push(left);
    push_fill(out, '─', TIME_WIDTH + 2);
    for _ in 0..day_count {
        out.push(mid);
        push_fill(out, '─', DAY_WIDTH + 2);
    }
    out.push(right);
    out.push('\n');
}

fn push_boundary_line(
    out: &mut String,
    hour_rule: bool,
    time_lines: &mut VecDeque<String>,
    columns: &mut [ColumnCursor],
    use_color: bool,
) {
    let fill = if hour_rule { '─' } else { '┄' };

    // The time cell spans both halves of its hour, so only hour boundaries
    // draw a rule through the time column.
    out.push(if hour_rule { '├' } else { '│' });
    if hour_rule {
        push_fill(out, fill, TIME_WIDTH + 2);
    } else {
        out.push_str(&pad(&time_lines.pop_front().unwrap_or_default(), TIME_WIDTH));
    }

    let mut left_rule = hour_rule;
    for column in columns.iter_mut() {
        let continuing = column.slots_left > 0;
        out.push(junction(left_rule, !continuing));
        if continuing {
            let (text, color) = column.next_line();
            push_cell_text(out, &text, color, use_color);
        } else {
            push_fill(out, fill, DAY_WIDTH + 2);
        }
        left_rule = !continuing;
    }
    out.push(if left_rule { '┤' } else { '│' });
    out.push('\n');
}

fn junction(left_rule: bool, right_rule: bool) -> char {
    match (left_rule, right_rule) {
        (true, true) => '┼',
        (true, false) => '┤',
        (false, true) => '├',
        (false, false) => '│',
    }
}

fn push_cell_text(out: &mut String, text: &str, color: Option<CellColor>, use_color: bool) {
    let padded = pad(text, DAY_WIDTH);
    match color {
        Some(color) if use_color => {
            let styled = padded
                .truecolor(color.fg.0, color.fg.1, color.fg.2)
                .on_truecolor(color.bg.0, color.bg.1, color.bg.2);
            out.push_str(&styled.to_string());
        }
        _ => out.push_str(&padded),
    }
}

fn push_fill(out: &mut String, fill: char, count: usize) {
    for _ in 0..count {
        out.push(fill);
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(width + 2);
    out.push(' ');
    out.push_str(text);
    for _ in len..width {
        out.push(' ');
    }
    out.push(' ');
    out
}

fn pad_centered(text: &str, width: usize) -> String {
    let len = text.chars().count().min(width);
    let left = (width - len) / 2;
    let mut out = String::with_capacity(width + 2);
    out.push(' ');
    for _ in 0..left {
        out.push(' ');
    }
    out.push_str(text);
    for _ in (left + len)..width {
        out.push(' ');
    }
    out.push(' ');
    out
}

/// Greedy word wrap. Oversize words break at their soft hyphen marks with a
/// visible dash, or at the column edge when no mark is available.
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in text.split(' ') {
        for piece in word_pieces(word, width) {
            if current.is_empty() {
                current = piece;
            } else if current.chars().count() + 1 + piece.chars().count() <= width {
                current.push(' ');
                current.push_str(&piece);
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
            }
        }
    }
    lines.push(current);
    lines
}

fn word_pieces(word: &str, width: usize) -> Vec<String> {
    let visible: String = word.chars().filter(|&c| c != SOFT_HYPHEN).collect();
    if visible.chars().count() <= width {
        return vec![visible];
    }
    let mut pieces: Vec<String> = word.split(SOFT_HYPHEN).map(str::to_string).collect();
    if pieces.len() > 1 {
        let last = pieces.len() - 1;
        for piece in &mut pieces[..last] {
            piece.push('-');
        }
        pieces
            .into_iter()
            .flat_map(|piece| hard_chunks(&piece, width))
            .collect()
    } else {
        hard_chunks(&visible, width)
    }
}

fn hard_chunks(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= width {
        return vec![text.to_string()];
    }
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
