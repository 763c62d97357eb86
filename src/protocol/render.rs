//! Plain-text rendering of the scorecard and its totals.

use crate::board::{ColumnTotal, ScoreSummary, Scorecard, ALL_CATEGORIES, ALL_COLUMNS};

const LABEL_WIDTH: usize = 16;
const CELL_WIDTH: usize = 10;

fn header() -> String {
    let mut line = format!("{:<LABEL_WIDTH$}", "");
    for column in ALL_COLUMNS {
        line.push_str(&format!("{:>CELL_WIDTH$}", column.abbr()));
    }
    line
}

/// Renders the 14×4 grid, one line per category plus a header. Unfilled
/// cells show as `-`.
pub fn render_board(card: &Scorecard) -> Vec<String> {
    let mut lines = Vec::with_capacity(ALL_CATEGORIES.len() + 1);
    lines.push(header());
    for (category, row) in ALL_CATEGORIES.iter().zip(card.grid()) {
        let mut line = format!("{:<LABEL_WIDTH$}", category.name());
        for cell in row {
            let cell = match cell {
                Some(score) => score.to_string(),
                None => "-".to_string(),
            };
            line.push_str(&format!("{:>CELL_WIDTH$}", cell));
        }
        lines.push(line.trim_end().to_string());
    }
    lines
}

/// Renders section totals per column followed by the game total.
pub fn render_summary(summary: &ScoreSummary) -> Vec<String> {
    let rows: [(&str, fn(&ColumnTotal) -> i32); 5] = [
        ("Upper", |t| t.upper),
        ("Bonus", |t| t.bonus),
        ("Middle", |t| t.middle),
        ("Lower", |t| t.lower),
        ("Column total", |t| t.total()),
    ];

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header());
    for (label, value) in rows {
        let mut line = format!("{:<LABEL_WIDTH$}", label);
        for column in ALL_COLUMNS {
            line.push_str(&format!("{:>CELL_WIDTH$}", value(summary.column(column))));
        }
        lines.push(line);
    }
    lines.push(format!("{:<LABEL_WIDTH$}{:>CELL_WIDTH$}", "Total", summary.total()));
    lines
}
