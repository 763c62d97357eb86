//! Running score totals.
//!
//! Each column scores in three sections. The upper section sums Ones..Sixes
//! and earns a bonus at a threshold. The middle section is
//! `(Max - Min) * Ones` once all three cells are filled. The lower section
//! sums TwoPairs..Yamb. Unfilled cells count as zero.

use super::category::{Category, Column, ALL_CATEGORIES, ALL_COLUMNS, COLUMN_COUNT};
use super::scorecard::Scorecard;

/// Upper-section bonus rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpperBonus {
    /// Upper sum needed to earn the bonus.
    pub threshold: u16,
    /// Points added once the threshold is reached.
    pub bonus: u16,
}

impl Default for UpperBonus {
    fn default() -> Self {
        UpperBonus { threshold: 60, bonus: 30 }
    }
}

/// Section totals for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnTotal {
    pub upper: i32,
    pub bonus: i32,
    /// May be negative when Min outscored Max.
    pub middle: i32,
    pub lower: i32,
}

impl ColumnTotal {
    pub fn total(&self) -> i32 {
        self.upper + self.bonus + self.middle + self.lower
    }
}

/// Totals for every column and the whole card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreSummary {
    pub columns: [ColumnTotal; COLUMN_COUNT],
}

impl ScoreSummary {
    /// Totals for `column`.
    pub fn column(&self, column: Column) -> &ColumnTotal {
        &self.columns[column.index()]
    }

    /// Game score: the sum of all column totals.
    pub fn total(&self) -> i32 {
        self.columns.iter().map(ColumnTotal::total).sum()
    }
}

/// Computes section totals for every column of `card`.
pub fn summarize(card: &Scorecard, rule: UpperBonus) -> ScoreSummary {
    let mut summary = ScoreSummary::default();
    for column in ALL_COLUMNS {
        summary.columns[column.index()] = column_total(card, column, rule);
    }
    summary
}

/// Game score for `card`.
pub fn total_score(card: &Scorecard, rule: UpperBonus) -> i32 {
    summarize(card, rule).total()
}

fn column_total(card: &Scorecard, column: Column, rule: UpperBonus) -> ColumnTotal {
    let value = |c: Category| card.cell(c, column).map(i32::from);

    let upper: i32 = ALL_CATEGORIES
        .iter()
        .filter(|c| c.is_upper())
        .filter_map(|c| value(*c))
        .sum();
    let bonus = if upper >= i32::from(rule.threshold) {
        i32::from(rule.bonus)
    } else {
        0
    };

    let middle = match (value(Category::Max), value(Category::Min), value(Category::Ones)) {
        (Some(max), Some(min), Some(ones)) => (max - min) * ones,
        _ => 0,
    };

    let lower: i32 = ALL_CATEGORIES
        .iter()
        .filter(|c| **c >= Category::TwoPairs)
        .filter_map(|c| value(*c))
        .sum();

    ColumnTotal {
        upper,
        bonus,
        middle,
        lower,
    }
}
