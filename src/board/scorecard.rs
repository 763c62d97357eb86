//! The Yamb scorecard.
//!
//! A 14×4 grid of optional scores plus the Down/Up cursors. Cells go from
//! unfilled to filled exactly once, through [`Scorecard::commit_fill`]; every
//! other method is a query.

use thiserror::Error;

use super::announcement::AnnouncementState;
use super::category::{Category, Column, ALL_CATEGORIES, ALL_COLUMNS, CATEGORY_COUNT, COLUMN_COUNT};
use super::dice::FaceCounts;
use super::scoring::score_at;

/// Why a cell cannot be filled right now.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum Infeasible {
    #[error("{category}/{column} is already filled")]
    AlreadyFilled { category: Category, column: Column },

    #[error("{column} column needs {expected} next, not {requested}")]
    OutOfOrder {
        column: Column,
        expected: Category,
        requested: Category,
    },

    #[error("{column} column is complete")]
    ColumnComplete { column: Column },

    #[error("{category} was not announced this turn")]
    NotAnnounced { category: Category },

    #[error("announced {announced} but trying to fill {requested}")]
    AnnouncedElsewhere {
        announced: Category,
        requested: Category,
    },
}

/// Scores in a grid row-major by category, `None` meaning unfilled.
pub type Grid = [[Option<u8>; COLUMN_COUNT]; CATEGORY_COUNT];

/// One player's scorecard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scorecard {
    cells: Grid,
    /// Next Down cell; `None` once Yamb is filled.
    down: Option<Category>,
    /// Next Up cell; `None` once Ones is filled.
    up: Option<Category>,
}

impl Default for Scorecard {
    fn default() -> Self {
        Scorecard::new()
    }
}

impl Scorecard {
    /// Creates an empty scorecard with the cursors at their extremes.
    pub fn new() -> Self {
        Scorecard {
            cells: [[None; COLUMN_COUNT]; CATEGORY_COUNT],
            down: Some(Category::FIRST),
            up: Some(Category::LAST),
        }
    }

    /// The stored score for a cell, or `None` if unfilled.
    pub fn cell(&self, category: Category, column: Column) -> Option<u8> {
        self.cells[category.index()][column.index()]
    }

    /// The whole grid.
    pub fn grid(&self) -> &Grid {
        &self.cells
    }

    /// Next category the Down column accepts.
    pub fn down_cursor(&self) -> Option<Category> {
        self.down
    }

    /// Next category the Up column accepts.
    pub fn up_cursor(&self) -> Option<Category> {
        self.up
    }

    /// Explains why `category`/`column` cannot be filled, or `Ok` if it can.
    ///
    /// Checks, in order: the cell is unfilled; Down/Up cells match their
    /// cursor; an Announced cell is the one announced this turn.
    pub fn check_fill(
        &self,
        category: Category,
        column: Column,
        announcement: &AnnouncementState,
    ) -> Result<(), Infeasible> {
        if self.cell(category, column).is_some() {
            return Err(Infeasible::AlreadyFilled { category, column });
        }

        match column {
            Column::Down => Self::check_cursor(self.down, column, category),
            Column::Up => Self::check_cursor(self.up, column, category),
            Column::Free => Ok(()),
            Column::Announced => match announcement.active() {
                None => Err(Infeasible::NotAnnounced { category }),
                Some(announced) if announced != category => Err(Infeasible::AnnouncedElsewhere {
                    announced,
                    requested: category,
                }),
                Some(_) => Ok(()),
            },
        }
    }

    fn check_cursor(cursor: Option<Category>, column: Column, requested: Category) -> Result<(), Infeasible> {
        match cursor {
            Some(expected) if expected == requested => Ok(()),
            Some(expected) => Err(Infeasible::OutOfOrder {
                column,
                expected,
                requested,
            }),
            None => Err(Infeasible::ColumnComplete { column }),
        }
    }

    /// True if `category`/`column` can be filled under `announcement`.
    pub fn is_feasible(&self, category: Category, column: Column, announcement: &AnnouncementState) -> bool {
        self.check_fill(category, column, announcement).is_ok()
    }

    /// True if `category` may be announced: its Announced cell is unfilled.
    ///
    /// This is the feasibility check run as if nothing were announced yet,
    /// minus the announcement requirement itself.
    pub fn is_announceable(&self, category: Category) -> bool {
        self.cell(category, Column::Announced).is_none()
    }

    /// Every cell currently fillable under `announcement`, row-major.
    pub fn feasible_cells(&self, announcement: &AnnouncementState) -> Vec<(Category, Column)> {
        let mut out = Vec::new();
        for category in ALL_CATEGORIES {
            for column in ALL_COLUMNS {
                if self.is_feasible(category, column, announcement) {
                    out.push((category, column));
                }
            }
        }
        out
    }

    /// Writes `score_at(category, dice)` into the cell if it is feasible.
    ///
    /// Returns the score written. On failure nothing changes, so repeating a
    /// fill on the same cell is rejected without double counting.
    pub fn commit_fill(
        &mut self,
        category: Category,
        column: Column,
        dice: &FaceCounts,
        announcement: &AnnouncementState,
    ) -> Result<u8, Infeasible> {
        self.check_fill(category, column, announcement)?;

        let score = score_at(category, dice);
        self.cells[category.index()][column.index()] = Some(score);
        match column {
            Column::Down => self.down = category.next(),
            Column::Up => self.up = category.prev(),
            Column::Free | Column::Announced => {}
        }
        Ok(score)
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// True if every cell in `column` is filled.
    pub fn is_column_complete(&self, column: Column) -> bool {
        ALL_CATEGORIES.iter().all(|c| self.cell(*c, column).is_some())
    }

    /// True when only Announced cells remain open.
    pub fn only_announced_open(&self) -> bool {
        [Column::Down, Column::Up, Column::Free]
            .iter()
            .all(|col| self.is_column_complete(*col))
    }

    /// True when all 56 cells are filled and the game is over.
    pub fn is_complete(&self) -> bool {
        self.filled_count() == CATEGORY_COUNT * COLUMN_COUNT
    }
}
