//! Scorecard representation and scoring rules.
//!
//! Contains the category and column enums, dice face counts, category
//! scoring, the scorecard grid with its fill rules, and score totals.

pub mod announcement;
pub mod category;
pub mod dice;
pub mod scorecard;
pub mod scoring;
pub mod summary;

pub use announcement::AnnouncementState;
pub use category::{Category, Column, ALL_CATEGORIES, ALL_COLUMNS, CATEGORY_COUNT, COLUMN_COUNT};
pub use dice::{FaceCounts, KeepCounts, ALL_FACES, DICE_COUNT, FACE_COUNT};
pub use scorecard::{Grid, Infeasible, Scorecard};
pub use scoring::{score_at, scores_for, MAX_CELL_SCORE};
pub use summary::{summarize, total_score, ColumnTotal, ScoreSummary, UpperBonus};
