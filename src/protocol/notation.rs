//! Text notation for dice, keeps, cells and actions.
//!
//! Dice are written as five faces (`1 1 2 2 2`, or compact `11222`). Keeps
//! are six counts, one per face 1..=6. Cells are a category name followed by
//! a column name (`full free`). Counts display as `1:2, 2:3, ...`.

use thiserror::Error;

use crate::board::{Category, Column, FaceCounts, KeepCounts, DICE_COUNT, FACE_COUNT};
use crate::turn::Action;

/// Errors from parsing notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("unknown category '{0}'")]
    UnknownCategory(String),

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("invalid die face '{0}', expected 1-6")]
    InvalidFace(String),

    #[error("expected 5 dice, got {0}")]
    WrongDiceCount(usize),

    #[error("expected 6 keep counts, got {0}")]
    WrongKeepCount(usize),

    #[error("keep count for face {face} must not be negative, got {value}")]
    NegativeKeep { face: u8, value: i64 },

    #[error("invalid keep count '{0}'")]
    InvalidKeep(String),

    #[error("unexpected end of input, expected {0}")]
    UnexpectedEnd(String),

    #[error("unexpected token '{found}', expected {expected}")]
    UnexpectedToken { expected: String, found: String },

    #[error("unknown command '{0}'")]
    UnknownCommand(String),
}

/// Parses a category name.
pub fn parse_category(s: &str) -> Result<Category, NotationError> {
    Category::from_abbr(s).ok_or_else(|| NotationError::UnknownCategory(s.to_string()))
}

/// Parses a column name.
pub fn parse_column(s: &str) -> Result<Column, NotationError> {
    Column::from_abbr(s).ok_or_else(|| NotationError::UnknownColumn(s.to_string()))
}

/// Parses five die faces from tokens.
///
/// Each token may hold one or more faces; `,` and `.` are ignored, so
/// `1 1 2 2 2`, `11222` and `1,1,2,2,2.` are all the same roll.
pub fn parse_dice(tokens: &[&str]) -> Result<FaceCounts, NotationError> {
    let mut faces = Vec::with_capacity(DICE_COUNT as usize);
    for token in tokens {
        for ch in token.chars().filter(|c| *c != ',' && *c != '.') {
            match ch.to_digit(10) {
                Some(d @ 1..=6) => faces.push(d as u8),
                _ => return Err(NotationError::InvalidFace(ch.to_string())),
            }
        }
    }
    if faces.len() != DICE_COUNT as usize {
        return Err(NotationError::WrongDiceCount(faces.len()));
    }
    FaceCounts::from_faces(&faces).ok_or_else(|| NotationError::InvalidFace(format!("{:?}", faces)))
}

/// Parses six keep counts, one per face.
pub fn parse_keep(tokens: &[&str]) -> Result<KeepCounts, NotationError> {
    if tokens.len() != FACE_COUNT {
        return Err(NotationError::WrongKeepCount(tokens.len()));
    }
    let mut keep = [0u8; FACE_COUNT];
    for (i, token) in tokens.iter().enumerate() {
        let value: i64 = token
            .parse()
            .map_err(|_| NotationError::InvalidKeep(token.to_string()))?;
        if value < 0 {
            return Err(NotationError::NegativeKeep {
                face: i as u8 + 1,
                value,
            });
        }
        keep[i] = u8::try_from(value).map_err(|_| NotationError::InvalidKeep(token.to_string()))?;
    }
    Ok(keep)
}

/// Formats counts the way the dice reader prints them: `1:2, 2:3, ...`.
pub fn format_counts(dice: &FaceCounts) -> String {
    dice.iter()
        .map(|(face, n)| format!("{}:{}", face, n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Formats the individual faces, ascending: `1 1 2 2 2`.
pub fn format_faces(dice: &FaceCounts) -> String {
    dice.faces()
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats keep counts: `2 3 0 0 0 0`.
pub fn format_keep(keep: &KeepCounts) -> String {
    keep.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(" ")
}

/// Formats a cell as `category/column`.
pub fn format_cell(category: Category, column: Column) -> String {
    format!("{}/{}", category, column)
}

/// Formats an action in command form, so it parses back with the `keep` or
/// `fill` command.
pub fn format_action(action: &Action) -> String {
    match action {
        Action::Reroll { keep, announce } => match announce {
            Some(c) => format!("keep {} announce {}", format_keep(keep), c),
            None => format!("keep {}", format_keep(keep)),
        },
        Action::Fill { category, column } => format!("fill {} {}", category, column),
    }
}
