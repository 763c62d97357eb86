//! Action validation.
//!
//! `validate` decides whether an action is legal for the dice on the table,
//! the roll number, the scorecard and the announcement state. It never
//! mutates anything; the error's display text is the reason shown to the
//! player.

use thiserror::Error;

use super::action::{Action, RollNumber};
use crate::board::{AnnouncementState, Category, Column, FaceCounts, Infeasible, Scorecard, ALL_FACES};
use crate::config::Rules;

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("cannot keep {keep} dice showing {face}, only {rolled} rolled")]
    InvalidKeepCount { face: u8, keep: u8, rolled: u8 },

    #[error("cannot announce after roll {roll}")]
    CannotAnnounce { roll: RollNumber },

    #[error("cannot announce {category}: its announced cell is already filled")]
    NotAnnounceable { category: Category },

    #[error("only announced cells remain, so roll 1 must announce")]
    MustAnnounce,

    #[error("infeasible cell: {0}")]
    InfeasibleCell(#[from] Infeasible),

    #[error("announced {announced}, so {category}/{column} cannot be filled")]
    BoundToAnnouncement {
        announced: Category,
        category: Category,
        column: Column,
    },

    #[error("roll {roll} needs a keep action")]
    ExpectedKeep { roll: RollNumber },

    #[error("roll {roll} needs a fill action")]
    ExpectedFill { roll: RollNumber },
}

/// Checks `action` against the current turn and scorecard.
///
/// `dice` must be the complete roll the action responds to.
pub fn validate(
    action: &Action,
    dice: &FaceCounts,
    roll: RollNumber,
    card: &Scorecard,
    announcement: &AnnouncementState,
    rules: &Rules,
) -> Result<(), ValidationError> {
    let caps = roll.capabilities();

    match *action {
        Action::Reroll { keep, announce } => {
            if !caps.can_roll {
                return Err(ValidationError::ExpectedFill { roll });
            }

            for face in ALL_FACES {
                let rolled = dice.count(face);
                let kept = keep[face as usize - 1];
                if kept > rolled {
                    return Err(ValidationError::InvalidKeepCount {
                        face,
                        keep: kept,
                        rolled,
                    });
                }
            }

            match announce {
                Some(_) if !caps.can_announce => return Err(ValidationError::CannotAnnounce { roll }),
                Some(category) if !card.is_announceable(category) => {
                    return Err(ValidationError::NotAnnounceable { category });
                }
                Some(_) => {}
                None => {
                    if caps.can_announce
                        && !announcement.is_active()
                        && card.only_announced_open()
                    {
                        return Err(ValidationError::MustAnnounce);
                    }
                }
            }
        }

        Action::Fill { category, column } => {
            if !caps.can_fill {
                return Err(ValidationError::ExpectedKeep { roll });
            }

            card.check_fill(category, column, announcement)?;

            if rules.announcement_binds_turn {
                if let Some(announced) = announcement.active() {
                    if column != Column::Announced || category != announced {
                        return Err(ValidationError::BoundToAnnouncement {
                            announced,
                            category,
                            column,
                        });
                    }
                }
            }
        }
    }

    Ok(())
}

/// Like [`validate`] but only reports legality.
pub fn is_valid(
    action: &Action,
    dice: &FaceCounts,
    roll: RollNumber,
    card: &Scorecard,
    announcement: &AnnouncementState,
    rules: &Rules,
) -> bool {
    validate(action, dice, roll, card, announcement, rules).is_ok()
}
