//! Turn progression.
//!
//! `Turn` tracks the roll number, the dice on the table and the announcement
//! for the turn in progress, and applies validated actions: a keep advances
//! to the next roll, a fill commits to the scorecard and starts a new turn.

use rand::Rng;
use thiserror::Error;

use super::action::{Action, RollNumber};
use super::validate::{validate, ValidationError};
use crate::board::{AnnouncementState, Category, Column, FaceCounts, KeepCounts, Scorecard};
use crate::config::Rules;

/// Errors from driving a turn.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TurnError {
    #[error("no dice recorded for roll {roll}")]
    NoDice { roll: RollNumber },

    #[error("a roll needs 5 dice, got {total}")]
    IncompleteDice { total: u8 },

    #[error("{0}")]
    Rejected(#[from] ValidationError),
}

/// What applying an action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Dice kept; the turn moved on to `next` and awaits a new roll.
    Kept {
        keep: KeepCounts,
        announced: Option<Category>,
        next: RollNumber,
    },
    /// A cell was filled and a new turn has begun.
    Filled {
        category: Category,
        column: Column,
        score: u8,
    },
}

/// The turn in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    roll: RollNumber,
    dice: Option<FaceCounts>,
    /// Dice and keep counts from the previous roll, for re-rolling.
    held: Option<(FaceCounts, KeepCounts)>,
    announcement: AnnouncementState,
}

impl Default for Turn {
    fn default() -> Self {
        Turn::new()
    }
}

impl Turn {
    /// A fresh turn awaiting its first roll.
    pub fn new() -> Self {
        Turn {
            roll: RollNumber::First,
            dice: None,
            held: None,
            announcement: AnnouncementState::none(),
        }
    }

    /// The roll the next recorded dice belong to.
    pub fn roll(&self) -> RollNumber {
        self.roll
    }

    /// The dice recorded for the current roll.
    pub fn dice(&self) -> Option<&FaceCounts> {
        self.dice.as_ref()
    }

    pub fn announcement(&self) -> &AnnouncementState {
        &self.announcement
    }

    /// Keep counts chosen after the previous roll, if this is roll 2 or 3.
    pub fn kept(&self) -> Option<&KeepCounts> {
        self.held.as_ref().map(|(_, keep)| keep)
    }

    /// True until dice are recorded for the current roll.
    pub fn awaiting_roll(&self) -> bool {
        self.dice.is_none()
    }

    /// Records the dice for the current roll, replacing any earlier reading.
    pub fn record_roll(&mut self, dice: FaceCounts) -> Result<(), TurnError> {
        if !dice.is_complete() {
            return Err(TurnError::IncompleteDice { total: dice.total() });
        }
        if let Some((_, keep)) = &self.held {
            let missing = keep
                .iter()
                .zip(dice.as_array())
                .any(|(kept, now)| kept > now);
            if missing {
                log::warn!("recorded dice {:?} do not include the kept dice {:?}", dice.faces(), keep);
            }
        }
        log::debug!("roll {}: {:?}", self.roll(), dice.faces());
        self.dice = Some(dice);
        Ok(())
    }

    /// Rolls the dice for the current roll: all five on roll 1, the unkept
    /// ones afterwards. Records and returns the result.
    pub fn roll_dice(&mut self, rng: &mut impl Rng) -> FaceCounts {
        let dice = match &self.held {
            Some((prev, keep)) => prev.reroll(keep, rng),
            None => FaceCounts::roll(rng),
        };
        log::debug!("roll {}: rolled {:?}", self.roll(), dice.faces());
        self.dice = Some(dice);
        dice
    }

    /// Validates `action` and applies it.
    ///
    /// A keep records the announcement (roll 1) and advances the roll. A fill
    /// commits to `card` and resets to a fresh turn. A rejected action
    /// changes nothing.
    pub fn apply(&mut self, action: &Action, card: &mut Scorecard, rules: &Rules) -> Result<TurnOutcome, TurnError> {
        let roll = self.roll();
        let dice = self.dice.ok_or(TurnError::NoDice { roll })?;
        validate(action, &dice, roll, card, &self.announcement, rules)?;

        match *action {
            Action::Reroll { keep, announce } => {
                if let Some(category) = announce {
                    self.announcement.declare(category);
                }
                let next = roll.next().unwrap_or(RollNumber::Third);
                self.roll = next;
                self.held = Some((dice, keep));
                self.dice = None;
                Ok(TurnOutcome::Kept {
                    keep,
                    announced: announce,
                    next,
                })
            }
            Action::Fill { category, column } => {
                let score = card
                    .commit_fill(category, column, &dice, &self.announcement)
                    .map_err(ValidationError::from)?;
                *self = Turn::new();
                Ok(TurnOutcome::Filled {
                    category,
                    column,
                    score,
                })
            }
        }
    }
}
