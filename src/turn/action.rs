//! Roll numbers and player actions.
//!
//! A turn has three rolls. After the first two the player decides which dice
//! to keep (and, after the first only, may announce); after the third the
//! player fills one cell. `Action` carries exactly the data for one of those
//! two shapes.

use std::fmt;

use crate::board::{Category, Column, KeepCounts};

/// Which roll of the turn the dice on the table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RollNumber {
    First,
    Second,
    Third,
}

/// What a player may do after a given roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub can_roll: bool,
    pub can_announce: bool,
    pub can_fill: bool,
}

impl RollNumber {
    /// The 1-based roll number.
    pub const fn number(self) -> u8 {
        match self {
            RollNumber::First => 1,
            RollNumber::Second => 2,
            RollNumber::Third => 3,
        }
    }

    /// The roll after this one, or `None` after the third.
    pub const fn next(self) -> Option<RollNumber> {
        match self {
            RollNumber::First => Some(RollNumber::Second),
            RollNumber::Second => Some(RollNumber::Third),
            RollNumber::Third => None,
        }
    }

    pub const fn capabilities(self) -> Capabilities {
        match self {
            RollNumber::First => Capabilities {
                can_roll: true,
                can_announce: true,
                can_fill: false,
            },
            RollNumber::Second => Capabilities {
                can_roll: true,
                can_announce: false,
                can_fill: false,
            },
            RollNumber::Third => Capabilities {
                can_roll: false,
                can_announce: false,
                can_fill: true,
            },
        }
    }
}

impl fmt::Display for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A candidate player decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// After roll 1 or 2: keep `keep[face - 1]` dice of each face and re-roll
    /// the rest, optionally announcing a category (roll 1 only).
    Reroll {
        keep: KeepCounts,
        announce: Option<Category>,
    },

    /// After roll 3: fill one cell.
    Fill { category: Category, column: Column },
}

impl Action {
    /// A re-roll without an announcement.
    pub const fn keep(keep: KeepCounts) -> Action {
        Action::Reroll { keep, announce: None }
    }

    /// A fill of `category`/`column`.
    pub const fn fill(category: Category, column: Column) -> Action {
        Action::Fill { category, column }
    }

    /// The announcement this action declares, if any.
    pub const fn announcement(&self) -> Option<Category> {
        match self {
            Action::Reroll { announce, .. } => *announce,
            Action::Fill { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_numbers_display_one_based() {
        assert_eq!(RollNumber::First.number(), 1);
        assert_eq!(RollNumber::Third.to_string(), "3");
    }

    #[test]
    fn capabilities_per_roll() {
        let c1 = RollNumber::First.capabilities();
        assert!(c1.can_roll && c1.can_announce && !c1.can_fill);
        let c2 = RollNumber::Second.capabilities();
        assert!(c2.can_roll && !c2.can_announce && !c2.can_fill);
        let c3 = RollNumber::Third.capabilities();
        assert!(!c3.can_roll && !c3.can_announce && c3.can_fill);
    }

    #[test]
    fn next_stops_after_third() {
        assert_eq!(RollNumber::First.next(), Some(RollNumber::Second));
        assert_eq!(RollNumber::Second.next(), Some(RollNumber::Third));
        assert_eq!(RollNumber::Third.next(), None);
    }

    #[test]
    fn announcement_accessor() {
        let a = Action::Reroll {
            keep: [0; 6],
            announce: Some(Category::Yamb),
        };
        assert_eq!(a.announcement(), Some(Category::Yamb));
        assert_eq!(Action::keep([1, 0, 0, 0, 0, 0]).announcement(), None);
        assert_eq!(Action::fill(Category::Ones, Column::Down).announcement(), None);
    }
}
