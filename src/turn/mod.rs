//! Turn actions, validation and progression.
//!
//! Contains the roll-number capabilities, the action sum type, the pure
//! validator, and the `Turn` driver that applies accepted actions.

pub mod action;
pub mod state;
pub mod validate;

pub use action::{Action, Capabilities, RollNumber};
pub use state::{Turn, TurnError, TurnOutcome};
pub use validate::{is_valid, validate, ValidationError};
