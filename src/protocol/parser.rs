//! Command parser.
//!
//! Parses incoming protocol lines from raw text into structured `Command`
//! variants that the main loop dispatches on.

use super::notation::{parse_category, parse_column, parse_dice, parse_keep, NotationError};
use crate::board::FaceCounts;
use crate::turn::Action;

/// A parsed player-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set a rule: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Fresh scorecard and turn.
    NewGame,

    /// Record the given dice, or roll at random when `dice` is `None`.
    Roll { dice: Option<FaceCounts> },

    /// A keep (roll 1 or 2) or fill (roll 3) decision.
    Play(Action),

    /// List the cells that can be filled right now.
    Feasible,

    /// Print the scorecard grid.
    Board,

    /// Print the score summary.
    Score,

    /// Print the roll number, dice and announcement of the current turn.
    Status,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `Ok(None)` for empty lines. Unknown commands and malformed
/// arguments are errors whose display text is the reason shown to the
/// player.
pub fn parse_command(line: &str) -> Result<Option<Command>, NotationError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = tokens.first() else {
        return Ok(None);
    };

    let cmd = match head {
        "isready" => Command::IsReady,
        "quit" => Command::Quit,
        "newgame" => Command::NewGame,
        "feasible" => Command::Feasible,
        "board" => Command::Board,
        "score" => Command::Score,
        "status" => Command::Status,

        "setoption" => parse_setoption(&tokens)?,
        "roll" => parse_roll(&tokens)?,
        "keep" => parse_keep_command(&tokens)?,
        "fill" => parse_fill(&tokens)?,

        other => return Err(NotationError::UnknownCommand(other.to_string())),
    };
    Ok(Some(cmd))
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, NotationError> {
    match tokens.get(1) {
        Some(&"name") => {}
        Some(other) => {
            return Err(NotationError::UnexpectedToken {
                expected: "'name'".to_string(),
                found: other.to_string(),
            })
        }
        None => return Err(NotationError::UnexpectedEnd("'name'".to_string())),
    }

    let value_idx = tokens.iter().position(|&t| t == "value");
    let name_end = value_idx.unwrap_or(tokens.len());
    let name_parts = &tokens[2..name_end.max(2)];
    if name_parts.is_empty() {
        return Err(NotationError::UnexpectedEnd("an option name".to_string()));
    }
    let name = name_parts.join(" ");

    let value = match value_idx {
        Some(vi) if vi + 1 < tokens.len() => Some(tokens[vi + 1..].join(" ")),
        _ => None,
    };

    Ok(Command::SetOption { name, value })
}

/// Parses `roll [f1 f2 f3 f4 f5]`.
fn parse_roll(tokens: &[&str]) -> Result<Command, NotationError> {
    if tokens.len() == 1 {
        return Ok(Command::Roll { dice: None });
    }
    let dice = parse_dice(&tokens[1..])?;
    Ok(Command::Roll { dice: Some(dice) })
}

/// Parses `keep k1 k2 k3 k4 k5 k6 [announce <category>]`.
fn parse_keep_command(tokens: &[&str]) -> Result<Command, NotationError> {
    let args = &tokens[1..];
    let (counts, announce) = match args.iter().position(|&t| t == "announce") {
        Some(ai) => {
            let category = match &args[ai + 1..] {
                [name] => parse_category(name)?,
                [] => return Err(NotationError::UnexpectedEnd("a category to announce".to_string())),
                [_, extra, ..] => {
                    return Err(NotationError::UnexpectedToken {
                        expected: "end of line".to_string(),
                        found: extra.to_string(),
                    })
                }
            };
            (&args[..ai], Some(category))
        }
        None => (args, None),
    };
    let keep = parse_keep(counts)?;
    Ok(Command::Play(Action::Reroll { keep, announce }))
}

/// Parses `fill <category> <column>`.
fn parse_fill(tokens: &[&str]) -> Result<Command, NotationError> {
    match &tokens[1..] {
        [category, column] => Ok(Command::Play(Action::fill(
            parse_category(category)?,
            parse_column(column)?,
        ))),
        [] | [_] => Err(NotationError::UnexpectedEnd("'fill <category> <column>'".to_string())),
        [_, _, extra, ..] => Err(NotationError::UnexpectedToken {
            expected: "end of line".to_string(),
            found: extra.to_string(),
        }),
    }
}
