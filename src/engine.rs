//! Game state management.
//!
//! Holds the scorecard, the turn in progress, the table rules and the dice
//! generator, and answers each protocol command with `ok`, `rejected` or data
//! lines.

use std::fmt::Display;
use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{summarize, FaceCounts, Scorecard, ScoreSummary, CATEGORY_COUNT, COLUMN_COUNT};
use crate::config::Rules;
use crate::protocol::notation::{format_action, format_cell, format_counts, format_faces, format_keep};
use crate::protocol::render::{render_board, render_summary};
use crate::turn::{Action, Turn, TurnOutcome};

/// Option name that reseeds the dice generator.
const SEED_OPTION: &str = "seed";

/// Holds the mutable state of one game between commands.
pub struct Engine {
    card: Scorecard,
    turn: Turn,
    rules: Rules,
    rng: SmallRng,
}

impl Engine {
    /// Creates an engine with an empty scorecard and entropy-seeded dice.
    pub fn new(rules: Rules) -> Self {
        Engine {
            card: Scorecard::new(),
            turn: Turn::new(),
            rules,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates an engine whose random rolls are reproducible.
    pub fn with_seed(rules: Rules, seed: u64) -> Self {
        Engine {
            rng: SmallRng::seed_from_u64(seed),
            ..Engine::new(rules)
        }
    }

    pub fn scorecard(&self) -> &Scorecard {
        &self.card
    }

    pub fn turn(&self) -> &Turn {
        &self.turn
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// True once every cell of the scorecard is filled.
    pub fn is_game_over(&self) -> bool {
        self.card.is_complete()
    }

    pub fn summary(&self) -> ScoreSummary {
        summarize(&self.card, self.rules.upper_bonus())
    }

    /// Resets the scorecard and turn. Rules and the dice generator carry over.
    pub fn new_game(&mut self) {
        self.card = Scorecard::new();
        self.turn = Turn::new();
        log::info!("new game");
    }

    /// Sets a rule, or reseeds the dice with the `Seed` option.
    pub fn handle_setoption<W: Write>(&mut self, name: &str, value: Option<&str>, out: &mut W) -> io::Result<()> {
        if name.eq_ignore_ascii_case(SEED_OPTION) {
            match value.map(str::parse::<u64>) {
                Some(Ok(seed)) => {
                    self.rng = SmallRng::seed_from_u64(seed);
                    log::debug!("dice reseeded with {}", seed);
                    writeln!(out, "ok seed {}", seed)?;
                }
                _ => reject(out, format!("invalid value for option '{}'", name))?,
            }
            return out.flush();
        }

        match self.rules.set_option(name, value) {
            Ok(()) => {
                log::debug!("rules now {:?}", self.rules);
                writeln!(out, "ok {}", name)?;
            }
            Err(e) => reject(out, e)?,
        }
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles `roll`: records the given dice, or rolls when none are given.
    ///
    /// A random roll is only made while the turn awaits dice; given dice may
    /// replace an earlier reading of the same roll.
    pub fn handle_roll<W: Write>(&mut self, dice: Option<FaceCounts>, out: &mut W) -> io::Result<()> {
        if self.is_game_over() {
            reject(out, "game over, send newgame to start again")?;
            return out.flush();
        }

        let roll = self.turn.roll();
        let dice = match dice {
            Some(dice) => match self.turn.record_roll(dice) {
                Ok(()) => dice,
                Err(e) => {
                    reject(out, e)?;
                    return out.flush();
                }
            },
            None if !self.turn.awaiting_roll() => {
                reject(out, format!("roll {} already made, keep or fill next", roll))?;
                return out.flush();
            }
            None => self.turn.roll_dice(&mut self.rng),
        };

        writeln!(
            out,
            "ok roll {} dice {} counts {}",
            roll,
            format_faces(&dice),
            format_counts(&dice)
        )?;
        out.flush()
    }

    /// Handles a `keep` or `fill` decision.
    pub fn handle_play<W: Write>(&mut self, action: &Action, out: &mut W) -> io::Result<()> {
        match self.turn.apply(action, &mut self.card, &self.rules) {
            Ok(TurnOutcome::Kept { keep, announced, next }) => {
                match announced {
                    Some(category) => {
                        log::info!("announced {}", category);
                        writeln!(out, "ok kept {} announced {} next roll {}", format_keep(&keep), category, next)?;
                    }
                    None => writeln!(out, "ok kept {} next roll {}", format_keep(&keep), next)?,
                }
            }
            Ok(TurnOutcome::Filled { category, column, score }) => {
                log::info!("filled {}/{} with {}", category, column, score);
                writeln!(out, "ok filled {} score {}", format_cell(category, column), score)?;
                if self.is_game_over() {
                    let total = self.summary().total();
                    log::info!("game over, total {}", total);
                    writeln!(out, "gameover total {}", total)?;
                }
            }
            Err(e) => {
                log::warn!("rejected {}: {}", format_action(action), e);
                reject(out, e)?;
            }
        }
        out.flush()
    }

    /// Lists every cell that can be filled under the current announcement.
    pub fn handle_feasible<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let cells: Vec<String> = self
            .card
            .feasible_cells(self.turn.announcement())
            .into_iter()
            .map(|(category, column)| format_cell(category, column))
            .collect();
        if cells.is_empty() {
            writeln!(out, "feasible none")?;
        } else {
            writeln!(out, "feasible {}", cells.join(" "))?;
        }
        out.flush()
    }

    /// Prints the scorecard grid.
    pub fn handle_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in render_board(&self.card) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    /// Prints the section totals and the game total.
    pub fn handle_score<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in render_summary(&self.summary()) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    /// Prints one line describing the turn in progress.
    pub fn handle_status<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let dice = match self.turn.dice() {
            Some(d) => format_faces(d),
            None => "none".to_string(),
        };
        let announced = match self.turn.announcement().active() {
            Some(c) => c.abbr(),
            None => "none",
        };
        writeln!(
            out,
            "status roll {} dice {} announced {} filled {}/{}",
            self.turn.roll(),
            dice,
            announced,
            self.card.filled_count(),
            CATEGORY_COUNT * COLUMN_COUNT
        )?;
        out.flush()
    }
}

/// Writes a `rejected <reason>` line.
pub fn reject<W: Write>(out: &mut W, reason: impl Display) -> io::Result<()> {
    writeln!(out, "rejected {}", reason)
}
