//! House rules.
//!
//! `Rules` collects the options that vary between Yamb tables. It loads from
//! a JSON file, every field optional, and can be changed one option at a
//! time through the `setoption` command.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::UpperBonus;

/// Rules file loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rules JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from setting a single option by name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionError {
    #[error("unknown option '{0}'")]
    Unknown(String),

    #[error("option '{name}' needs a value")]
    MissingValue { name: String },

    #[error("invalid value '{value}' for option '{name}'")]
    InvalidValue { name: String, value: String },
}

/// Table rules that the core scoring leaves open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// When something is announced, the final fill must be that cell.
    pub announcement_binds_turn: bool,
    /// Upper sum at which the upper bonus is earned.
    pub upper_bonus_threshold: u16,
    /// Size of the upper bonus.
    pub upper_bonus: u16,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            announcement_binds_turn: false,
            upper_bonus_threshold: 60,
            upper_bonus: 30,
        }
    }
}

impl Rules {
    /// Loads rules from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Rules, ConfigError> {
        let data = fs::read_to_string(path)?;
        Rules::from_json(&data)
    }

    /// Parses rules from a JSON string.
    pub fn from_json(json: &str) -> Result<Rules, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The upper bonus as used by the score summary.
    pub fn upper_bonus(&self) -> UpperBonus {
        UpperBonus {
            threshold: self.upper_bonus_threshold,
            bonus: self.upper_bonus,
        }
    }

    /// Sets one option by its protocol name (case-insensitive).
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> Result<(), OptionError> {
        let key = name.to_ascii_lowercase();
        let raw = || {
            value.ok_or_else(|| OptionError::MissingValue {
                name: name.to_string(),
            })
        };
        let invalid = |v: &str| OptionError::InvalidValue {
            name: name.to_string(),
            value: v.to_string(),
        };

        match key.as_str() {
            "announcementbindsturn" => {
                let v = raw()?;
                self.announcement_binds_turn = parse_bool(v).ok_or_else(|| invalid(v))?;
            }
            "upperbonusthreshold" => {
                let v = raw()?;
                self.upper_bonus_threshold = v.parse().map_err(|_| invalid(v))?;
            }
            "upperbonus" => {
                let v = raw()?;
                self.upper_bonus = v.parse().map_err(|_| invalid(v))?;
            }
            _ => return Err(OptionError::Unknown(name.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}
