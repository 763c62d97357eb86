//! Text protocol.
//!
//! Parsing of the line commands read from stdin, the notation for dice,
//! keeps and cells, and plain-text rendering of the scorecard.

pub mod notation;
pub mod parser;
pub mod render;

pub use notation::{
    format_action, format_cell, format_counts, format_faces, format_keep, parse_category, parse_column,
    parse_dice, parse_keep, NotationError,
};
pub use parser::{parse_command, Command};
pub use render::{render_board, render_summary};
