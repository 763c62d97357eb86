//! Yambot: a Yamb scorecard engine.
//!
//! Exposes the scorecard and scoring rules, turn validation, house rules and
//! the text protocol for use by integration tests and the binary entry point.

pub mod board;
pub mod config;
pub mod engine;
pub mod protocol;
pub mod turn;
