//! Skull King round scoring: a pure per-player, per-round score calculator.

pub mod score;

pub use crate::score::{ScoreResult, calculate};
