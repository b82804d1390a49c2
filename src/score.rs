//! Round scoring for Skull King.
//!
//! Scoring rules (per player, per round):
//!   bid 0, took 0    => +10 * round number
//!   bid 0, took any  => -10 * round number
//!   bid n, took n    => +20 * bid
//!   bid n, missed    => -10 * |bid - tricks taken|
//!
//! A zero bid is a bet on the whole round, so its stakes scale with the
//! round number; a numbered bid is judged only against itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of scoring one player's round.
///
/// Produced by [`calculate`]. Echoes the inputs alongside the derived
/// score and whether the bid was exactly met. Plain value, no identity
/// beyond its fields.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ScoreResult {
    bid: i64,
    tricks_taken: i64,
    round_number: i64,
    score: i64,
    bid_met: bool,
}

impl ScoreResult {
    /// The bid this result was computed from.
    #[inline]
    pub fn bid(&self) -> i64 {
        self.bid
    }

    /// The trick count this result was computed from.
    #[inline]
    pub fn tricks_taken(&self) -> i64 {
        self.tricks_taken
    }

    /// The round number this result was computed from.
    #[inline]
    pub fn round_number(&self) -> i64 {
        self.round_number
    }

    /// Points awarded (or deducted) for the round.
    #[inline]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// True exactly when the bid equals the tricks taken.
    #[inline]
    pub fn bid_met(&self) -> bool {
        self.bid_met
    }
}

impl fmt::Display for ScoreResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScoreResult {{ bid: {}, tricks_taken: {}, round_number: {}, score: {}, bid_met: {} }}",
            self.bid, self.tricks_taken, self.round_number, self.score, self.bid_met
        )
    }
}

/// Score one player's round from their bid, the tricks they won, and the
/// round number.
///
/// Inputs are taken as given: keeping the bid legal for the round, the
/// tricks within the round, and the round number positive is the caller's
/// job. Out-of-range values are not rejected or corrected; the formula is
/// applied literally and the arithmetic result returned.
pub fn calculate(bid: i64, tricks_taken: i64, round_number: i64) -> ScoreResult {
    let bid_met = bid == tricks_taken;
    let score = if bid == 0 {
        if tricks_taken == 0 {
            10 * round_number
        } else {
            -10 * round_number
        }
    } else if bid_met {
        20 * bid
    } else {
        -10 * (bid - tricks_taken).abs()
    };
    ScoreResult {
        bid,
        tricks_taken,
        round_number,
        score,
        bid_met,
    }
}
