use super::factors::ScoreFactors;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

pub const BIN_COUNT: usize = 10;

// Weights sum to 1.0. Distance from the reference seat is the only term where
// farther is better.
pub const W_REFERENCE: f64 = 0.4;
pub const W_LEFT_WALL: f64 = 0.2;
pub const W_NORTH_WALL: f64 = 0.2;
pub const W_TOP_RIGHT: f64 = 0.1;
pub const W_BOTTOM_MIDDLE: f64 = 0.1;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    Subpar,
    Good,
    Great,
    Amazing,
}

/// Higher is more desirable. Expects normalized factors.
pub fn raw_score(n: &ScoreFactors) -> f64 {
    n.to_reference * W_REFERENCE
        + (1.0 - n.to_left_wall) * W_LEFT_WALL
        + (1.0 - n.to_north_wall) * W_NORTH_WALL
        + (1.0 - n.to_top_right_corner) * W_TOP_RIGHT
        + (1.0 - n.to_bottom_middle) * W_BOTTOM_MIDDLE
}

/// Decile bin for the seat at `rank` (0 = lowest raw score) in a population
/// of `total`. Bin width is `total / 10` without remainder correction, so
/// bins past 9 are possible for tiny populations.
pub fn bin_for_rank(rank: usize, total: usize) -> usize {
    let per_bin = total as f64 / BIN_COUNT as f64;
    (rank as f64 / per_bin).floor() as usize
}

/// Fixed policy: bins 0-2 Subpar, 3-5 Good, 6-8 Great, 9 and above Amazing.
pub fn score_for_bin(bin: usize) -> (u8, Tier) {
    match bin {
        0..=2 => (bin as u8 + 1, Tier::Subpar),
        3..=5 => (bin as u8 + 1, Tier::Good),
        6..=8 => (bin as u8 + 1, Tier::Great),
        _ => (10, Tier::Amazing),
    }
}
