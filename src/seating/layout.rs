use super::catalog::{BlockSpec, GridMetrics, SeatSpec};
use super::factors::ScoreFactors;
use super::ranking::Tier;
use crate::error::{SnResult, SnoozerError};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatScore {
    /// 1 (worst decile) ..= 10 (best decile).
    pub score: u8,
    pub tier: Tier,
    pub description: String,
    pub raw_score: f64,
    /// Normalized to [0, 1] against the scored population.
    pub factors: ScoreFactors,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Seat {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub employee: String,
    pub is_floater: bool,
    pub block: String,
    #[serde(flatten)]
    pub score: Option<SeatScore>,
}

impl Seat {
    pub fn new(spec: &SeatSpec, x: f64, y: f64) -> Self {
        Self {
            id: spec.id,
            x,
            y,
            employee: spec.employee.to_string(),
            is_floater: spec.is_floater,
            block: spec.block.to_string(),
            score: None,
        }
    }
}

/// Grid cell placement: row-major within the block.
#[inline(always)]
pub fn cell_position(block: &BlockSpec, index: usize, metrics: &GridMetrics) -> (f64, f64) {
    let cols = block.columns.max(1) as usize;
    let row = index / cols;
    let col = index % cols;
    (
        block.origin.0 + col as f64 * metrics.pitch(),
        block.origin.1 + row as f64 * metrics.pitch(),
    )
}

/// Places every catalog seat on its block's grid. Output follows catalog
/// order. A catalog id that no block places is an error.
pub fn place_seats(
    catalog: &[SeatSpec],
    blocks: &[BlockSpec],
    metrics: &GridMetrics,
) -> SnResult<Vec<Seat>> {
    let mut positions: HashMap<u32, (f64, f64)> = HashMap::new();
    for block in blocks {
        for (index, &seat_id) in block.seat_ids.iter().enumerate() {
            positions.insert(seat_id, cell_position(block, index, metrics));
        }
    }

    catalog
        .iter()
        .map(|spec| {
            let &(x, y) = positions
                .get(&spec.id)
                .ok_or(SnoozerError::MissingSeatPosition { seat_id: spec.id })?;
            Ok(Seat::new(spec, x, y))
        })
        .collect()
}
