pub mod catalog;
pub mod describe;
pub mod factors;
pub mod layout;
pub mod ranking;

pub use self::catalog::{Area, BlockSpec, GridMetrics, SeatSpec};
pub use self::factors::ScoreFactors;
pub use self::layout::{Seat, SeatScore};
pub use self::ranking::Tier;

use crate::config::SeatingParams;
use crate::error::SnResult;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize)]
pub struct OfficeLayout {
    pub seats: Vec<Seat>,
    pub areas: Vec<Area>,
    pub width: f64,
    pub height: f64,
}

static STANDARD_LAYOUT: LazyLock<OfficeLayout> = LazyLock::new(|| {
    OfficeLayout::build(&SeatingParams::default())
        .unwrap_or_else(|e| panic!("❌ Standard seat catalog is inconsistent: {}", e))
});

impl OfficeLayout {
    /// Places the standard catalog and scores it with `params`.
    pub fn build(params: &SeatingParams) -> SnResult<Self> {
        let metrics = GridMetrics::STANDARD;
        let blocks = catalog::standard_blocks(&metrics);
        let placed = layout::place_seats(&catalog::SEAT_CATALOG, &blocks, &metrics)?;
        Ok(Self {
            seats: score_seats(placed, params),
            areas: catalog::standard_areas(),
            width: params.layout_width,
            height: params.layout_height,
        })
    }

    /// The default office, built once per process.
    pub fn standard() -> &'static OfficeLayout {
        &STANDARD_LAYOUT
    }

    pub fn seat(&self, id: u32) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == id)
    }
}

/// Index of the first seat whose occupant name contains `name`, ignoring case.
pub fn find_reference(seats: &[Seat], name: &str) -> Option<usize> {
    let needle = name.to_lowercase();
    seats
        .iter()
        .position(|s| s.employee.to_lowercase().contains(&needle))
}

/// Scores the whole population and returns it ordered by ascending raw score.
///
/// Without a reference seat nothing is scored: the seats come back in their
/// input order with `score: None`.
pub fn score_seats(seats: Vec<Seat>, params: &SeatingParams) -> Vec<Seat> {
    let Some(ref_idx) = find_reference(&seats, &params.reference_name) else {
        warn!(
            "Reference seat '{}' not found, skipping score calculation",
            params.reference_name
        );
        return seats;
    };
    let reference = (seats[ref_idx].x, seats[ref_idx].y);
    let label = describe::reference_label(&params.reference_name);

    let normalized =
        factors::normalized_factors(&seats, reference, params.layout_width, params.layout_height);

    let mut ranked: Vec<(Seat, ScoreFactors, f64)> = seats
        .into_iter()
        .zip(normalized)
        .map(|(seat, n)| {
            let raw = ranking::raw_score(&n);
            (seat, n, raw)
        })
        .collect();

    // Stable: equal scores keep catalog order.
    ranked.sort_by(|a, b| a.2.total_cmp(&b.2));

    let total = ranked.len();
    debug!("Scoring {} seats against reference at {:?}", total, reference);

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, (mut seat, n, raw))| {
            let (score, tier) = ranking::score_for_bin(ranking::bin_for_rank(rank, total));
            seat.score = Some(SeatScore {
                score,
                tier,
                description: describe::describe(&n, &label),
                raw_score: raw,
                factors: n,
            });
            seat
        })
        .collect()
}
