use super::layout::Seat;
use serde::Serialize;

#[inline(always)]
pub fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

/// Five distances per seat. Walls are measured by the raw coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreFactors {
    pub to_reference: f64,
    pub to_left_wall: f64,
    pub to_north_wall: f64,
    pub to_top_right_corner: f64,
    pub to_bottom_middle: f64,
}

impl ScoreFactors {
    /// Points of interest: the reference seat, the top-right corner
    /// `(width, 0)`, and the bottom edge midpoint `(width / 2, height)`.
    pub fn measure(seat: &Seat, reference: (f64, f64), width: f64, height: f64) -> Self {
        let p = (seat.x, seat.y);
        Self {
            to_reference: euclidean(p, reference),
            to_left_wall: seat.x,
            to_north_wall: seat.y,
            to_top_right_corner: euclidean(p, (width, 0.0)),
            to_bottom_middle: euclidean(p, (width / 2.0, height)),
        }
    }

    fn map2(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self {
            to_reference: f(self.to_reference, other.to_reference),
            to_left_wall: f(self.to_left_wall, other.to_left_wall),
            to_north_wall: f(self.to_north_wall, other.to_north_wall),
            to_top_right_corner: f(self.to_top_right_corner, other.to_top_right_corner),
            to_bottom_middle: f(self.to_bottom_middle, other.to_bottom_middle),
        }
    }

    /// Per-factor maximum across the population.
    pub fn population_max(all: &[ScoreFactors]) -> Self {
        all.iter()
            .fold(Self::default(), |acc, f| acc.map2(*f, f64::max))
    }

    /// Divides each factor by its population maximum. A zero maximum
    /// normalizes to 0 rather than NaN.
    pub fn normalize(self, max: Self) -> Self {
        self.map2(max, |v, m| if m > 0.0 { v / m } else { 0.0 })
    }
}

/// Measures and normalizes every seat against the same reference point.
pub fn normalized_factors(
    seats: &[Seat],
    reference: (f64, f64),
    width: f64,
    height: f64,
) -> Vec<ScoreFactors> {
    let raw: Vec<ScoreFactors> = seats
        .iter()
        .map(|s| ScoreFactors::measure(s, reference, width, height))
        .collect();
    let max = ScoreFactors::population_max(&raw);
    raw.into_iter().map(|f| f.normalize(max)).collect()
}
