use super::aggregate::AggregatedRow;
use super::math::{nullish_divide, nullish_sum};
use super::schema::{StatKey, StatTotals};
use serde::Serialize;
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    RushingOpportunities,
    ReceivingOpportunities,
    AllOpportunities,
    RushingYardsPerOpportunity,
    ReceivingYardsPerOpportunity,
    AllYardsPerOpportunity,
    ReceivingYardsPerTarget,
    FantasyPointsPerTarget,
    AvgFantasyPointsPerGame,
    /// Supplied by the defense view, not computed from totals.
    NextOpponentDefenseAvg,
}

impl Metric {
    /// Computes the metric from season totals. `None` for metrics that need
    /// context beyond a single row.
    pub fn compute(&self, t: &StatTotals) -> Option<f64> {
        use StatKey::*;
        let v = |k: StatKey| Some(t.get(k));
        let value = match self {
            Self::RushingOpportunities => t.get(RushingAttempts),
            Self::ReceivingOpportunities => t.get(ReceivingTargets),
            Self::AllOpportunities => nullish_sum(v(RushingAttempts), v(ReceivingTargets)),
            Self::RushingYardsPerOpportunity => nullish_divide(v(RushingYards), v(RushingAttempts)),
            Self::ReceivingYardsPerOpportunity => {
                nullish_divide(v(ReceivingYards), v(ReceivingTargets))
            }
            Self::AllYardsPerOpportunity => nullish_divide(
                Some(nullish_sum(v(RushingYards), v(ReceivingYards))),
                Some(nullish_sum(v(RushingAttempts), v(ReceivingTargets))),
            ),
            Self::ReceivingYardsPerTarget => nullish_divide(v(ReceivingYards), v(ReceivingTargets)),
            Self::FantasyPointsPerTarget => {
                nullish_divide(v(PprScoringFantasyPoints), v(ReceivingTargets))
            }
            Self::AvgFantasyPointsPerGame => {
                nullish_divide(v(PprScoringFantasyPoints), v(PlayedGames))
            }
            Self::NextOpponentDefenseAvg => return None,
        };
        Some(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRow {
    #[serde(flatten)]
    pub row: AggregatedRow,
    pub metrics: BTreeMap<Metric, f64>,
}

impl DerivedRow {
    pub fn metric(&self, m: Metric) -> Option<f64> {
        self.metrics.get(&m).copied()
    }

    pub fn with_metric(mut self, m: Metric, value: f64) -> Self {
        self.metrics.insert(m, value);
        self
    }

    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Total(k) => Some(self.row.totals.get(k)),
            Field::Metric(m) => self.metric(m),
        }
    }
}

/// MetricDeriver: attaches the requested metrics to each aggregated row.
pub fn derive_rows(rows: Vec<AggregatedRow>, metrics: &[Metric]) -> Vec<DerivedRow> {
    rows.into_iter()
        .map(|row| {
            let computed = metrics
                .iter()
                .filter_map(|m| m.compute(&row.totals).map(|v| (*m, v)))
                .collect();
            DerivedRow {
                row,
                metrics: computed,
            }
        })
        .collect()
}

/// A column a volume floor can be applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Total(StatKey),
    Metric(Metric),
}

/// Keeps rows whose `field` is at least `floor`. Missing or NaN values fail.
pub fn filter_by_floor(rows: Vec<DerivedRow>, field: Field, floor: f64) -> Vec<DerivedRow> {
    rows.into_iter()
        .filter(|r| r.get(field).is_some_and(|v| v >= floor))
        .collect()
}
