//! The three season views, each composed from the pipeline stages:
//! normalize -> aggregate -> derive -> filter.

use super::aggregate::{aggregate, EntityKey};
use super::derive::{derive_rows, filter_by_floor, DerivedRow, Field, Metric};
use super::math::mean;
use super::records::{WeeklyRow, WeeklyStatRecord};
use super::roster::RosterIndex;
use super::schema::StatKey;
use super::season;
use crate::config::PipelineParams;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

fn normalize_all<'a, I>(records: I) -> Vec<WeeklyRow>
where
    I: IntoIterator<Item = &'a WeeklyStatRecord>,
{
    records.into_iter().map(WeeklyStatRecord::normalize).collect()
}

// === RUNNING BACKS ===

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Default)]
#[strum(serialize_all = "snake_case")]
pub enum OpportunityKind {
    #[default]
    All,
    Rushing,
    Receiving,
}

impl OpportunityKind {
    pub fn opportunities(&self) -> Metric {
        match self {
            Self::All => Metric::AllOpportunities,
            Self::Rushing => Metric::RushingOpportunities,
            Self::Receiving => Metric::ReceivingOpportunities,
        }
    }

    pub fn yards_per_opportunity(&self) -> Metric {
        match self {
            Self::All => Metric::AllYardsPerOpportunity,
            Self::Rushing => Metric::RushingYardsPerOpportunity,
            Self::Receiving => Metric::ReceivingYardsPerOpportunity,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Rushing => "Rushing",
            Self::Receiving => "Receiving",
        }
    }
}

pub const RB_METRICS: [Metric; 6] = [
    Metric::RushingOpportunities,
    Metric::ReceivingOpportunities,
    Metric::AllOpportunities,
    Metric::RushingYardsPerOpportunity,
    Metric::ReceivingYardsPerOpportunity,
    Metric::AllYardsPerOpportunity,
];

pub fn running_backs(
    records: &[WeeklyStatRecord],
    roster: &RosterIndex,
    params: &PipelineParams,
) -> Vec<DerivedRow> {
    let in_season = season::regular_season(records, params.final_week);
    let records: &[WeeklyStatRecord] = &in_season;
    let weekly = normalize_all(records);
    let totals = aggregate(&weekly, EntityKey::Player, roster);
    let derived = derive_rows(totals, &RB_METRICS);
    let rows = filter_by_floor(
        derived,
        Field::Metric(Metric::AllOpportunities),
        params.min_rb_opportunities,
    );
    info!("Running backs: {} rows from {} records", rows.len(), records.len());
    rows
}

/// Chart point for one running back under the chosen opportunity kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OpportunityPoint {
    pub opportunities: f64,
    pub yards_per_opportunity: f64,
}

pub fn opportunity_point(row: &DerivedRow, kind: OpportunityKind) -> OpportunityPoint {
    OpportunityPoint {
        opportunities: row.metric(kind.opportunities()).unwrap_or(0.0),
        yards_per_opportunity: row.metric(kind.yards_per_opportunity()).unwrap_or(0.0),
    }
}

// === WIDE RECEIVERS ===

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Default)]
#[strum(serialize_all = "snake_case")]
pub enum WrMetric {
    #[default]
    YardsPerTarget,
    FantasyPointsPerTarget,
}

impl WrMetric {
    pub fn metric(&self) -> Metric {
        match self {
            Self::YardsPerTarget => Metric::ReceivingYardsPerTarget,
            Self::FantasyPointsPerTarget => Metric::FantasyPointsPerTarget,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::YardsPerTarget => "Yards per Target",
            Self::FantasyPointsPerTarget => "Fantasy Points per Target",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiverRow {
    #[serde(flatten)]
    pub row: DerivedRow,
    pub injured: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceiverView {
    pub current_week: u32,
    pub rows: Vec<ReceiverRow>,
}

pub fn wide_receivers(
    records: &[WeeklyStatRecord],
    roster: &RosterIndex,
    params: &PipelineParams,
) -> ReceiverView {
    let in_season = season::regular_season(records, params.final_week);
    let records: &[WeeklyStatRecord] = &in_season;
    let current_week = season::current_week(records, params.complete_week_team_threshold);
    let injured = season::injured_reserve(records);

    let weekly = normalize_all(records.iter().filter(|r| r.week <= current_week));
    let totals = aggregate(&weekly, EntityKey::Player, roster);
    let derived = derive_rows(
        totals,
        &[Metric::ReceivingYardsPerTarget, Metric::FantasyPointsPerTarget],
    );
    let rows: Vec<ReceiverRow> = filter_by_floor(
        derived,
        Field::Total(StatKey::OffensiveSnaps),
        params.min_wr_snaps,
    )
    .into_iter()
    .map(|row| {
        let on_ir = injured.contains(&row.row.id);
        ReceiverRow { row, injured: on_ir }
    })
    .collect();

    info!(
        "Wide receivers: {} rows through week {} ({} on IR overall)",
        rows.len(),
        current_week,
        injured.len()
    );
    ReceiverView { current_week, rows }
}

// === DEFENSE ===

#[derive(Debug, Clone, Serialize)]
pub struct DefenseView {
    pub next_week: u32,
    pub rows: Vec<DerivedRow>,
}

pub fn defense(
    records: &[WeeklyStatRecord],
    roster: &RosterIndex,
    params: &PipelineParams,
) -> DefenseView {
    let in_season = season::regular_season(records, params.final_week);
    let records: &[WeeklyStatRecord] = &in_season;
    let next_week = season::next_week(records);
    let opponent_avgs = season::opponent_defense_averages(records, next_week);

    let mut weekly = normalize_all(records);
    // Stable: same-week rows keep input order.
    weekly.sort_by_key(|r| r.week);

    let totals = aggregate(&weekly, EntityKey::Team, roster);
    let derived = derive_rows(totals, &[Metric::AvgFantasyPointsPerGame]);
    let rows: Vec<DerivedRow> = filter_by_floor(
        derived,
        Field::Total(StatKey::PlayedGames),
        params.min_defense_games,
    )
    .into_iter()
    .map(|row| {
        let avg = row
            .row
            .next_opponent
            .as_deref()
            .and_then(|opp| opponent_avgs.get(opp))
            .copied()
            .unwrap_or(0.0);
        row.with_metric(Metric::NextOpponentDefenseAvg, avg)
    })
    .collect();

    info!("Defense: {} rows, week {} matchups", rows.len(), next_week);
    DefenseView { next_week, rows }
}

/// Mean of `field` across `rows`, missing values counted as zero.
/// Used for the reference lines drawn across a view.
pub fn column_average(rows: &[DerivedRow], field: Field) -> f64 {
    mean(rows.iter().map(|r| r.get(field).unwrap_or(0.0)))
}
