use super::records::WeeklyStatRecord;
use super::schema::{NamedStats, StatKey};
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::debug;

/// Records up to and including `final_week`; postseason weeks are dropped.
/// Borrows the input when nothing needs dropping.
pub fn regular_season(
    records: &[WeeklyStatRecord],
    final_week: u32,
) -> Cow<'_, [WeeklyStatRecord]> {
    if records.iter().all(|r| r.week <= final_week) {
        return Cow::Borrowed(records);
    }
    let kept: Vec<WeeklyStatRecord> = records
        .iter()
        .filter(|r| r.week <= final_week)
        .cloned()
        .collect();
    debug!("Dropped {} records after week {}", records.len() - kept.len(), final_week);
    Cow::Owned(kept)
}

/// Last week believed to be fully played.
///
/// The newest week only counts once at least `team_threshold` distinct teams
/// have reported for it; otherwise the previous distinct week is used, or 1
/// when there is none.
pub fn current_week(records: &[WeeklyStatRecord], team_threshold: usize) -> u32 {
    let weeks: BTreeSet<u32> = records.iter().map(|r| r.week).collect();
    let Some(&latest) = weeks.iter().next_back() else {
        return 1;
    };

    let teams_reporting: HashSet<&str> = records
        .iter()
        .filter(|r| r.week == latest)
        .filter_map(|r| r.reported_team())
        .collect();

    if teams_reporting.len() < team_threshold {
        weeks.iter().rev().nth(1).copied().unwrap_or(1)
    } else {
        latest
    }
}

/// The week after the newest week present (1 for an empty season).
pub fn next_week(records: &[WeeklyStatRecord]) -> u32 {
    records.iter().map(|r| r.week).max().unwrap_or(0) + 1
}

/// Player ids whose most recent record lists them on injured reserve.
pub fn injured_reserve(records: &[WeeklyStatRecord]) -> HashSet<String> {
    let mut latest: HashMap<&str, &WeeklyStatRecord> = HashMap::new();
    for rec in records {
        latest
            .entry(rec.player_id.as_str())
            .and_modify(|cur| {
                if rec.week > cur.week {
                    *cur = rec;
                }
            })
            .or_insert(rec);
    }
    latest
        .into_values()
        .filter(|r| r.is_injured_reserve())
        .map(|r| r.player_id.clone())
        .collect()
}

/// For every team, the average PPR points scored by the defenses it faced
/// in weeks before `next_week`. Weeks with no record for the opposing
/// defense are skipped.
pub fn opponent_defense_averages(
    records: &[WeeklyStatRecord],
    next_week: u32,
) -> HashMap<String, f64> {
    let mut by_team_week: HashMap<(&str, u32), &WeeklyStatRecord> = HashMap::new();
    for rec in records {
        if let Some(team) = rec.reported_team() {
            // First record wins for duplicate (team, week) pairs.
            by_team_week.entry((team, rec.week)).or_insert(rec);
        }
    }

    let mut sums: HashMap<&str, (f64, u32, bool)> = HashMap::new();
    for rec in records {
        let Some(team) = rec.reported_team() else { continue };
        let entry = sums.entry(team).or_insert((0.0, 0, false));
        if rec.week >= next_week {
            continue;
        }
        entry.2 = true;
        let Some(opponent) = rec.opponent.as_deref() else {
            continue;
        };
        if let Some(def) = by_team_week.get(&(opponent, rec.week)) {
            let pts = NamedStats::from_raw(&def.stats).get(StatKey::PprScoringFantasyPoints);
            entry.0 += pts.unwrap_or(0.0);
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .filter(|(_, (_, _, played))| *played)
        .map(|(team, (total, games, _))| {
            let avg = if games > 0 { total / games as f64 } else { 0.0 };
            (team.to_string(), avg)
        })
        .collect()
}
