use super::records::WeeklyRow;
use super::roster::RosterIndex;
use super::schema::StatTotals;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// How weekly rows are grouped into entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKey {
    /// Offensive players, grouped by player id.
    Player,
    /// Team defenses, grouped by team code.
    Team,
}

impl EntityKey {
    pub fn key_of<'a>(&self, row: &'a WeeklyRow) -> Option<&'a str> {
        match self {
            Self::Player => Some(row.id.as_str()),
            Self::Team => row.team.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedRow {
    pub key: String,
    pub id: String,
    pub name: String,
    pub team: Option<String>,
    pub next_opponent: Option<String>,
    pub is_rostered: bool,
    pub owner: Option<String>,
    pub totals: StatTotals,
    pub weeks: Vec<u32>,
}

impl AggregatedRow {
    fn empty(key: &str) -> Self {
        Self {
            key: key.to_string(),
            id: String::new(),
            name: String::new(),
            team: None,
            next_opponent: None,
            is_rostered: false,
            owner: None,
            totals: StatTotals::default(),
            weeks: Vec::new(),
        }
    }

    /// Folds one weekly row in. Counting fields sum; context fields take the
    /// incoming row's values, so the last row in input order wins.
    fn absorb(&mut self, row: &WeeklyRow, roster: &RosterIndex) {
        self.totals.accumulate(&row.stats);
        self.weeks.push(row.week);

        self.id = row.id.clone();
        self.name = row.name.clone();
        self.team = row.team.clone();
        self.next_opponent = row.opponent.clone();
        self.is_rostered = roster.is_rostered(&self.key);
        self.owner = roster.owner(&self.key).map(str::to_string);
    }
}

/// Groups rows by entity, preserving first-seen order of the entities.
/// Team-keyed rows without a team are dropped.
pub fn aggregate(rows: &[WeeklyRow], key: EntityKey, roster: &RosterIndex) -> Vec<AggregatedRow> {
    let mut out: Vec<AggregatedRow> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0usize;

    for row in rows {
        let Some(k) = key.key_of(row) else {
            skipped += 1;
            continue;
        };
        let slot = match index.get(k) {
            Some(&i) => i,
            None => {
                out.push(AggregatedRow::empty(k));
                index.insert(k.to_string(), out.len() - 1);
                out.len() - 1
            }
        };
        out[slot].absorb(row, roster);
    }

    debug!(
        "Aggregated {} weekly rows into {} entities ({} without key)",
        rows.len(),
        out.len(),
        skipped
    );
    out
}
