use super::schema::NamedStats;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Upstream ids arrive as strings for players and sometimes as bare numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Explicit `null` reads the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerInfo {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub injury_status: Option<String>,
}

impl PlayerInfo {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

/// One player's (or one defense's) statistics for a single week.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeeklyStatRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub player_id: String,
    pub week: u32,
    #[serde(default)]
    pub opponent: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub player: PlayerInfo,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: BTreeMap<String, Value>,
}

impl WeeklyStatRecord {
    /// Team from the nested player profile, falling back to the record's own field.
    pub fn team(&self) -> Option<&str> {
        self.player.team.as_deref().or(self.team.as_deref())
    }

    /// The team the record was filed under this week, falling back to the
    /// player profile. Differs from `team()` for traded players.
    pub fn reported_team(&self) -> Option<&str> {
        self.team.as_deref().or(self.player.team.as_deref())
    }

    pub fn is_injured_reserve(&self) -> bool {
        self.player.injury_status.as_deref() == Some("IR")
    }

    /// RowNormalizer: flattens the record into the fields the pipeline reads.
    pub fn normalize(&self) -> WeeklyRow {
        WeeklyRow {
            id: self.player_id.clone(),
            name: self.player.full_name(),
            week: self.week,
            team: self.team().map(str::to_string),
            opponent: self.opponent.clone(),
            stats: NamedStats::from_raw(&self.stats),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyRow {
    pub id: String,
    pub name: String,
    pub week: u32,
    pub team: Option<String>,
    pub opponent: Option<String>,
    pub stats: NamedStats,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RosterRecord {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub players: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueUser {
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
