use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// Named statistics the pipeline understands, each bound to the upstream stat code.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    EnumCountMacro,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatKey {
    RushingAttempts,
    RushingYards,
    ReceivingTargets,
    ReceivingYards,
    ReceivingTouchdowns,
    PprScoringFantasyPoints,
    StandardScoringFantasyPoints,
    PlayedGames,
    OffensiveSnaps,
}

impl StatKey {
    pub fn code(&self) -> &'static str {
        match self {
            Self::RushingAttempts => "rush_att",
            Self::RushingYards => "rush_yd",
            Self::ReceivingTargets => "rec_tgt",
            Self::ReceivingYards => "rec_yd",
            Self::ReceivingTouchdowns => "rec_td",
            Self::PprScoringFantasyPoints => "pts_ppr",
            Self::StandardScoringFantasyPoints => "pts_std",
            Self::PlayedGames => "gp",
            Self::OffensiveSnaps => "off_snp",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::iter().find(|k| k.code() == code)
    }

    #[inline(always)]
    fn slot(self) -> usize {
        self as usize
    }
}

/// Typed view over one record's raw stat mapping. Absent keys stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NamedStats {
    values: [Option<f64>; StatKey::COUNT],
}

impl NamedStats {
    /// Pulls the known codes out of an untyped stat mapping.
    /// Non-numeric values are treated the same as missing ones.
    pub fn from_raw(raw: &BTreeMap<String, Value>) -> Self {
        let mut stats = Self::default();
        for key in StatKey::iter() {
            stats.values[key.slot()] = raw.get(key.code()).and_then(Value::as_f64);
        }
        stats
    }

    pub fn get(&self, key: StatKey) -> Option<f64> {
        self.values[key.slot()]
    }

    pub fn with(mut self, key: StatKey, value: Option<f64>) -> Self {
        self.values[key.slot()] = value;
        self
    }
}

/// Season totals, one per `StatKey`. Nulls have already collapsed to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StatTotals {
    values: [f64; StatKey::COUNT],
}

impl StatTotals {
    pub fn get(&self, key: StatKey) -> f64 {
        self.values[key.slot()]
    }

    pub fn accumulate(&mut self, stats: &NamedStats) {
        for key in StatKey::iter() {
            let slot = key.slot();
            self.values[slot] =
                super::math::nullish_sum(Some(self.values[slot]), stats.get(key));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKey, f64)> + '_ {
        StatKey::iter().map(move |k| (k, self.get(k)))
    }
}

impl Serialize for StatTotals {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(StatKey::COUNT))?;
        for (key, value) in self.iter() {
            map.serialize_entry(&key, &value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn codes_are_unique() {
        for key in StatKey::iter() {
            assert_eq!(StatKey::from_code(key.code()), Some(key));
        }
    }

    #[test]
    fn missing_and_non_numeric_resolve_to_none() {
        let raw: BTreeMap<String, Value> = serde_json::from_value(json!({
            "rush_att": 12.0,
            "rush_yd": "n/a",
            "unknown_code": 4
        }))
        .unwrap();

        let stats = NamedStats::from_raw(&raw);
        assert_eq!(stats.get(StatKey::RushingAttempts), Some(12.0));
        assert_eq!(stats.get(StatKey::RushingYards), None);
        assert_eq!(stats.get(StatKey::OffensiveSnaps), None);
    }
}
