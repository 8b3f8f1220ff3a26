use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

pub const SEASONS: [u16; 3] = [2025, 2024, 2023];

pub const STATS_POSITIONS: [&str; 3] = ["RB", "WR", "DEF"];

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLeague {
    UnhealthyImsaFantasies,
    AmbienceAllStars,
    Fellas,
    TheBestDynasty,
}

impl KnownLeague {
    pub fn id(&self) -> &'static str {
        match self {
            Self::UnhealthyImsaFantasies => "1257059066220388352",
            Self::AmbienceAllStars => "1260340653263437824",
            Self::Fellas => "1264476839670190080",
            Self::TheBestDynasty => "1180193875386085376",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::UnhealthyImsaFantasies => "Unhealthy IMSA Fantasies",
            Self::AmbienceAllStars => "Ambience-All Stars",
            Self::Fellas => "Fellas",
            Self::TheBestDynasty => "The Best Dynasty",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::iter().find(|l| l.id() == id)
    }
}

/// Catalog order is the order the leagues are offered in.
pub fn all_leagues() -> Vec<KnownLeague> {
    KnownLeague::iter().collect()
}
