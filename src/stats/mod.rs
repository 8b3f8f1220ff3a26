pub mod aggregate;
pub mod derive;
pub mod loader;
pub mod math;
pub mod records;
pub mod roster;
pub mod schema;
pub mod season;
pub mod views;

pub use self::aggregate::{aggregate, AggregatedRow, EntityKey};
pub use self::derive::{derive_rows, filter_by_floor, DerivedRow, Field, Metric};
pub use self::records::{LeagueUser, RosterRecord, WeeklyRow, WeeklyStatRecord};
pub use self::roster::RosterIndex;
pub use self::schema::{NamedStats, StatKey, StatTotals};
