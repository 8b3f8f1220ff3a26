use super::records::{LeagueUser, RosterRecord, WeeklyStatRecord};
use crate::error::{SnResult, SnoozerError};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Reads a JSON array, keeping the elements that deserialize as `T`.
/// A top-level value that is not an array is rejected.
fn load_array<T: DeserializeOwned, R: Read>(reader: R, what: &str) -> SnResult<Vec<T>> {
    let raw: Value = serde_json::from_reader(reader)?;
    let Value::Array(items) = raw else {
        return Err(SnoozerError::Validation(format!(
            "expected a JSON array of {}",
            what
        )));
    };

    let total = items.len();
    let mut out = Vec::with_capacity(total);
    let mut skipped = 0;
    for (i, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<T>(item) {
            Ok(v) => out.push(v),
            Err(e) => {
                skipped += 1;
                debug!("[{} #{}] skipped: {}", what, i, e);
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} of {} malformed {}", skipped, total, what);
    }
    debug!("Loaded {} {}", out.len(), what);
    Ok(out)
}

pub fn load_weekly_stats<R: Read>(reader: R) -> SnResult<Vec<WeeklyStatRecord>> {
    load_array(reader, "weekly stat records")
}

pub fn load_rosters<R: Read>(reader: R) -> SnResult<Vec<RosterRecord>> {
    load_array(reader, "rosters")
}

pub fn load_users<R: Read>(reader: R) -> SnResult<Vec<LeagueUser>> {
    load_array(reader, "league users")
}

fn open<P: AsRef<Path>>(path: P) -> SnResult<BufReader<File>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SnoozerError::Config(format!("Could not open '{}': {}", path.display(), e))
    })?;
    Ok(BufReader::new(file))
}

/// Loads one file per week and flattens them in the given order.
/// Any file that fails to load fails the whole season.
pub fn load_season<P: AsRef<Path>>(paths: &[P]) -> SnResult<Vec<WeeklyStatRecord>> {
    let mut all = Vec::new();
    for path in paths {
        let mut week = load_weekly_stats(open(path)?)?;
        all.append(&mut week);
    }
    Ok(all)
}

pub fn load_rosters_file<P: AsRef<Path>>(path: P) -> SnResult<Vec<RosterRecord>> {
    load_rosters(open(path)?)
}

pub fn load_users_file<P: AsRef<Path>>(path: P) -> SnResult<Vec<LeagueUser>> {
    load_users(open(path)?)
}
