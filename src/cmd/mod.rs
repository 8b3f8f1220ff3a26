pub mod defense;
pub mod running_backs;
pub mod seats;
pub mod wide_receivers;

use clap::Args;
use snoozer::error::{SnResult, SnoozerError};
use snoozer::stats::loader;
use snoozer::stats::{RosterIndex, WeeklyStatRecord};
use std::path::PathBuf;
use tracing::info;

/// Inputs shared by the three stats views.
#[derive(Args, Debug, Clone)]
pub struct StatsInput {
    /// Weekly stats dumps (one JSON array per week); flattened in order.
    #[arg(short, long = "stats", required = true, num_args = 1..)]
    pub stats: Vec<PathBuf>,

    /// League rosters dump (`/v1/league/{id}/rosters`).
    #[arg(short, long)]
    pub rosters: Option<PathBuf>,

    /// League users dump (`/v1/league/{id}/users`).
    #[arg(short, long)]
    pub users: Option<PathBuf>,

    /// Print rows as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also write the rows to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl StatsInput {
    pub fn load(&self) -> SnResult<(Vec<WeeklyStatRecord>, RosterIndex)> {
        if self.users.is_some() && self.rosters.is_none() {
            return Err(SnoozerError::Config(
                "--users requires --rosters".to_string(),
            ));
        }

        info!("📂 Loading {} stats file(s)", self.stats.len());
        let records = loader::load_season(&self.stats)?;

        let rosters = match &self.rosters {
            Some(p) => loader::load_rosters_file(p)?,
            None => Vec::new(),
        };
        let users = match &self.users {
            Some(p) => loader::load_users_file(p)?,
            None => Vec::new(),
        };

        let roster = RosterIndex::build(&rosters, &users);
        info!(
            "   -> {} weekly records, {} rostered ids",
            records.len(),
            roster.len()
        );
        Ok((records, roster))
    }
}
