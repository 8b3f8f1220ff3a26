use crate::reports;
use clap::Args;
use snoozer::config::SeatingParams;
use snoozer::error::{SnResult, SnoozerError};
use snoozer::seating::OfficeLayout;
use std::cmp::Ordering;

#[derive(Args, Debug, Clone)]
pub struct SeatsArgs {
    #[command(flatten)]
    pub params: SeatingParams,

    /// Only show seats from this block (e.g. block3).
    #[arg(short, long)]
    pub block: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: SeatsArgs) -> SnResult<()> {
    args.params.validate().map_err(SnoozerError::Config)?;

    let defaults = SeatingParams::default();
    let custom = args.params.reference_name != defaults.reference_name
        || args.params.layout_width != defaults.layout_width
        || args.params.layout_height != defaults.layout_height;

    let owned;
    let layout: &OfficeLayout = if custom {
        owned = OfficeLayout::build(&args.params)?;
        &owned
    } else {
        OfficeLayout::standard()
    };

    let mut seats: Vec<_> = layout
        .seats
        .iter()
        .filter(|s| match &args.block {
            Some(b) => s.block.eq_ignore_ascii_case(b),
            None => true,
        })
        .collect();
    // Best seats first; unscored seats keep their order at the end.
    seats.sort_by(|a, b| {
        let ra = a.score.as_ref().map(|sc| sc.raw_score);
        let rb = b.score.as_ref().map(|sc| sc.raw_score);
        match (ra, rb) {
            (Some(x), Some(y)) => y.total_cmp(&x),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&seats)?);
        return Ok(());
    }

    reports::print_areas(&layout.areas);
    reports::print_seats(&seats);
    Ok(())
}
