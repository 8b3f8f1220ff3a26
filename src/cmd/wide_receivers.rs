use super::StatsInput;
use crate::reports::{self, Tabular};
use clap::Args;
use snoozer::config::PipelineParams;
use snoozer::error::SnResult;
use snoozer::stats::views::{self, WrMetric};
use snoozer::stats::{Field, Metric, StatKey};

#[derive(Args, Debug, Clone)]
pub struct WideReceiversArgs {
    #[command(flatten)]
    pub input: StatsInput,

    #[command(flatten)]
    pub params: PipelineParams,

    /// Y axis: yards_per_target or fantasy_points_per_target.
    #[arg(short = 'm', long, default_value_t = WrMetric::YardsPerTarget)]
    pub metric: WrMetric,
}

pub fn run(args: WideReceiversArgs) -> SnResult<()> {
    let (records, roster) = args.input.load()?;
    let mut view = views::wide_receivers(&records, &roster, &args.params);

    let y = args.metric.metric();
    view.rows.sort_by(|a, b| {
        let ya = a.row.metric(y).unwrap_or(0.0);
        let yb = b.row.metric(y).unwrap_or(0.0);
        yb.total_cmp(&ya)
    });

    if args.input.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let mut table = Tabular::new(vec![
        "Player", "Team", "Owner", "Status", "Targets", "Yds/Tgt", "Pts/Tgt", "TDs", "Games",
        "Snaps",
    ]);
    for r in &view.rows {
        let row = &r.row;
        let t = &row.row.totals;
        table.push(vec![
            row.row.name.clone(),
            reports::opt(&row.row.team),
            reports::owner_cell(row.row.is_rostered, &row.row.owner),
            if r.injured { "IR" } else { "Healthy" }.to_string(),
            format!("{:.0}", t.get(StatKey::ReceivingTargets)),
            format!("{:.2}", row.metric(Metric::ReceivingYardsPerTarget).unwrap_or(0.0)),
            format!("{:.2}", row.metric(Metric::FantasyPointsPerTarget).unwrap_or(0.0)),
            format!("{:.0}", t.get(StatKey::ReceivingTouchdowns)),
            format!("{:.0}", t.get(StatKey::PlayedGames)),
            format!("{:.0}", t.get(StatKey::OffensiveSnaps)),
        ]);
    }

    let derived: Vec<_> = view.rows.iter().map(|r| r.row.clone()).collect();
    let avg_targets = views::column_average(&derived, Field::Total(StatKey::ReceivingTargets));
    let avg_y = views::column_average(&derived, Field::Metric(y));

    println!(
        "\nWide Receivers | Through Week {} | Minimum {}",
        view.current_week,
        reports::pluralize(args.params.min_wr_snaps, "offensive snap", "offensive snaps")
    );
    reports::print_table(&table);
    println!(
        "Avg: {:.1} targets | {:.2} {}",
        avg_targets,
        avg_y,
        args.metric.label().to_lowercase()
    );

    if let Some(path) = &args.input.csv {
        reports::export::write_csv(path, &table)?;
    }
    Ok(())
}
