use super::StatsInput;
use crate::reports::{self, Tabular};
use clap::Args;
use snoozer::config::PipelineParams;
use snoozer::error::SnResult;
use snoozer::stats::views::{self, OpportunityKind};
use snoozer::stats::StatKey;

#[derive(Args, Debug, Clone)]
pub struct RunningBacksArgs {
    #[command(flatten)]
    pub input: StatsInput,

    #[command(flatten)]
    pub params: PipelineParams,

    /// Which opportunities feed the chart axes: all, rushing, receiving.
    #[arg(short, long, default_value_t = OpportunityKind::All)]
    pub opportunity: OpportunityKind,
}

pub fn run(args: RunningBacksArgs) -> SnResult<()> {
    let (records, roster) = args.input.load()?;
    let mut rows = views::running_backs(&records, &roster, &args.params);

    let kind = args.opportunity;
    rows.sort_by(|a, b| {
        let pa = views::opportunity_point(a, kind).opportunities;
        let pb = views::opportunity_point(b, kind).opportunities;
        pb.total_cmp(&pa)
    });

    if args.input.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let mut table = Tabular::new(vec![
        "Player",
        "Team",
        "Owner",
        "Opps",
        "Yds/Opp",
        "Games",
        "Snaps",
    ]);
    for row in &rows {
        let p = views::opportunity_point(row, kind);
        let t = &row.row.totals;
        table.push(vec![
            row.row.name.clone(),
            reports::opt(&row.row.team),
            reports::owner_cell(row.row.is_rostered, &row.row.owner),
            format!("{:.0}", p.opportunities),
            format!("{:.2}", p.yards_per_opportunity),
            format!("{:.0}", t.get(StatKey::PlayedGames)),
            format!("{:.0}", t.get(StatKey::OffensiveSnaps)),
        ]);
    }

    let points: Vec<_> = rows
        .iter()
        .map(|r| views::opportunity_point(r, kind))
        .collect();
    let avg_opps = snoozer::stats::math::mean(points.iter().map(|p| p.opportunities));
    let avg_ypo = snoozer::stats::math::mean(points.iter().map(|p| p.yards_per_opportunity));

    println!(
        "\nRunning Backs | {} Opportunities | Minimum {}",
        kind.label(),
        reports::pluralize(args.params.min_rb_opportunities, "opportunity", "opportunities")
    );
    reports::print_table(&table);
    println!(
        "Avg: {:.1} opportunities | {:.2} yds/opp",
        avg_opps, avg_ypo
    );

    if let Some(path) = &args.input.csv {
        reports::export::write_csv(path, &table)?;
    }
    Ok(())
}
