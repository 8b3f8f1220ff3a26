use super::StatsInput;
use crate::reports::{self, Tabular};
use clap::Args;
use snoozer::config::PipelineParams;
use snoozer::error::SnResult;
use snoozer::stats::views;
use snoozer::stats::{Field, Metric, StatKey};

#[derive(Args, Debug, Clone)]
pub struct DefenseArgs {
    #[command(flatten)]
    pub input: StatsInput,

    #[command(flatten)]
    pub params: PipelineParams,
}

pub fn run(args: DefenseArgs) -> SnResult<()> {
    let (records, roster) = args.input.load()?;
    let mut view = views::defense(&records, &roster, &args.params);

    view.rows.sort_by(|a, b| {
        let pa = a.metric(Metric::AvgFantasyPointsPerGame).unwrap_or(0.0);
        let pb = b.metric(Metric::AvgFantasyPointsPerGame).unwrap_or(0.0);
        pb.total_cmp(&pa)
    });

    if args.input.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let mut table = Tabular::new(vec![
        "Defense", "Owner", "Pts/Game", "Next Opp", "Opp Def Avg", "Games",
    ]);
    for row in &view.rows {
        table.push(vec![
            row.row.key.clone(),
            reports::owner_cell(row.row.is_rostered, &row.row.owner),
            format!("{:.2}", row.metric(Metric::AvgFantasyPointsPerGame).unwrap_or(0.0)),
            reports::opt(&row.row.next_opponent),
            format!("{:.2}", row.metric(Metric::NextOpponentDefenseAvg).unwrap_or(0.0)),
            format!("{:.0}", row.row.totals.get(StatKey::PlayedGames)),
        ]);
    }

    let avg_pts = views::column_average(&view.rows, Field::Metric(Metric::AvgFantasyPointsPerGame));
    let avg_opp = views::column_average(&view.rows, Field::Metric(Metric::NextOpponentDefenseAvg));

    println!(
        "\nDefense Evaluation | Week {} Matchups | Minimum {}",
        view.next_week,
        reports::pluralize(args.params.min_defense_games, "game", "games")
    );
    reports::print_table(&table);
    println!("Avg: {:.1} pts | opponent defense avg {:.2} pts", avg_pts, avg_opp);

    if let Some(path) = &args.input.csv {
        reports::export::write_csv(path, &table)?;
    }
    Ok(())
}
