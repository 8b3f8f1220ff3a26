use criterion::{criterion_group, criterion_main, Criterion};
use snoozer::config::{PipelineParams, SeatingParams};
use snoozer::seating::OfficeLayout;
use snoozer::stats::views;
use snoozer::stats::{RosterIndex, WeeklyStatRecord};
use std::hint::black_box;

const TEAMS: [&str; 8] = ["SF", "KC", "BUF", "PHI", "DAL", "MIA", "DET", "BAL"];

fn synthetic_season() -> Vec<WeeklyStatRecord> {
    let mut values = Vec::new();
    for week in 1..=17u32 {
        for player in 0..400u32 {
            let team = TEAMS[(player as usize) % TEAMS.len()];
            values.push(serde_json::json!({
                "player_id": player.to_string(),
                "week": week,
                "opponent": TEAMS[(player as usize + week as usize) % TEAMS.len()],
                "player": {"first_name": "P", "last_name": player.to_string(), "team": team},
                "stats": {
                    "rush_att": (player % 20) as f64,
                    "rush_yd": (player % 90) as f64,
                    "rec_tgt": (player % 9) as f64,
                    "rec_yd": (player % 70) as f64,
                    "pts_ppr": (player % 25) as f64,
                    "gp": 1.0,
                    "off_snp": (player % 60) as f64
                }
            }));
        }
    }
    serde_json::from_value(serde_json::Value::Array(values)).expect("Failed to build season")
}

fn bench_views(c: &mut Criterion) {
    let records = synthetic_season();
    let roster = RosterIndex::default();
    let params = PipelineParams::default();

    c.bench_function("running_backs_view", |b| {
        b.iter(|| views::running_backs(black_box(&records), &roster, &params))
    });
    c.bench_function("wide_receivers_view", |b| {
        b.iter(|| views::wide_receivers(black_box(&records), &roster, &params))
    });
    c.bench_function("defense_view", |b| {
        b.iter(|| views::defense(black_box(&records), &roster, &params))
    });
}

fn bench_seats(c: &mut Criterion) {
    let params = SeatingParams::default();
    c.bench_function("score_office", |b| {
        b.iter(|| OfficeLayout::build(black_box(&params)).expect("Failed to build layout"))
    });
}

criterion_group!(benches, bench_views, bench_seats);
criterion_main!(benches);
