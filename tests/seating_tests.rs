use rstest::rstest;
use snoozer::config::SeatingParams;
use snoozer::error::SnoozerError;
use snoozer::seating::catalog::{standard_blocks, BlockSpec, GridMetrics, SeatSpec, SEAT_CATALOG};
use snoozer::seating::describe::describe;
use snoozer::seating::factors::normalized_factors;
use snoozer::seating::layout::place_seats;
use snoozer::seating::ranking::{bin_for_rank, raw_score, score_for_bin};
use snoozer::seating::{score_seats, OfficeLayout, ScoreFactors, Tier};

fn placed() -> Vec<snoozer::seating::Seat> {
    let metrics = GridMetrics::STANDARD;
    place_seats(&SEAT_CATALOG, &standard_blocks(&metrics), &metrics).expect("standard placement")
}

// --- LAYOUT ---

#[rstest]
#[case(1, 100.0, 200.0)]
#[case(4, 250.0, 200.0)]
#[case(8, 100.0, 250.0)]
#[case(14, 460.0, 250.0)]
#[case(42, 150.0, 760.0)]
#[case(45, 360.0, 760.0)]
fn test_seat_positions(#[case] id: u32, #[case] x: f64, #[case] y: f64) {
    let seats = placed();
    let seat = seats.iter().find(|s| s.id == id).unwrap();
    assert_eq!((seat.x, seat.y), (x, y), "seat {}", id);
}

#[test]
fn test_placement_keeps_catalog_order() {
    let ids: Vec<u32> = placed().iter().map(|s| s.id).collect();
    let expected: Vec<u32> = SEAT_CATALOG.iter().map(|s| s.id).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_unplaced_seat_is_an_error() {
    let catalog = [SeatSpec {
        id: 99,
        employee: "Nobody",
        is_floater: false,
        block: "block9",
    }];
    let blocks = vec![BlockSpec {
        label: "block1",
        origin: (0.0, 0.0),
        columns: 2,
        seat_ids: vec![1],
    }];
    let err = place_seats(&catalog, &blocks, &GridMetrics::STANDARD).unwrap_err();
    assert!(matches!(err, SnoozerError::MissingSeatPosition { seat_id: 99 }));
    assert_eq!(err.to_string(), "Position not found for seat 99");
}

// --- NORMALIZATION ---

#[test]
fn test_normalized_factors_are_bounded_and_reach_one() {
    let seats = placed();
    let reference = seats.iter().find(|s| s.id == 8).map(|s| (s.x, s.y)).unwrap();
    let n = normalized_factors(&seats, reference, 800.0, 850.0);

    let columns: [fn(&ScoreFactors) -> f64; 5] = [
        |f| f.to_reference,
        |f| f.to_left_wall,
        |f| f.to_north_wall,
        |f| f.to_top_right_corner,
        |f| f.to_bottom_middle,
    ];
    for col in columns {
        let values: Vec<f64> = n.iter().map(col).collect();
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
        assert!(values.iter().any(|v| (*v - 1.0).abs() < 1e-12));
    }

    let ref_idx = seats.iter().position(|s| s.id == 8).unwrap();
    assert_eq!(n[ref_idx].to_reference, 0.0);
}

#[test]
fn test_reference_seat_scores_only_on_walls_and_corners() {
    let layout = OfficeLayout::standard();
    let vinesh = layout.seat(8).unwrap();
    let score = vinesh.score.as_ref().unwrap();
    let f = score.factors;

    assert_eq!(f.to_reference, 0.0);
    let expected = (1.0 - f.to_left_wall) * 0.2
        + (1.0 - f.to_north_wall) * 0.2
        + (1.0 - f.to_top_right_corner) * 0.1
        + (1.0 - f.to_bottom_middle) * 0.1;
    assert!((score.raw_score - expected).abs() < 1e-12);
    assert!(score.description.to_lowercase().contains("close to vinesh"));
}

// --- RANKING ---

#[rstest]
#[case(0, 1, Tier::Subpar)]
#[case(13, 3, Tier::Subpar)]
#[case(14, 4, Tier::Good)]
#[case(26, 6, Tier::Good)]
#[case(27, 7, Tier::Great)]
#[case(40, 9, Tier::Great)]
#[case(41, 10, Tier::Amazing)]
#[case(44, 10, Tier::Amazing)]
fn test_decile_bins_for_full_office(#[case] rank: usize, #[case] score: u8, #[case] tier: Tier) {
    assert_eq!(score_for_bin(bin_for_rank(rank, 45)), (score, tier));
}

#[test]
fn test_standard_layout_is_ranked_ascending() {
    let layout = OfficeLayout::standard();
    assert_eq!(layout.seats.len(), 45);

    let raws: Vec<f64> = layout
        .seats
        .iter()
        .map(|s| s.score.as_ref().unwrap().raw_score)
        .collect();
    assert!(raws.windows(2).all(|w| w[0] <= w[1]));

    let count = |t: Tier| {
        layout
            .seats
            .iter()
            .filter(|s| s.score.as_ref().unwrap().tier == t)
            .count()
    };
    assert_eq!(count(Tier::Subpar), 14);
    assert_eq!(count(Tier::Good), 13);
    assert_eq!(count(Tier::Great), 14);
    assert_eq!(count(Tier::Amazing), 4);

    let first = layout.seats.first().and_then(|s| s.score.as_ref()).unwrap();
    let last = layout.seats.last().and_then(|s| s.score.as_ref()).unwrap();
    assert_eq!((first.score, first.tier), (1, Tier::Subpar));
    assert_eq!((last.score, last.tier), (10, Tier::Amazing));
}

#[test]
fn test_raw_score_matches_weights() {
    let best = ScoreFactors {
        to_reference: 1.0,
        ..Default::default()
    };
    assert!((raw_score(&best) - 1.0).abs() < 1e-12);

    let worst = ScoreFactors {
        to_reference: 0.0,
        to_left_wall: 1.0,
        to_north_wall: 1.0,
        to_top_right_corner: 1.0,
        to_bottom_middle: 1.0,
    };
    assert_eq!(raw_score(&worst), 0.0);
}

// --- SCORING WITHOUT A REFERENCE ---

#[test]
fn test_missing_reference_skips_scoring() {
    let params = SeatingParams {
        reference_name: "nobody-here".to_string(),
        ..Default::default()
    };
    let seats = score_seats(placed(), &params);
    assert_eq!(seats.len(), 45);
    assert!(seats.iter().all(|s| s.score.is_none()));
    assert_eq!(seats[0].id, 1);
}

#[test]
fn test_reference_lookup_is_case_insensitive_substring() {
    let params = SeatingParams {
        reference_name: "RIVERA".to_string(),
        ..Default::default()
    };
    let layout = OfficeLayout::build(&params).unwrap();
    let rachel = layout.seat(9).unwrap();
    assert_eq!(rachel.score.as_ref().unwrap().factors.to_reference, 0.0);
    assert!(layout.seats.iter().all(|s| s.score.is_some()));
}

// --- DESCRIPTIONS ---

fn factors(reference: f64, left: f64, north: f64, corner: f64, bottom: f64) -> ScoreFactors {
    ScoreFactors {
        to_reference: reference,
        to_left_wall: left,
        to_north_wall: north,
        to_top_right_corner: corner,
        to_bottom_middle: bottom,
    }
}

#[rstest]
#[case(factors(0.5, 0.5, 0.5, 0.5, 0.5), "Standard seat")]
#[case(factors(0.9, 0.5, 0.5, 0.5, 0.5), "Far from Vinesh")]
#[case(factors(0.1, 0.5, 0.5, 0.5, 0.5), "Close to Vinesh")]
#[case(factors(0.5, 0.1, 0.5, 0.5, 0.5), "Natural light")]
#[case(factors(0.1, 0.5, 0.2, 0.5, 0.5), "Natural light, but close to Vinesh")]
#[case(factors(0.5, 0.5, 0.5, 0.5, 0.2), "Easy bathroom access")]
#[case(
    factors(0.9, 0.1, 0.5, 0.1, 0.5),
    "Natural light, far from Vinesh, Easy bathroom access, far from Vinesh"
)]
#[case(
    factors(0.2, 0.1, 0.5, 0.5, 0.1),
    "Natural light, but close to Vinesh, Easy bathroom access, but close to Vinesh"
)]
fn test_describe(#[case] f: ScoreFactors, #[case] expected: &str) {
    assert_eq!(describe(&f, "Vinesh"), expected);
}

#[test]
fn test_thresholds_are_strict() {
    // Exactly at the cutoffs: neither close nor far.
    assert_eq!(describe(&factors(0.3, 0.3, 0.3, 0.3, 0.3), "Vinesh"), "Standard seat");
    assert_eq!(describe(&factors(0.7, 0.5, 0.5, 0.5, 0.5), "Vinesh"), "Standard seat");
}
