//! Integration tests for the aggregation engine's public API
//!
//! Drives a full batch through an in-memory GameSource and checks the
//! finalized summaries plus the derived tables the presentation layer
//! consumes.

use anyhow::{anyhow, Result};
use gi_core::histogram::score_histogram;
use gi_core::model::GameRecord;
use gi_core::rank::{rank, RankMetric};
use gi_core::{aggregate, GameSource, Mode, NullProgress};
use std::collections::HashMap;

struct FixtureSource {
    games: HashMap<String, String>,
}

impl GameSource for FixtureSource {
    fn list_game_tokens(&self) -> Result<Vec<String>> {
        Ok(self.games.keys().cloned().collect())
    }

    fn fetch_game(&self, token: &str) -> Result<GameRecord> {
        let json = self
            .games
            .get(token)
            .ok_or_else(|| anyhow!("no such game: {}", token))?;
        serde_json::from_str(json).map_err(Into::into)
    }
}

/// A five-round game in the upstream wire shape
fn five_round_game(
    flags: (bool, bool, bool),
    rounds: &[(&str, i64, f64, f64)], // (country, points, distance_km, time)
) -> String {
    let total: i64 = rounds.iter().map(|(_, points, _, _)| points).sum();
    let guesses: Vec<String> = rounds
        .iter()
        .map(|(_, points, distance, time)| {
            format!(
                r#"{{ "lat": 45.1, "lng": 7.2, "time": {time},
                      "roundScore": {{ "amount": "{points}" }},
                      "roundScoreInPoints": {points},
                      "distance": {{ "meters": {{ "amount": "{distance}" }} }} }}"#
            )
        })
        .collect();
    let locations: Vec<String> = rounds
        .iter()
        .map(|(code, _, _, _)| format!(r#"{{ "streakLocationCode": "{code}" }}"#))
        .collect();
    format!(
        r#"{{ "forbidMoving": {}, "forbidZooming": {}, "forbidRotating": {},
              "player": {{ "totalScore": {{ "amount": "{total}" }},
                           "totalTime": 300,
                           "guesses": [{}] }},
              "rounds": [{}] }}"#,
        flags.0,
        flags.1,
        flags.2,
        guesses.join(","),
        locations.join(",")
    )
}

fn fixture() -> FixtureSource {
    let mut games = HashMap::new();
    games.insert(
        "mov-1".to_string(),
        five_round_game(
            (false, false, false),
            &[
                ("fr", 4800, 12.3, 25.0),
                ("fr", 3000, 410.0, 60.0),
                ("de", 5000, 0.4, 18.0),
                ("jp", 2200, 2400.9, 95.0),
                ("", 900, 8000.5, 140.0),
            ],
        ),
    );
    games.insert(
        "nm-1".to_string(),
        five_round_game(
            (true, false, false),
            &[
                ("us", 4000, 55.0, 30.0),
                ("us", 4100, 40.0, 31.0),
                ("ca", 3500, 300.0, 44.0),
                ("mx", 2800, 600.0, 52.0),
                ("br", 1500, 3000.0, 80.0),
            ],
        ),
    );
    games.insert(
        "nmpz-1".to_string(),
        five_round_game(
            (true, true, true),
            &[
                ("it", 3600, 150.0, 20.0),
                ("es", 2900, 380.0, 22.0),
                ("pt", 4400, 90.0, 19.0),
                ("it", 5000, 0.1, 12.0),
                ("gr", 1000, 1800.0, 35.0),
            ],
        ),
    );
    // Party-mode leftovers and deleted games surface as fetch failures
    games.insert("broken".to_string(), "{ not json".to_string());
    FixtureSource { games }
}

fn batch_tokens() -> Vec<String> {
    ["mov-1", "broken", "nm-1", "missing", "nmpz-1"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn test_batch_partitions_games_by_mode() {
    let source = fixture();
    let summaries = aggregate(&source, &batch_tokens(), 5, &mut NullProgress);

    assert_eq!(summaries.moving.number_of_games, 1);
    assert_eq!(summaries.no_moving.number_of_games, 1);
    assert_eq!(summaries.nmpz.number_of_games, 1);

    assert_eq!(summaries.moving.number_of_rounds, 5);
    assert_eq!(summaries.moving.average_score, 15_900);
    assert_eq!(summaries.moving.average_time_sec, 300);
}

#[test]
fn test_frequency_sum_matches_round_count_per_mode() {
    let source = fixture();
    let summaries = aggregate(&source, &batch_tokens(), 5, &mut NullProgress);

    for (mode, summary) in summaries.iter() {
        let frequency_total: u64 = summary.country_frequency.values().sum();
        assert_eq!(
            frequency_total,
            summary.number_of_rounds,
            "frequency/round invariant broken for {}",
            mode.label()
        );
        assert_eq!(summary.round_wise_points.len() as u64, summary.number_of_rounds);
        assert_eq!(summary.guessed_locations.len() as u64, summary.number_of_rounds);
    }
}

#[test]
fn test_failed_fetches_leave_aggregates_untouched() {
    let source = fixture();
    let with_failures = aggregate(&source, &batch_tokens(), 5, &mut NullProgress);

    let clean_tokens: Vec<String> = ["mov-1", "nm-1", "nmpz-1"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let clean = aggregate(&source, &clean_tokens, 3, &mut NullProgress);

    assert_eq!(
        with_failures.moving.round_wise_points,
        clean.moving.round_wise_points
    );
    assert_eq!(with_failures.nmpz.average_score, clean.nmpz.average_score);
    assert_eq!(
        with_failures.no_moving.points_lost_per_country,
        clean.no_moving.points_lost_per_country
    );
}

#[test]
fn test_per_country_accumulation_across_rounds() {
    let source = fixture();
    let summaries = aggregate(&source, &batch_tokens(), 5, &mut NullProgress);

    let nmpz = &summaries.nmpz;
    // "it" appears twice: (5000-3600) + (5000-5000)
    assert_eq!(nmpz.points_lost_per_country["it"], 1400);
    assert_eq!(nmpz.country_frequency["it"], 2);
    // 150.0 and 0.1 truncate per round
    assert_eq!(nmpz.distance_per_country["it"], 150);

    // The unattributed round lands under the empty key
    assert_eq!(summaries.moving.country_frequency[""], 1);
    assert_eq!(summaries.moving.points_lost_per_country[""], 4100);
}

#[test]
fn test_ranking_over_aggregated_output() {
    let source = fixture();
    let summaries = aggregate(&source, &batch_tokens(), 5, &mut NullProgress);

    let table = rank(&summaries.no_moving, RankMetric::Distance);
    // Four distinct countries ("us" repeats), so n = 4 and the two
    // tables are the same descending list
    assert_eq!(table.most.len(), 4);
    assert_eq!(table.most[0].code, "br");
    assert_eq!(table.most[0].value, 3000);
    assert_eq!(table.most[0].name, Some("Brazil"));
    assert_eq!(table.least.len(), 4);
    assert_eq!(table.least[3].code, "us");
    assert_eq!(table.least[3].value, 40 + 55);
}

#[test]
fn test_histogram_over_aggregated_output() {
    let source = fixture();
    let summaries = aggregate(&source, &batch_tokens(), 5, &mut NullProgress);

    let counts = score_histogram(&summaries.nmpz.round_wise_points);
    // 3600, 2900, 4400, 5000, 1000
    assert_eq!(counts, [0, 1, 1, 1, 2]);
}

#[test]
fn test_summaries_serialize_with_dashboard_mode_keys() {
    let source = fixture();
    let summaries = aggregate(&source, &batch_tokens(), 5, &mut NullProgress);

    let value = serde_json::to_value(&summaries).unwrap();
    assert!(value.get("moving").is_some());
    assert!(value.get("no-moving").is_some());
    assert!(value.get("nmpz").is_some());
    assert_eq!(
        value["moving"]["number_of_games"],
        serde_json::json!(1),
        "summary fields should serialize under their model names"
    );

    let locations = value["moving"]["guessed_locations"]
        .as_array()
        .expect("guessed_locations should serialize as an array");
    assert_eq!(locations.len(), 5);
    assert!(locations[0].get("lat").is_some());
    assert!(locations[0].get("lng").is_some());
    assert!(locations[0].get("score").is_some());
}

#[test]
fn test_listing_order_is_preserved_up_to_limit() {
    let source = fixture();
    // Only the first two tokens are fetched; the nmpz game is never seen
    let summaries = aggregate(&source, &batch_tokens(), 2, &mut NullProgress);

    assert_eq!(summaries.moving.number_of_games, 1);
    assert_eq!(summaries.nmpz.number_of_games, 0);
    assert_eq!(summaries.no_moving.number_of_games, 0);
}

#[test]
fn test_mode_enum_covers_labels() {
    let labels: Vec<&str> = Mode::ALL.iter().map(|mode| mode.label()).collect();
    assert_eq!(labels, vec!["moving", "no-moving", "nmpz"]);
}
