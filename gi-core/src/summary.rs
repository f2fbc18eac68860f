//! Per-mode running aggregates and finalized summaries
//!
//! One `ModeAccumulator` per mode collects running sums, raw round-wise
//! series and per-country maps as games are folded in; `finalize` computes
//! the integer-truncated averages exactly once at the end of a batch.
//!
//! All three modes share this single accumulator type; classification
//! picks which instance a game folds into.

use crate::model::{GameRecord, Mode};
use serde::Serialize;
use std::collections::HashMap;

/// One guessed location, paired with the score it earned
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GuessedLocation {
    pub lat: f64,
    pub lng: f64,
    pub score: f64,
}

/// Running aggregate state for a single mode
///
/// Created empty, mutated once per round of each folded game, finalized
/// exactly once. Totals are monotonically non-decreasing under folding.
#[derive(Debug, Default)]
pub struct ModeAccumulator {
    total_score: f64,
    /// Sum of per-round distances, each truncated to integer kilometers
    /// *before* summation. The truncation point matters for output
    /// compatibility; do not accumulate fractional kilometers.
    total_distance_km: i64,
    total_time_sec: f64,
    number_of_games: u64,
    number_of_rounds: u64,
    round_wise_points: Vec<i64>,
    round_wise_time: Vec<f64>,
    guessed_locations: Vec<GuessedLocation>,
    points_lost_per_country: HashMap<String, i64>,
    distance_per_country: HashMap<String, i64>,
    country_frequency: HashMap<String, u64>,
}

impl ModeAccumulator {
    /// Fold one classified game into this accumulator
    ///
    /// Rounds and guesses are zipped pairwise by position; a length
    /// mismatch silently truncates to the shorter sequence. The three
    /// per-country maps always gain a key together, keeping their key
    /// sets consistent.
    pub fn fold_game(&mut self, game: &GameRecord) {
        self.number_of_games += 1;
        self.total_score += game.player.total_score.amount;
        self.total_time_sec += game.player.total_time;

        for (round, guess) in game.rounds.iter().zip(&game.player.guesses) {
            self.number_of_rounds += 1;
            self.round_wise_time.push(guess.time);
            self.round_wise_points.push(guess.round_score.amount as i64);
            self.guessed_locations.push(GuessedLocation {
                lat: guess.lat,
                lng: guess.lng,
                score: guess.round_score_in_points,
            });

            let code = round.country_key();
            let points_lost = (5000.0 - guess.round_score_in_points) as i64;
            let distance_km = guess.distance.meters.amount as i64;
            self.total_distance_km += distance_km;

            *self.points_lost_per_country.entry(code.clone()).or_insert(0) += points_lost;
            *self.distance_per_country.entry(code.clone()).or_insert(0) += distance_km;
            *self.country_frequency.entry(code).or_insert(0) += 1;
        }
    }

    /// Compute the finalized summary, consuming the running state
    ///
    /// Averages are integer-truncated means over games, and exactly 0
    /// when no games were folded.
    pub fn finalize(self) -> ModeSummary {
        let games = self.number_of_games;
        ModeSummary {
            average_score: truncated_mean(self.total_score, games),
            average_distance_km: if games > 0 {
                self.total_distance_km / games as i64
            } else {
                0
            },
            average_time_sec: truncated_mean(self.total_time_sec, games),
            number_of_games: games,
            number_of_rounds: self.number_of_rounds,
            round_wise_points: self.round_wise_points,
            round_wise_time: self.round_wise_time,
            guessed_locations: self.guessed_locations,
            points_lost_per_country: self.points_lost_per_country,
            distance_per_country: self.distance_per_country,
            country_frequency: self.country_frequency,
        }
    }
}

fn truncated_mean(total: f64, count: u64) -> i64 {
    if count > 0 {
        (total / count as f64) as i64
    } else {
        0
    }
}

/// Finalized aggregate for one mode
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModeSummary {
    pub number_of_games: u64,
    pub number_of_rounds: u64,
    pub average_score: i64,
    pub average_distance_km: i64,
    pub average_time_sec: i64,
    pub round_wise_points: Vec<i64>,
    pub round_wise_time: Vec<f64>,
    pub points_lost_per_country: HashMap<String, i64>,
    pub distance_per_country: HashMap<String, i64>,
    pub country_frequency: HashMap<String, u64>,
    pub guessed_locations: Vec<GuessedLocation>,
}

/// The three per-mode accumulators a batch folds into
#[derive(Debug, Default)]
pub struct ModeAccumulators {
    moving: ModeAccumulator,
    no_moving: ModeAccumulator,
    nmpz: ModeAccumulator,
}

impl ModeAccumulators {
    /// The accumulator a game of the given mode folds into
    pub fn entry(&mut self, mode: Mode) -> &mut ModeAccumulator {
        match mode {
            Mode::Moving => &mut self.moving,
            Mode::NoMoving => &mut self.no_moving,
            Mode::Nmpz => &mut self.nmpz,
        }
    }

    /// Finalize all three modes at the end of the batch
    pub fn finalize(self) -> ModeSummaries {
        ModeSummaries {
            moving: self.moving.finalize(),
            no_moving: self.no_moving.finalize(),
            nmpz: self.nmpz.finalize(),
        }
    }
}

/// The engine's output: one finalized summary per mode
#[derive(Debug, Clone, Default, Serialize)]
pub struct ModeSummaries {
    pub moving: ModeSummary,
    #[serde(rename = "no-moving")]
    pub no_moving: ModeSummary,
    pub nmpz: ModeSummary,
}

impl ModeSummaries {
    pub fn get(&self, mode: Mode) -> &ModeSummary {
        match mode {
            Mode::Moving => &self.moving,
            Mode::NoMoving => &self.no_moving,
            Mode::Nmpz => &self.nmpz,
        }
    }

    /// Iterate summaries in presentation order
    pub fn iter(&self) -> impl Iterator<Item = (Mode, &ModeSummary)> {
        Mode::ALL.iter().map(move |&mode| (mode, self.get(mode)))
    }
}
