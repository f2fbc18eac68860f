//! Most/least-per-country ranking
//!
//! Derives the two per-country leaderboard tables (worst and best) from a
//! finalized summary. Both tables come from a single descending sort:
//! "most" is the head of that order and "least" is its tail, so with
//! fewer than 2n entries the two overlap rather than re-sorting
//! ascending.

use crate::countries::country_name;
use crate::summary::ModeSummary;
use serde::Serialize;
use std::collections::HashMap;

/// Which per-country map to rank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMetric {
    /// Points lost per country
    Points,
    /// Total distance (km) per country
    Distance,
}

/// One row of a ranking table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRow {
    pub code: String,
    /// Display name; absent for unknown or empty codes
    pub name: Option<&'static str>,
    pub value: i64,
}

/// The "most" and "least" tables for a metric
#[derive(Debug, Clone, Serialize)]
pub struct RankTable {
    /// Top n entries, descending by value
    pub most: Vec<CountryRow>,
    /// Bottom n entries of the same descending order (i.e. the true
    /// smallest values, still listed largest-first)
    pub least: Vec<CountryRow>,
}

/// Rank a summary's per-country map, taking n = min(5, entries)
pub fn rank(summary: &ModeSummary, metric: RankMetric) -> RankTable {
    let map = match metric {
        RankMetric::Points => &summary.points_lost_per_country,
        RankMetric::Distance => &summary.distance_per_country,
    };
    rank_map(map)
}

const TOP_N: usize = 5;

fn rank_map(map: &HashMap<String, i64>) -> RankTable {
    let mut rows: Vec<CountryRow> = map
        .iter()
        .map(|(code, &value)| CountryRow {
            code: code.clone(),
            name: country_name(code),
            value,
        })
        .collect();

    // Single descending sort; ties break by code so output is
    // deterministic regardless of map iteration order.
    rows.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.code.cmp(&b.code)));

    let n = TOP_N.min(rows.len());
    let most = rows[..n].to_vec();
    let least = rows[rows.len() - n..].to_vec();

    RankTable { most, least }
}
