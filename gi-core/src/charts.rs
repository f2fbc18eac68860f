//! Chart-ready data series derived from a finalized summary
//!
//! Pure data transforms for the presentation layer: the country-frequency
//! leaderboard behind the countries bar chart, and the filtered
//! points-vs-time scatter series. No rendering happens here.

use crate::countries::country_name;
use crate::summary::ModeSummary;
use serde::Serialize;

/// Rounds slower than this are left out of the points-vs-time scatter;
/// they compress the interesting range into nothing.
const TIME_OUTLIER_CUTOFF_SEC: f64 = 150.0;

/// One bar of the most-frequent-countries chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryFrequency {
    pub name: &'static str,
    pub count: u64,
}

/// Most frequently occurring countries, descending, at most `n` entries
///
/// Codes without a display name (including the empty key) are dropped
/// here rather than shown unlabeled.
pub fn top_countries(summary: &ModeSummary, n: usize) -> Vec<CountryFrequency> {
    let mut bars: Vec<CountryFrequency> = summary
        .country_frequency
        .iter()
        .filter_map(|(code, &count)| {
            country_name(code).map(|name| CountryFrequency { name, count })
        })
        .collect();

    bars.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(b.name)));
    bars.truncate(n.min(bars.len()));
    bars
}

/// A round's (time, points) pair for the scatter chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimePoint {
    pub time: f64,
    pub points: i64,
}

/// Paired round time and score series, outlier rounds removed
pub fn points_vs_time(summary: &ModeSummary) -> Vec<TimePoint> {
    summary
        .round_wise_time
        .iter()
        .zip(&summary.round_wise_points)
        .filter(|(&time, _)| time < TIME_OUTLIER_CUTOFF_SEC)
        .map(|(&time, &points)| TimePoint { time, points })
        .collect()
}
