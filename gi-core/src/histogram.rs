//! Score distribution bucketing
//!
//! Fixed five-bin histogram over the 0..=5000 round-score range for the
//! points-distribution chart. Bins are half-open except the last, which
//! includes the perfect 5000; values outside the range are not counted.

/// Number of score buckets
pub const BUCKET_COUNT: usize = 5;

/// Width of each bucket in points
pub const BUCKET_WIDTH: i64 = 1000;

/// Presentation labels for the five buckets, in order
pub const BUCKET_LABELS: [&str; BUCKET_COUNT] = [
    "0-1000",
    "1000-2000",
    "2000-3000",
    "3000-4000",
    "4000-5000",
];

/// Count round scores per fixed 1000-point bucket
pub fn score_histogram(round_wise_points: &[i64]) -> [u64; BUCKET_COUNT] {
    let mut counts = [0u64; BUCKET_COUNT];
    for &points in round_wise_points {
        if !(0..=5000).contains(&points) {
            continue;
        }
        // 5000 falls into the final (inclusive) bucket
        let bucket = ((points / BUCKET_WIDTH) as usize).min(BUCKET_COUNT - 1);
        counts[bucket] += 1;
    }
    counts
}
