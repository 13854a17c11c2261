//! Weekly points series for the progress chart.
//!
//! The member schema carries no week tags, so the series is always the
//! documented synthetic fallback: a monotonic cumulative split of total
//! points across a fixed number of buckets. This is not an error path;
//! the chart renders the same way whether or not real per-week data
//! ever existed upstream.

use jam_model::{Member, WeeklyPoint};

use crate::stats::compute_stats;

/// Default number of chart buckets; the jam runs four weeks.
pub const DEFAULT_WEEKS: usize = 4;

/// Cumulative share of total points per bucket in the four-week shape.
const FOUR_WEEK_SPLIT: [f64; 4] = [0.15, 0.35, 0.65, 1.0];

/// Build the synthetic weekly series over `weeks` buckets.
///
/// The final bucket always equals the collection's total points; earlier
/// buckets are monotonically non-decreasing.
pub fn weekly_series(members: &[Member], weeks: usize) -> Vec<WeeklyPoint> {
    let total = compute_stats(members).total_points;
    (0..weeks)
        .map(|index| WeeklyPoint {
            week: format!("Week {}", index + 1),
            points: (total as f64 * cumulative_fraction(index, weeks)) as u64,
        })
        .collect()
}

fn cumulative_fraction(index: usize, weeks: usize) -> f64 {
    if weeks == FOUR_WEEK_SPLIT.len() {
        FOUR_WEEK_SPLIT[index]
    } else {
        // Even monotonic split when the caller wants a different
        // bucket count.
        (index + 1) as f64 / weeks as f64
    }
}
