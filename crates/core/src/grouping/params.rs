//! Grouping parameters.
//!
//! Contains GroupingParams for controlling proximity grouping behavior.

use chrono::Duration;

/// Parameters for proximity grouping.
///
/// Controls how posts are judged close enough in time and place to belong
/// to the same group. The defaults are coarse heuristics tuned for "was
/// this likely the same outing/stop", not a rigorous clustering setup.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupingParams {
    /// If two posts' effective timestamps are further apart than this, they
    /// are never grouped, regardless of location.
    pub time_margin: Duration,

    /// If two posts with coordinates are further apart than this, in
    /// kilometres of great-circle distance, they are not grouped.
    pub distance_margin_km: f64,

    /// A shared place-label token must be strictly longer than this to count
    /// as a match when coordinates are unavailable.
    pub min_token_len: usize,
}

impl Default for GroupingParams {
    fn default() -> Self {
        Self {
            time_margin: Duration::hours(2),
            distance_margin_km: 0.5,
            min_token_len: 2,
        }
    }
}

impl GroupingParams {
    /// Creates new grouping parameters with the specified values.
    pub fn new(time_margin: Duration, distance_margin_km: f64, min_token_len: usize) -> Self {
        Self {
            time_margin,
            distance_margin_km,
            min_token_len,
        }
    }
}
