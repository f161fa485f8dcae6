//! Report types: per-course progress listing and the statistics summary.

use serde::{Deserialize, Serialize};

use crate::model::StudentId;

/// One row of a per-course report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRow {
    pub student_id: StudentId,
    /// Raw accumulated points.
    pub points: u32,
    /// Points as a percentage of the completion threshold, rounded
    /// half-up to one decimal place.
    pub completion_pct: f64,
}

/// Per-course progress report, ordered by descending points then
/// ascending student id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseReport {
    pub course: String,
    pub threshold: u32,
    pub rows: Vec<ProgressRow>,
}

/// The six cross-course statistics. Empty vectors mean "n/a"; names are
/// in canonical catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub most_popular: Vec<String>,
    pub least_popular: Vec<String>,
    pub highest_activity: Vec<String>,
    pub lowest_activity: Vec<String>,
    pub easiest: Vec<String>,
    pub hardest: Vec<String>,
}

/// Round to one decimal place with ties going up (1.25 -> 1.3).
///
/// Plain `{:.1}` formatting rounds half-to-even, which disagrees with the
/// report contract at exact .x5 boundaries. `f64::round` is
/// half-away-from-zero, which for non-negative percentages is half-up.
pub fn round_half_up_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
