use serde::{Deserialize, Serialize};

/// Summary of a user's AI score history, for display. Informational only —
/// none of these values feed the level formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    /// Number of recorded scores.
    pub total: usize,
    /// Arithmetic mean rounded to the nearest integer, ties away from zero.
    /// 0 when no scores are recorded.
    pub average: i64,
    pub highest: f64,
    pub lowest: f64,
    /// Most recent scores, oldest first.
    pub recent: Vec<f64>,
}
