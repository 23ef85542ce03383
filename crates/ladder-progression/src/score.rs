//! AI-score summarization. Informational only — the level formula consumes
//! raw counters, never these values.

use ladder_core::constants::RECENT_SCORES_WINDOW;
use ladder_core::models::ScoreStats;

/// Arithmetic mean rounded to the nearest integer, ties away from zero
/// (`f64::round`). Empty input yields 0 rather than an error or NaN.
pub fn average(scores: &[f64]) -> i64 {
    if scores.is_empty() {
        return 0;
    }
    let sum: f64 = scores.iter().sum();
    (sum / scores.len() as f64).round() as i64
}

/// Full score statistics: total, average, highest, lowest, and the most
/// recent scores (oldest first).
pub fn stats(scores: &[f64]) -> ScoreStats {
    let mut highest = 0.0f64;
    let mut lowest = scores.first().copied().unwrap_or(0.0);
    for &score in scores {
        if score > highest {
            highest = score;
        }
        if score < lowest {
            lowest = score;
        }
    }

    let recent_start = scores.len().saturating_sub(RECENT_SCORES_WINDOW);
    ScoreStats {
        total: scores.len(),
        average: average(scores),
        highest,
        lowest,
        recent: scores[recent_start..].to_vec(),
    }
}
