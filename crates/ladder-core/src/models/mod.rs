mod progression_result;
mod score_stats;

pub use progression_result::ProgressionResult;
pub use score_stats::ScoreStats;
