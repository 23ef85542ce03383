/// Ladder system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of most recent AI scores surfaced in score statistics.
pub const RECENT_SCORES_WINDOW: usize = 5;
