use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Achievement;

/// Read-only view of one user's progression counters at a point in time.
///
/// Input to the pure rules; never mutated by them. Counters are unsigned by
/// construction, and `accepted_submissions <= submissions` is the caller's
/// invariant to maintain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivitySnapshot {
    /// Total code submissions made.
    pub submissions: u64,
    /// Submissions that passed validation.
    pub accepted_submissions: u64,
    /// Courses completed.
    pub courses_completed: u64,
    /// AI review scores in insertion (chronological) order. May be empty.
    pub ai_scores: Vec<f64>,
    /// Last persisted level.
    pub level: u32,
    /// Already-granted achievements.
    pub achievements: BTreeSet<Achievement>,
}
