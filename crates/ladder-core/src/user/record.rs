use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Achievement, ActivitySnapshot};

/// Display-only profile fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub image: String,
}

/// Full persisted user record, keyed by email. Owned and mutated
/// exclusively by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub profile: UserProfile,
    /// Ids of courses this user has completed, in completion order.
    pub completed_courses: Vec<String>,
    pub submissions: u64,
    pub accepted_submissions: u64,
    pub courses_completed: u64,
    pub ai_scores: Vec<f64>,
    pub level: u32,
    pub achievements: BTreeSet<Achievement>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    /// Extract the progression-relevant counters as a pure-rule input.
    pub fn snapshot(&self) -> ActivitySnapshot {
        ActivitySnapshot {
            submissions: self.submissions,
            accepted_submissions: self.accepted_submissions,
            courses_completed: self.courses_completed,
            ai_scores: self.ai_scores.clone(),
            level: self.level,
            achievements: self.achievements.clone(),
        }
    }
}
