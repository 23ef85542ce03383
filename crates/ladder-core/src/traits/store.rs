use crate::errors::LadderResult;
use crate::user::{Achievement, ActivitySnapshot, UserProfile, UserRecord};

/// Persistence seam for user progression state, keyed by email.
///
/// Counter mutations must be atomic per call; the achievement merge must be
/// a set union (granting an id twice leaves the set unchanged). Concurrent
/// triggers for one user then converge without coordination above this
/// trait.
pub trait IUserStore: Send + Sync {
    // --- Lifecycle ---
    fn create_user(&self, email: &str, profile: &UserProfile) -> LadderResult<()>;
    fn get_user(&self, email: &str) -> LadderResult<Option<UserRecord>>;

    /// Fresh read of the progression counters. Re-read before every
    /// evaluation; never cached across calls.
    fn snapshot(&self, email: &str) -> LadderResult<Option<ActivitySnapshot>>;

    // --- Counter mutations ---
    /// Increment the submission counter, and the accepted counter too when
    /// `accepted` is set.
    fn increment_submissions(&self, email: &str, accepted: bool) -> LadderResult<()>;

    /// Mark a course completed and bump the counter. Returns `false` when
    /// this course was already recorded for the user (counter untouched).
    fn mark_course_completed(&self, email: &str, course_id: &str) -> LadderResult<bool>;

    /// Append an AI score, preserving insertion order.
    fn append_ai_score(&self, email: &str, score: f64) -> LadderResult<()>;

    // --- Evaluation write-back ---
    fn set_level(&self, email: &str, level: u32) -> LadderResult<()>;

    /// Merge achievements into the persisted set (set union, no
    /// duplicates). Returns the number actually inserted.
    fn grant_achievements(&self, email: &str, achievements: &[Achievement])
        -> LadderResult<usize>;
}
