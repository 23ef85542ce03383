//! Achievement evaluation: a fixed table of independent predicates over the
//! snapshot. Additive-only — an achievement, once granted, is never revoked.

use ladder_core::user::{Achievement, ActivitySnapshot};

/// One achievement rule: a named predicate over the snapshot.
pub struct AchievementRule {
    pub achievement: Achievement,
    pub predicate: fn(&ActivitySnapshot) -> bool,
}

/// The rule table, in evaluation (and output) order. Rules are independent
/// and not mutually exclusive; each is monotonic in its counters.
pub const RULES: [AchievementRule; 4] = [
    AchievementRule {
        achievement: Achievement::CourseMaster,
        predicate: |s| s.courses_completed >= 5,
    },
    AchievementRule {
        achievement: Achievement::SubmissionWarrior,
        predicate: |s| s.submissions >= 50,
    },
    AchievementRule {
        achievement: Achievement::QualityCoder,
        predicate: |s| s.accepted_submissions >= 25,
    },
    AchievementRule {
        achievement: Achievement::RisingStar,
        predicate: |s| s.level >= 5,
    },
];

/// Achievements to newly grant for this snapshot: predicate holds and the
/// id is not already in the snapshot's granted set. Idempotent — a second
/// call with the updated set returns nothing.
///
/// The `rising-star` rule reads `snapshot.level`, so callers must evaluate
/// against the freshly computed level, not the stale persisted one (see
/// [`ProgressionEngine::evaluate`](crate::ProgressionEngine::evaluate)).
pub fn evaluate(snapshot: &ActivitySnapshot) -> Vec<Achievement> {
    RULES
        .iter()
        .filter(|rule| {
            (rule.predicate)(snapshot) && !snapshot.achievements.contains(&rule.achievement)
        })
        .map(|rule| rule.achievement)
        .collect()
}
