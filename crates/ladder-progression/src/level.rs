//! Level calculation: weighted activity score mapped through the threshold
//! table.

use ladder_core::config::ProgressionConfig;
use ladder_core::user::ActivitySnapshot;

/// Weighted activity score.
///
/// ```text
/// score = submissions × w_sub
///       + acceptedSubmissions × w_acc
///       + coursesCompleted × w_course
/// ```
///
/// With default weights an accepted submission counts double a raw one, and
/// a completed course counts as much as five raw submissions.
pub fn activity_score(snapshot: &ActivitySnapshot, config: &ProgressionConfig) -> u64 {
    snapshot.submissions * config.submission_weight
        + snapshot.accepted_submissions * config.accepted_weight
        + snapshot.courses_completed * config.course_weight
}

/// Highest index `i` in the threshold table with `score >= thresholds[i]`.
///
/// The comparison is `>=`: a score exactly on a threshold qualifies for that
/// level. The table is closed — scores past the last entry saturate at the
/// last index.
pub fn level_for_score(score: u64, thresholds: &[u64]) -> u32 {
    for (i, threshold) in thresholds.iter().enumerate().rev() {
        if score >= *threshold {
            return i as u32;
        }
    }
    0
}

/// Map a snapshot to its level under the given rule configuration.
pub fn calculate(snapshot: &ActivitySnapshot, config: &ProgressionConfig) -> u32 {
    level_for_score(activity_score(snapshot, config), &config.level_thresholds)
}
