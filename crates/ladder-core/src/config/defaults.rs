//! Default values for the progression rule set.
//!
//! The threshold table is closed-world: a score past the last entry still
//! maps to the last index.

/// Activity-score cutoff for each level, ascending. Index = level.
pub const DEFAULT_LEVEL_THRESHOLDS: [u64; 10] = [0, 5, 15, 30, 50, 75, 100, 150, 200, 300];

/// Weight of a raw submission in the activity score.
pub const DEFAULT_SUBMISSION_WEIGHT: u64 = 1;

/// Weight of an accepted submission (counts on top of the raw submission).
pub const DEFAULT_ACCEPTED_WEIGHT: u64 = 2;

/// Weight of a completed course.
pub const DEFAULT_COURSE_WEIGHT: u64 = 5;
