//! ProgressionService: drives the read-evaluate-write sequence around the
//! pure engine, one entry point per triggering event.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use ladder_core::errors::{LadderError, LadderResult};
use ladder_core::models::{ProgressionResult, ScoreStats};
use ladder_core::traits::IUserStore;
use ladder_core::user::ActivitySnapshot;

use crate::engine::ProgressionEngine;
use crate::score;

/// Outcome of a course-completion trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseCompletionOutcome {
    Recorded(ProgressionResult),
    /// The course was already marked complete for this user; counters and
    /// progression are untouched.
    AlreadyCompleted,
}

/// Response payload for an AI-score trigger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Average over the full score history, including the new score.
    pub average: i64,
    /// Total number of recorded scores.
    pub total: usize,
    pub progression: ProgressionResult,
}

/// Orchestrates progression around an injected store handle.
///
/// Every trigger follows the same sequence: mutate counters in the store,
/// take a fresh snapshot, run the pure engine, and write back only the
/// fields that changed (level if different, achievements via set union).
pub struct ProgressionService {
    store: Arc<dyn IUserStore>,
    engine: ProgressionEngine,
}

impl ProgressionService {
    /// Create a service with the default rule set.
    pub fn new(store: Arc<dyn IUserStore>) -> Self {
        Self {
            store,
            engine: ProgressionEngine::new(),
        }
    }

    /// Create with a custom engine (non-default rule configuration).
    pub fn with_engine(store: Arc<dyn IUserStore>, engine: ProgressionEngine) -> Self {
        Self { store, engine }
    }

    /// Submission recorded: bump the counters, then re-evaluate.
    pub fn record_submission(
        &self,
        email: &str,
        accepted: bool,
    ) -> LadderResult<ProgressionResult> {
        self.store.increment_submissions(email, accepted)?;
        self.evaluate_and_persist(email)
    }

    /// Course completed: bump the counter only on first completion of this
    /// course, then re-evaluate. A repeat completion short-circuits.
    pub fn record_course_completion(
        &self,
        email: &str,
        course_id: &str,
    ) -> LadderResult<CourseCompletionOutcome> {
        if !self.store.mark_course_completed(email, course_id)? {
            debug!(email, course_id, "course already completed, skipping");
            return Ok(CourseCompletionOutcome::AlreadyCompleted);
        }
        let result = self.evaluate_and_persist(email)?;
        Ok(CourseCompletionOutcome::Recorded(result))
    }

    /// AI score recorded: append the score, re-evaluate, and report the
    /// updated average. The average never feeds the level formula.
    pub fn record_ai_score(&self, email: &str, ai_score: f64) -> LadderResult<ScoreReport> {
        self.store.append_ai_score(email, ai_score)?;
        let progression = self.evaluate_and_persist(email)?;
        let snapshot = self.fresh_snapshot(email)?;
        Ok(ScoreReport {
            average: score::average(&snapshot.ai_scores),
            total: snapshot.ai_scores.len(),
            progression,
        })
    }

    /// Score statistics for display.
    pub fn score_stats(&self, email: &str) -> LadderResult<ScoreStats> {
        let snapshot = self.fresh_snapshot(email)?;
        Ok(score::stats(&snapshot.ai_scores))
    }

    /// Read snapshot → run the pure engine → persist the delta.
    fn evaluate_and_persist(&self, email: &str) -> LadderResult<ProgressionResult> {
        let snapshot = self.fresh_snapshot(email)?;
        let result = self.engine.evaluate(&snapshot);

        if result.level_changed() {
            self.store.set_level(email, result.new_level)?;
        }
        if !result.newly_granted.is_empty() {
            self.store.grant_achievements(email, &result.newly_granted)?;
        }

        debug!(
            email,
            previous_level = result.previous_level,
            new_level = result.new_level,
            newly_granted = result.newly_granted.len(),
            "progression evaluated"
        );
        Ok(result)
    }

    fn fresh_snapshot(&self, email: &str) -> LadderResult<ActivitySnapshot> {
        self.store
            .snapshot(email)?
            .ok_or_else(|| LadderError::UserNotFound {
                email: email.to_string(),
            })
    }
}
