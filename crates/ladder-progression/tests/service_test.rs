//! Full trigger workflows against an in-memory store.

use std::sync::Arc;

use ladder_core::errors::LadderError;
use ladder_core::traits::IUserStore;
use ladder_core::user::{Achievement, UserProfile};
use ladder_progression::{CourseCompletionOutcome, ProgressionService};
use ladder_store::UserStore;

const EMAIL: &str = "ada@example.com";

fn service_with_user() -> (ProgressionService, Arc<UserStore>) {
    let store = Arc::new(UserStore::open_in_memory().unwrap());
    store
        .create_user(
            EMAIL,
            &UserProfile {
                username: "ada".to_string(),
                image: String::new(),
            },
        )
        .unwrap();
    (ProgressionService::new(store.clone()), store)
}

// ── Submission trigger ────────────────────────────────────────────────────

#[test]
fn first_submission_keeps_level_zero() {
    let (service, store) = service_with_user();

    let result = service.record_submission(EMAIL, false).unwrap();
    assert_eq!(result.previous_level, 0);
    assert_eq!(result.new_level, 0);
    assert!(result.newly_granted.is_empty());

    let snapshot = store.snapshot(EMAIL).unwrap().unwrap();
    assert_eq!(snapshot.submissions, 1);
    assert_eq!(snapshot.accepted_submissions, 0);
}

#[test]
fn accepted_submission_bumps_both_counters() {
    let (service, store) = service_with_user();

    service.record_submission(EMAIL, true).unwrap();
    let snapshot = store.snapshot(EMAIL).unwrap().unwrap();
    assert_eq!(snapshot.submissions, 1);
    assert_eq!(snapshot.accepted_submissions, 1);
}

// Counters move from {48, 24, 4} to {49, 25, 4} on one accepted
// submission: score 119, 25th acceptance earns quality-coder. The level is
// recomputed on every event, so by this point it already sits at 6 (score
// 116 ≥ 100) and rising-star was granted on the earlier level-5 crossing.
#[test]
fn accepted_submission_end_to_end() {
    let (service, store) = service_with_user();

    // Build up history: 48 submissions, 24 accepted, 4 courses.
    for i in 0..48 {
        service.record_submission(EMAIL, i % 2 == 0).unwrap();
    }
    for course in ["sol-101", "sol-102", "sol-103", "sol-104"] {
        service.record_course_completion(EMAIL, course).unwrap();
    }
    let snapshot = store.snapshot(EMAIL).unwrap().unwrap();
    assert_eq!(snapshot.submissions, 48);
    assert_eq!(snapshot.accepted_submissions, 24);
    assert_eq!(snapshot.courses_completed, 4);
    assert_eq!(snapshot.level, 6);
    assert!(snapshot.achievements.contains(&Achievement::RisingStar));

    let result = service.record_submission(EMAIL, true).unwrap();
    assert_eq!(result.previous_level, 6);
    assert_eq!(result.new_level, 6);
    assert_eq!(result.newly_granted, vec![Achievement::QualityCoder]);

    let snapshot = store.snapshot(EMAIL).unwrap().unwrap();
    assert_eq!(snapshot.level, 6);
    assert!(snapshot.achievements.contains(&Achievement::QualityCoder));
}

// ── Course-completion trigger ─────────────────────────────────────────────

#[test]
fn course_completion_is_idempotent_per_course() {
    let (service, store) = service_with_user();

    let first = service.record_course_completion(EMAIL, "sol-101").unwrap();
    assert!(matches!(first, CourseCompletionOutcome::Recorded(_)));

    let second = service.record_course_completion(EMAIL, "sol-101").unwrap();
    assert_eq!(second, CourseCompletionOutcome::AlreadyCompleted);

    let snapshot = store.snapshot(EMAIL).unwrap().unwrap();
    assert_eq!(snapshot.courses_completed, 1);
}

#[test]
fn fifth_course_earns_course_master() {
    let (service, _store) = service_with_user();

    for course in ["a", "b", "c", "d"] {
        service.record_course_completion(EMAIL, course).unwrap();
    }
    let outcome = service.record_course_completion(EMAIL, "e").unwrap();
    let CourseCompletionOutcome::Recorded(result) = outcome else {
        panic!("expected a recorded completion");
    };
    assert!(result.newly_granted.contains(&Achievement::CourseMaster));
}

// ── AI-score trigger ──────────────────────────────────────────────────────

#[test]
fn ai_scores_average_but_never_level() {
    let (service, store) = service_with_user();

    let report = service.record_ai_score(EMAIL, 70.0).unwrap();
    assert_eq!(report.total, 1);
    assert_eq!(report.average, 70);
    assert_eq!(report.progression.new_level, 0);

    // mean 70.5 rounds away from zero.
    let report = service.record_ai_score(EMAIL, 71.0).unwrap();
    assert_eq!(report.total, 2);
    assert_eq!(report.average, 71);
    // High scores alone never move the level — only raw counters do.
    assert_eq!(report.progression.new_level, 0);
    assert_eq!(store.snapshot(EMAIL).unwrap().unwrap().level, 0);
}

#[test]
fn score_stats_cover_the_recent_window() {
    let (service, _store) = service_with_user();

    for score in [60.0, 95.0, 42.0, 70.0, 71.0, 88.0] {
        service.record_ai_score(EMAIL, score).unwrap();
    }
    let stats = service.score_stats(EMAIL).unwrap();
    assert_eq!(stats.total, 6);
    assert_eq!(stats.highest, 95.0);
    assert_eq!(stats.lowest, 42.0);
    assert_eq!(stats.recent, vec![95.0, 42.0, 70.0, 71.0, 88.0]);
}

// ── Unknown users ─────────────────────────────────────────────────────────

#[test]
fn triggers_for_unknown_user_fail_cleanly() {
    let store = Arc::new(UserStore::open_in_memory().unwrap());
    let service = ProgressionService::new(store);

    let err = service.record_submission("ghost@example.com", false).unwrap_err();
    assert!(matches!(err, LadderError::UserNotFound { .. }));

    let err = service.record_ai_score("ghost@example.com", 50.0).unwrap_err();
    assert!(matches!(err, LadderError::UserNotFound { .. }));
}
