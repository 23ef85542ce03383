use ladder_core::config::ProgressionConfig;
use ladder_core::user::ActivitySnapshot;
use ladder_progression::level;

fn snapshot(submissions: u64, accepted: u64, courses: u64) -> ActivitySnapshot {
    ActivitySnapshot {
        submissions,
        accepted_submissions: accepted,
        courses_completed: courses,
        ..Default::default()
    }
}

// ── Zero activity ─────────────────────────────────────────────────────────

#[test]
fn zero_activity_is_level_zero() {
    let config = ProgressionConfig::default();
    assert_eq!(level::calculate(&snapshot(0, 0, 0), &config), 0);
}

// ── Threshold boundaries ──────────────────────────────────────────────────

#[test]
fn score_exactly_on_threshold_qualifies() {
    let config = ProgressionConfig::default();
    // 5 submissions → score 5 → exactly the level-1 cutoff.
    assert_eq!(level::calculate(&snapshot(5, 0, 0), &config), 1);
    // One short stays below.
    assert_eq!(level::calculate(&snapshot(4, 0, 0), &config), 0);
}

#[test]
fn every_default_threshold_is_its_own_level() {
    let config = ProgressionConfig::default();
    for (i, threshold) in config.level_thresholds.iter().enumerate() {
        assert_eq!(
            level::level_for_score(*threshold, &config.level_thresholds),
            i as u32,
            "threshold {threshold} should map to level {i}"
        );
    }
}

// ── Weighting ─────────────────────────────────────────────────────────────

#[test]
fn course_completions_weigh_five_each() {
    let config = ProgressionConfig::default();
    // 6 courses → score 30 → level 3.
    let s = snapshot(0, 0, 6);
    assert_eq!(level::activity_score(&s, &config), 30);
    assert_eq!(level::calculate(&s, &config), 3);
}

#[test]
fn accepted_submissions_weigh_double_on_top_of_raw() {
    let config = ProgressionConfig::default();
    // 10 submissions of which 5 accepted → 10 + 10 = 20.
    assert_eq!(level::activity_score(&snapshot(10, 5, 0), &config), 20);
}

// ── Closed table ──────────────────────────────────────────────────────────

#[test]
fn score_past_the_table_saturates_at_last_level() {
    let config = ProgressionConfig::default();
    assert_eq!(level::calculate(&snapshot(100_000, 0, 0), &config), 9);
    assert_eq!(level::calculate(&snapshot(300, 0, 0), &config), 9);
}
