use ladder_progression::score;

// ── Average ───────────────────────────────────────────────────────────────

#[test]
fn empty_history_averages_to_zero() {
    assert_eq!(score::average(&[]), 0);
}

#[test]
fn average_rounds_half_away_from_zero() {
    // mean 70.5 rounds up to 71, not down to 70.
    assert_eq!(score::average(&[70.0, 71.0]), 71);
}

#[test]
fn average_rounds_to_nearest() {
    assert_eq!(score::average(&[80.0, 81.0, 81.0]), 81); // 80.67
    assert_eq!(score::average(&[80.0, 80.0, 81.0]), 80); // 80.33
    assert_eq!(score::average(&[100.0]), 100);
}

#[test]
fn average_ignores_order() {
    assert_eq!(score::average(&[10.0, 90.0, 50.0]), score::average(&[90.0, 50.0, 10.0]));
}

// ── Statistics ────────────────────────────────────────────────────────────

#[test]
fn stats_on_empty_history() {
    let stats = score::stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.average, 0);
    assert_eq!(stats.highest, 0.0);
    assert_eq!(stats.lowest, 0.0);
    assert!(stats.recent.is_empty());
}

#[test]
fn stats_track_extremes_and_recent_window() {
    let scores = [60.0, 95.0, 42.0, 70.0, 71.0, 88.0, 90.0];
    let stats = score::stats(&scores);

    assert_eq!(stats.total, 7);
    assert_eq!(stats.highest, 95.0);
    assert_eq!(stats.lowest, 42.0);
    // Last 5 scores, oldest first.
    assert_eq!(stats.recent, vec![42.0, 70.0, 71.0, 88.0, 90.0]);
}

#[test]
fn recent_window_shorter_history_returns_everything() {
    let stats = score::stats(&[50.0, 60.0]);
    assert_eq!(stats.recent, vec![50.0, 60.0]);
}
