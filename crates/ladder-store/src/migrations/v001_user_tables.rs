//! v001: users, user_achievements, user_courses, ai_scores.

use rusqlite::Connection;

use ladder_core::errors::LadderResult;

use crate::to_storage_err;

pub fn migrate(conn: &Connection) -> LadderResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS users (
            email                 TEXT PRIMARY KEY,
            username              TEXT NOT NULL DEFAULT '',
            image                 TEXT NOT NULL DEFAULT '',
            submissions           INTEGER NOT NULL DEFAULT 0,
            accepted_submissions  INTEGER NOT NULL DEFAULT 0,
            courses_completed     INTEGER NOT NULL DEFAULT 0,
            level                 INTEGER NOT NULL DEFAULT 0,
            created_at            TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_at            TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        -- Achievement grants. The composite key makes the merge a set
        -- union: INSERT OR IGNORE of an existing grant is a no-op.
        CREATE TABLE IF NOT EXISTS user_achievements (
            email        TEXT NOT NULL REFERENCES users(email) ON DELETE CASCADE,
            achievement  TEXT NOT NULL,
            granted_at   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (email, achievement)
        );

        -- Per-course completion marks; the composite key enforces the
        -- once-per-course idempotence check.
        CREATE TABLE IF NOT EXISTS user_courses (
            email         TEXT NOT NULL REFERENCES users(email) ON DELETE CASCADE,
            course_id     TEXT NOT NULL,
            completed_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            PRIMARY KEY (email, course_id)
        );

        -- AI review scores; the rowid preserves insertion order.
        CREATE TABLE IF NOT EXISTS ai_scores (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            email        TEXT NOT NULL REFERENCES users(email) ON DELETE CASCADE,
            score        REAL NOT NULL,
            recorded_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );

        CREATE INDEX IF NOT EXISTS idx_ai_scores_email ON ai_scores(email);
        ",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}
