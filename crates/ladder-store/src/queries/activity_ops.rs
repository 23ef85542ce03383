//! Counter mutations and evaluation write-back.

use rusqlite::{params, Connection};

use ladder_core::errors::{LadderError, LadderResult};
use ladder_core::user::Achievement;

use crate::to_storage_err;

/// Atomic submission increment. One UPDATE, so concurrent triggers for the
/// same user cannot lose an increment.
pub fn increment_submissions(conn: &Connection, email: &str, accepted: bool) -> LadderResult<()> {
    let changed = conn
        .execute(
            "UPDATE users SET
                submissions = submissions + 1,
                accepted_submissions = accepted_submissions + ?2,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE email = ?1",
            params![email, accepted as i64],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    require_user(changed, email)
}

/// Mark a course completed. Returns `false` (counter untouched) when this
/// course was already recorded. Mark + counter bump are one transaction.
pub fn mark_course_completed(
    conn: &Connection,
    email: &str,
    course_id: &str,
) -> LadderResult<bool> {
    if !super::user_crud::user_exists(conn, email)? {
        return Err(LadderError::UserNotFound {
            email: email.to_string(),
        });
    }

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| to_storage_err(format!("mark_course_completed begin: {e}")))?;

    let inserted = tx
        .execute(
            "INSERT OR IGNORE INTO user_courses (email, course_id) VALUES (?1, ?2)",
            params![email, course_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    if inserted == 0 {
        // Already completed; nothing to commit.
        let _ = tx.rollback();
        return Ok(false);
    }

    tx.execute(
        "UPDATE users SET
            courses_completed = courses_completed + 1,
            updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
         WHERE email = ?1",
        params![email],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    tx.commit()
        .map_err(|e| to_storage_err(format!("mark_course_completed commit: {e}")))?;
    Ok(true)
}

/// Append an AI score. Rowid order is insertion order.
pub fn append_ai_score(conn: &Connection, email: &str, score: f64) -> LadderResult<()> {
    if !super::user_crud::user_exists(conn, email)? {
        return Err(LadderError::UserNotFound {
            email: email.to_string(),
        });
    }
    conn.execute(
        "INSERT INTO ai_scores (email, score) VALUES (?1, ?2)",
        params![email, score],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    touch(conn, email)
}

pub fn set_level(conn: &Connection, email: &str, level: u32) -> LadderResult<()> {
    let changed = conn
        .execute(
            "UPDATE users SET
                level = ?2,
                updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
             WHERE email = ?1",
            params![email, level],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    require_user(changed, email)
}

/// Set-union merge of achievement grants. INSERT OR IGNORE under the
/// (email, achievement) primary key makes re-granting a no-op. Returns the
/// number actually inserted.
pub fn grant_achievements(
    conn: &Connection,
    email: &str,
    achievements: &[Achievement],
) -> LadderResult<usize> {
    if !super::user_crud::user_exists(conn, email)? {
        return Err(LadderError::UserNotFound {
            email: email.to_string(),
        });
    }

    let mut inserted = 0;
    for achievement in achievements {
        inserted += conn
            .execute(
                "INSERT OR IGNORE INTO user_achievements (email, achievement) VALUES (?1, ?2)",
                params![email, achievement.id()],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
    }
    if inserted > 0 {
        touch(conn, email)?;
    }
    Ok(inserted)
}

fn touch(conn: &Connection, email: &str) -> LadderResult<()> {
    conn.execute(
        "UPDATE users SET updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now') WHERE email = ?1",
        params![email],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

fn require_user(changed: usize, email: &str) -> LadderResult<()> {
    if changed == 0 {
        return Err(LadderError::UserNotFound {
            email: email.to_string(),
        });
    }
    Ok(())
}
