//! Create and load user records.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use ladder_core::errors::{LadderError, LadderResult};
use ladder_core::user::{Achievement, ActivitySnapshot, UserProfile, UserRecord};

use crate::to_storage_err;

/// Insert a new user with zeroed counters. Fails if the email is taken.
pub fn insert_user(conn: &Connection, email: &str, profile: &UserProfile) -> LadderResult<()> {
    if user_exists(conn, email)? {
        return Err(LadderError::UserAlreadyExists {
            email: email.to_string(),
        });
    }
    conn.execute(
        "INSERT INTO users (email, username, image) VALUES (?1, ?2, ?3)",
        params![email, profile.username, profile.image],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn user_exists(conn: &Connection, email: &str) -> LadderResult<bool> {
    let exists: Option<i64> = conn
        .query_row("SELECT 1 FROM users WHERE email = ?1", params![email], |row| {
            row.get(0)
        })
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(exists.is_some())
}

/// Load the full record: base row plus achievements, completed courses,
/// and the score history in insertion order.
pub fn get_user(conn: &Connection, email: &str) -> LadderResult<Option<UserRecord>> {
    let base = conn
        .query_row(
            "SELECT email, username, image, submissions, accepted_submissions,
                    courses_completed, level, created_at, updated_at
             FROM users WHERE email = ?1",
            params![email],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, u64>(3)?,
                    row.get::<_, u64>(4)?,
                    row.get::<_, u64>(5)?,
                    row.get::<_, u32>(6)?,
                    row.get::<_, String>(7)?,
                    row.get::<_, String>(8)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((email, username, image, submissions, accepted, courses, level, created, updated)) =
        base
    else {
        return Ok(None);
    };

    Ok(Some(UserRecord {
        profile: UserProfile { username, image },
        completed_courses: completed_courses(conn, &email)?,
        submissions,
        accepted_submissions: accepted,
        courses_completed: courses,
        ai_scores: ai_scores(conn, &email)?,
        level,
        achievements: achievements(conn, &email)?,
        created_at: parse_timestamp(&created)?,
        updated_at: parse_timestamp(&updated)?,
        email,
    }))
}

/// Load only the progression counters as a pure-rule input.
pub fn get_snapshot(conn: &Connection, email: &str) -> LadderResult<Option<ActivitySnapshot>> {
    let base = conn
        .query_row(
            "SELECT submissions, accepted_submissions, courses_completed, level
             FROM users WHERE email = ?1",
            params![email],
            |row| {
                Ok((
                    row.get::<_, u64>(0)?,
                    row.get::<_, u64>(1)?,
                    row.get::<_, u64>(2)?,
                    row.get::<_, u32>(3)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    let Some((submissions, accepted_submissions, courses_completed, level)) = base else {
        return Ok(None);
    };

    Ok(Some(ActivitySnapshot {
        submissions,
        accepted_submissions,
        courses_completed,
        ai_scores: ai_scores(conn, email)?,
        level,
        achievements: achievements(conn, email)?,
    }))
}

fn achievements(conn: &Connection, email: &str) -> LadderResult<BTreeSet<Achievement>> {
    let mut stmt = conn
        .prepare("SELECT achievement FROM user_achievements WHERE email = ?1")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![email], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut set = BTreeSet::new();
    for row in rows {
        let id = row.map_err(|e| to_storage_err(e.to_string()))?;
        set.insert(id.parse::<Achievement>()?);
    }
    Ok(set)
}

fn completed_courses(conn: &Connection, email: &str) -> LadderResult<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT course_id FROM user_courses WHERE email = ?1 ORDER BY completed_at, course_id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![email], |row| row.get::<_, String>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn ai_scores(conn: &Connection, email: &str) -> LadderResult<Vec<f64>> {
    let mut stmt = conn
        .prepare("SELECT score FROM ai_scores WHERE email = ?1 ORDER BY id")
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![email], |row| row.get::<_, f64>(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}

fn parse_timestamp(s: &str) -> LadderResult<DateTime<Utc>> {
    s.parse::<DateTime<Utc>>()
        .map_err(|e| to_storage_err(format!("bad timestamp {s:?}: {e}")))
}
