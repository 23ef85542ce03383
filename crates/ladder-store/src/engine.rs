//! UserStore — owns the connection, runs migrations on open, implements
//! IUserStore.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use ladder_core::errors::LadderResult;
use ladder_core::traits::IUserStore;
use ladder_core::user::{Achievement, ActivitySnapshot, UserProfile, UserRecord};

use crate::migrations;
use crate::queries::{activity_ops, user_crud};
use crate::to_storage_err;

/// SQLite-backed user store. Open once at process start; the connection is
/// serialized behind a mutex, so the handle is shareable across threads.
pub struct UserStore {
    conn: Mutex<Connection>,
}

impl UserStore {
    /// Open a store backed by a file on disk.
    pub fn open(path: &Path) -> LadderResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> LadderResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> LadderResult<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(|e| to_storage_err(e.to_string()))?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn with_conn<F, T>(&self, f: F) -> LadderResult<T>
    where
        F: FnOnce(&Connection) -> LadderResult<T>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("connection mutex poisoned: {e}")))?;
        f(&conn)
    }
}

impl IUserStore for UserStore {
    fn create_user(&self, email: &str, profile: &UserProfile) -> LadderResult<()> {
        self.with_conn(|conn| user_crud::insert_user(conn, email, profile))
    }

    fn get_user(&self, email: &str) -> LadderResult<Option<UserRecord>> {
        self.with_conn(|conn| user_crud::get_user(conn, email))
    }

    fn snapshot(&self, email: &str) -> LadderResult<Option<ActivitySnapshot>> {
        self.with_conn(|conn| user_crud::get_snapshot(conn, email))
    }

    fn increment_submissions(&self, email: &str, accepted: bool) -> LadderResult<()> {
        self.with_conn(|conn| activity_ops::increment_submissions(conn, email, accepted))
    }

    fn mark_course_completed(&self, email: &str, course_id: &str) -> LadderResult<bool> {
        self.with_conn(|conn| activity_ops::mark_course_completed(conn, email, course_id))
    }

    fn append_ai_score(&self, email: &str, score: f64) -> LadderResult<()> {
        self.with_conn(|conn| activity_ops::append_ai_score(conn, email, score))
    }

    fn set_level(&self, email: &str, level: u32) -> LadderResult<()> {
        self.with_conn(|conn| activity_ops::set_level(conn, email, level))
    }

    fn grant_achievements(
        &self,
        email: &str,
        achievements: &[Achievement],
    ) -> LadderResult<usize> {
        self.with_conn(|conn| activity_ops::grant_achievements(conn, email, achievements))
    }
}
