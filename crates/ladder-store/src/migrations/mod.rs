//! Schema migrations, applied in order against `PRAGMA user_version`.

mod v001_user_tables;

use rusqlite::Connection;
use tracing::info;

use ladder_core::errors::{LadderError, LadderResult, StorageError};

/// Current schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Run all pending migrations. Safe to call on every open.
pub fn run_migrations(conn: &Connection) -> LadderResult<()> {
    let version: u32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| crate::to_storage_err(e.to_string()))?;

    if version < 1 {
        v001_user_tables::migrate(conn).map_err(|e| {
            LadderError::Storage(StorageError::MigrationFailed {
                version: 1,
                reason: e.to_string(),
            })
        })?;
        info!(version = 1, "applied migration");
    }

    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)
            .map_err(|e| crate::to_storage_err(e.to_string()))?;
    }
    Ok(())
}
