//! # ladder-store
//!
//! SQLite implementation of [`IUserStore`], keyed by user email. Schema and
//! migrations live in [`migrations`]; per-concern SQL lives in [`queries`].
//!
//! [`IUserStore`]: ladder_core::traits::IUserStore

mod engine;
pub mod migrations;
pub mod queries;

pub use engine::UserStore;

use ladder_core::errors::{LadderError, StorageError};

/// Wrap a low-level SQLite failure message into the workspace error type.
pub(crate) fn to_storage_err(message: String) -> LadderError {
    LadderError::Storage(StorageError::SqliteError { message })
}
