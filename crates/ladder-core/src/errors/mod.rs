mod storage_error;

pub use storage_error::StorageError;

/// Top-level error type for the Ladder workspace.
#[derive(Debug, thiserror::Error)]
pub enum LadderError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("user not found: {email}")]
    UserNotFound { email: String },

    #[error("user already exists: {email}")]
    UserAlreadyExists { email: String },

    #[error("unknown achievement id: {id}")]
    UnknownAchievement { id: String },

    #[error("invalid progression config: {reason}")]
    InvalidConfig { reason: String },
}

pub type LadderResult<T> = Result<T, LadderError>;
