//! # ladder-core
//!
//! Foundation crate for the Ladder progression system.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod user;

// Re-export the most commonly used types at the crate root.
pub use config::ProgressionConfig;
pub use errors::{LadderError, LadderResult};
pub use models::{ProgressionResult, ScoreStats};
pub use user::{Achievement, ActivitySnapshot, UserProfile, UserRecord};
