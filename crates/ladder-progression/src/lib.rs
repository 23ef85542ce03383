//! # ladder-progression
//!
//! The progression rule set: level calculation, AI-score averaging, and
//! achievement evaluation — all pure functions over an [`ActivitySnapshot`]
//! — plus the [`ProgressionService`] that drives the read-evaluate-write
//! sequence around them for each triggering event.
//!
//! [`ActivitySnapshot`]: ladder_core::ActivitySnapshot

pub mod achievements;
pub mod level;
pub mod score;

mod engine;
mod service;

pub use engine::ProgressionEngine;
pub use service::{CourseCompletionOutcome, ProgressionService, ScoreReport};
