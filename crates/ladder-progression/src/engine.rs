use ladder_core::config::ProgressionConfig;
use ladder_core::models::ProgressionResult;
use ladder_core::user::ActivitySnapshot;

use crate::{achievements, level};

/// Pure progression evaluator. Holds the rule configuration; one
/// `evaluate` call per triggering event.
///
/// Pure and `Send + Sync`: safe to share across request handlers without
/// coordination, since every invocation operates on its own snapshot.
pub struct ProgressionEngine {
    config: ProgressionConfig,
}

impl ProgressionEngine {
    /// Create an engine with the platform's default rule set.
    pub fn new() -> Self {
        Self {
            config: ProgressionConfig::default(),
        }
    }

    /// Create with a custom rule configuration.
    pub fn with_config(config: ProgressionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProgressionConfig {
        &self.config
    }

    /// Evaluate one snapshot: recompute the level, then evaluate
    /// achievements against the snapshot carrying that new level.
    ///
    /// Achievement evaluation must see the newly computed level — a user
    /// crossing level 5 on this exact event earns `rising-star` in the same
    /// pass, not on the next trigger.
    pub fn evaluate(&self, snapshot: &ActivitySnapshot) -> ProgressionResult {
        let new_level = level::calculate(snapshot, &self.config);

        let mut leveled = snapshot.clone();
        leveled.level = new_level;
        let newly_granted = achievements::evaluate(&leveled);

        ProgressionResult {
            previous_level: snapshot.level,
            new_level,
            newly_granted,
        }
    }
}

impl Default for ProgressionEngine {
    fn default() -> Self {
        Self::new()
    }
}
