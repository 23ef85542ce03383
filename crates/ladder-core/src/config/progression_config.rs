use serde::{Deserialize, Serialize};

use crate::errors::{LadderError, LadderResult};

use super::defaults;

/// Progression rule configuration: activity-score weights and the level
/// threshold table. Defaults reproduce the platform's fixed rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressionConfig {
    /// Activity-score cutoff for each level, ascending. Index = level.
    pub level_thresholds: Vec<u64>,
    /// Weight of a raw submission.
    pub submission_weight: u64,
    /// Weight of an accepted submission (added on top of the raw count).
    pub accepted_weight: u64,
    /// Weight of a completed course.
    pub course_weight: u64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            level_thresholds: defaults::DEFAULT_LEVEL_THRESHOLDS.to_vec(),
            submission_weight: defaults::DEFAULT_SUBMISSION_WEIGHT,
            accepted_weight: defaults::DEFAULT_ACCEPTED_WEIGHT,
            course_weight: defaults::DEFAULT_COURSE_WEIGHT,
        }
    }
}

impl ProgressionConfig {
    /// Parse a config from a TOML document, falling back to defaults for
    /// missing fields.
    pub fn from_toml_str(s: &str) -> LadderResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| LadderError::InvalidConfig {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural invariants of the threshold table: non-empty,
    /// starts at 0 (level 0 requires no activity), strictly ascending.
    pub fn validate(&self) -> LadderResult<()> {
        if self.level_thresholds.is_empty() {
            return Err(LadderError::InvalidConfig {
                reason: "level_thresholds must not be empty".to_string(),
            });
        }
        if self.level_thresholds[0] != 0 {
            return Err(LadderError::InvalidConfig {
                reason: "level_thresholds must start at 0".to_string(),
            });
        }
        if self.level_thresholds.windows(2).any(|w| w[0] >= w[1]) {
            return Err(LadderError::InvalidConfig {
                reason: "level_thresholds must be strictly ascending".to_string(),
            });
        }
        Ok(())
    }

    /// Highest reachable level (last index of the threshold table).
    pub fn max_level(&self) -> u32 {
        (self.level_thresholds.len() - 1) as u32
    }
}
