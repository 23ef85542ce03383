use serde::{Deserialize, Serialize};

use crate::user::Achievement;

/// Output of one progression evaluation. Not persisted itself — only the
/// resulting level and achievement set are written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionResult {
    pub previous_level: u32,
    pub new_level: u32,
    /// Achievements earned by this evaluation, in rule-table order.
    /// Empty when nothing new was earned.
    pub newly_granted: Vec<Achievement>,
}

impl ProgressionResult {
    pub fn level_changed(&self) -> bool {
        self.new_level != self.previous_level
    }
}
