use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LadderError;

/// Permanent, additively-granted badge. The string id is the wire and
/// persistence contract; the enum keeps the rule set closed.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Achievement {
    /// 5 or more completed courses.
    CourseMaster,
    /// 50 or more submissions.
    SubmissionWarrior,
    /// 25 or more accepted submissions.
    QualityCoder,
    /// Level 5 or higher.
    RisingStar,
}

impl Achievement {
    /// All achievements, in rule-evaluation order.
    pub const ALL: [Achievement; 4] = [
        Achievement::CourseMaster,
        Achievement::SubmissionWarrior,
        Achievement::QualityCoder,
        Achievement::RisingStar,
    ];

    /// Stable string id used in persistence and API payloads.
    pub fn id(self) -> &'static str {
        match self {
            Achievement::CourseMaster => "course-master",
            Achievement::SubmissionWarrior => "submission-warrior",
            Achievement::QualityCoder => "quality-coder",
            Achievement::RisingStar => "rising-star",
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Achievement {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.id() == s)
            .ok_or_else(|| LadderError::UnknownAchievement { id: s.to_string() })
    }
}
