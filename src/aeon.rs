//! Aeon levels: project health bands derived from a numeric score
//!
//! The names follow the Pistis Sophia journey through the aeons, from
//! chaos up to the treasury of light.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of five ordered project-health bands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AeonLevel {
    /// score < 30
    Chaos,
    /// 30 <= score < 50
    LowerAeons,
    /// 50 <= score < 70
    MiddleAeons,
    /// 70 <= score < 85
    UpperAeons,
    /// score >= 85
    Treasury,
}

impl AeonLevel {
    /// Fixed enumeration order, lowest band first. Fallback lookups walk this.
    pub const ALL: [AeonLevel; 5] = [
        AeonLevel::Chaos,
        AeonLevel::LowerAeons,
        AeonLevel::MiddleAeons,
        AeonLevel::UpperAeons,
        AeonLevel::Treasury,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AeonLevel::Chaos => "chaos",
            AeonLevel::LowerAeons => "lower_aeons",
            AeonLevel::MiddleAeons => "middle_aeons",
            AeonLevel::UpperAeons => "upper_aeons",
            AeonLevel::Treasury => "treasury",
        }
    }

    /// Position in `ALL`, used to index per-level buckets
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for AeonLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a score to its aeon level.
///
/// Total over all inputs: values outside `[0, 100]` fall into the outer bands
/// and NaN lands in `Chaos`. Range checks belong to the caller.
pub fn classify(score: f64) -> AeonLevel {
    if score >= 85.0 {
        AeonLevel::Treasury
    } else if score >= 70.0 {
        AeonLevel::UpperAeons
    } else if score >= 50.0 {
        AeonLevel::MiddleAeons
    } else if score >= 30.0 {
        AeonLevel::LowerAeons
    } else {
        AeonLevel::Chaos
    }
}

/// How often the team should consult an advisor at a given score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConsultationMode {
    Chaos,
    Building,
    Maturing,
    Mastery,
}

impl ConsultationMode {
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ConsultationMode::Mastery
        } else if score >= 60.0 {
            ConsultationMode::Maturing
        } else if score >= 30.0 {
            ConsultationMode::Building
        } else {
            ConsultationMode::Chaos
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ConsultationMode::Chaos => "🔥",
            ConsultationMode::Building => "🏗️",
            ConsultationMode::Maturing => "🌱",
            ConsultationMode::Mastery => "🎯",
        }
    }

    pub fn frequency(&self) -> &'static str {
        match self {
            ConsultationMode::Chaos => "every_action",
            ConsultationMode::Building => "start_and_review",
            ConsultationMode::Maturing => "milestones",
            ConsultationMode::Mastery => "weekly",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConsultationMode::Chaos => "Consult an advisor before every significant action",
            ConsultationMode::Building => "Consult at the start of work and during review",
            ConsultationMode::Maturing => "Consult at planning and major milestones",
            ConsultationMode::Mastery => "Weekly reflection with an advisor",
        }
    }
}
