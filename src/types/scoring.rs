use serde::Serialize;
use std::fmt;

pub type Score = u32;

pub const IDENTITY_MAX: Score = 15;
pub const CATEGORY_MAX: Score = 12;
pub const LOCK_IN_MAX: Score = IDENTITY_MAX + 2 * CATEGORY_MAX;

/// Everything derived from one answer snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRecord {
    pub identity_score: Score,
    pub identity_max: Score,
    pub archive_score: Score,
    pub archive_max: Score,
    pub workflow_score: Score,
    pub workflow_max: Score,
    pub resilience_exposure: Score,
    pub redundancy_strength: Score,
    pub risk_total: Score,
    pub resilience_benefit: Score,
    pub capped_benefit: Score,
    pub lock_in_index: Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Level {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum OverallLevel {
    Low,
    Moderate,
    Elevated,
    High,
}

impl OverallLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::Elevated => "Elevated",
            Self::High => "High",
        }
    }
}

impl fmt::Display for OverallLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
