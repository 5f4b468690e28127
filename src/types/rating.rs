use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative label attached to a finalized score. Risk metrics use the
/// safety family, everything else the quality family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "SAFE")]
    Safe,
    #[serde(rename = "LOW RISK")]
    LowRisk,
    #[serde(rename = "MODERATE RISK")]
    ModerateRisk,
    #[serde(rename = "HIGH RISK")]
    HighRisk,
    #[serde(rename = "ELITE")]
    Elite,
    #[serde(rename = "GOOD")]
    Good,
    #[serde(rename = "NEEDS IMPROVEMENT")]
    NeedsImprovement,
    #[serde(rename = "CRITICAL ISSUE")]
    CriticalIssue,
}

impl Rating {
    /// Step function for injury-risk metrics.
    pub fn for_risk(score: f64) -> Rating {
        if score >= 90.0 {
            Rating::Safe
        } else if score >= 75.0 {
            Rating::LowRisk
        } else if score >= 25.0 {
            Rating::ModerateRisk
        } else {
            Rating::HighRisk
        }
    }

    /// Step function for all other metrics.
    pub fn for_quality(score: f64) -> Rating {
        if score >= 90.0 {
            Rating::Elite
        } else if score >= 75.0 {
            Rating::Good
        } else if score >= 50.0 {
            Rating::NeedsImprovement
        } else {
            Rating::CriticalIssue
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::Safe => "SAFE",
            Rating::LowRisk => "LOW RISK",
            Rating::ModerateRisk => "MODERATE RISK",
            Rating::HighRisk => "HIGH RISK",
            Rating::Elite => "ELITE",
            Rating::Good => "GOOD",
            Rating::NeedsImprovement => "NEEDS IMPROVEMENT",
            Rating::CriticalIssue => "CRITICAL ISSUE",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
