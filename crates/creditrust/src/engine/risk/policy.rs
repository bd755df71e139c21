use serde::{Deserialize, Serialize};

/// Rating derived from the summed rubric score.
///
/// Shares its label set with [`crate::engine::scoring::RiskTier`] but is a
/// separate taxonomy with its own thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskRating {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskRating {
    pub fn label(self) -> &'static str {
        match self {
            RiskRating::Low => "LOW",
            RiskRating::Medium => "MEDIUM",
            RiskRating::High => "HIGH",
            RiskRating::VeryHigh => "VERY_HIGH",
        }
    }
}

/// Map a rubric score to its rating and underwriting recommendation.
pub(super) fn grade(risk_score: u32) -> (RiskRating, &'static str) {
    if risk_score <= 20 {
        (RiskRating::Low, "Approve with standard terms")
    } else if risk_score <= 40 {
        (RiskRating::Medium, "Approve with higher APR")
    } else if risk_score <= 60 {
        (RiskRating::High, "Approve with maximum APR and monitoring")
    } else {
        (
            RiskRating::VeryHigh,
            "Decline or require additional collateral",
        )
    }
}
