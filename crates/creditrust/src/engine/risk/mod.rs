mod policy;
mod rules;

pub use policy::RiskRating;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fully resolved factor set consumed by the risk rubric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactors {
    pub credit_score: u16,
    pub debt_to_income: f64,
    pub employment_years: f64,
    pub income: f64,
    pub collateral_ratio: f64,
}

/// Documented fallback for every recognized risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFactorDefaults {
    pub credit_score: u16,
    pub debt_to_income: f64,
    pub employment_years: f64,
    pub income: f64,
    pub collateral_ratio: f64,
}

impl Default for RiskFactorDefaults {
    fn default() -> Self {
        Self {
            credit_score: 600,
            debt_to_income: 0.3,
            employment_years: 2.0,
            income: 50_000.0,
            collateral_ratio: 1.5,
        }
    }
}

/// Wire-side partial factor set; omitted fields resolve to their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct RiskFactorInput {
    pub credit_score: Option<u16>,
    pub debt_to_income: Option<f64>,
    pub employment_years: Option<f64>,
    pub income: Option<f64>,
    pub collateral_ratio: Option<f64>,
}

impl RiskFactorInput {
    pub fn resolve(&self, defaults: &RiskFactorDefaults) -> RiskFactors {
        RiskFactors {
            credit_score: self.credit_score.unwrap_or(defaults.credit_score),
            debt_to_income: self.debt_to_income.unwrap_or(defaults.debt_to_income),
            employment_years: self.employment_years.unwrap_or(defaults.employment_years),
            income: self.income.unwrap_or(defaults.income),
            collateral_ratio: self.collateral_ratio.unwrap_or(defaults.collateral_ratio),
        }
    }
}

/// Outcome of the additive rubric: the summed score, the derived rating, and
/// the fired reasons in rubric order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub risk_level: RiskRating,
    pub risk_factors: Vec<&'static str>,
    pub recommendation: &'static str,
    pub factors_analyzed: RiskFactors,
    pub timestamp: DateTime<Utc>,
}

/// Stateless analyzer applying the additive underwriting rubric.
///
/// This taxonomy is independent of the credit-score-only
/// [`crate::engine::scoring::RiskTier`]; both use the LOW..VERY_HIGH label
/// set but with different inputs and thresholds, and they are deliberately
/// kept as distinct types.
pub struct RiskAnalyzer {
    defaults: RiskFactorDefaults,
}

impl Default for RiskAnalyzer {
    fn default() -> Self {
        Self::new(RiskFactorDefaults::default())
    }
}

impl RiskAnalyzer {
    pub fn new(defaults: RiskFactorDefaults) -> Self {
        Self { defaults }
    }

    pub fn analyze(&self, input: RiskFactorInput) -> RiskAssessment {
        let factors = input.resolve(&self.defaults);
        let (risk_score, risk_factors) = rules::evaluate(&factors);
        let (risk_level, recommendation) = policy::grade(risk_score);

        RiskAssessment {
            risk_score,
            risk_level,
            risk_factors,
            recommendation,
            factors_analyzed: factors,
            timestamp: Utc::now(),
        }
    }
}
