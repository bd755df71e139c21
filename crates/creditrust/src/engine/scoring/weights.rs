use serde::{Deserialize, Serialize};

/// Model weights applied to the feature factors.
///
/// Weights are signed the way the underlying model was trained:
/// `debt_to_income` and `credit_utilization` penalize, so they carry negative
/// values and the score formula consumes their magnitudes. Immutable once
/// handed to a [`super::ScoringModel`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub base_score: f64,
    pub income: f64,
    pub employment_years: f64,
    pub debt_to_income: f64,
    pub payment_history: f64,
    pub credit_utilization: f64,
    pub account_age: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_score: 500.0,
            income: 0.25,
            employment_years: 0.15,
            debt_to_income: -0.30,
            payment_history: 0.25,
            credit_utilization: -0.15,
            account_age: 0.10,
        }
    }
}
