use serde::{Deserialize, Serialize};

/// Fully resolved applicant feature vector consumed by the scoring model.
///
/// Values are taken as-is; the model clamps its output rather than rejecting
/// out-of-range features, so this type carries no validation of its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    pub income: f64,
    pub employment_years: f64,
    pub debt_to_income: f64,
    pub payment_history_score: f64,
    pub credit_utilization: f64,
    pub account_age: f64,
}

/// Documented fallback for every recognized feature.
///
/// Merging happens once at the boundary via [`FeatureInput::resolve`] instead
/// of per-formula lookups, so the complete set of recognized features and
/// their defaults lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureDefaults {
    pub income: f64,
    pub employment_years: f64,
    pub debt_to_income: f64,
    pub payment_history_score: f64,
    pub credit_utilization: f64,
    pub account_age: f64,
}

impl Default for FeatureDefaults {
    fn default() -> Self {
        Self {
            income: 50_000.0,
            employment_years: 2.0,
            debt_to_income: 0.3,
            payment_history_score: 70.0,
            credit_utilization: 0.3,
            account_age: 1.0,
        }
    }
}

/// Wire-side partial feature set; any omitted field resolves to its default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct FeatureInput {
    pub income: Option<f64>,
    pub employment_years: Option<f64>,
    pub debt_to_income: Option<f64>,
    pub payment_history_score: Option<f64>,
    pub credit_utilization: Option<f64>,
    pub account_age: Option<f64>,
}

impl FeatureInput {
    pub fn resolve(&self, defaults: &FeatureDefaults) -> FeatureSet {
        FeatureSet {
            income: self.income.unwrap_or(defaults.income),
            employment_years: self.employment_years.unwrap_or(defaults.employment_years),
            debt_to_income: self.debt_to_income.unwrap_or(defaults.debt_to_income),
            payment_history_score: self
                .payment_history_score
                .unwrap_or(defaults.payment_history_score),
            credit_utilization: self
                .credit_utilization
                .unwrap_or(defaults.credit_utilization),
            account_age: self.account_age.unwrap_or(defaults.account_age),
        }
    }
}
