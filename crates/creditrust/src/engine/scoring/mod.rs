mod weights;

pub use weights::ScoringWeights;

use super::features::{FeatureDefaults, FeatureSet};
use serde::{Deserialize, Serialize};

/// Lowest score the model can emit.
pub const MIN_CREDIT_SCORE: u16 = 300;
/// Highest score the model can emit.
pub const MAX_CREDIT_SCORE: u16 = 850;

/// Risk tier derived solely from the credit score.
///
/// Not to be confused with [`crate::engine::risk::RiskRating`], which shares
/// the label set but is scored on a different factor set with different
/// thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskTier {
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Medium => "MEDIUM",
            RiskTier::High => "HIGH",
            RiskTier::VeryHigh => "VERY_HIGH",
        }
    }
}

/// Deterministic credit scoring model over a six-feature applicant vector.
///
/// The model is total: every feature combination, including NaN and infinite
/// values, produces a score inside `[MIN_CREDIT_SCORE, MAX_CREDIT_SCORE]`.
pub struct ScoringModel {
    weights: ScoringWeights,
    defaults: FeatureDefaults,
}

impl ScoringModel {
    pub fn new(weights: ScoringWeights, defaults: FeatureDefaults) -> Self {
        Self { weights, defaults }
    }

    /// Model with the production weight set and documented feature defaults.
    pub fn standard() -> Self {
        Self::new(ScoringWeights::default(), FeatureDefaults::default())
    }

    pub fn feature_defaults(&self) -> &FeatureDefaults {
        &self.defaults
    }

    /// Map a feature vector to a credit score in `[300, 850]`.
    ///
    /// Each factor is capped before weighting, the weighted terms are summed
    /// around the base score, and the result is truncated to an integer and
    /// clamped. Out-of-range features shift terms to their caps or floors;
    /// they never cause an error.
    pub fn predict_credit_score(&self, features: &FeatureSet) -> u16 {
        let w = &self.weights;

        let income_factor = (features.income / 100_000.0 * 100.0).min(100.0);
        let employment_factor = (features.employment_years * 10.0).min(50.0);
        let dti_factor = ((0.5 - features.debt_to_income) * 200.0).max(0.0);
        let utilization_factor = ((0.3 - features.credit_utilization) * 100.0).max(0.0);
        let age_factor = (features.account_age * 5.0).min(30.0);

        let calculated = w.base_score
            + income_factor * w.income * 100.0
            + employment_factor * w.employment_years
            + dti_factor * w.debt_to_income.abs()
            + features.payment_history_score * w.payment_history
            + utilization_factor * w.credit_utilization.abs()
            + age_factor * w.account_age;

        // NaN truncates to 0 and clamps to the floor.
        (calculated as i64).clamp(MIN_CREDIT_SCORE as i64, MAX_CREDIT_SCORE as i64) as u16
    }

    /// Six-way APR step function of the credit score.
    pub fn calculate_apr(&self, credit_score: u16) -> f64 {
        if credit_score >= 800 {
            5.0
        } else if credit_score >= 750 {
            7.0
        } else if credit_score >= 700 {
            10.0
        } else if credit_score >= 650 {
            13.0
        } else if credit_score >= 600 {
            16.0
        } else {
            20.0
        }
    }

    /// Four-way risk tier step function of the credit score.
    pub fn assess_risk_level(&self, credit_score: u16) -> RiskTier {
        if credit_score >= 750 {
            RiskTier::Low
        } else if credit_score >= 650 {
            RiskTier::Medium
        } else if credit_score >= 550 {
            RiskTier::High
        } else {
            RiskTier::VeryHigh
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::features::FeatureInput;

    fn mid_range_features() -> FeatureSet {
        FeatureSet {
            income: 4_000.0,
            employment_years: 3.0,
            debt_to_income: 0.4,
            payment_history_score: 80.0,
            credit_utilization: 0.2,
            account_age: 4.0,
        }
    }

    #[test]
    fn default_features_pin_the_clamped_ceiling() {
        let model = ScoringModel::standard();
        let features = FeatureInput::default().resolve(model.feature_defaults());
        // 500 + 1250 + 3 + 12 + 17.5 + 0 + 0.5 truncates past the ceiling.
        assert_eq!(model.predict_credit_score(&features), 850);
    }

    #[test]
    fn mid_range_features_pin_exact_arithmetic() {
        let model = ScoringModel::standard();
        // 500 + 100 + 4.5 + 6 + 20 + 1.5 + 2 = 634
        assert_eq!(model.predict_credit_score(&mid_range_features()), 634);
    }

    #[test]
    fn adversarial_inputs_stay_clamped() {
        let model = ScoringModel::standard();
        let hostile = FeatureSet {
            income: -1e9,
            employment_years: -50.0,
            debt_to_income: 100.0,
            payment_history_score: -1e6,
            credit_utilization: 50.0,
            account_age: -3.0,
        };
        assert_eq!(model.predict_credit_score(&hostile), 300);

        let inflated = FeatureSet {
            income: 1e12,
            employment_years: 1e6,
            debt_to_income: -100.0,
            payment_history_score: 1e9,
            credit_utilization: -5.0,
            account_age: 1e6,
        };
        assert_eq!(model.predict_credit_score(&inflated), 850);
    }

    #[test]
    fn non_finite_inputs_still_score_in_range() {
        let model = ScoringModel::standard();
        let weird = FeatureSet {
            income: f64::NAN,
            employment_years: f64::INFINITY,
            debt_to_income: f64::NEG_INFINITY,
            payment_history_score: f64::NAN,
            credit_utilization: f64::NAN,
            account_age: f64::NAN,
        };
        let score = model.predict_credit_score(&weird);
        assert!((MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE).contains(&score));
    }

    #[test]
    fn scoring_is_idempotent() {
        let model = ScoringModel::standard();
        let features = mid_range_features();
        assert_eq!(
            model.predict_credit_score(&features),
            model.predict_credit_score(&features)
        );
    }

    #[test]
    fn alternate_weights_change_the_score_deterministically() {
        let heavier_history = ScoringWeights {
            payment_history: 0.50,
            ..ScoringWeights::default()
        };
        let model = ScoringModel::new(heavier_history, FeatureDefaults::default());
        // Mid-range fixture gains 80 * 0.25 on top of the 634 baseline.
        assert_eq!(model.predict_credit_score(&mid_range_features()), 654);
    }

    #[test]
    fn apr_steps_land_on_the_correct_side() {
        let model = ScoringModel::standard();
        assert_eq!(model.calculate_apr(850), 5.0);
        assert_eq!(model.calculate_apr(800), 5.0);
        assert_eq!(model.calculate_apr(799), 7.0);
        assert_eq!(model.calculate_apr(750), 7.0);
        assert_eq!(model.calculate_apr(749), 10.0);
        assert_eq!(model.calculate_apr(700), 10.0);
        assert_eq!(model.calculate_apr(699), 13.0);
        assert_eq!(model.calculate_apr(650), 13.0);
        assert_eq!(model.calculate_apr(649), 16.0);
        assert_eq!(model.calculate_apr(600), 16.0);
        assert_eq!(model.calculate_apr(599), 20.0);
        assert_eq!(model.calculate_apr(300), 20.0);
    }

    #[test]
    fn apr_never_increases_with_score() {
        let model = ScoringModel::standard();
        let mut previous = model.calculate_apr(MIN_CREDIT_SCORE);
        for score in MIN_CREDIT_SCORE..=MAX_CREDIT_SCORE {
            let apr = model.calculate_apr(score);
            assert!(apr <= previous, "apr rose between {} and {}", score - 1, score);
            previous = apr;
        }
    }

    #[test]
    fn risk_tier_boundaries() {
        let model = ScoringModel::standard();
        assert_eq!(model.assess_risk_level(750), RiskTier::Low);
        assert_eq!(model.assess_risk_level(749), RiskTier::Medium);
        assert_eq!(model.assess_risk_level(650), RiskTier::Medium);
        assert_eq!(model.assess_risk_level(649), RiskTier::High);
        assert_eq!(model.assess_risk_level(550), RiskTier::High);
        assert_eq!(model.assess_risk_level(549), RiskTier::VeryHigh);
    }

    #[test]
    fn risk_tier_serializes_with_upper_snake_labels() {
        assert_eq!(
            serde_json::to_string(&RiskTier::VeryHigh).expect("serializes"),
            "\"VERY_HIGH\""
        );
        assert_eq!(RiskTier::Low.label(), "LOW");
    }
}
