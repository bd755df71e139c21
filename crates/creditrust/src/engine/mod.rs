//! Scoring & Amortization Engine.
//!
//! Three stateless components glued together by the lending service:
//! [`scoring::ScoringModel`] turns an applicant feature vector into a credit
//! score, APR, and risk tier; [`amortization`] expands a loan into a fixed
//! monthly payment and installment schedule; [`risk::RiskAnalyzer`] applies an
//! independent additive rubric over a separate factor set. Every entry point
//! operates only on its own inputs and performs no I/O, so callers may invoke
//! them concurrently without coordination.

pub mod amortization;
pub mod features;
pub mod risk;
pub mod scoring;

pub use amortization::{build_schedule, AmortizationSchedule, Installment, InvalidInputError};
pub use features::{FeatureDefaults, FeatureInput, FeatureSet};
pub use risk::{RiskAnalyzer, RiskAssessment, RiskFactorInput, RiskFactors, RiskRating};
pub use scoring::{RiskTier, ScoringModel, ScoringWeights};
