use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use tracing::info;

use crate::engine::amortization::{build_schedule, Installment, InvalidInputError};
use crate::engine::features::{FeatureInput, FeatureSet};
use crate::engine::risk::{RiskAnalyzer, RiskAssessment, RiskFactorInput};
use crate::engine::scoring::{RiskTier, ScoringModel};

use super::domain::{
    CreditApplication, RepaymentRecord, RepaymentStatus, UserAddress, UserProfile,
};
use super::repository::{ApplicationLog, ProfileRepository, RepaymentLedger, RepositoryError};

/// Minimum stored credit score that can be approved for a loan.
const APPROVAL_SCORE_FLOOR: u16 = 550;
/// Approved amounts are capped at this share of annual income.
const MAX_LOAN_INCOME_SHARE: f64 = 0.1;
/// Applications above this debt-to-income ratio are declined outright.
const APPROVAL_DTI_CEILING: f64 = 0.5;

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Facade composing the scoring model, risk analyzer, and persistence traits.
///
/// The engine components are pure; this service owns the read-before /
/// write-after choreography around them.
pub struct LendingService<P, A, L> {
    profiles: Arc<P>,
    applications: Arc<A>,
    ledger: Arc<L>,
    model: Arc<ScoringModel>,
    analyzer: Arc<RiskAnalyzer>,
}

/// Scoring response persisted back onto the borrower profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreOutcome {
    pub address: UserAddress,
    pub credit_score: u16,
    pub apr: f64,
    pub risk_level: RiskTier,
    pub features_used: FeatureSet,
    pub timestamp: DateTime<Utc>,
}

/// Loan application decision appended to the application log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationOutcome {
    pub application_id: u64,
    pub address: UserAddress,
    pub requested_amount: f64,
    pub credit_score: u16,
    pub apr: f64,
    pub risk_level: RiskTier,
    pub approved: bool,
    pub max_loan_amount: f64,
    pub reason: &'static str,
}

/// Repayment schedule response; one pending ledger entry is appended per
/// installment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleOutcome {
    pub address: UserAddress,
    pub loan_amount: f64,
    pub apr: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub schedule: Vec<Installment>,
}

/// Ledger entry as exposed on the status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepaymentView {
    pub id: u64,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub status: RepaymentStatus,
    pub created_at: DateTime<Utc>,
    pub is_overdue: bool,
}

/// Aggregated repayment standing for one borrower.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepaymentOverview {
    pub address: UserAddress,
    pub repayments: Vec<RepaymentView>,
    pub total_pending: f64,
    pub overdue_count: usize,
}

impl<P, A, L> LendingService<P, A, L>
where
    P: ProfileRepository + 'static,
    A: ApplicationLog + 'static,
    L: RepaymentLedger + 'static,
{
    pub fn new(
        profiles: Arc<P>,
        applications: Arc<A>,
        ledger: Arc<L>,
        model: ScoringModel,
        analyzer: RiskAnalyzer,
    ) -> Self {
        Self {
            profiles,
            applications,
            ledger,
            model: Arc::new(model),
            analyzer: Arc::new(analyzer),
        }
    }

    /// Fetch a borrower profile, creating it with baseline values on first
    /// contact.
    pub fn profile(&self, address: &UserAddress) -> Result<UserProfile, LendingServiceError> {
        if let Some(profile) = self.profiles.fetch(address)? {
            return Ok(profile);
        }

        let profile = UserProfile::with_defaults(address.clone(), Utc::now());
        self.profiles.upsert(profile.clone())?;
        info!(address = %address.as_str(), "created borrower profile with defaults");
        Ok(profile)
    }

    /// Score the supplied features and persist the result onto the profile.
    ///
    /// Missing features fall back to the model's documented defaults; the
    /// stored profile keeps its creation timestamp and payment history.
    pub fn score(
        &self,
        address: &UserAddress,
        features: FeatureInput,
    ) -> Result<ScoreOutcome, LendingServiceError> {
        let resolved = features.resolve(self.model.feature_defaults());
        let credit_score = self.model.predict_credit_score(&resolved);
        let apr = self.model.calculate_apr(credit_score);
        let risk_level = self.model.assess_risk_level(credit_score);

        let now = Utc::now();
        let mut profile = self
            .profiles
            .fetch(address)?
            .unwrap_or_else(|| UserProfile::with_defaults(address.clone(), now));
        profile.credit_score = credit_score;
        profile.income = resolved.income;
        profile.employment_years = resolved.employment_years;
        profile.debt_to_income = resolved.debt_to_income;
        profile.updated_at = now;
        self.profiles.upsert(profile)?;

        Ok(ScoreOutcome {
            address: address.clone(),
            credit_score,
            apr,
            risk_level,
            features_used: resolved,
            timestamp: now,
        })
    }

    /// Decide a loan application against the stored profile and append it to
    /// the application log.
    pub fn apply(
        &self,
        address: &UserAddress,
        requested_amount: f64,
    ) -> Result<ApplicationOutcome, LendingServiceError> {
        let profile = self
            .profiles
            .fetch(address)?
            .ok_or(LendingServiceError::ProfileNotFound)?;

        let apr = self.model.calculate_apr(profile.credit_score);
        let risk_level = self.model.assess_risk_level(profile.credit_score);

        let max_loan_amount = profile.income * MAX_LOAN_INCOME_SHARE;
        let approved = profile.credit_score >= APPROVAL_SCORE_FLOOR
            && requested_amount <= max_loan_amount
            && profile.debt_to_income <= APPROVAL_DTI_CEILING;
        let reason = if approved {
            "Approved"
        } else {
            "Credit score too low or amount too high"
        };

        let application_id = self.applications.next_id();
        self.applications.append(CreditApplication {
            id: application_id,
            address: address.clone(),
            requested_amount,
            credit_score: profile.credit_score,
            apr,
            risk_level,
            approved,
            created_at: Utc::now(),
        })?;

        info!(
            address = %address.as_str(),
            application_id,
            approved,
            "recorded loan application"
        );

        Ok(ApplicationOutcome {
            application_id,
            address: address.clone(),
            requested_amount,
            credit_score: profile.credit_score,
            apr,
            risk_level,
            approved,
            max_loan_amount,
            reason,
        })
    }

    /// Build a repayment schedule at the borrower's current APR and append
    /// one pending ledger entry per installment.
    pub fn schedule(
        &self,
        address: &UserAddress,
        loan_amount: f64,
        term_months: u32,
        start_date: NaiveDate,
    ) -> Result<ScheduleOutcome, LendingServiceError> {
        let profile = self
            .profiles
            .fetch(address)?
            .ok_or(LendingServiceError::ProfileNotFound)?;

        let apr = self.model.calculate_apr(profile.credit_score);
        let schedule = build_schedule(loan_amount, apr, term_months, start_date)?;

        let now = Utc::now();
        for installment in &schedule.installments {
            self.ledger.append(RepaymentRecord {
                id: self.ledger.next_id(),
                address: address.clone(),
                amount: installment.payment_amount,
                due_date: installment.due_date,
                paid_date: None,
                status: RepaymentStatus::Pending,
                created_at: now,
            })?;
        }

        info!(
            address = %address.as_str(),
            term_months,
            monthly_payment = schedule.monthly_payment,
            "issued repayment schedule"
        );

        Ok(ScheduleOutcome {
            address: address.clone(),
            loan_amount,
            apr,
            term_months,
            monthly_payment: schedule.monthly_payment,
            total_payment: schedule.total_payment,
            total_interest: schedule.total_interest,
            schedule: schedule.installments,
        })
    }

    /// Summarize the borrower's ledger as of `today`.
    pub fn repayment_status(
        &self,
        address: &UserAddress,
        today: NaiveDate,
    ) -> Result<RepaymentOverview, LendingServiceError> {
        let records = self.ledger.for_user(address)?;

        let repayments: Vec<RepaymentView> = records
            .into_iter()
            .map(|record| RepaymentView {
                is_overdue: record.is_overdue(today),
                id: record.id,
                amount: record.amount,
                due_date: record.due_date,
                paid_date: record.paid_date,
                status: record.status,
                created_at: record.created_at,
            })
            .collect();

        let total_pending = round_cents(
            repayments
                .iter()
                .filter(|view| view.status == RepaymentStatus::Pending)
                .map(|view| view.amount)
                .sum(),
        );
        let overdue_count = repayments.iter().filter(|view| view.is_overdue).count();

        Ok(RepaymentOverview {
            address: address.clone(),
            repayments,
            total_pending,
            overdue_count,
        })
    }

    /// Run the multi-factor risk rubric; pure pass-through to the analyzer.
    pub fn risk(&self, input: RiskFactorInput) -> RiskAssessment {
        self.analyzer.analyze(input)
    }
}

/// Error raised by the lending service.
#[derive(Debug, thiserror::Error)]
pub enum LendingServiceError {
    #[error("user profile not found")]
    ProfileNotFound,
    #[error(transparent)]
    Invalid(#[from] InvalidInputError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl LendingServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LendingServiceError::ProfileNotFound => StatusCode::NOT_FOUND,
            LendingServiceError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            LendingServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            LendingServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            LendingServiceError::Repository(RepositoryError::Unavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
