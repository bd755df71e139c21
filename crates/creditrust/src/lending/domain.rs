use crate::engine::scoring::RiskTier;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Wallet-style address keying every stored record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserAddress(pub String);

impl UserAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Persisted borrower profile, read before scoring and upserted after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub address: UserAddress,
    pub credit_score: u16,
    pub income: f64,
    pub employment_years: f64,
    pub debt_to_income: f64,
    pub payment_history: Vec<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Profile created on first contact, before any scoring has run.
    pub fn with_defaults(address: UserAddress, now: DateTime<Utc>) -> Self {
        Self {
            address,
            credit_score: 600,
            income: 50_000.0,
            employment_years: 2.0,
            debt_to_income: 0.3,
            payment_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Append-only record of a loan application and its decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditApplication {
    pub id: u64,
    pub address: UserAddress,
    pub requested_amount: f64,
    pub credit_score: u16,
    pub apr: f64,
    pub risk_level: RiskTier,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

/// Settlement state of a single ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepaymentStatus {
    Pending,
    Paid,
}

impl RepaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            RepaymentStatus::Pending => "pending",
            RepaymentStatus::Paid => "paid",
        }
    }
}

/// Append-only repayment ledger entry, one per scheduled installment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepaymentRecord {
    pub id: u64,
    pub address: UserAddress,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub status: RepaymentStatus,
    pub created_at: DateTime<Utc>,
}

impl RepaymentRecord {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == RepaymentStatus::Pending && self.due_date < today
    }
}
