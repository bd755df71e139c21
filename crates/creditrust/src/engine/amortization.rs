use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Rejected amortization inputs; the one place the engine fails fast rather
/// than absorbing bad data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("principal must be a positive amount (got {0})")]
    NonPositivePrincipal(f64),
    #[error("term must be at least one month")]
    ZeroTerm,
    #[error("apr must be non-negative (got {0})")]
    NegativeApr(f64),
}

/// Single row of a repayment schedule. Currency fields are rounded to cents;
/// the displayed remaining balance is clamped at zero to absorb rounding
/// drift in the final month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installment {
    pub month: u32,
    pub due_date: NaiveDate,
    pub payment_amount: f64,
    pub principal: f64,
    pub interest: f64,
    pub remaining_balance: f64,
}

/// Complete amortization result: the fixed payment, derived totals, and the
/// month-by-month installment rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub installments: Vec<Installment>,
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Expand a fixed-rate loan into its repayment schedule.
///
/// Uses the standard annuity formula, with an explicit branch for zero-rate
/// loans where the formula would divide by zero: those pay the principal in
/// equal installments. Due dates advance in fixed 30-day steps from
/// `start_date` rather than tracking calendar months; the approximation is
/// deliberate and matches the stored ledger. Interest accrues on the
/// unrounded running balance so rounding error does not compound across
/// months.
pub fn build_schedule(
    principal: f64,
    apr: f64,
    term_months: u32,
    start_date: NaiveDate,
) -> Result<AmortizationSchedule, InvalidInputError> {
    if !(principal > 0.0) || !principal.is_finite() {
        return Err(InvalidInputError::NonPositivePrincipal(principal));
    }
    if term_months == 0 {
        return Err(InvalidInputError::ZeroTerm);
    }
    if !(apr >= 0.0) || !apr.is_finite() {
        return Err(InvalidInputError::NegativeApr(apr));
    }

    let monthly_rate = apr / 100.0 / 12.0;
    let monthly_payment = if monthly_rate == 0.0 {
        principal / term_months as f64
    } else {
        let growth = (1.0 + monthly_rate).powi(term_months as i32);
        principal * monthly_rate * growth / (growth - 1.0)
    };

    let mut installments = Vec::with_capacity(term_months as usize);
    let mut remaining_balance = principal;

    for month in 1..=term_months {
        let interest = remaining_balance * monthly_rate;
        let principal_payment = monthly_payment - interest;
        remaining_balance -= principal_payment;

        let due_date = start_date + Duration::days(30 * i64::from(month));
        installments.push(Installment {
            month,
            due_date,
            payment_amount: round_cents(monthly_payment),
            principal: round_cents(principal_payment),
            interest: round_cents(interest),
            remaining_balance: round_cents(remaining_balance.max(0.0)),
        });
    }

    let total_payment = monthly_payment * term_months as f64;
    Ok(AmortizationSchedule {
        monthly_payment: round_cents(monthly_payment),
        total_payment: round_cents(total_payment),
        total_interest: round_cents(total_payment - principal),
        installments,
    })
}
