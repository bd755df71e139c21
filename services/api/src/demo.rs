use crate::infra::{InMemoryApplicationLog, InMemoryProfileRepository, InMemoryRepaymentLedger};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::sync::Arc;

use creditrust::engine::features::FeatureInput;
use creditrust::engine::risk::{RiskAnalyzer, RiskFactorInput};
use creditrust::engine::scoring::ScoringModel;
use creditrust::error::AppError;
use creditrust::lending::{LendingService, UserAddress};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Borrower address used for the demo records
    #[arg(long, default_value = "0xdemo-borrower")]
    pub(crate) address: String,
    /// Annual income for the sample applicant
    #[arg(long, default_value_t = 85_000.0)]
    pub(crate) income: f64,
    /// Loan amount for the schedule portion of the demo
    #[arg(long, default_value_t = 8_000.0)]
    pub(crate) loan_amount: f64,
    /// Loan term in months
    #[arg(long, default_value_t = 12)]
    pub(crate) term_months: u32,
    /// Schedule start date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub(crate) start_date: Option<NaiveDate>,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        address,
        income,
        loan_amount,
        term_months,
        start_date,
    } = args;

    let start_date = start_date.unwrap_or_else(|| Local::now().date_naive());
    let address = UserAddress(address);

    let service = Arc::new(LendingService::new(
        Arc::new(InMemoryProfileRepository::default()),
        Arc::new(InMemoryApplicationLog::default()),
        Arc::new(InMemoryRepaymentLedger::default()),
        ScoringModel::standard(),
        RiskAnalyzer::default(),
    ));

    println!("CrediTrust scoring demo");

    let features = FeatureInput {
        income: Some(income),
        employment_years: Some(3.0),
        debt_to_income: Some(0.4),
        payment_history_score: Some(80.0),
        credit_utilization: Some(0.2),
        account_age: Some(4.0),
    };
    let score = service.score(&address, features)?;
    println!(
        "- Scored {}: credit score {} | APR {:.1}% | tier {}",
        address.as_str(),
        score.credit_score,
        score.apr,
        score.risk_level.label()
    );

    let application = service.apply(&address, loan_amount)?;
    println!(
        "- Application {}: {} (cap {:.2})",
        application.application_id, application.reason, application.max_loan_amount
    );

    if application.approved {
        let schedule = service.schedule(&address, loan_amount, term_months, start_date)?;
        println!(
            "- Schedule: {} months at {:.1}% | monthly {:.2} | total interest {:.2}",
            schedule.term_months, schedule.apr, schedule.monthly_payment, schedule.total_interest
        );
        for installment in schedule.schedule.iter().take(3) {
            println!(
                "    month {:>2} due {} | principal {:>8.2} | interest {:>7.2} | balance {:>9.2}",
                installment.month,
                installment.due_date,
                installment.principal,
                installment.interest,
                installment.remaining_balance
            );
        }
        if schedule.schedule.len() > 3 {
            println!("    ... {} more installments", schedule.schedule.len() - 3);
        }
    }

    let assessment = service.risk(RiskFactorInput {
        credit_score: Some(score.credit_score),
        debt_to_income: Some(0.4),
        employment_years: Some(3.0),
        income: Some(income),
        collateral_ratio: Some(1.3),
    });
    println!(
        "- Risk rubric: score {} | rating {} | {}",
        assessment.risk_score,
        assessment.risk_level.label(),
        assessment.recommendation
    );
    for reason in &assessment.risk_factors {
        println!("    - {reason}");
    }

    Ok(())
}
