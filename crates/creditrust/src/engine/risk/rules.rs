use super::RiskFactors;

/// Additive underwriting rubric.
///
/// Factors evaluate in a fixed order (credit score, debt-to-income,
/// employment, income, collateral) and the bands within a factor are mutually
/// exclusive, so the reason list is deterministic for a given factor set.
pub(super) fn evaluate(factors: &RiskFactors) -> (u32, Vec<&'static str>) {
    let mut risk_score = 0;
    let mut reasons = Vec::new();

    if factors.credit_score < 600 {
        risk_score += 30;
        reasons.push("Low credit score");
    } else if factors.credit_score < 700 {
        risk_score += 15;
        reasons.push("Moderate credit score");
    }

    if factors.debt_to_income > 0.4 {
        risk_score += 25;
        reasons.push("High debt-to-income ratio");
    } else if factors.debt_to_income > 0.3 {
        risk_score += 10;
        reasons.push("Moderate debt-to-income ratio");
    }

    if factors.employment_years < 1.0 {
        risk_score += 20;
        reasons.push("Short employment history");
    } else if factors.employment_years < 2.0 {
        risk_score += 10;
        reasons.push("Limited employment history");
    }

    if factors.income < 30_000.0 {
        risk_score += 15;
        reasons.push("Low income level");
    }

    if factors.collateral_ratio < 1.2 {
        risk_score += 35;
        reasons.push("Insufficient collateral");
    } else if factors.collateral_ratio < 1.5 {
        risk_score += 15;
        reasons.push("Low collateral ratio");
    }

    (risk_score, reasons)
}
