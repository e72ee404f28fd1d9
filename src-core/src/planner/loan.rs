//! Fixed-installment loan amortization (EMI).

use serde::{Deserialize, Serialize};

use crate::goals::goals_model::sanitize_amount;
use crate::planner::annuity::monthly_rate;

/// Result of amortizing a loan into equal monthly installments.
/// All amounts are whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationResult {
    pub monthly_installment: i64,
    pub total_payment: i64,
    /// `max(0, total_payment - principal)`, never negative.
    pub total_interest: i64,
}

impl AmortizationResult {
    pub fn zero() -> Self {
        AmortizationResult {
            monthly_installment: 0,
            total_payment: 0,
            total_interest: 0,
        }
    }
}

/// Standard amortization: `installment = P * r * (1+r)^n / ((1+r)^n - 1)`,
/// degenerating to straight division when the rate is zero.
///
/// A non-positive principal or term returns the all-zero result. The total
/// payment derives from the rounded installment so the three displayed
/// figures reconcile exactly (`total = installment * n`).
pub fn loan_amortization(principal: f64, annual_rate_pct: f64, term_years: i64) -> AmortizationResult {
    let principal = sanitize_amount(principal);
    let months = term_years.max(0) * 12;
    if principal <= 0.0 || months <= 0 {
        return AmortizationResult::zero();
    }

    let rate = monthly_rate(annual_rate_pct);
    let installment = if rate <= 0.0 {
        principal / months as f64
    } else {
        let factor = (1.0 + rate).powi(months as i32);
        principal * rate * factor / (factor - 1.0)
    };

    let monthly_installment = installment.round() as i64;
    let total_payment = monthly_installment * months;
    let total_interest = (total_payment - principal.round() as i64).max(0);

    AmortizationResult {
        monthly_installment,
        total_payment,
        total_interest,
    }
}
