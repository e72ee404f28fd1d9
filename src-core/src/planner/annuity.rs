//! Closed-form growth arithmetic for recurring monthly contributions.
//!
//! Two future-value conventions are deliberately kept as distinct named
//! operations: the SIP calculator treats contributions as paid at the start
//! of each period (annuity-due, an extra `(1 + r)` factor), while the
//! simulator treats them as paid at period end (ordinary annuity). Callers
//! differ in which one they expect, so they are not unified here.
//!
//! Every function is total: NaN, negative or otherwise malformed input is
//! coerced to its sanitized equivalent instead of failing, and the
//! divide-by-zero-shaped cases (zero rate, zero periods) take explicit
//! branches. Money results are rounded to whole currency units at the
//! boundary, not mid-calculation.

use crate::goals::goals_model::sanitize_amount;

/// Convert an annual percentage rate to a monthly decimal rate,
/// guarding negatives and NaN down to zero.
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    sanitize_amount(annual_rate_pct) / 100.0 / 12.0
}

/// Future value of a monthly contribution paid at the start of each period
/// (the SIP convention).
///
/// Zero or negative `months` yields 0; zero rate degenerates to the simple
/// sum `round(monthly * months)`, a deliberate policy rather than an error.
pub fn future_value_annuity_due(monthly: f64, months: i64, rate: f64) -> i64 {
    let monthly = sanitize_amount(monthly);
    if months <= 0 {
        return 0;
    }
    let rate = sanitize_amount(rate);
    if rate <= 0.0 {
        return (monthly * months as f64).round() as i64;
    }
    let growth = (1.0 + rate).powi(months as i32) - 1.0;
    (monthly * (growth / rate) * (1.0 + rate)).round() as i64
}

/// Future value of a monthly contribution paid at the end of each period
/// (ordinary annuity, the simulator convention).
pub fn future_value_ordinary_annuity(monthly: f64, months: i64, rate: f64) -> i64 {
    let monthly = sanitize_amount(monthly);
    if months <= 0 {
        return 0;
    }
    let rate = sanitize_amount(rate);
    if rate <= 0.0 {
        return (monthly * months as f64).round() as i64;
    }
    let growth = (1.0 + rate).powi(months as i32) - 1.0;
    (monthly * (growth / rate)).round() as i64
}

/// Monthly contribution needed to reach `target_corpus` in `months` at the
/// given monthly rate, under the annuity-due convention.
///
/// Always rounds up: under-provisioning the contribution is the failure
/// mode to avoid. `months` is floored at 1.
pub fn required_monthly_contribution(target_corpus: f64, months: i64, rate: f64) -> i64 {
    let corpus = sanitize_amount(target_corpus);
    let months = months.max(1);
    let rate = sanitize_amount(rate);
    if rate <= 0.0 {
        return (corpus / months as f64).ceil() as i64;
    }
    let growth = (1.0 + rate).powi(months as i32) - 1.0;
    ((corpus * rate) / (growth * (1.0 + rate))).ceil() as i64
}
