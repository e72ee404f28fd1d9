//! Retirement corpus sizing.
//!
//! The corpus model is deliberately simple: the monthly expense is inflated
//! to the retirement date, then multiplied flat across a fixed number of
//! post-retirement years. No further inflation and no drawdown return is
//! modeled after retirement. This is a documented simplification of the
//! product, not a bug to be silently fixed.

use serde::{Deserialize, Serialize};

use crate::goals::goals_model::sanitize_amount;
use crate::planner::annuity::{monthly_rate, required_monthly_contribution};

/// Flat number of post-retirement years the corpus must cover.
pub const POST_RETIREMENT_YEARS: i64 = 25;

/// Corpus needed at retirement for a given expense profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusEstimate {
    /// Today's monthly expense inflated to the retirement date, rounded.
    pub monthly_expense_at_retirement: i64,
    /// `expense_at_retirement * 12 * post_retirement_years`
    pub corpus_needed: i64,
}

/// Full retirement plan: corpus plus the reverse-SIP contribution that
/// funds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementPlan {
    pub years_to_retirement: i64,
    pub monthly_expense_at_retirement: i64,
    pub corpus_needed: i64,
    /// Monthly contribution required to reach the corpus, rounded up.
    pub monthly_contribution_required: i64,
}

/// Size the corpus for `post_retirement_years` of inflated expenses.
pub fn retirement_corpus_needed(
    monthly_expense_today: f64,
    years_until_retirement: i64,
    annual_inflation_pct: f64,
    post_retirement_years: i64,
) -> CorpusEstimate {
    let expense_today = sanitize_amount(monthly_expense_today);
    let years = years_until_retirement.max(0);
    let inflation = sanitize_amount(annual_inflation_pct) / 100.0;

    let monthly_expense_at_retirement =
        (expense_today * (1.0 + inflation).powi(years as i32)).round() as i64;
    let corpus_needed = monthly_expense_at_retirement * 12 * post_retirement_years.max(0);

    CorpusEstimate {
        monthly_expense_at_retirement,
        corpus_needed,
    }
}

/// Plan retirement from ages and rates, using [`POST_RETIREMENT_YEARS`].
pub fn plan_retirement(
    age_now: i64,
    retirement_age: i64,
    monthly_expense_today: f64,
    annual_inflation_pct: f64,
    expected_return_pct: f64,
) -> RetirementPlan {
    let years = (retirement_age - age_now).max(0);
    let estimate = retirement_corpus_needed(
        monthly_expense_today,
        years,
        annual_inflation_pct,
        POST_RETIREMENT_YEARS,
    );

    let months = (years * 12).max(1);
    let rate = monthly_rate(expected_return_pct);
    let monthly_contribution_required =
        required_monthly_contribution(estimate.corpus_needed as f64, months, rate);

    RetirementPlan {
        years_to_retirement: years,
        monthly_expense_at_retirement: estimate.monthly_expense_at_retirement,
        corpus_needed: estimate.corpus_needed,
        monthly_contribution_required,
    }
}
