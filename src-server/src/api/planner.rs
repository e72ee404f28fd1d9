use std::sync::Arc;

use axum::{extract::Query, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::json;

use wealthtrack_core::planner::{
    future_value_ordinary_annuity, loan_amortization, monthly_rate, plan_retirement, sip_outcome,
    AmortizationResult, RetirementPlan, SipOutcome,
};

use crate::{error::ApiResult, main_lib::AppState};

// Query defaults mirror the calculator's initial form values.

#[derive(Deserialize)]
struct SipQuery {
    #[serde(default = "default_monthly")]
    monthly: f64,
    #[serde(default = "default_years")]
    years: i64,
    #[serde(default = "default_sip_rate")]
    annual_rate_pct: f64,
}

fn default_monthly() -> f64 {
    5000.0
}
fn default_years() -> i64 {
    10
}
fn default_sip_rate() -> f64 {
    12.0
}

async fn sip(Query(query): Query<SipQuery>) -> ApiResult<Json<SipOutcome>> {
    Ok(Json(sip_outcome(query.monthly, query.years, query.annual_rate_pct)))
}

#[derive(Deserialize)]
struct SimulateQuery {
    #[serde(default = "default_monthly")]
    monthly: f64,
    #[serde(default = "default_sim_months")]
    months: i64,
    #[serde(default = "default_return_rate")]
    annual_rate_pct: f64,
}

fn default_sim_months() -> i64 {
    12
}
fn default_return_rate() -> f64 {
    10.0
}

/// Period-end contribution convention, distinct from the SIP endpoint.
async fn simulate(Query(query): Query<SimulateQuery>) -> ApiResult<Json<serde_json::Value>> {
    let future_value = future_value_ordinary_annuity(
        query.monthly,
        query.months,
        monthly_rate(query.annual_rate_pct),
    );
    Ok(Json(json!({ "futureValue": future_value })))
}

#[derive(Deserialize)]
struct RetirementQuery {
    #[serde(default = "default_age_now")]
    age_now: i64,
    #[serde(default = "default_retirement_age")]
    retirement_age: i64,
    #[serde(default = "default_monthly_expense")]
    monthly_expense: f64,
    #[serde(default = "default_inflation")]
    annual_inflation_pct: f64,
    #[serde(default = "default_return_rate")]
    expected_return_pct: f64,
}

fn default_age_now() -> i64 {
    22
}
fn default_retirement_age() -> i64 {
    60
}
fn default_monthly_expense() -> f64 {
    40_000.0
}
fn default_inflation() -> f64 {
    6.0
}

async fn retirement(Query(query): Query<RetirementQuery>) -> ApiResult<Json<RetirementPlan>> {
    Ok(Json(plan_retirement(
        query.age_now,
        query.retirement_age,
        query.monthly_expense,
        query.annual_inflation_pct,
        query.expected_return_pct,
    )))
}

#[derive(Deserialize)]
struct EmiQuery {
    #[serde(default = "default_principal")]
    principal: f64,
    #[serde(default = "default_return_rate")]
    annual_rate_pct: f64,
    #[serde(default = "default_term_years")]
    term_years: i64,
}

fn default_principal() -> f64 {
    500_000.0
}
fn default_term_years() -> i64 {
    5
}

async fn emi(Query(query): Query<EmiQuery>) -> ApiResult<Json<AmortizationResult>> {
    Ok(Json(loan_amortization(
        query.principal,
        query.annual_rate_pct,
        query.term_years,
    )))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/planner/sip", get(sip))
        .route("/planner/simulate", get(simulate))
        .route("/planner/retirement", get(retirement))
        .route("/planner/emi", get(emi))
}
