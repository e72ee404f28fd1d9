//! Chart-ready time series for contribution plans.

use serde::{Deserialize, Serialize};

use crate::goals::goals_model::sanitize_amount;
use crate::planner::annuity::{future_value_annuity_due, monthly_rate};

/// Cap on the number of points in any emitted series.
pub const MAX_SERIES_POINTS: i64 = 24;

const TREND_POINTS: i64 = 12;
const TREND_BASE_FLOOR: f64 = 1_000.0;
const TREND_BASE_DEFAULT: f64 = 15_000.0;

/// A single month-indexed point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    /// Display label, `M{month}`.
    pub month: String,
    pub value: i64,
}

/// An ordered, bounded sequence of cumulative values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionSeries {
    pub points: Vec<SeriesPoint>,
    /// True for decorative trend curves that carry no financial claim.
    /// Projections computed from the growth model set this to false.
    pub illustrative: bool,
}

/// Outcome card for the SIP calculator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SipOutcome {
    pub invested: i64,
    pub estimated_gain: i64,
    pub future_value: i64,
    pub series: ProjectionSeries,
}

/// Cumulative SIP growth over `years`, at most [`MAX_SERIES_POINTS`] points.
///
/// Each point is evaluated from the closed form at its elapsed-month mark
/// rather than by incremental compounding, so reading a single point and
/// recomputing the whole series give identical values. The function is
/// pure: identical inputs always yield an identical sequence.
pub fn sip_projection(monthly: f64, years: i64, annual_rate_pct: f64) -> ProjectionSeries {
    let months = (years * 12).max(1);
    let count = months.min(MAX_SERIES_POINTS);
    let step = (months / count).max(1);
    let rate = monthly_rate(annual_rate_pct);

    let points = (1..=count)
        .map(|i| {
            let m = i * step;
            SeriesPoint {
                month: format!("M{m}"),
                value: future_value_annuity_due(monthly, m, rate),
            }
        })
        .collect();

    ProjectionSeries {
        points,
        illustrative: false,
    }
}

/// SIP summary figures plus the growth series.
pub fn sip_outcome(monthly: f64, years: i64, annual_rate_pct: f64) -> SipOutcome {
    let monthly_sane = sanitize_amount(monthly);
    let years = years.max(0);
    let invested = (monthly_sane * years as f64 * 12.0).round() as i64;
    let future_value =
        future_value_annuity_due(monthly, years * 12, monthly_rate(annual_rate_pct));

    SipOutcome {
        invested,
        estimated_gain: (future_value - invested).max(0),
        future_value,
        series: sip_projection(monthly, years, annual_rate_pct),
    }
}

/// Decorative 12-month "invested value" curve for the dashboard header.
///
/// This is a smoothed sinusoidal perturbation around the current total
/// saved, emitted with `illustrative: true`. It is display garnish, not a
/// projection, and must never be presented as one.
pub fn invested_value_trend(total_saved: f64) -> ProjectionSeries {
    let total_saved = sanitize_amount(total_saved);
    let base = if total_saved > 0.0 {
        total_saved.max(TREND_BASE_FLOOR)
    } else {
        TREND_BASE_DEFAULT
    };

    let points = (1..=TREND_POINTS)
        .map(|t| {
            let tf = t as f64;
            let wobble = (tf / 2.0).sin() * 0.08 + (tf / 3.0).cos() * 0.05;
            let value = (base * (0.6 + (tf / 12.0) * 0.6) * (1.0 + wobble)).max(0.0);
            SeriesPoint {
                month: format!("M{t}"),
                value: value.round() as i64,
            }
        })
        .collect();

    ProjectionSeries {
        points,
        illustrative: true,
    }
}
