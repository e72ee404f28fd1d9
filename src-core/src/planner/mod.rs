pub mod annuity;
pub mod loan;
pub mod projection;
pub mod recommendation;
pub mod retirement;

pub use annuity::{
    future_value_annuity_due, future_value_ordinary_annuity, monthly_rate,
    required_monthly_contribution,
};
pub use loan::{loan_amortization, AmortizationResult};
pub use projection::{
    invested_value_trend, sip_outcome, sip_projection, ProjectionSeries, SeriesPoint, SipOutcome,
    MAX_SERIES_POINTS,
};
pub use recommendation::{recommend, Recommendation, RecommendationTag, MAX_RECOMMENDATIONS};
pub use retirement::{
    plan_retirement, retirement_corpus_needed, CorpusEstimate, RetirementPlan,
    POST_RETIREMENT_YEARS,
};
