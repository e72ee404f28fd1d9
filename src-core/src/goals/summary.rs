//! Goal aggregation: folds a goal list into summary statistics and
//! chart-ready views. Everything here is pure and total: bad numbers were
//! already coerced at the normalization boundary, and empty input yields
//! all-zero output rather than an error.

use serde::{Deserialize, Serialize};

use crate::goals::goals_model::{sanitize_amount, Goal};

/// Roll-up of an entire goal list, recomputed from scratch on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAggregate {
    pub goal_count: usize,
    pub total_target: f64,
    pub total_saved: f64,
    /// `max(0, total_target - total_saved)`
    pub remaining: f64,
    /// Rounded overall percent, clamped to `[0, 100]`.
    pub progress_pct: u32,
}

impl GoalAggregate {
    pub fn zero() -> Self {
        GoalAggregate {
            goal_count: 0,
            total_target: 0.0,
            total_saved: 0.0,
            remaining: 0.0,
            progress_pct: 0,
        }
    }
}

/// One bar of the "top goals" chart. Long titles are shortened so axis
/// labels stay readable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalChartSlice {
    pub name: String,
    pub saved: f64,
    pub target: f64,
}

/// A goal ranked by progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedGoal {
    pub goal_id: String,
    pub title: String,
    pub progress_pct: u32,
    pub remaining: f64,
}

/// Generic named value for pie/donut charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    pub name: String,
    pub value: f64,
}

/// One segment of the all-goals progress ring. Weight is floored at 3 so
/// near-zero goals still render as a visible sliver.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingSegment {
    pub goal_id: String,
    pub name: String,
    pub weight: u32,
    pub progress_pct: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

const RING_SEGMENT_LIMIT: usize = 8;
const CHART_TITLE_LIMIT: usize = 10;

/// Fold a goal list into totals. Empty input gives the all-zero aggregate.
pub fn summarize(goals: &[Goal]) -> GoalAggregate {
    if goals.is_empty() {
        return GoalAggregate::zero();
    }

    let total_target: f64 = goals.iter().map(|g| sanitize_amount(g.target_amount)).sum();
    let total_saved: f64 = goals.iter().map(|g| sanitize_amount(g.saved_amount)).sum();
    let remaining = (total_target - total_saved).max(0.0);

    let progress_pct = if total_target > 0.0 {
        clamp_pct((total_saved / total_target * 100.0).round())
    } else {
        0
    };

    GoalAggregate {
        goal_count: goals.len(),
        total_target,
        total_saved,
        remaining,
        progress_pct,
    }
}

/// Rounded progress of a single goal, clamped to `[0, 100]`.
/// A goal with no target yet reads as 0% rather than dividing by zero.
pub fn per_goal_progress(goal: &Goal) -> u32 {
    let target = sanitize_amount(goal.target_amount);
    if target <= 0.0 {
        return 0;
    }
    let saved = sanitize_amount(goal.saved_amount);
    clamp_pct((saved / target * 100.0).round())
}

/// Top `n` goals by target amount, descending. The sort is stable: goals
/// with equal targets keep their original list order.
pub fn top_by_target(goals: &[Goal], n: usize) -> Vec<GoalChartSlice> {
    let mut sorted: Vec<&Goal> = goals.iter().collect();
    sorted.sort_by(|a, b| {
        sanitize_amount(b.target_amount).total_cmp(&sanitize_amount(a.target_amount))
    });

    sorted
        .into_iter()
        .take(n)
        .map(|g| GoalChartSlice {
            name: shorten_title(&g.title),
            saved: sanitize_amount(g.saved_amount),
            target: sanitize_amount(g.target_amount),
        })
        .collect()
}

/// All goals ranked by progress. Stable, so ties resolve to original list
/// order and the output is deterministic.
pub fn rank_by_progress(goals: &[Goal], order: Order) -> Vec<RankedGoal> {
    let mut ranked: Vec<RankedGoal> = goals
        .iter()
        .map(|g| RankedGoal {
            goal_id: g.id.clone(),
            title: g.title.clone(),
            progress_pct: per_goal_progress(g),
            remaining: g.remaining(),
        })
        .collect();

    match order {
        Order::Ascending => ranked.sort_by_key(|r| r.progress_pct),
        Order::Descending => {
            ranked.sort_by_key(|r| std::cmp::Reverse(r.progress_pct));
        }
    }
    ranked
}

/// Saved-vs-remaining slices for the overview pie chart.
pub fn saved_vs_remaining(aggregate: &GoalAggregate) -> Vec<ChartSlice> {
    vec![
        ChartSlice {
            name: "Saved".to_string(),
            value: aggregate.total_saved,
        },
        ChartSlice {
            name: "Remaining".to_string(),
            value: aggregate.remaining,
        },
    ]
}

/// Segments for the all-goals ring, capped at the first eight goals.
pub fn progress_ring(goals: &[Goal]) -> Vec<RingSegment> {
    goals
        .iter()
        .take(RING_SEGMENT_LIMIT)
        .map(|g| {
            let pct = per_goal_progress(g);
            RingSegment {
                goal_id: g.id.clone(),
                name: g.title.clone(),
                weight: pct.max(3),
                progress_pct: pct,
            }
        })
        .collect()
}

fn clamp_pct(pct: f64) -> u32 {
    pct.clamp(0.0, 100.0) as u32
}

fn shorten_title(title: &str) -> String {
    if title.chars().count() > CHART_TITLE_LIMIT {
        let mut short: String = title.chars().take(CHART_TITLE_LIMIT).collect();
        short.push('…');
        short
    } else {
        title.to_string()
    }
}
