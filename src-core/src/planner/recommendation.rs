//! Rule-based advisory list derived from goal progress.
//!
//! No scoring and no randomness: the rules fire in a fixed priority order
//! and the list is truncated, so identical goal lists always produce an
//! identical set of recommendations.

use serde::{Deserialize, Serialize};

use crate::goals::goals_model::Goal;
use crate::goals::summary::{per_goal_progress, summarize};

/// Hard cap on the emitted list.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// Aggregate progress below this gets the "set a monthly rule" nudge.
const LOW_OVERALL_PCT: u32 = 30;
/// A goal at or above this is worth a final push.
const NEAR_COMPLETE_PCT: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationTag {
    Beginner,
    Habit,
    Priority,
    AlmostDone,
    Plan,
    Strategy,
    Safety,
}

/// One advisory card. Derived on each read and discarded; it carries no
/// identity beyond its display content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub tag: RecommendationTag,
}

/// Derive at most [`MAX_RECOMMENDATIONS`] suggestions from the goal list.
///
/// With no goals yet, exactly two fixed starter suggestions are returned.
/// Otherwise: boost the lowest-progress goal (first encountered on ties),
/// flag the highest-progress goal when it is nearly done (last encountered
/// on ties), nudge on overall progress, and always close with the
/// high-interest-debt warning.
pub fn recommend(goals: &[Goal]) -> Vec<Recommendation> {
    if goals.is_empty() {
        return vec![
            Recommendation {
                title: "Start with 1 goal".to_string(),
                description: "Add an Emergency Fund goal first. It helps you handle surprises \
                              without debt."
                    .to_string(),
                tag: RecommendationTag::Beginner,
            },
            Recommendation {
                title: "Track monthly savings".to_string(),
                description: "Try saving a fixed amount every month. Use the SIP calculator to \
                              estimate growth."
                    .to_string(),
                tag: RecommendationTag::Habit,
            },
        ];
    }

    let mut list = Vec::new();
    let overall = summarize(goals);

    // min_by_key keeps the first of equal elements, max_by_key the last,
    // matching a stable ascending sort's ends.
    let Some(lowest) = goals.iter().min_by_key(|g| per_goal_progress(g)) else {
        return list;
    };
    let Some(highest) = goals.iter().max_by_key(|g| per_goal_progress(g)) else {
        return list;
    };

    list.push(Recommendation {
        title: format!("Boost \"{}\"", lowest.title),
        description: format!(
            "This is your lowest progress goal. Remaining is {}. Try a small weekly add.",
            lowest.remaining().round() as i64
        ),
        tag: RecommendationTag::Priority,
    });

    let highest_pct = per_goal_progress(highest);
    if highest_pct >= NEAR_COMPLETE_PCT {
        list.push(Recommendation {
            title: format!("Finish \"{}\" soon", highest.title),
            description: format!(
                "You're at {}% — consider one final push to complete it and then start a new goal.",
                highest_pct
            ),
            tag: RecommendationTag::AlmostDone,
        });
    }

    if overall.progress_pct < LOW_OVERALL_PCT {
        list.push(Recommendation {
            title: "Set a monthly savings rule".to_string(),
            description: format!(
                "Overall progress is {}%. A fixed monthly SIP can improve consistency.",
                overall.progress_pct
            ),
            tag: RecommendationTag::Plan,
        });
    } else {
        list.push(Recommendation {
            title: "Diversify goals".to_string(),
            description: "Try balancing short-term and long-term goals (Emergency + Big purchase \
                          + Retirement)."
                .to_string(),
            tag: RecommendationTag::Strategy,
        });
    }

    list.push(Recommendation {
        title: "Avoid high-interest debt".to_string(),
        description: "Use the EMI calculator before taking loans. Keep EMI manageable vs income."
            .to_string(),
        tag: RecommendationTag::Safety,
    });

    list.truncate(MAX_RECOMMENDATIONS);
    list
}
