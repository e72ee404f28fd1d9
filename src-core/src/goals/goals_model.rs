use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coerce a raw amount into something the arithmetic can trust.
/// NaN, infinities and negative values all become 0.
pub fn sanitize_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Clamp a saved amount into `[0, target]`. When the target is 0 the goal
/// has no upper bound yet, so only the lower bound applies.
pub fn clamp_saved(target: f64, saved: f64) -> f64 {
    let saved = sanitize_amount(saved);
    if target > 0.0 {
        saved.min(target)
    } else {
        saved
    }
}

/// A savings goal. This is the one canonical shape: every ingress path goes
/// through [`NewGoal::normalized`] or [`Goal::apply`], so internal code never
/// re-guesses field names or re-checks ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    pub saved_amount: f64,
    pub deadline: Option<DateTime<Utc>>,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Apply a patch, re-clamping and re-deriving completion.
    pub fn apply(&mut self, patch: GoalUpdate) {
        if let Some(title) = patch.title {
            self.title = title.trim().to_string();
        }
        if let Some(target) = patch.target_amount {
            self.target_amount = sanitize_amount(target);
        }
        if let Some(saved) = patch.saved_amount {
            self.saved_amount = sanitize_amount(saved);
        }
        if let Some(deadline) = patch.deadline {
            self.deadline = deadline;
        }
        self.saved_amount = clamp_saved(self.target_amount, self.saved_amount);
        self.refresh_completion();
    }

    /// Completion is derived, never stored independently of the amounts.
    pub fn refresh_completion(&mut self) {
        self.is_completed = self.target_amount > 0.0 && self.saved_amount >= self.target_amount;
    }

    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.saved_amount).max(0.0)
    }
}

/// Payload for creating a goal. Legacy clients spelled the amount fields
/// several ways (`target`, `target_amount`); the aliases keep that
/// coercion at this single boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    #[serde(alias = "target", alias = "target_amount")]
    pub target_amount: f64,
    #[serde(default, alias = "saved", alias = "saved_amount")]
    pub saved_amount: f64,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

impl NewGoal {
    /// Normalize into a canonical [`Goal`], assigning an id and timestamps.
    pub fn normalized(self) -> Goal {
        let target_amount = sanitize_amount(self.target_amount);
        let saved_amount = clamp_saved(target_amount, self.saved_amount);
        let mut goal = Goal {
            id: Uuid::new_v4().to_string(),
            title: self.title.trim().to_string(),
            target_amount,
            saved_amount,
            deadline: self.deadline,
            is_completed: false,
            created_at: Utc::now(),
        };
        goal.refresh_completion();
        goal
    }
}

/// Partial update for a goal. `deadline` uses a double `Option` so a patch
/// can distinguish "leave as is" from "clear the deadline".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, alias = "target", alias = "target_amount")]
    pub target_amount: Option<f64>,
    #[serde(default, alias = "saved", alias = "saved_amount")]
    pub saved_amount: Option<f64>,
    #[serde(default, with = "double_option")]
    pub deadline: Option<Option<DateTime<Utc>>>,
}

mod double_option {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<Option<DateTime<Utc>>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        value.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Option<DateTime<Utc>>>, D::Error> {
        Option::<DateTime<Utc>>::deserialize(deserializer).map(Some)
    }
}

/// Progress of a single goal at read time, derived and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgressSnapshot {
    pub goal_id: String,
    pub goal_title: String,
    pub target_amount: f64,
    pub saved_amount: f64,
    /// `max(0, target - saved)`
    pub remaining: f64,
    /// Rounded percent, clamped to `[0, 100]`; 0 when the target is 0.
    pub progress_pct: u32,
}

impl GoalProgressSnapshot {
    pub fn of(goal: &Goal) -> Self {
        GoalProgressSnapshot {
            goal_id: goal.id.clone(),
            goal_title: goal.title.clone(),
            target_amount: goal.target_amount,
            saved_amount: goal.saved_amount,
            remaining: goal.remaining(),
            progress_pct: crate::goals::summary::per_goal_progress(goal),
        }
    }
}
