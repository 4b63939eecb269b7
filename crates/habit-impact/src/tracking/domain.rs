use crate::impact::{ActionCategory, ImpactResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(pub String);

/// Incoming request to log an action, before validation and estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionSubmission {
    pub user_id: UserId,
    pub action_type: String,
    pub description: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    pub logged_on: NaiveDate,
}

/// Stored action with its impact attached at logging time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedAction {
    pub id: ActionId,
    pub user_id: UserId,
    pub action_type: String,
    pub category: Option<ActionCategory>,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    pub logged_on: NaiveDate,
    pub impact: ImpactResult,
    pub points: u32,
}

/// Running totals for one user, summed from stored impact fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserImpactStats {
    pub user_id: UserId,
    pub total_actions: usize,
    pub total_points: u64,
    pub totals: ImpactResult,
    pub actions_by_category: BTreeMap<ActionCategory, usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalMetric {
    Co2SavedKg,
    WaterSavedLiters,
    TreesPreserved,
    ActionCount,
    Points,
}

impl GoalMetric {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Co2SavedKg => "kg CO2 saved",
            Self::WaterSavedLiters => "L water saved",
            Self::TreesPreserved => "trees preserved",
            Self::ActionCount => "actions logged",
            Self::Points => "points earned",
        }
    }
}

/// Personal target over a date window, optionally limited to one action type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub user_id: UserId,
    pub metric: GoalMetric,
    pub target: f64,
    #[serde(default)]
    pub action_type: Option<String>,
    pub starts_on: NaiveDate,
    #[serde(default)]
    pub ends_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal_id: String,
    pub metric: GoalMetric,
    pub current: f64,
    pub target: f64,
    pub percent: f64,
    pub completed: bool,
}

/// Shared target that every participant works toward independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub metric: GoalMetric,
    pub target: f64,
    #[serde(default)]
    pub action_type: Option<String>,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub participants: Vec<UserId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipantProgress {
    pub user_id: UserId,
    pub current: f64,
    pub percent: f64,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChallengeProgress {
    pub challenge_id: String,
    pub metric: GoalMetric,
    pub target: f64,
    pub participants: Vec<ParticipantProgress>,
    pub completed_count: usize,
}
