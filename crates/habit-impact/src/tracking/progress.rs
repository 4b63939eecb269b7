use super::domain::{
    Challenge, ChallengeProgress, Goal, GoalMetric, GoalProgress, LoggedAction,
    ParticipantProgress, UserId, UserImpactStats,
};
use crate::impact::domain::{round_to, CO2_DECIMALS, TREES_DECIMALS, WATER_DECIMALS};
use crate::impact::ImpactResult;
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub(crate) fn aggregate_stats(user_id: &UserId, actions: &[LoggedAction]) -> UserImpactStats {
    let mut total_points: u64 = 0;
    let mut co2 = 0.0;
    let mut water = 0.0;
    let mut trees = 0.0;
    let mut actions_by_category = BTreeMap::new();
    let mut total_actions = 0;

    for action in actions.iter().filter(|action| &action.user_id == user_id) {
        total_actions += 1;
        total_points += u64::from(action.points);
        co2 += action.impact.co2_saved_kg;
        water += action.impact.water_saved_liters;
        trees += action.impact.trees_preserved;
        if let Some(category) = action.category {
            *actions_by_category.entry(category).or_insert(0) += 1;
        }
    }

    UserImpactStats {
        user_id: user_id.clone(),
        total_actions,
        total_points,
        totals: ImpactResult::rounded(co2, water, trees),
        actions_by_category,
    }
}

pub(crate) fn derive_goal_progress(goal: &Goal, actions: &[LoggedAction]) -> GoalProgress {
    let window = Window {
        user_id: &goal.user_id,
        action_type: goal.action_type.as_deref(),
        starts_on: goal.starts_on,
        ends_on: goal.ends_on,
    };
    let current = window.total(goal.metric, actions);
    let (percent, completed) = completion(current, goal.target);

    GoalProgress {
        goal_id: goal.id.clone(),
        metric: goal.metric,
        current,
        target: goal.target,
        percent,
        completed,
    }
}

pub(crate) fn derive_challenge_progress(
    challenge: &Challenge,
    actions: &[LoggedAction],
) -> ChallengeProgress {
    let participants: Vec<ParticipantProgress> = challenge
        .participants
        .iter()
        .map(|user_id| {
            let window = Window {
                user_id,
                action_type: challenge.action_type.as_deref(),
                starts_on: challenge.starts_on,
                ends_on: Some(challenge.ends_on),
            };
            let current = window.total(challenge.metric, actions);
            let (percent, completed) = completion(current, challenge.target);
            ParticipantProgress {
                user_id: user_id.clone(),
                current,
                percent,
                completed,
            }
        })
        .collect();

    let completed_count = participants
        .iter()
        .filter(|participant| participant.completed)
        .count();

    ChallengeProgress {
        challenge_id: challenge.id.clone(),
        metric: challenge.metric,
        target: challenge.target,
        participants,
        completed_count,
    }
}

struct Window<'a> {
    user_id: &'a UserId,
    action_type: Option<&'a str>,
    starts_on: NaiveDate,
    ends_on: Option<NaiveDate>,
}

impl Window<'_> {
    fn contains(&self, action: &LoggedAction) -> bool {
        &action.user_id == self.user_id
            && action.logged_on >= self.starts_on
            && self.ends_on.map_or(true, |ends_on| action.logged_on <= ends_on)
            && self
                .action_type
                .map_or(true, |action_type| action.action_type == action_type)
    }

    fn total(&self, metric: GoalMetric, actions: &[LoggedAction]) -> f64 {
        let sum: f64 = actions
            .iter()
            .filter(|action| self.contains(action))
            .map(|action| metric_value(metric, action))
            .sum();
        round_metric(metric, sum)
    }
}

fn metric_value(metric: GoalMetric, action: &LoggedAction) -> f64 {
    match metric {
        GoalMetric::Co2SavedKg => action.impact.co2_saved_kg,
        GoalMetric::WaterSavedLiters => action.impact.water_saved_liters,
        GoalMetric::TreesPreserved => action.impact.trees_preserved,
        GoalMetric::ActionCount => 1.0,
        GoalMetric::Points => f64::from(action.points),
    }
}

fn round_metric(metric: GoalMetric, value: f64) -> f64 {
    match metric {
        GoalMetric::Co2SavedKg => round_to(value, CO2_DECIMALS),
        GoalMetric::WaterSavedLiters => round_to(value, WATER_DECIMALS),
        GoalMetric::TreesPreserved => round_to(value, TREES_DECIMALS),
        GoalMetric::ActionCount | GoalMetric::Points => value,
    }
}

/// Percent is capped at 100 and kept to one decimal; non-positive targets are already met.
fn completion(current: f64, target: f64) -> (f64, bool) {
    if !target.is_finite() || target <= 0.0 {
        return (100.0, true);
    }
    let percent = round_to((current / target * 100.0).min(100.0), 1);
    (percent, current >= target)
}
