use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info};

use super::domain::{
    ActionId, ActionSubmission, Challenge, ChallengeProgress, Goal, GoalProgress, LoggedAction,
    UserId, UserImpactStats,
};
use super::progress::{aggregate_stats, derive_challenge_progress, derive_goal_progress};
use super::repository::{ActionRepository, RepositoryError};
use crate::impact::{calculate_points, effective_quantity, ActionType, ImpactEstimator, Unit};

/// Service that validates, estimates, and stores logged actions.
pub struct ActionLogService<R> {
    repository: Arc<R>,
    estimator: Arc<ImpactEstimator>,
}

static ACTION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_action_id() -> ActionId {
    let id = ACTION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ActionId(format!("act-{id:06}"))
}

impl<R> ActionLogService<R>
where
    R: ActionRepository + 'static,
{
    pub fn new(repository: Arc<R>, estimator: Arc<ImpactEstimator>) -> Self {
        Self {
            repository,
            estimator,
        }
    }

    pub fn estimator(&self) -> &ImpactEstimator {
        &self.estimator
    }

    /// Validate and store a new action. The impact is estimated exactly once, here.
    pub fn log(&self, submission: ActionSubmission) -> Result<LoggedAction, ActionLogError> {
        validate(&submission)?;

        let ActionSubmission {
            user_id,
            action_type,
            description,
            quantity,
            unit,
            logged_on,
        } = submission;

        let known_type = ActionType::parse(&action_type);
        if known_type.is_none() {
            debug!(%action_type, "no impact rates for action type; recording zero impact");
        }

        let unit = Unit::parse(unit.as_deref());
        let quantity = effective_quantity(quantity);
        let impact = self
            .estimator
            .estimate_all(&action_type, Some(quantity), Some(unit.as_str()));
        let points = calculate_points(
            &action_type,
            impact.co2_saved_kg,
            impact.water_saved_liters,
        );

        let action = LoggedAction {
            id: next_action_id(),
            user_id,
            category: known_type.map(ActionType::category),
            action_type,
            description,
            quantity,
            unit: unit.as_str().to_string(),
            logged_on,
            impact,
            points,
        };

        let stored = self.repository.insert(action)?;
        info!(
            action_id = %stored.id.0,
            user_id = %stored.user_id,
            action_type = %stored.action_type,
            co2_saved_kg = stored.impact.co2_saved_kg,
            points = stored.points,
            "action logged"
        );
        Ok(stored)
    }

    pub fn user_stats(&self, user_id: &UserId) -> Result<UserImpactStats, ActionLogError> {
        let actions = self.repository.for_user(user_id)?;
        Ok(aggregate_stats(user_id, &actions))
    }

    pub fn goal_progress(&self, goal: &Goal) -> Result<GoalProgress, ActionLogError> {
        let actions = self.repository.for_user(&goal.user_id)?;
        Ok(derive_goal_progress(goal, &actions))
    }

    pub fn challenge_progress(
        &self,
        challenge: &Challenge,
    ) -> Result<ChallengeProgress, ActionLogError> {
        let actions = self.repository.all()?;
        Ok(derive_challenge_progress(challenge, &actions))
    }
}

fn validate(submission: &ActionSubmission) -> Result<(), ActionValidationError> {
    if submission.user_id.0.trim().is_empty() {
        return Err(ActionValidationError::MissingUser);
    }
    if submission.action_type.trim().is_empty() {
        return Err(ActionValidationError::MissingActionType);
    }
    if submission.description.trim().is_empty() {
        return Err(ActionValidationError::MissingDescription);
    }
    if let Some(quantity) = submission.quantity {
        if !quantity.is_finite() || quantity < 0.0 {
            return Err(ActionValidationError::InvalidQuantity(quantity));
        }
    }
    Ok(())
}

/// Submission rejected before estimation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionValidationError {
    #[error("user id is required")]
    MissingUser,
    #[error("action type is required")]
    MissingActionType,
    #[error("description is required")]
    MissingDescription,
    #[error("quantity must be a non-negative number, got {0}")]
    InvalidQuantity(f64),
}

/// Error raised by the action log service.
#[derive(Debug, thiserror::Error)]
pub enum ActionLogError {
    #[error(transparent)]
    Validation(#[from] ActionValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
