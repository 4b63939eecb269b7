use habit_impact::tracking::{ActionRepository, GoalMetric, LoggedAction, RepositoryError, UserId};
use std::sync::{Arc, Mutex};

#[derive(Default, Clone)]
pub(crate) struct InMemoryActionRepository {
    actions: Arc<Mutex<Vec<LoggedAction>>>,
}

impl ActionRepository for InMemoryActionRepository {
    fn insert(&self, action: LoggedAction) -> Result<LoggedAction, RepositoryError> {
        let mut actions = self.actions.lock().expect("repository mutex poisoned");
        if actions.iter().any(|existing| existing.id == action.id) {
            return Err(RepositoryError::Conflict);
        }
        actions.push(action.clone());
        Ok(action)
    }

    fn for_user(&self, user_id: &UserId) -> Result<Vec<LoggedAction>, RepositoryError> {
        let actions = self.actions.lock().expect("repository mutex poisoned");
        Ok(actions
            .iter()
            .filter(|action| &action.user_id == user_id)
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<LoggedAction>, RepositoryError> {
        Ok(self
            .actions
            .lock()
            .expect("repository mutex poisoned")
            .clone())
    }
}

pub(crate) fn parse_goal_metric(raw: &str) -> Result<GoalMetric, String> {
    match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "co2" | "co2_saved_kg" => Ok(GoalMetric::Co2SavedKg),
        "water" | "water_saved_liters" => Ok(GoalMetric::WaterSavedLiters),
        "trees" | "trees_preserved" => Ok(GoalMetric::TreesPreserved),
        "actions" | "action_count" => Ok(GoalMetric::ActionCount),
        "points" => Ok(GoalMetric::Points),
        other => Err(format!(
            "unknown goal metric '{other}' (expected co2, water, trees, actions or points)"
        )),
    }
}
