use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::impact::ImpactEstimator;
use crate::tracking::domain::{ActionSubmission, LoggedAction, UserId};
use crate::tracking::repository::{ActionRepository, RepositoryError};
use crate::tracking::ActionLogService;

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    actions: Arc<Mutex<Vec<LoggedAction>>>,
}

impl MemoryRepository {
    pub(super) fn stored(&self) -> Vec<LoggedAction> {
        self.actions.lock().expect("repository mutex poisoned").clone()
    }
}

impl ActionRepository for MemoryRepository {
    fn insert(&self, action: LoggedAction) -> Result<LoggedAction, RepositoryError> {
        let mut guard = self.actions.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == action.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(action.clone());
        Ok(action)
    }

    fn for_user(&self, user_id: &UserId) -> Result<Vec<LoggedAction>, RepositoryError> {
        let guard = self.actions.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .filter(|action| &action.user_id == user_id)
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<LoggedAction>, RepositoryError> {
        Ok(self.stored())
    }
}

pub(super) struct UnavailableRepository;

impl ActionRepository for UnavailableRepository {
    fn insert(&self, _action: LoggedAction) -> Result<LoggedAction, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn for_user(&self, _user_id: &UserId) -> Result<Vec<LoggedAction>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn all(&self) -> Result<Vec<LoggedAction>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).expect("valid date")
}

pub(super) fn user(name: &str) -> UserId {
    UserId(name.to_string())
}

pub(super) fn submission(
    user_id: &str,
    action_type: &str,
    quantity: Option<f64>,
    unit: Option<&str>,
    logged_on: NaiveDate,
) -> ActionSubmission {
    ActionSubmission {
        user_id: user(user_id),
        action_type: action_type.to_string(),
        description: format!("{action_type} session"),
        quantity,
        unit: unit.map(str::to_string),
        logged_on,
    }
}

pub(super) fn build_service() -> (ActionLogService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = ActionLogService::new(
        Arc::new(repository.clone()),
        Arc::new(ImpactEstimator::standard()),
    );
    (service, repository)
}
