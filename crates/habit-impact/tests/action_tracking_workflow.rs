//! End-to-end tracking flow through the public service facade: import, log, aggregate, progress.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use habit_impact::impact::ImpactEstimator;
use habit_impact::tracking::{
    ActionCsvImporter, ActionLogService, ActionRepository, Goal, GoalMetric, LoggedAction,
    RepositoryError, UserId,
};

#[derive(Default)]
struct VecRepository {
    actions: Mutex<Vec<LoggedAction>>,
}

impl ActionRepository for VecRepository {
    fn insert(&self, action: LoggedAction) -> Result<LoggedAction, RepositoryError> {
        self.actions
            .lock()
            .expect("repository mutex poisoned")
            .push(action.clone());
        Ok(action)
    }

    fn for_user(&self, user_id: &UserId) -> Result<Vec<LoggedAction>, RepositoryError> {
        Ok(self
            .actions
            .lock()
            .expect("repository mutex poisoned")
            .iter()
            .filter(|action| &action.user_id == user_id)
            .cloned()
            .collect())
    }

    fn all(&self) -> Result<Vec<LoggedAction>, RepositoryError> {
        Ok(self.actions.lock().expect("repository mutex poisoned").clone())
    }
}

const EXPORT: &str = "user_id,action_type,description,quantity,unit,logged_on\n\
ana,biking,Ride to work,10,km,2025-05-01\n\
ana,recycling,Weekly sort,,,2025-05-02\n\
ana,skydiving,Jumped,1,times,2025-05-03\n\
ben,walking,School run,3,km,2025-05-01\n";

#[test]
fn imported_actions_roll_up_into_stats_and_goals() {
    let service = ActionLogService::new(
        Arc::new(VecRepository::default()),
        Arc::new(ImpactEstimator::standard()),
    );

    for submission in ActionCsvImporter::from_reader(EXPORT.as_bytes()).expect("csv parses") {
        service.log(submission).expect("action logs");
    }

    let ana = UserId("ana".to_string());
    let stats = service.user_stats(&ana).expect("stats");
    assert_eq!(stats.total_actions, 3);
    assert_eq!(stats.totals.co2_saved_kg, 4.6);
    assert_eq!(stats.totals.water_saved_liters, 30.0);

    let goal = Goal {
        id: "may-co2".to_string(),
        user_id: ana,
        metric: GoalMetric::Co2SavedKg,
        target: 4.6,
        action_type: None,
        starts_on: NaiveDate::from_ymd_opt(2025, 5, 1).expect("valid date"),
        ends_on: NaiveDate::from_ymd_opt(2025, 5, 31),
    };
    let progress = service.goal_progress(&goal).expect("progress");
    assert!(progress.completed);
    assert_eq!(progress.percent, 100.0);
}

#[test]
fn sample_export_imports_every_row() {
    let data = include_bytes!("../sample_actions.csv");
    let submissions = ActionCsvImporter::from_reader(&data[..]).expect("sample parses");
    assert_eq!(submissions.len(), 13);

    let service = ActionLogService::new(
        Arc::new(VecRepository::default()),
        Arc::new(ImpactEstimator::standard()),
    );
    for submission in submissions {
        service.log(submission).expect("sample rows are valid");
    }

    let cara = service
        .user_stats(&UserId("cara".to_string()))
        .expect("stats");
    assert_eq!(cara.total_actions, 4);
    assert_eq!(cara.actions_by_category.values().sum::<usize>(), 3);
    assert!(cara.totals.co2_saved_kg > 0.0);
}
