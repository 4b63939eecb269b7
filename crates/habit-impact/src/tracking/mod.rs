//! Action logging, per-user aggregation, and goal/challenge progress.
//!
//! Storage is abstracted behind [`ActionRepository`]; the service estimates each action once at
//! logging time and every later figure is derived from the stored impact fields.

pub mod domain;
mod import;
mod progress;
pub mod repository;
mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ActionId, ActionSubmission, Challenge, ChallengeProgress, Goal, GoalMetric, GoalProgress,
    LoggedAction, ParticipantProgress, UserId, UserImpactStats,
};
pub use import::{ActionCsvImporter, ActionImportError};
pub use repository::{ActionRepository, RepositoryError};
pub use service::{ActionLogError, ActionLogService, ActionValidationError};
