use super::domain::{LoggedAction, UserId};

/// Storage abstraction for logged actions; persistence lives with the caller.
pub trait ActionRepository: Send + Sync {
    fn insert(&self, action: LoggedAction) -> Result<LoggedAction, RepositoryError>;
    fn for_user(&self, user_id: &UserId) -> Result<Vec<LoggedAction>, RepositoryError>;
    fn all(&self) -> Result<Vec<LoggedAction>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
