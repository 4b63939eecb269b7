use crate::config::ConfigError;
use crate::impact::RateTableError;
use crate::telemetry::TelemetryError;
use crate::tracking::{ActionImportError, ActionLogError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    RateTable(RateTableError),
    Import(ActionImportError),
    ActionLog(ActionLogError),
    Output(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::RateTable(err) => write!(f, "rate table error: {}", err),
            AppError::Import(err) => write!(f, "import error: {}", err),
            AppError::ActionLog(err) => write!(f, "action log error: {}", err),
            AppError::Output(err) => write!(f, "output error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::RateTable(err) => Some(err),
            AppError::Import(err) => Some(err),
            AppError::ActionLog(err) => Some(err),
            AppError::Output(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RateTableError> for AppError {
    fn from(value: RateTableError) -> Self {
        Self::RateTable(value)
    }
}

impl From<ActionImportError> for AppError {
    fn from(value: ActionImportError) -> Self {
        Self::Import(value)
    }
}

impl From<ActionLogError> for AppError {
    fn from(value: ActionLogError) -> Self {
        Self::ActionLog(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Output(value)
    }
}
