use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::impact::{ImpactEstimator, RateTable, RateTableError};

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub impact: ImpactConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let rate_table_path = match env::var("IMPACT_RATE_TABLE") {
            Ok(raw) if raw.trim().is_empty() => None,
            Ok(raw) => Some(PathBuf::from(raw.trim())),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => return Err(ConfigError::InvalidRateTablePath),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let ansi = environment == AppEnvironment::Development;

        Ok(Self {
            environment,
            impact: ImpactConfig { rate_table_path },
            telemetry: TelemetryConfig { log_level, ansi },
        })
    }
}

/// Where the estimator's rate table comes from.
#[derive(Debug, Clone, Default)]
pub struct ImpactConfig {
    pub rate_table_path: Option<PathBuf>,
}

impl ImpactConfig {
    /// Loads the configured table once; without a path the built-in table is used.
    pub fn rate_table(&self) -> Result<RateTable, RateTableError> {
        match &self.rate_table_path {
            Some(path) => RateTable::from_path(path),
            None => Ok(RateTable::standard()),
        }
    }

    pub fn estimator(&self) -> Result<ImpactEstimator, RateTableError> {
        self.rate_table().map(ImpactEstimator::new)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub ansi: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRateTablePath,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRateTablePath => {
                write!(f, "IMPACT_RATE_TABLE must be valid unicode")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
