use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tooling.
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
    pub report: ReportDefaults,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let min_year = env::var("APP_MIN_YEAR")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidMinYear)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            report: ReportDefaults { min_year },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Defaults applied to report runs when the CLI leaves them unset.
#[derive(Debug, Clone)]
pub struct ReportDefaults {
    pub min_year: u16,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMinYear,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMinYear => {
                write!(f, "APP_MIN_YEAR must be a non-negative year (u16)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
