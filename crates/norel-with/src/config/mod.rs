use crate::billing::ScheduleTerms;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the dashboard.
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
    pub telemetry: TelemetryConfig,
    pub schedule: ScheduleTerms,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup; `load` passes
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment =
            AppEnvironment::from_str(&lookup("APP_ENV").unwrap_or_else(|| "development".to_string()));
        let log_level = lookup("APP_LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let format = match lookup("APP_LOG_FORMAT") {
            Some(raw) => LogFormat::parse(&raw)?,
            None if environment == AppEnvironment::Production => LogFormat::Json,
            None => LogFormat::Compact,
        };

        let defaults = ScheduleTerms::default();
        let schedule = ScheduleTerms {
            prepayment_count: read_u32(&lookup, "NOREL_PREPAYMENT_COUNT", defaults.prepayment_count)?,
            total_installments: read_u32(
                &lookup,
                "NOREL_TOTAL_INSTALLMENTS",
                defaults.total_installments,
            )?,
            withdrawal_offset_months: read_u32(
                &lookup,
                "NOREL_WITHDRAWAL_OFFSET_MONTHS",
                defaults.withdrawal_offset_months,
            )?,
            withdrawal_day: read_u32(&lookup, "NOREL_WITHDRAWAL_DAY", defaults.withdrawal_day)?,
        };

        if !(1..=28).contains(&schedule.withdrawal_day) {
            return Err(ConfigError::InvalidWithdrawalDay(schedule.withdrawal_day));
        }
        if schedule.prepayment_count >= schedule.total_installments {
            return Err(ConfigError::PrepaymentsExceedPlan {
                prepayments: schedule.prepayment_count,
                total: schedule.total_installments,
            });
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level, format },
            schedule,
        })
    }
}

fn read_u32<F>(lookup: &F, variable: &'static str, default: u32) -> Result<u32, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(variable) {
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidNumber { variable, value: raw }),
        None => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

/// Line format for log events; production defaults to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(raw.to_owned())),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { variable: &'static str, value: String },
    InvalidLogFormat(String),
    InvalidWithdrawalDay(u32),
    PrepaymentsExceedPlan { prepayments: u32, total: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { variable, value } => {
                write!(f, "{variable} must be a non-negative integer (found '{value}')")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json' (found '{value}')")
            }
            ConfigError::InvalidWithdrawalDay(day) => {
                write!(f, "NOREL_WITHDRAWAL_DAY must be between 1 and 28 (found {day})")
            }
            ConfigError::PrepaymentsExceedPlan { prepayments, total } => write!(
                f,
                "NOREL_PREPAYMENT_COUNT ({prepayments}) must be smaller than NOREL_TOTAL_INSTALLMENTS ({total})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
