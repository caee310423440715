use std::env;
use std::fmt;

use crate::auth::Credentials;

/// Distinguishes runtime behavior for different stages of the binary.
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

    /// Log filter used when neither `RUST_LOG` nor `APP_LOG_LEVEL` is set.
    pub const fn default_log_level(self) -> &'static str {
        match self {
            Self::Development => "warn",
            Self::Test => "off",
            Self::Production => "error",
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub auth: Credentials,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let defaults = Credentials::default();
        let auth = Credentials {
            username: non_empty_var("AUTH_USERNAME")?.unwrap_or(defaults.username),
            password: non_empty_var("AUTH_PASSWORD")?.unwrap_or(defaults.password),
            role: non_empty_var("AUTH_ROLE")?.unwrap_or(defaults.role),
        };

        // Demo output goes to stdout; keep the log stream quiet unless asked.
        let log_level = env::var("APP_LOG_LEVEL")
            .unwrap_or_else(|_| environment.default_log_level().to_string());

        Ok(Self {
            environment,
            auth,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn non_empty_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue { key }),
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode { key }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyValue { key: &'static str },
    NotUnicode { key: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyValue { key } => write!(f, "{key} is set but empty"),
            ConfigError::NotUnicode { key } => write!(f, "{key} must be valid unicode"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("AUTH_USERNAME");
        env::remove_var("AUTH_PASSWORD");
        env::remove_var("AUTH_ROLE");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.auth, Credentials::default());
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn credential_overrides_replace_defaults() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("AUTH_USERNAME", "operator");
        env::set_var("AUTH_ROLE", "Auditor");
        env::set_var("APP_ENV", "prod");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.auth.username, "operator");
        assert_eq!(config.auth.password, "password123");
        assert_eq!(config.auth.role, "Auditor");
        assert_eq!(config.telemetry.log_level, "error");
        reset_env();
    }

    #[test]
    fn environment_selects_default_log_level() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.telemetry.log_level, "off");

        env::set_var("APP_LOG_LEVEL", "debug");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.telemetry.log_level, "debug");
        reset_env();
    }

    #[test]
    fn rejects_blank_credential_override() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("AUTH_PASSWORD", "   ");
        let err = AppConfig::load().expect_err("blank password rejected");
        assert!(matches!(
            err,
            ConfigError::EmptyValue {
                key: "AUTH_PASSWORD"
            }
        ));
        reset_env();
    }
}
