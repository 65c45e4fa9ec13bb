//! Account service configuration.

use std::env;

use common::{AppError, AppResult, JwtConfig, TelemetryConfig};
use domain::{DEFAULT_JWT_EXPIRATION_HOURS, MAX_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH};

/// Account service configuration.
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    pub jwt: JwtConfig,
    pub telemetry: TelemetryConfig,
}

impl AccountServiceConfig {
    /// Load configuration from the environment, reading `.env` first.
    ///
    /// # Errors
    /// Returns a configuration error if `JWT_SECRET` is missing or shorter
    /// than the minimum length, or if `JWT_EXPIRATION_HOURS` is set but is
    /// not an integer within `1..=MAX_JWT_EXPIRATION_HOURS`.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let secret = env::var("JWT_SECRET")
            .or_else(|_| env::var("ACCOUNT_SERVICE_JWT_SECRET"))
            .map_err(|_| AppError::config("JWT_SECRET must be set"))?;

        let config = Self {
            jwt: JwtConfig {
                secret,
                expiration_hours: expiration_hours_from_env()?,
            },
            telemetry: TelemetryConfig {
                service_name: "account-service".to_string(),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Build configuration from an explicit secret, with default expiry and logging
    pub fn with_secret(secret: impl Into<String>) -> AppResult<Self> {
        let config = Self {
            jwt: JwtConfig {
                secret: secret.into(),
                expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            },
            telemetry: TelemetryConfig {
                service_name: "account-service".to_string(),
                ..TelemetryConfig::default()
            },
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.jwt.secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::config(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.jwt.expiration_hours <= 0 {
            return Err(AppError::config("JWT_EXPIRATION_HOURS must be positive"));
        }

        if self.jwt.expiration_hours > MAX_JWT_EXPIRATION_HOURS {
            return Err(AppError::config(format!(
                "JWT_EXPIRATION_HOURS must not exceed {}",
                MAX_JWT_EXPIRATION_HOURS
            )));
        }

        Ok(())
    }
}

fn expiration_hours_from_env() -> AppResult<i64> {
    match env::var("JWT_EXPIRATION_HOURS") {
        Ok(raw) => raw.trim().parse().map_err(|_| {
            AppError::config(format!(
                "JWT_EXPIRATION_HOURS must be an integer, got '{}'",
                raw
            ))
        }),
        Err(_) => Ok(DEFAULT_JWT_EXPIRATION_HOURS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const SECRET: &str = "env-secret-key-for-testing-only-32chars";

    const VARS: [&str; 4] = [
        "JWT_SECRET",
        "ACCOUNT_SERVICE_JWT_SECRET",
        "JWT_EXPIRATION_HOURS",
        "LOG_LEVEL",
    ];

    /// Run `f` with exactly `vars` set among the variables `from_env` reads
    fn with_env<T>(vars: &[(&str, &str)], f: impl FnOnce() -> T) -> T {
        for name in VARS {
            env::remove_var(name);
        }
        for (name, value) in vars {
            env::set_var(name, value);
        }

        let result = f();

        for name in VARS {
            env::remove_var(name);
        }
        result
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = AccountServiceConfig::with_secret("too-short");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_minimum_secret_accepted() {
        let config = AccountServiceConfig::with_secret("x".repeat(MIN_JWT_SECRET_LENGTH)).unwrap();

        assert_eq!(config.jwt.expiration_hours, DEFAULT_JWT_EXPIRATION_HOURS);
        assert_eq!(config.telemetry.service_name, "account-service");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AccountServiceConfig::with_secret("s".repeat(40)).unwrap();
        assert!(!format!("{:?}", config).contains(&"s".repeat(40)));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_secret_and_defaults() {
        let config = with_env(&[("JWT_SECRET", SECRET)], AccountServiceConfig::from_env).unwrap();

        assert_eq!(config.jwt.secret, SECRET);
        assert_eq!(config.jwt.expiration_hours, DEFAULT_JWT_EXPIRATION_HOURS);
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_to_service_secret() {
        let config = with_env(
            &[("ACCOUNT_SERVICE_JWT_SECRET", SECRET), ("LOG_LEVEL", "debug")],
            AccountServiceConfig::from_env,
        )
        .unwrap();

        assert_eq!(config.jwt.secret, SECRET);
        assert_eq!(config.telemetry.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_from_env_prefers_jwt_secret() {
        let other = "x".repeat(MIN_JWT_SECRET_LENGTH);
        let config = with_env(
            &[("JWT_SECRET", SECRET), ("ACCOUNT_SERVICE_JWT_SECRET", other.as_str())],
            AccountServiceConfig::from_env,
        )
        .unwrap();

        assert_eq!(config.jwt.secret, SECRET);
    }

    #[test]
    #[serial]
    fn test_from_env_missing_secret() {
        let result = with_env(&[], AccountServiceConfig::from_env);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_expiration_hours() {
        let config = with_env(
            &[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_HOURS", " 2 ")],
            AccountServiceConfig::from_env,
        )
        .unwrap();

        assert_eq!(config.jwt.expiration_hours, 2);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unparsable_expiration() {
        let result = with_env(
            &[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_HOURS", "a day")],
            AccountServiceConfig::from_env,
        );
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_out_of_range_expiration() {
        let max = MAX_JWT_EXPIRATION_HOURS.to_string();
        let over = (MAX_JWT_EXPIRATION_HOURS + 1).to_string();

        for hours in ["0", "-3", over.as_str(), "1000000000000"] {
            let result = with_env(
                &[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_HOURS", hours)],
                AccountServiceConfig::from_env,
            );
            assert!(matches!(result, Err(AppError::Config(_))), "accepted {}", hours);
        }

        let config = with_env(
            &[("JWT_SECRET", SECRET), ("JWT_EXPIRATION_HOURS", max.as_str())],
            AccountServiceConfig::from_env,
        )
        .unwrap();
        assert_eq!(config.jwt.expiration_hours, MAX_JWT_EXPIRATION_HOURS);
    }
}
