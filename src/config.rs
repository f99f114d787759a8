//! Configuration
//!
//! Everything comes from environment variables, read once at startup
//! into [`CONFIG`]. A missing required variable or an unparsable value
//! aborts the process before the server binds.

use std::env;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_JUDGE_TIMEOUT_SECONDS, DEFAULT_JUDGE_URL,
    DEFAULT_JWT_EXPIRY_HOURS, DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Process-wide configuration, loaded on first touch
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Why loading failed, with the offending variable named
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::Missing(key.to_string()))
}

fn or_default(key: &'static str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Optional variable parsed into its target type. Unset falls back to
/// the default; set-but-garbage is an error, not a silent fallback.
fn parsed<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        Err(_) => Ok(default),
    }
}

/// The whole configuration tree
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub judge: JudgeConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiry_hours: i64,
    pub refresh_token_expiry_days: i64,
}

/// External judge service configuration
#[derive(Debug, Clone)]
pub struct JudgeConfig {
    /// Base URL of the Piston-compatible execution API
    pub url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
}

impl Config {
    /// Read every section from the environment. `.env` is honored when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                host: or_default("SERVER_HOST", DEFAULT_SERVER_HOST),
                port: parsed("SERVER_PORT", DEFAULT_SERVER_PORT)?,
                rust_log: or_default("RUST_LOG", "info"),
            },
            database: DatabaseConfig {
                url: required("DATABASE_URL")?,
                max_connections: parsed(
                    "DATABASE_MAX_CONNECTIONS",
                    DEFAULT_DATABASE_MAX_CONNECTIONS,
                )?,
            },
            redis: RedisConfig {
                url: or_default("REDIS_URL", "redis://localhost:6379"),
            },
            jwt: JwtConfig {
                secret: required("JWT_SECRET")?,
                expiry_hours: parsed("JWT_EXPIRY_HOURS", DEFAULT_JWT_EXPIRY_HOURS)?,
                refresh_token_expiry_days: parsed(
                    "REFRESH_TOKEN_EXPIRY_DAYS",
                    DEFAULT_REFRESH_TOKEN_EXPIRY_DAYS,
                )?,
            },
            judge: JudgeConfig {
                url: or_default("JUDGE_URL", DEFAULT_JUDGE_URL),
                timeout_seconds: parsed("JUDGE_TIMEOUT_SECONDS", DEFAULT_JUDGE_TIMEOUT_SECONDS)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsed_falls_back_when_unset() {
        assert_eq!(
            parsed("CAMPUSCODE_TEST_UNSET_PORT", 8080u16).unwrap(),
            8080
        );
    }

    #[test]
    fn parsed_rejects_garbage() {
        env::set_var("CAMPUSCODE_TEST_BAD_PORT", "not-a-number");
        let got = parsed::<u16>("CAMPUSCODE_TEST_BAD_PORT", 1);
        env::remove_var("CAMPUSCODE_TEST_BAD_PORT");

        assert!(matches!(got, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn required_reports_the_variable_name() {
        let err = required("CAMPUSCODE_TEST_DEFINITELY_UNSET").unwrap_err();
        assert!(err.to_string().contains("CAMPUSCODE_TEST_DEFINITELY_UNSET"));
    }
}
