//! Application configuration loaded from environment variables.
//!
//! This module provides fail-fast configuration loading with validation.
//! Required variables must be present and valid, or the application will
//! exit with a clear error message. Production mode refuses the insecure
//! development session secret.

use std::env;
use thiserror::Error;

/// Development-only session secret. Production mode refuses to start
/// with this value.
pub const INSECURE_SESSION_SECRET: &str = "development-session-secret-change-in-production";

/// Minimum accepted session secret length, in bytes.
const MIN_SECRET_LENGTH: usize = 32;

/// Application environment mode.
///
/// Controls security enforcement behavior:
/// - `Development`: the insecure default secret is allowed with WARN-level logging.
/// - `Production`: the insecure default secret causes startup to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Production,
}

impl AppEnvironment {
    /// Parse from the `APP_ENV` environment variable value.
    /// Defaults to `Development` if unset or unrecognized.
    #[must_use]
    pub fn from_env_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "development" | "dev" => Self::Development,
            other => {
                tracing::warn!(
                    value = other,
                    "Unrecognized APP_ENV value, defaulting to Development"
                );
                Self::Development
            }
        }
    }

    /// Returns true if this is production mode.
    #[must_use]
    pub fn is_production(&self) -> bool {
        *self == Self::Production
    }
}

impl std::fmt::Display for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Optional bootstrap admin account, seeded at startup when configured.
#[derive(Debug, Clone)]
pub struct BootstrapAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address.
    pub host: String,

    /// Bind port.
    pub port: u16,

    /// Postgres connection URL.
    pub database_url: String,

    /// Maximum pool connections.
    pub database_max_connections: u32,

    /// Log filter directive.
    pub rust_log: String,

    /// Deployment environment.
    pub app_env: AppEnvironment,

    /// Secret for signing session tokens.
    pub session_secret: String,

    /// Admin account to seed at startup, when configured.
    pub bootstrap_admin: Option<BootstrapAdmin>,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// An environment variable has an invalid value.
    #[error("Invalid value for {var}: {message}")]
    InvalidVar {
        var: &'static str,
        message: String,
    },

    /// Insecure configuration rejected in production mode.
    #[error("Insecure configuration in production mode: {0}")]
    InsecureProduction(String),
}

impl Config {
    /// Load configuration from the environment, failing fast on
    /// missing or invalid values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidVar {
                var: "PORT",
                message: e.to_string(),
            })?,
            Err(_) => 8080,
        };

        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let database_max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw.parse::<u32>().map_err(|e| ConfigError::InvalidVar {
                var: "DATABASE_MAX_CONNECTIONS",
                message: e.to_string(),
            })?,
            Err(_) => 10,
        };

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info,unigate=debug".to_string());

        let app_env = AppEnvironment::from_env_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let session_secret =
            env::var("SESSION_SECRET").unwrap_or_else(|_| INSECURE_SESSION_SECRET.to_string());

        let bootstrap_admin = match (
            env::var("BOOTSTRAP_ADMIN_EMAIL"),
            env::var("BOOTSTRAP_ADMIN_PASSWORD"),
        ) {
            (Ok(email), Ok(password)) => Some(BootstrapAdmin {
                name: env::var("BOOTSTRAP_ADMIN_NAME").unwrap_or_else(|_| "Admin".to_string()),
                email,
                password,
            }),
            _ => None,
        };

        let config = Self {
            host,
            port,
            database_url,
            database_max_connections,
            rust_log,
            app_env,
            session_secret,
            bootstrap_admin,
        };

        config.validate_security()?;
        Ok(config)
    }

    /// Reject insecure secrets in production; warn about them elsewhere.
    fn validate_security(&self) -> Result<(), ConfigError> {
        let insecure = self.session_secret == INSECURE_SESSION_SECRET
            || self.session_secret.len() < MIN_SECRET_LENGTH;

        if insecure {
            if self.app_env.is_production() {
                return Err(ConfigError::InsecureProduction(
                    "SESSION_SECRET is unset, default, or shorter than 32 bytes".to_string(),
                ));
            }
            tracing::warn!(
                target: "security",
                "Insecure SESSION_SECRET in use (allowed in {} mode)",
                self.app_env
            );
        }

        Ok(())
    }
}
