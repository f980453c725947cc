/**
 * Server Configuration
 *
 * This module loads and validates server configuration from environment
 * variables. Configuration is parsed once at process start into a
 * `ServerConfig` owned by the composition root; nothing else in the
 * crate reads the environment.
 *
 * # Environment Variables
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `SMTP_HOST` - mail relay host (defaults to smtp.gmail.com)
 * - `EMAIL_USER` / `EMAIL_PASS` - relay account credentials (required)
 * - `RECEIVER_EMAIL` - fixed recipient for contact notifications (required)
 * - `SERVER_PORT` - listen port (defaults to 5000)
 * - `APP_ENV` - "development" echoes error detail to clients
 */

use thiserror::Error;

/// Default listen port when `SERVER_PORT` is unset.
pub const DEFAULT_PORT: u16 = 5000;

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Mail relay connection settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub username: String,
    pub password: String,
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Mail relay settings.
    pub smtp: SmtpConfig,
    /// Fixed recipient for contact notifications.
    pub receiver_email: String,
    /// Listen port.
    pub port: u16,
    /// Whether error detail is echoed to clients.
    pub dev_mode: bool,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or the port is
    /// not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require("DATABASE_URL")?;

        let smtp = SmtpConfig {
            host: std::env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string()),
            username: require("EMAIL_USER")?,
            password: require("EMAIL_PASS")?,
        };

        let receiver_email = require("RECEIVER_EMAIL")?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let dev_mode = std::env::var("APP_ENV")
            .map(|v| v == "development")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            smtp,
            receiver_email,
            port,
            dev_mode,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingValue(name))
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}
