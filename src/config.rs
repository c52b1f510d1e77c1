//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export DATABASE_URL="sqlite://urls.db"
//! export BASE_URL="https://s.example.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://urls.db`)
//! - `BASE_URL` - Public prefix for short links (default: `http://localhost:5000`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CODE_LENGTH` - Length of generated codes (default: 8, range: 4-32)
//! - `CODE_MAX_ATTEMPTS` - Insert attempts per random allocation (default: 5, range: 1-100)
//! - `APP_ENV` - `development` or `production` (default: `development`)
//! - `CORS_ORIGIN` - Allowed browser origin; `*` allows any. When unset, any origin
//!   is allowed in development and none in production
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::AllocatorPolicy;
use crate::infrastructure::persistence::PoolSettings;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Prefix that short codes are appended to when building shareable links.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub app_env: String,
    pub code_length: usize,
    pub code_max_attempts: u32,
    pub cors_origin: Option<String>,
    pub db_max_connections: u32,
    /// Timeout for acquiring a pooled connection, in seconds.
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://urls.db".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:5000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let cors_origin = env::var("CORS_ORIGIN").ok().filter(|v| !v.is_empty());

        Ok(Self {
            database_url,
            base_url,
            listen_addr,
            log_level,
            log_format,
            app_env,
            code_length: parse_var("CODE_LENGTH", 8)?,
            code_max_attempts: parse_var("CODE_MAX_ATTEMPTS", 5)?,
            cors_origin,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 5)?,
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", 30)?,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        let base = url::Url::parse(&self.base_url)
            .with_context(|| format!("BASE_URL is not a valid URL: '{}'", self.base_url))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            anyhow::bail!("BASE_URL must use http or https, got '{}'", self.base_url);
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.app_env != "development" && self.app_env != "production" {
            anyhow::bail!(
                "APP_ENV must be 'development' or 'production', got '{}'",
                self.app_env
            );
        }

        if !(4..=32).contains(&self.code_length) {
            anyhow::bail!(
                "CODE_LENGTH must be between 4 and 32, got {}",
                self.code_length
            );
        }

        if !(1..=100).contains(&self.code_max_attempts) {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        if let Some(ref origin) = self.cors_origin
            && origin != "*"
            && HeaderValue::from_str(origin).is_err()
        {
            anyhow::bail!("CORS_ORIGIN is not a valid header value: '{}'", origin);
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// Origin handed to the CORS layer: `CORS_ORIGIN` if set, otherwise any
    /// origin in development and none in production.
    pub fn effective_cors_origin(&self) -> Option<&str> {
        match self.cors_origin.as_deref() {
            Some(origin) => Some(origin),
            None if self.is_production() => None,
            None => Some("*"),
        }
    }

    pub fn allocator_policy(&self) -> AllocatorPolicy {
        AllocatorPolicy {
            code_length: self.code_length,
            max_attempts: self.code_max_attempts,
        }
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            connect_timeout: Duration::from_secs(self.db_connect_timeout),
        }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {}", self.app_env);
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!(
            "  Code length: {} ({} attempts)",
            self.code_length,
            self.code_max_attempts
        );
        tracing::info!(
            "  CORS origin: {}",
            self.effective_cors_origin().unwrap_or("same-origin only")
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads a numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite://urls.db".to_string(),
            base_url: "http://localhost:5000".to_string(),
            listen_addr: "0.0.0.0:5000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            app_env: "production".to_string(),
            code_length: 8,
            code_max_attempts: 5,
            cors_origin: None,
            db_max_connections: 5,
            db_connect_timeout: 30,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());
        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
        config.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
        config.base_url = "https://s.example.com".to_string();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "5000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "127.0.0.1:5000".to_string();

        config.code_length = 2;
        assert!(config.validate().is_err());
        config.code_length = 8;

        config.code_max_attempts = 0;
        assert!(config.validate().is_err());
        config.code_max_attempts = 5;

        config.cors_origin = Some("*".to_string());
        assert!(config.validate().is_ok());
        config.cors_origin = Some("https://app.example.com".to_string());
        assert!(config.validate().is_ok());
        config.cors_origin = Some("bad\norigin".to_string());
        assert!(config.validate().is_err());
        config.cors_origin = None;

        config.app_env = "staging".to_string();
        assert!(config.validate().is_err());
        config.app_env = "development".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_settings() {
        let config = valid_config();

        let policy = config.allocator_policy();
        assert_eq!(policy.code_length, 8);
        assert_eq!(policy.max_attempts, 5);

        let pool = config.pool_settings();
        assert_eq!(pool.max_connections, 5);
        assert_eq!(pool.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_cors_origin_defaults_by_environment() {
        let mut config = valid_config();
        assert_eq!(config.effective_cors_origin(), None);

        config.app_env = "development".to_string();
        assert_eq!(config.effective_cors_origin(), Some("*"));

        config.cors_origin = Some("https://app.example.com".to_string());
        assert_eq!(
            config.effective_cors_origin(),
            Some("https://app.example.com")
        );

        config.app_env = "production".to_string();
        assert_eq!(
            config.effective_cors_origin(),
            Some("https://app.example.com")
        );
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("BASE_URL");
            env::remove_var("CODE_LENGTH");
            env::remove_var("CORS_ORIGIN");
            env::remove_var("APP_ENV");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.app_env, "development");
        assert_eq!(config.database_url, "sqlite://urls.db");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.code_length, 8);
        assert!(config.cors_origin.is_none());
    }

    #[test]
    #[serial]
    fn test_numeric_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("CODE_LENGTH", "10");
            env::set_var("CODE_MAX_ATTEMPTS", "7");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.code_length, 10);
        assert_eq!(config.code_max_attempts, 7);

        unsafe {
            env::set_var("CODE_LENGTH", "ten");
        }
        assert!(Config::from_env().is_err());

        // Cleanup
        unsafe {
            env::remove_var("CODE_LENGTH");
            env::remove_var("CODE_MAX_ATTEMPTS");
        }
    }

    #[test]
    #[serial]
    fn test_empty_cors_origin_is_ignored() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("CORS_ORIGIN", "");
        }

        let config = Config::from_env().unwrap();
        assert!(config.cors_origin.is_none());

        unsafe {
            env::remove_var("CORS_ORIGIN");
        }
    }
}
