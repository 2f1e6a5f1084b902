use std::env;

use crate::error::AppError;

/// Environment variable consulted for the database connection string.
pub const DB_URL_VAR: &str = "EGON_DB_URL";

// This is temporary until the settings module is written
const DEFAULT_DB_URL: &str = "sqlite://egon.db?mode=rwc";

/// Process-wide configuration, constructed once in `main` and passed by
/// reference into whichever component needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database connection string
    pub database_url: String,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// `EGON_DB_URL` overrides the built-in placeholder; an empty value is a
    /// configuration error rather than a silent fallback.
    pub fn from_env() -> Result<Self, AppError> {
        match env::var(DB_URL_VAR) {
            Ok(url) => Self::new(url),
            Err(_) => Self::new(DEFAULT_DB_URL),
        }
    }

    /// Build the configuration from an explicit connection string.
    pub fn new(database_url: impl Into<String>) -> Result<Self, AppError> {
        let database_url = database_url.into();
        if database_url.trim().is_empty() {
            return Err(AppError::config(
                "database connection string must not be empty".to_string(),
            ));
        }
        Ok(Self { database_url })
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::{AppConfig, DB_URL_VAR};

    #[test]
    #[serial]
    fn from_env_uses_placeholder_when_unset() {
        env::remove_var(DB_URL_VAR);
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite://egon.db?mode=rwc");
    }

    #[test]
    #[serial]
    fn from_env_prefers_env_override() {
        env::set_var(DB_URL_VAR, "sqlite://other.db?mode=rwc");
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite://other.db?mode=rwc");
        env::remove_var(DB_URL_VAR);
    }

    #[test]
    #[serial]
    fn from_env_rejects_empty_override() {
        env::set_var(DB_URL_VAR, "");
        assert!(AppConfig::from_env().is_err());
        env::remove_var(DB_URL_VAR);
    }

    #[test]
    fn new_rejects_blank_url() {
        assert!(AppConfig::new("   ").is_err());
    }
}
