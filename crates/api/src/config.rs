use std::env;

use thiserror::Error;

/// Process configuration.
///
/// Constructed once at startup and passed explicitly into the token
/// service and cookie manager constructors; nothing re-reads the
/// environment per request.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Secret used to sign and verify session tokens.
    pub token_secret: String,
    /// True in production deployments. Controls the cookie `Secure`
    /// attribute and JSON logging.
    pub production: bool,
    /// Postgres connection string for the credential directory.
    pub database_url: String,
    /// Listen address, `host:port`.
    pub bind_addr: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// There is deliberately no fallback value here: starting without a
    /// real secret would sign every session with a known key.
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingSecret,

    #[error("DATABASE_URL must be set")]
    MissingDatabaseUrl,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token_secret = get("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingSecret)?;
        let database_url = get("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?;
        let production = get("APP_ENV").is_some_and(|v| v == "production");
        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());

        Ok(Self {
            token_secret,
            production,
            database_url,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn missing_secret_refuses_to_start() {
        let result = AppConfig::from_lookup(env(&[("DATABASE_URL", "postgres://localhost/mg")]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingSecret);
    }

    #[test]
    fn empty_secret_refuses_to_start() {
        let result = AppConfig::from_lookup(env(&[
            ("JWT_SECRET", ""),
            ("DATABASE_URL", "postgres://localhost/mg"),
        ]));
        assert_eq!(result.unwrap_err(), ConfigError::MissingSecret);
    }

    #[test]
    fn production_flag_and_defaults() {
        let config = AppConfig::from_lookup(env(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/mg"),
            ("APP_ENV", "production"),
        ]))
        .unwrap();

        assert!(config.production);
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn non_production_env_is_not_production() {
        let config = AppConfig::from_lookup(env(&[
            ("JWT_SECRET", "s3cret"),
            ("DATABASE_URL", "postgres://localhost/mg"),
            ("APP_ENV", "staging"),
        ]))
        .unwrap();

        assert!(!config.production);
    }
}
