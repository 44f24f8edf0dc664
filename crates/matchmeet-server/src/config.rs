//! Process configuration, read from the environment exactly once at
//! startup and resolved into the explicit config objects the handlers
//! and the database layer receive. Nothing below this layer touches
//! `std::env`.

use std::env;
use std::fmt::Display;
use std::fs;
use std::str::FromStr;

use matchmeet_auth::AuthConfig;
use matchmeet_db::DbConfig;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),

    #[error("invalid value for {key}: {message}")]
    InvalidVar { key: &'static str, message: String },

    #[error("failed to read {path}: {source}")]
    KeyFile {
        path: String,
        source: std::io::Error,
    },
}

/// Fully resolved process configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub auth: AuthConfig,
    pub db: DbConfig,
}

impl ServerConfig {
    /// Load configuration from the environment.
    ///
    /// The JWT issuer is the development base URL when
    /// `MATCHMEET_DEBUG` is set, otherwise the production base URL.
    /// The choice is resolved here so the auth crate only ever sees a
    /// single issuer string.
    pub fn load() -> Result<Self, ConfigError> {
        let debug_mode = env::var("MATCHMEET_DEBUG").is_ok_and(|v| v != "0" && !v.is_empty());

        let dev_url = var_or("MATCHMEET_DEV_URL", "http://localhost:3000");
        let prod_url = var_or("MATCHMEET_PROD_URL", "https://matchmeet.app");
        let jwt_issuer = if debug_mode { dev_url } else { prod_url };

        let jwt_private_key_pem = read_key_file("MATCHMEET_JWT_PRIVATE_KEY_FILE")?;
        let jwt_public_key_pem = read_key_file("MATCHMEET_JWT_PUBLIC_KEY_FILE")?;

        let defaults = AuthConfig::default();
        let auth = AuthConfig {
            jwt_private_key_pem,
            jwt_public_key_pem,
            jwt_issuer,
            session_lifetime_secs: parsed_or(
                "MATCHMEET_SESSION_LIFETIME_SECS",
                defaults.session_lifetime_secs,
            )?,
            registration_cookie_max_age_secs: parsed_or(
                "MATCHMEET_REGISTRATION_COOKIE_MAX_AGE_SECS",
                defaults.registration_cookie_max_age_secs,
            )?,
            resubscribe_window_secs: parsed_or(
                "MATCHMEET_RESUBSCRIBE_WINDOW_SECS",
                defaults.resubscribe_window_secs,
            )?,
            pepper: env::var("MATCHMEET_PASSWORD_PEPPER").ok(),
        };

        let db_defaults = DbConfig::default();
        let db = DbConfig {
            url: var_or("MATCHMEET_DB_URL", &db_defaults.url),
            namespace: var_or("MATCHMEET_DB_NAMESPACE", &db_defaults.namespace),
            database: var_or("MATCHMEET_DB_NAME", &db_defaults.database),
            username: var_or("MATCHMEET_DB_USERNAME", &db_defaults.username),
            password: var_or("MATCHMEET_DB_PASSWORD", &db_defaults.password),
        };

        info!(debug = debug_mode, issuer = %auth.jwt_issuer, db_url = %db.url, "configuration loaded");

        Ok(Self { auth, db })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            key,
            message: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Read a PEM key from the file named by the given environment variable.
fn read_key_file(key: &'static str) -> Result<String, ConfigError> {
    let path = env::var(key).map_err(|_| ConfigError::MissingVar(key))?;
    fs::read_to_string(&path).map_err(|source| ConfigError::KeyFile { path, source })
}
