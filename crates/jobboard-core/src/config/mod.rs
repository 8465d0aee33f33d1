//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod store;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::store::{StoreBackend, StoreConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Entity store backend selection.
    #[serde(default)]
    pub store: StoreConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default`, an environment-specific overlay
    /// `config/{env}`, and environment variables prefixed with `JOBBOARD`
    /// (`JOBBOARD__AUTH__JWT_SECRET` sets `auth.jwt_secret`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config/default", env)
    }

    /// Load configuration starting from an explicit base file.
    pub fn load_from(base: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(base).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("JOBBOARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that would only fail later, at request time.
    pub fn validate(&self) -> Result<(), AppError> {
        let ttl = self.auth.jwt_ttl_minutes;
        if ttl == 0 || ttl > AuthConfig::MAX_JWT_TTL_MINUTES {
            return Err(AppError::configuration(format!(
                "auth.jwt_ttl_minutes must be between 1 and {}, got {ttl}",
                AuthConfig::MAX_JWT_TTL_MINUTES
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_usable() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.backend, StoreBackend::Postgres);
        assert_eq!(config.auth.jwt_ttl_minutes, 60);
        assert_eq!(config.auth.password_min_length, 8);
    }

    #[test]
    fn test_token_ttl_bounds() {
        assert!(AppConfig::default().validate().is_ok());

        let mut config = AppConfig::default();
        config.auth.jwt_ttl_minutes = AuthConfig::MAX_JWT_TTL_MINUTES + 1;
        let err = config.validate().expect_err("too long");
        assert!(err.is(crate::error::ErrorKind::Configuration));
        assert!(err.message.contains("jwt_ttl_minutes"));

        config.auth.jwt_ttl_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[auth]\njwt_secret = \"s3cret\"\n[store]\nbackend = \"memory\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize");

        assert_eq!(config.auth.jwt_secret, "s3cret");
        assert_eq!(config.auth.jwt_leeway_seconds, 5);
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert_eq!(config.logging.format, "json");
    }
}
