use std::env;

use auth::AuthSettings;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct AuthConfig {
    pub secret: String,
    #[serde(default = "default_access_token_ttl_minutes")]
    pub access_token_ttl_minutes: i64,
    #[serde(default = "default_refresh_token_ttl_days")]
    pub refresh_token_ttl_days: i64,
    #[serde(default = "default_hash_iterations")]
    pub hash_iterations: u32,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"<redacted>")
            .field("access_token_ttl_minutes", &self.access_token_ttl_minutes)
            .field("refresh_token_ttl_days", &self.refresh_token_ttl_days)
            .field("hash_iterations", &self.hash_iterations)
            .finish()
    }
}

impl AuthConfig {
    /// Build the immutable settings handed to the authenticator.
    ///
    /// # Errors
    /// * `ConfigError::Message` - A token lifetime is not positive or out of range
    pub fn to_settings(&self) -> Result<AuthSettings, ConfigError> {
        let access_lifetime = lifetime(
            "auth.access_token_ttl_minutes",
            self.access_token_ttl_minutes,
            Duration::try_minutes,
        )?;
        let refresh_lifetime = lifetime(
            "auth.refresh_token_ttl_days",
            self.refresh_token_ttl_days,
            Duration::try_days,
        )?;

        Ok(AuthSettings::new(self.secret.as_bytes())
            .with_access_lifetime(access_lifetime)
            .with_refresh_lifetime(refresh_lifetime)
            .with_hash_iterations(self.hash_iterations))
    }
}

fn lifetime(
    key: &str,
    value: i64,
    to_duration: fn(i64) -> Option<Duration>,
) -> Result<Duration, ConfigError> {
    if value <= 0 {
        return Err(ConfigError::Message(format!(
            "{} must be positive, got {}",
            key, value
        )));
    }
    to_duration(value)
        .ok_or_else(|| ConfigError::Message(format!("{} is out of range: {}", key, value)))
}

fn default_max_connections() -> u32 {
    5
}

fn default_access_token_ttl_minutes() -> i64 {
    auth::settings::DEFAULT_ACCESS_LIFETIME_MINUTES
}

fn default_refresh_token_ttl_days() -> i64 {
    auth::settings::DEFAULT_REFRESH_LIFETIME_DAYS
}

fn default_hash_iterations() -> u32 {
    auth::settings::DEFAULT_HASH_ITERATIONS
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, AUTH__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: AUTH__SECRET=... overrides auth.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Self = configuration.try_deserialize()?;
        config.auth.to_settings()?;

        Ok(config)
    }
}
