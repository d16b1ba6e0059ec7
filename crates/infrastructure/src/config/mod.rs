//! Application configuration
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - `config.toml` in the working directory (optional)
//! - environment variables prefixed with `DAILYCAST__`, nested with `__`
//!   (e.g. `DAILYCAST__SERVER__PORT=8080`, `DAILYCAST__WEATHER__TIMEOUT_SECS=5`).
//!   `DAILYCAST__SERVER__ALLOWED_ORIGINS` takes a comma-separated list.

mod server;

use std::fmt;

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

pub use server::ServerConfig;

/// Environment variable prefix
const ENV_PREFIX: &str = "DAILYCAST";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - verbose logging defaults
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development or production)
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Weather provider configuration
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl AppConfig {
    /// Load configuration from the optional `config.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(config::File::with_name("config").required(false))
    }

    /// Load configuration from a specific file source plus the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load_from<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins"),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Default `tracing` filter for the configured environment
    #[must_use]
    pub const fn default_log_filter(&self) -> &'static str {
        match self.environment {
            Environment::Development => {
                "dailycast_server=debug,presentation_http=debug,application=debug,integration_weather=debug,tower_http=debug"
            },
            Environment::Production => "dailycast_server=info,presentation_http=info,tower_http=info",
        }
    }
}
