//! Configuration management for Fishing Forecast Georgia
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FFG__ prefix

use config::{builder::DefaultState, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use shared::models::ScoreOptions;
use shared::types::Language;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Fishing score engine switches
    pub scoring: ScoringConfig,

    /// Forecast defaults
    pub forecast: ForecastConfig,

    /// CORS configuration
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ScoringConfig {
    /// Add the new/full moon bonus when scoring server-side
    pub include_moon_phase_bonus: bool,
}

impl ScoringConfig {
    pub fn options(&self) -> ScoreOptions {
        ScoreOptions {
            include_moon_phase_bonus: self.include_moon_phase_bonus,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ForecastConfig {
    /// Days returned when the request does not specify `days`
    pub days: u32,

    /// Response language when the request does not specify `lang`
    pub language: Language,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origin, or "*" for any
    pub allowed_origin: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("FFG_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = Self::with_defaults(config::Config::builder(), &environment)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FFG_ prefix)
            .add_source(
                Environment::with_prefix("FFG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Code defaults, the lowest configuration layer
    fn with_defaults(
        builder: ConfigBuilder<DefaultState>,
        environment: &str,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        builder
            .set_default("environment", environment)?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("scoring.include_moon_phase_bonus", false)?
            .set_default("forecast.days", 5)?
            .set_default("forecast.language", "ka")?
            .set_default("cors.allowed_origin", "http://localhost:3000")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            days: shared::simulation::DEFAULT_FORECAST_DAYS,
            language: Language::Georgian,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            scoring: ScoringConfig::default(),
            forecast: ForecastConfig::default(),
            cors: CorsConfig {
                allowed_origin: "http://localhost:3000".to_string(),
            },
        }
    }
}
