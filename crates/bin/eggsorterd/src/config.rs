//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `eggsorter.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use chrono::FixedOffset;
use serde::Deserialize;

use eggsorter_domain::time::{DEFAULT_UTC_OFFSET_MINUTES, utc_offset};

/// Largest accepted distance from UTC, in minutes.
const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Header clock settings.
    pub clock: ClockConfig,
    /// Rendered page settings.
    pub dashboard: DashboardConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Clock task configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Milliseconds between clock readings.
    pub tick_millis: u64,
    /// Local time zone as minutes east of UTC.
    pub utc_offset_minutes: i32,
}

/// Dashboard rendering configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Auto-reload interval of every page.
    pub refresh_seconds: u32,
}

impl Config {
    /// Load configuration from `eggsorter.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("eggsorter.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("EGGSORTER_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("EGGSORTER_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("EGGSORTER_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("EGGSORTER_UTC_OFFSET_MINUTES") {
            if let Ok(minutes) = val.parse() {
                self.clock.utc_offset_minutes = minutes;
            }
        }
        if let Ok(val) = std::env::var("EGGSORTER_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.clock.tick_millis == 0 {
            return Err(ConfigError::Validation(
                "clock tick must be non-zero".to_string(),
            ));
        }
        if self.clock.utc_offset_minutes.abs() > MAX_UTC_OFFSET_MINUTES {
            return Err(ConfigError::Validation(format!(
                "utc offset must be within \u{b1}{MAX_UTC_OFFSET_MINUTES} minutes"
            )));
        }
        if self.dashboard.refresh_seconds == 0 {
            return Err(ConfigError::Validation(
                "refresh interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Period of the clock task.
    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.clock.tick_millis)
    }

    /// Local offset used to format clock readings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Offset`] when chrono cannot represent the offset.
    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        utc_offset(self.clock.utc_offset_minutes).map_err(ConfigError::Offset)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "eggsorterd=info,eggsorter=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_millis: 1000,
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self { refresh_seconds: 1 }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
    /// Offset rejected by the domain.
    #[error("invalid clock offset")]
    Offset(#[source] eggsorter_domain::error::ValidationError),
}
