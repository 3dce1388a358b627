//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `nightlamp.toml` in the working directory. Every field has a
//! sensible default so the file is optional — except the credential table,
//! which defaults to empty (nobody can log in until users are configured).
//! Environment variables take precedence over file values.

use serde::Deserialize;

use nightlamp_domain::user::Role;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Schedule record storage.
    pub storage: StorageConfig,
    /// Relay output settings.
    pub gpio: GpioConfig,
    /// Window evaluation settings.
    pub schedule: ScheduleConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Credential table.
    pub auth: AuthConfig,
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

/// Durable schedule record location.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON record.
    pub path: String,
}

/// Relay output configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GpioConfig {
    /// Drive a real GPIO pin. When `false` the in-memory virtual light is
    /// used instead (useful on development machines).
    pub enabled: bool,
    /// BCM pin number wired to the relay module.
    pub pin: u8,
}

/// Window evaluation configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Tolerance widening the on-window at both edges, in seconds.
    pub buffer_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Credential table supplied by deployment configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Configured users.
    pub users: Vec<UserEntry>,
}

/// One configured user.
#[derive(Debug, Deserialize)]
pub struct UserEntry {
    /// Login name.
    pub username: String,
    /// Plaintext password (hashing is out of scope).
    pub password: String,
    /// Access level.
    pub role: Role,
}

impl Config {
    /// Load configuration from `nightlamp.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("nightlamp.toml")?;
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
        if let Ok(val) = std::env::var("NIGHTLAMP_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("NIGHTLAMP_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("NIGHTLAMP_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("NIGHTLAMP_STORAGE") {
            self.storage.path = val;
        }
        if let Ok(val) = std::env::var("NIGHTLAMP_LOG") {
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
        if self.gpio.enabled && self.gpio.pin > 27 {
            return Err(ConfigError::Validation(format!(
                "gpio.pin {} is not a valid BCM pin",
                self.gpio.pin
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "last_set_times.json".to_string(),
        }
    }
}

impl Default for GpioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pin: 17,
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self { buffer_secs: 10 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "nightlampd=info,nightlamp=info,tower_http=debug".to_string(),
        }
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
}
