//! Application configuration loaded from environment variables.

use std::net::Ipv6Addr;

use serde::{Deserialize, Deserializer};
use strum::{Display, EnumString};

use crate::error::ConfigError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Logging ===
    /// Log verbosity (trace, debug, info, warn, error). Case-insensitive.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Debug mode. Any truthy string forces debug logging.
    #[serde(default, deserialize_with = "deserialize_truthy")]
    pub debug: bool,

    /// Log output format: text or json.
    #[serde(default = "default_log_format")]
    pub log_format: String,

    // === Server Configuration ===
    /// Bind host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Log verbosity levels accepted in `LOG_LEVEL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    /// Everything.
    Trace,
    /// Diagnostic detail.
    Debug,
    /// Normal operation.
    Info,
    /// Something looks off.
    #[strum(to_string = "warn", serialize = "warning")]
    Warn,
    /// Failures only.
    #[strum(to_string = "error", serialize = "critical")]
    Error,
}

/// Log output formats accepted in `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Whether a string reads as "yes".
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

fn deserialize_truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(is_truthy(&value))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            debug: false,
            log_format: default_log_format(),
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Ok(envy::from_env()?)
    }

    /// Load configuration from explicit key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs.into_iter().map(|(k, v)| (k.into(), v.into()));
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("HOST must not be empty".to_string()));
        }

        self.configured_log_level()?;
        self.output_format()?;

        Ok(())
    }

    /// Parsed `LOG_LEVEL`.
    pub fn configured_log_level(&self) -> Result<LogLevel, ConfigError> {
        self.log_level.trim().parse().map_err(|_| {
            ConfigError::Invalid(format!("LOG_LEVEL {:?} is not a log level", self.log_level))
        })
    }

    /// Level actually used: debug mode wins over `LOG_LEVEL`.
    pub fn effective_log_level(&self) -> Result<LogLevel, ConfigError> {
        if self.debug {
            return Ok(LogLevel::Debug);
        }
        self.configured_log_level()
    }

    /// Parsed `LOG_FORMAT`.
    pub fn output_format(&self) -> Result<LogFormat, ConfigError> {
        self.log_format.trim().parse().map_err(|_| {
            ConfigError::Invalid(format!(
                "LOG_FORMAT {:?} must be text or json",
                self.log_format
            ))
        })
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}
