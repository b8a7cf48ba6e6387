//! Application configuration file support.
//!
//! Configuration is read from a `lunar.toml` file. Every field has a default,
//! so an absent file or an empty one yields a working setup. `HOST` and
//! `PORT` environment variables override the `[server]` table.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::{LunarError, LunarResult};
use crate::services::lunar_calendar::MAX_UPCOMING_EVENTS;

/// Application configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub calendar: CalendarSettings,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Lunar calendar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSettings {
    /// Events returned by the events endpoint when no count is given.
    #[serde(default = "default_upcoming_events")]
    pub default_upcoming_events: usize,
    /// Hard limit on events per request. Never above [`MAX_UPCOMING_EVENTS`].
    #[serde(default = "default_max_upcoming_events")]
    pub max_upcoming_events: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_upcoming_events() -> usize {
    4
}

fn default_max_upcoming_events() -> usize {
    MAX_UPCOMING_EVENTS
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            default_upcoming_events: default_upcoming_events(),
            max_upcoming_events: default_max_upcoming_events(),
        }
    }
}

impl CalendarSettings {
    /// Resolve a requested event count against the configured limits.
    pub fn event_count(&self, requested: Option<usize>) -> usize {
        let limit = self.max_upcoming_events.min(MAX_UPCOMING_EVENTS);
        requested
            .unwrap_or(self.default_upcoming_events)
            .min(limit)
    }
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> LunarResult<Self> {
        toml::from_str(content)
            .map_err(|e| LunarError::config(format!("Failed to parse config file: {}", e)))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if successful
    /// * `Err(LunarError::Config)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> LunarResult<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| LunarError::config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// First `lunar.toml` found in the standard locations:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    pub fn default_path() -> Option<PathBuf> {
        [
            PathBuf::from("lunar.toml"),
            PathBuf::from("backend/lunar.toml"),
            PathBuf::from("../lunar.toml"),
        ]
        .into_iter()
        .find(|path| path.exists())
    }

    /// Load configuration from the default location.
    pub fn from_default_location() -> LunarResult<Self> {
        let path = Self::default_path()
            .ok_or_else(|| LunarError::config("No lunar.toml found in standard locations"))?;
        log::info!("Loading configuration from {}", path.display());
        Self::from_file(&path)
    }

    /// Load from the default location, falling back to defaults when no file
    /// exists, then apply environment overrides.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load() -> LunarResult<Self> {
        let config = if Self::default_path().is_some() {
            Self::from_default_location()?
        } else {
            log::warn!("No lunar.toml found; using default configuration");
            Self::default()
        };
        config.with_env_overrides()
    }

    /// Apply `HOST` and `PORT` environment variables.
    pub fn with_env_overrides(mut self) -> LunarResult<Self> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port.parse().map_err(|_| {
                LunarError::config(format!("PORT must be a valid port number, got '{}'", port))
            })?;
        }
        Ok(self)
    }

    /// Socket address for the HTTP listener.
    pub fn bind_address(&self) -> LunarResult<SocketAddr> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| LunarError::config(format!("Invalid bind address: {}", e)))
    }
}
