//! Server configuration.
//!
//! Settings come from an optional `ferry.toml` and are then overridden by
//! environment variables:
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `FERRY_TRAVELS_PATH`: Travels fixture loaded as the first dataset (optional)
//! - `FERRY_BASE_DATE`: Date of tick 0, `YYYY-MM-DD` (default: 2025-08-15)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default date of tick 0.
pub const DEFAULT_BASE_DATE: &str = "2025-08-15";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Resolved server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Travels fixture loaded at startup.
    #[serde(default)]
    pub travels_path: Option<PathBuf>,
    #[serde(default = "default_base_date")]
    pub base_date: NaiveDate,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Date of tick 0 when none is configured.
const BASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 8, 15) {
    Some(date) => date,
    None => panic!("invalid default base date"),
};

fn default_base_date() -> NaiveDate {
    BASE_DATE
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            travels_path: None,
            base_date: default_base_date(),
        }
    }
}

/// On-disk layout: everything lives under a `[server]` table.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    server: Option<ServerConfig>,
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(file.server.unwrap_or_default())
    }

    /// Load `ferry.toml` from the current directory or `backend/`, if present.
    pub fn from_default_location() -> Result<Self, ConfigError> {
        let search_paths = [PathBuf::from("ferry.toml"), PathBuf::from("backend/ferry.toml")];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Apply environment variable overrides.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(host) = env::var("HOST") {
            self.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                expected: "port number",
                value: port.clone(),
            })?;
        }
        if let Ok(path) = env::var("FERRY_TRAVELS_PATH") {
            self.travels_path = Some(PathBuf::from(path));
        }
        if let Ok(date) = env::var("FERRY_BASE_DATE") {
            self.base_date = parse_base_date(&date)?;
        }
        Ok(self)
    }

    /// Default file location plus environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_default_location()?.with_env_overrides()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_base_date(value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ConfigError::InvalidValue {
        name: "FERRY_BASE_DATE",
        expected: "YYYY-MM-DD date",
        value: value.to_string(),
    })
}
