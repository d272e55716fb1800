//! Site configuration
//!
//! Loaded from `blogo.toml` (TOML). Lookup order: an explicit `--config` path,
//! then `./blogo.toml`, then `~/.blogo/config.toml`, then built-in defaults.
//! `BLOGO_PORT` and `BLOGO_DATA_DIR` override the file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Duration;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::AdminCredentials;
use crate::paths;

/// Environment variable overriding `server.port`
pub const ENV_PORT: &str = "BLOGO_PORT";

/// Environment variable overriding `storage.data_dir`
pub const ENV_DATA_DIR: &str = "BLOGO_DATA_DIR";

/// Longest accepted session lifetime (one year)
pub const MAX_SESSION_TTL_SECS: u64 = 60 * 60 * 24 * 365;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The file is not valid TOML for this schema
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
    /// An environment override has an unusable value
    #[error("invalid value for {var}: {value}")]
    InvalidOverride {
        /// Variable name
        var: &'static str,
        /// Value found
        value: String,
    },
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Where posts live
    #[serde(default)]
    pub storage: StorageConfig,
    /// Admin credentials
    #[serde(default)]
    pub admin: AdminConfig,
    /// Session cookie settings
    #[serde(default)]
    pub session: SessionConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Site title shown in the navigation bar
    #[serde(default = "default_site_title")]
    pub site_title: String,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

fn default_site_title() -> String {
    "Choco Blogo".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            site_title: default_site_title(),
        }
    }
}

/// Storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `posts.json`
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(paths::DATA_DIR)
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Admin credential settings
///
/// Empty by default: nobody can log in until `blogo init` has written a hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Admin email
    #[serde(default)]
    pub email: String,
    /// Hex SHA-256 of `salt + password`
    #[serde(default)]
    pub password_hash: String,
    /// Hex salt
    #[serde(default)]
    pub salt: String,
}

/// Session cookie settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Session lifetime in seconds
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    /// Cookie name
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Add the `Secure` attribute (enable behind HTTPS)
    #[serde(default)]
    pub secure: bool,
}

const fn default_ttl_secs() -> u64 {
    60 * 60 * 24
}

fn default_cookie_name() -> String {
    "adminToken".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            cookie_name: default_cookie_name(),
            secure: false,
        }
    }
}

impl BlogConfig {
    /// Pick the config file to use, if any exists
    #[must_use]
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        [paths::local_config(), paths::global_config()].into_iter().find(|p| p.exists())
    }

    /// Load a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration following the lookup order, then apply environment overrides
    ///
    /// An explicit path must exist; implicit locations fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match Self::resolve_path(explicit) {
            Some(path) => {
                log::debug!("loading config from {}", path.display());
                Self::load_from(&path)?
            },
            None => {
                log::debug!("no config file found, using defaults");
                Self::default()
            },
        };
        config.apply_overrides(|var| std::env::var(var).ok())?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup (the environment, in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_PORT) {
            self.server.port = value.trim().parse().map_err(|_| ConfigError::InvalidOverride {
                var: ENV_PORT,
                value: value.clone(),
            })?;
        }
        if let Some(value) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            self.storage.data_dir = PathBuf::from(value);
        }
        Ok(())
    }

    /// Save configuration to `path`
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Path of the posts file
    #[must_use]
    pub fn posts_path(&self) -> PathBuf {
        paths::posts_file(&self.storage.data_dir)
    }

    /// Admin credentials for the authenticator
    #[must_use]
    pub fn credentials(&self) -> AdminCredentials {
        AdminCredentials {
            email: self.admin.email.clone(),
            password_hash: self.admin.password_hash.clone(),
            salt: self.admin.salt.clone(),
        }
    }

    /// Store credentials (already hashed) in the admin section
    pub fn set_credentials(&mut self, credentials: &AdminCredentials) {
        self.admin = AdminConfig {
            email: credentials.email.clone(),
            password_hash: credentials.password_hash.clone(),
            salt: credentials.salt.clone(),
        };
    }

    /// Session lifetime, capped at [`MAX_SESSION_TTL_SECS`]
    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        let secs = self.session.ttl_secs.min(MAX_SESSION_TTL_SECS);
        let secs = i64::try_from(secs).unwrap_or(0);
        Duration::try_seconds(secs).unwrap_or_default()
    }

    /// `host:port` to bind
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
