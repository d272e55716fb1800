//! Centralized path definitions for blogo
//!
//! This module provides a single source of truth for all filesystem paths used by blogo.
//!
//! ## Storage Layout
//!
//! ### Per-Site (working directory)
//!
//! ```text
//! site/
//! ├── blogo.toml              # Site configuration (admin credentials, server)
//! └── .blogo/                 # Data directory (configurable)
//!     └── posts.json          # All posts
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.blogo/
//! └── config.toml             # Fallback configuration
//! ```

use std::path::{Path, PathBuf};

/// Site configuration filename
pub const CONFIG_FILE: &str = "blogo.toml";

/// Default data directory, relative to the working directory
pub const DATA_DIR: &str = ".blogo";

/// Posts filename inside the data directory
const POSTS_FILE: &str = "posts.json";

/// Global config directory name
const GLOBAL_DIR: &str = ".blogo";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get path to `blogo.toml` in the working directory.
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}

/// Get path to the posts file inside a data directory.
#[must_use]
pub fn posts_file(data_dir: &Path) -> PathBuf {
    data_dir.join(POSTS_FILE)
}

/// Get the global blogo directory.
///
/// Returns `~/.blogo/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.blogo/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
