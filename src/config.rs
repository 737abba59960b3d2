//! Application configuration.
//!
//! The configuration is loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/aerospace-alfred/config.json`, or the path passed with
//! `--config`.  The file is optional; a missing file means defaults.
//!
//! # Example
//!
//! ```json
//! {
//!   "aerospace_bin": "/opt/homebrew/bin/aerospace",
//!   "icons": {
//!     "enabled": true,
//!     "cache_ttl_secs": 604800,
//!     "cache_dir": "/tmp/aerospace-alfred-icons"
//!   }
//! }
//! ```

use crate::icons::DEFAULT_TTL_SECS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration.
///
/// Every field is optional; a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path or name of the `aerospace` binary.  `None` means `aerospace` on
    /// `PATH`.  The `--aerospace-bin` flag takes precedence.
    #[serde(default)]
    pub aerospace_bin: Option<PathBuf>,

    /// Window icon lookup settings.
    #[serde(default)]
    pub icons: IconConfig,
}

/// Window icon lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Resolve application icons for window items.
    pub enabled: bool,
    /// How long a resolved path stays valid (seconds).
    pub cache_ttl_secs: u64,
    /// Directory of the cache file.  `None` means
    /// [`default_cache_dir`](crate::icons::default_cache_dir).
    pub cache_dir: Option<PathBuf>,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            cache_ttl_secs: DEFAULT_TTL_SECS,
            cache_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/aerospace-alfred`).
pub fn config_dir() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    PathBuf::from(base).join("aerospace-alfred")
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);
