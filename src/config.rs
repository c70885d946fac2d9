//! User configuration for the `keg` binary
//!
//! Read from `$KEG_CONFIG`, or `<config_dir>/keg/config.toml` when that is
//! unset. Every field is optional and a missing file means all defaults.
//!
//! ```toml
//! kegpath = "~/kegs/main"
//!
//! [http]
//! connect_timeout_secs = 10
//! timeout_secs = 30
//! user_agent = "keg/0.1.0"
//! max_index_bytes = 16777216
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "KEG_CONFIG";
pub const KEGPATH_ENV: &str = "KEG_PATH";

pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_INDEX_BYTES: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Keg used when a command is given no path.
    pub kegpath: Option<PathBuf>,
    pub http: HttpConfig,
}

/// Settings for the HTTP client used by `keg fetch`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub connect_timeout_secs: u64,
    /// Whole request, connection and body included.
    pub timeout_secs: u64,
    pub user_agent: String,
    pub max_index_bytes: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            max_index_bytes: DEFAULT_MAX_INDEX_BYTES,
        }
    }
}

pub fn default_user_agent() -> String {
    format!("keg/{}", env!("CARGO_PKG_VERSION"))
}

impl Config {
    /// Where the config file is looked for.
    pub fn path() -> Option<PathBuf> {
        env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("keg").join("config.toml")))
    }

    /// Load the config file, or defaults when there is none.
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// The keg to work on: an explicit path first, then `$KEG_PATH`, then
    /// the configured `kegpath`, then the current directory.
    pub fn resolve_kegpath(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| env::var_os(KEGPATH_ENV).map(PathBuf::from))
            .or_else(|| self.kegpath.clone())
            .map(|path| expand_tilde(&path))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
