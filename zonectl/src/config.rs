//! Configuration for the zonectl CLI.
//!
//! Settings are looked up, in order, in the current directory, the user's
//! config directory, then defaulted — mirroring how most system tools
//! layer a project-local override over a user-wide one.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, Result};

pub const CONFIG_FILE_NAME: &str = "zonectl.toml";

/// zonectl's tunable defaults. Everything here has a sensible built-in
/// default; the config file only needs to name what it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Default TTL (seconds) used for records with no `$TTL` directive and
    /// no explicit per-record TTL yet established.
    #[serde(default = "default_ttl")]
    pub default_ttl: u32,

    /// Maximum `$INCLUDE` nesting depth. Still bounded even if raised.
    #[serde(default = "default_max_include_depth")]
    pub max_include_depth: usize,

    /// Default log verbosity when `-v`/`--verbose` isn't passed.
    #[serde(default = "default_verbosity")]
    pub verbosity: String,
}

fn default_ttl() -> u32 {
    3600
}

fn default_max_include_depth() -> usize {
    zone_par::MAX_INCLUDE_DEPTH
}

fn default_verbosity() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl: default_ttl(),
            max_include_depth: default_max_include_depth(),
            verbosity: default_verbosity(),
        }
    }
}

impl Config {
    /// Load configuration from the default search locations, falling back
    /// to defaults if none is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| CliError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_user_config() -> Option<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("zonectl").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config().or_else(Self::check_user_config)
    }
}
