//! Configuration loading from files and environment
//!
//! Each layer returns a new `Config`; later layers win field by field.

use std::path::{Path, PathBuf};

use super::types::{Config, PartialConfig};
use crate::{Error, Result};

// ═══════════════════════════════════════════════════════════════════════════
// PUBLIC API
// ═══════════════════════════════════════════════════════════════════════════

/// Load configuration from all sources with hierarchy
///
/// `explicit` is the file named on the command line. Unlike the global file
/// it must exist.
///
/// # Errors
///
/// Returns error if:
/// - A config file cannot be read or is malformed TOML
/// - An environment override cannot be parsed
/// - The merged values fail validation
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let config = Config::default();

    let config = match global_config_path() {
        Some(path) if path.is_file() => {
            tracing::debug!(path = %path.display(), "loading global config");
            config.merge(load_toml_file(&path)?)
        }
        _ => config,
    };

    let config = match explicit {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config file");
            config.merge(load_toml_file(path)?)
        }
        None => config,
    };

    let config = config.apply_env_vars()?;
    config.validate()?;
    Ok(config)
}

// ═══════════════════════════════════════════════════════════════════════════
// PATH HELPERS
// ═══════════════════════════════════════════════════════════════════════════

/// Get path to global config file
pub fn global_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "linecmd")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Load a TOML file as one config layer; keys it leaves out stay `None`
///
/// # Errors
///
/// Returns error if:
/// - Path is a directory instead of a file
/// - File cannot be read
/// - TOML is malformed or has wrongly typed values
pub fn load_toml_file(path: &Path) -> Result<PartialConfig> {
    if path.is_dir() {
        return Err(Error::io_error(format!(
            "Config path is a directory, not a file: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::io_error(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::parse_error(format!(
            "Failed to parse config file {}: {e}",
            path.display()
        ))
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// ENVIRONMENT VARIABLE OVERRIDES
// ═══════════════════════════════════════════════════════════════════════════

impl Config {
    /// Apply `LINECMD_*` environment variable overrides
    ///
    /// # Errors
    ///
    /// Returns error if a numeric or boolean variable does not parse
    pub fn apply_env_vars(mut self) -> Result<Self> {
        if let Ok(value) = std::env::var("LINECMD_CAPACITY") {
            self.capacity = value.trim().parse().map_err(|e| {
                Error::invalid_config(format!("Invalid LINECMD_CAPACITY value: {e}"))
            })?;
        }

        if let Ok(value) = std::env::var("LINECMD_HELP") {
            self.help = value.trim().parse().map_err(|e| {
                Error::invalid_config(format!("Invalid LINECMD_HELP value: {e}"))
            })?;
        }

        if let Ok(value) = std::env::var("LINECMD_PROMPT") {
            self.repl.prompt = value;
        }

        if let Ok(value) = std::env::var("LINECMD_ERROR_PROMPT") {
            self.repl.error_prompt = value;
        }

        if let Ok(value) = std::env::var("LINECMD_LOG_LEVEL") {
            self.log.level = value.trim().to_lowercase();
        }

        Ok(self)
    }
}
