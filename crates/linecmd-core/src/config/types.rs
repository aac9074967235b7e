//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Root configuration structure
///
/// Loaded from defaults → global file → explicit file → env vars
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Maximum number of registered commands, `help` included
    pub capacity: usize,
    /// Register the `help` command
    pub help: bool,
    pub repl: ReplConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReplConfig {
    pub prompt: String,
    /// Shown instead of `prompt` after a rejected line
    pub error_prompt: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Default tracing level when `RUST_LOG` is unset
    pub level: String,
}

/// One config layer as read from a file: only the keys it sets are `Some`
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PartialConfig {
    pub capacity: Option<usize>,
    pub help: Option<bool>,
    pub repl: PartialReplConfig,
    pub log: PartialLogConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PartialReplConfig {
    pub prompt: Option<String>,
    pub error_prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PartialLogConfig {
    pub level: Option<String>,
}
