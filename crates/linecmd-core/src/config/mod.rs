//! Configuration loading and management
//!
//! # Hierarchy
//!
//! Configuration is loaded in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Global config: `<config dir>/linecmd/config.toml`
//! 3. Explicit config file (`--config <PATH>`)
//! 4. Environment variables: `LINECMD_*`
//!
//! # Example Config
//!
//! ```toml
//! capacity = 16
//! help = true
//!
//! [repl]
//! prompt = "> "
//! error_prompt = "(err)> "
//!
//! [log]
//! level = "warn"
//! ```

mod defaults;
mod load;
mod merge;
mod types;
mod validate;

#[cfg(test)]
mod tests_loading;

pub use load::{global_config_path, load_config, load_toml_file};
pub use types::{
    Config, LogConfig, PartialConfig, PartialLogConfig, PartialReplConfig, ReplConfig,
};
pub use validate::{LOG_LEVELS, MAX_CAPACITY};
