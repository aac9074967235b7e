//! Default values for configuration

use super::types::{Config, LogConfig, ReplConfig};

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 32,
            help: true,
            repl: ReplConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            error_prompt: "(err)> ".to_string(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}
