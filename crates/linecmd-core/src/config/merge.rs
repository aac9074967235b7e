//! Configuration merging logic
//!
//! A layer overrides exactly the keys it sets, including keys set back to
//! their default value.

use super::types::{
    Config, LogConfig, PartialConfig, PartialLogConfig, PartialReplConfig, ReplConfig,
};

impl Config {
    /// Merge a layer into this config (the layer takes precedence)
    pub fn merge(self, layer: PartialConfig) -> Self {
        Self {
            capacity: layer.capacity.unwrap_or(self.capacity),
            help: layer.help.unwrap_or(self.help),
            repl: self.repl.merge(layer.repl),
            log: self.log.merge(layer.log),
        }
    }
}

impl ReplConfig {
    fn merge(self, layer: PartialReplConfig) -> Self {
        Self {
            prompt: layer.prompt.unwrap_or(self.prompt),
            error_prompt: layer.error_prompt.unwrap_or(self.error_prompt),
        }
    }
}

impl LogConfig {
    fn merge(self, layer: PartialLogConfig) -> Self {
        Self {
            level: layer.level.unwrap_or(self.level),
        }
    }
}
