//! Configuration validation

use super::types::Config;
use crate::{Error, Result};

/// Upper bound for `capacity`
pub const MAX_CAPACITY: usize = 1024;

/// Accepted values for `log.level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl Config {
    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any values are out of range or invalid
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 || self.capacity > MAX_CAPACITY {
            return Err(Error::invalid_config(format!(
                "capacity must be 1-{MAX_CAPACITY} (got {})",
                self.capacity
            )));
        }

        if !LOG_LEVELS.contains(&self.log.level.as_str()) {
            return Err(Error::invalid_config(format!(
                "log.level must be one of {} (got '{}')",
                LOG_LEVELS.join(", "),
                self.log.level
            )));
        }

        Ok(())
    }
}
