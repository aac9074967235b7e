//! Error types for linecmd-core
//!
//! Evaluation never fails: its errors ([`EvalError`](crate::EvalError)) are
//! rendered into the response line. The types here cover everything around
//! evaluation, i.e. building a registry and loading configuration.

use thiserror::Error;

use crate::registry::RegistryError;

/// Core error type for setup operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Configuration value out of range or malformed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file content could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Filesystem access failed
    #[error("IO error: {0}")]
    Io(String),

    /// A command could not be registered
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl Error {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Returns the process exit code for this error.
    ///
    /// - 2: configuration or registry setup problem (user fixable)
    /// - 3: filesystem problem
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfig(_) | Self::Parse(_) | Self::Registry(_) => 2,
            Self::Io(_) => 3,
        }
    }
}

/// Result type alias for linecmd-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_config() {
        let err = Error::invalid_config("capacity must be 1-1024");
        assert_eq!(
            err.to_string(),
            "Invalid configuration: capacity must be 1-1024"
        );
    }

    #[test]
    fn test_io_error_exit_code() {
        let err = Error::io_error("Failed to read config file x.toml: not found");
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_error_from_registry_error() {
        let err = Error::from(RegistryError::Duplicate {
            name: "enable".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Registry error: command 'enable' is already registered"
        );
        assert_eq!(err.exit_code(), 2);
    }
}
