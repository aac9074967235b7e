//! Startup: configuration, logging and interpreter construction

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use linecmd_core::{builtins, config, Config, Interpreter, ItemStore};

/// Load configuration, honoring `--config` when given.
///
/// # Errors
/// Returns the core configuration error, wrapped with context
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    config::load_config(explicit).context("Failed to load configuration")
}

/// Initialize tracing subscriber for logging
///
/// Configures the tracing subscriber with:
/// - `RUST_LOG` when set, otherwise the configured `level`
/// - Stderr output (stdout carries only command responses)
///
/// # Errors
/// Returns an error if the subscriber initialization fails
pub fn init_tracing(level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .context("Invalid log level")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}

/// Build the interpreter with the item commands and, if enabled, `help`.
///
/// # Errors
/// Returns an error if `capacity` cannot hold the built-in commands
pub fn build_interpreter(config: &Config) -> Result<Interpreter> {
    let store = Arc::new(ItemStore::new());
    let registry = builtins::standard_registry(config.capacity, config.help, &store)
        .map_err(linecmd_core::Error::from)
        .context("Failed to register built-in commands")?;

    tracing::debug!(
        commands = registry.len(),
        capacity = registry.capacity(),
        "registry ready"
    );
    Ok(Interpreter::new(registry))
}
