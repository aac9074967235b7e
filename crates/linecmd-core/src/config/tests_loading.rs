//! Loading-focused tests for configuration
//!
//! File parsing, layering and environment overrides. Tests touching
//! `LINECMD_*` variables run serially.

use std::path::Path;

use serial_test::serial;

use crate::config::{load_config, load_toml_file, Config};
use crate::{Error, Result};

const ENV_VARS: [&str; 5] = [
    "LINECMD_CAPACITY",
    "LINECMD_HELP",
    "LINECMD_PROMPT",
    "LINECMD_ERROR_PROMPT",
    "LINECMD_LOG_LEVEL",
];

fn clear_env() {
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

fn write_config(dir: &Path, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.join("config.toml");
    std::fs::write(&path, content)
        .map_err(|e| Error::io_error(format!("Failed to write test file: {e}")))?;
    Ok(path)
}

#[test]
#[serial]
fn test_no_config_files_returns_defaults() {
    clear_env();
    let result = load_config(None);
    assert!(result.is_ok(), "load_config should succeed without config files");
    assert_eq!(result.unwrap_or_default(), Config::default());
}

#[test]
#[serial]
fn test_explicit_file_overrides_defaults() -> Result<()> {
    clear_env();
    let temp_dir = tempfile::tempdir()
        .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
    let path = write_config(
        temp_dir.path(),
        "capacity = 8\nhelp = false\n\n[repl]\nprompt = \"$ \"\n",
    )?;

    let config = load_config(Some(&path))?;
    assert_eq!(config.capacity, 8);
    assert!(!config.help);
    assert_eq!(config.repl.prompt, "$ ");
    assert_eq!(config.repl.error_prompt, "(err)> ");
    Ok(())
}

#[test]
#[serial]
fn test_missing_explicit_file_is_io_error() {
    clear_env();
    let result = load_config(Some(Path::new("/nonexistent/linecmd/config.toml")));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_directory_path_rejected() -> Result<()> {
    let temp_dir = tempfile::tempdir()
        .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
    let result = load_toml_file(temp_dir.path());
    assert!(matches!(result, Err(Error::Io(ref msg)) if msg.contains("directory")));
    Ok(())
}

#[test]
fn test_malformed_toml_returns_parse_error() -> Result<()> {
    let temp_dir = tempfile::tempdir()
        .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
    let path = write_config(temp_dir.path(), "capacity = \n invalid toml [[[")?;

    let result = load_toml_file(&path);
    assert!(matches!(result, Err(Error::Parse(_))));
    Ok(())
}

#[test]
fn test_wrong_type_returns_parse_error() -> Result<()> {
    let temp_dir = tempfile::tempdir()
        .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
    let path = write_config(temp_dir.path(), "capacity = \"many\"\n")?;
    assert!(matches!(load_toml_file(&path), Err(Error::Parse(_))));
    Ok(())
}

#[test]
#[serial]
fn test_invalid_file_values_fail_validation() -> Result<()> {
    clear_env();
    let temp_dir = tempfile::tempdir()
        .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
    let path = write_config(temp_dir.path(), "capacity = 5000\n")?;
    assert!(matches!(
        load_config(Some(&path)),
        Err(Error::InvalidConfig(_))
    ));
    Ok(())
}

#[test]
#[serial]
fn test_env_overrides_file() -> Result<()> {
    clear_env();
    let temp_dir = tempfile::tempdir()
        .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
    let path = write_config(temp_dir.path(), "capacity = 8\n[log]\nlevel = \"info\"\n")?;

    std::env::set_var("LINECMD_CAPACITY", "16");
    std::env::set_var("LINECMD_ERROR_PROMPT", "! ");
    std::env::set_var("LINECMD_LOG_LEVEL", "DEBUG");
    let result = load_config(Some(&path));
    clear_env();

    let config = result?;
    assert_eq!(config.capacity, 16);
    assert_eq!(config.repl.error_prompt, "! ");
    assert_eq!(config.log.level, "debug");
    Ok(())
}

#[test]
#[serial]
fn test_env_help_disables_help() {
    clear_env();
    std::env::set_var("LINECMD_HELP", "false");
    let result = load_config(None);
    clear_env();
    assert!(result.is_ok_and(|config| !config.help));
}

#[test]
#[serial]
fn test_unparseable_env_value() {
    clear_env();
    std::env::set_var("LINECMD_CAPACITY", "lots");
    let result = load_config(None);
    clear_env();
    assert!(matches!(
        result,
        Err(Error::InvalidConfig(ref msg)) if msg.starts_with("Invalid LINECMD_CAPACITY value")
    ));
}

/// Global file under `$XDG_CONFIG_HOME/linecmd`, explicit file on top.
#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_explicit_file_restores_defaults_set_by_global() -> Result<()> {
    clear_env();
    let config_home = tempfile::tempdir()
        .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
    let global_dir = config_home.path().join("linecmd");
    std::fs::create_dir_all(&global_dir)
        .map_err(|e| Error::io_error(format!("Failed to create config dir: {e}")))?;
    write_config(
        &global_dir,
        "capacity = 8\nhelp = false\n\n[repl]\nprompt = \"$ \"\n",
    )?;

    let explicit_dir = tempfile::tempdir()
        .map_err(|e| Error::io_error(format!("Failed to create temp dir: {e}")))?;
    let explicit = write_config(explicit_dir.path(), "capacity = 32\nhelp = true\n")?;

    let previous = std::env::var_os("XDG_CONFIG_HOME");
    std::env::set_var("XDG_CONFIG_HOME", config_home.path());
    let global_only = load_config(None);
    let layered = load_config(Some(&explicit));
    match previous {
        Some(value) => std::env::set_var("XDG_CONFIG_HOME", value),
        None => std::env::remove_var("XDG_CONFIG_HOME"),
    }

    let global_only = global_only?;
    assert_eq!(global_only.capacity, 8);
    assert!(!global_only.help);

    let layered = layered?;
    assert_eq!(layered.capacity, 32);
    assert!(layered.help);
    assert_eq!(layered.repl.prompt, "$ ");
    Ok(())
}
