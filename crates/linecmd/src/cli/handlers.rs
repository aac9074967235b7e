//! Top-level command handling for the `linecmd` binary

use std::{
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use clap::ArgMatches;

use super::{repl, setup};

/// Run the CLI.
///
/// A rejected line is still a completed run: its error text is the response
/// and the process exits 0.
///
/// # Errors
/// Returns setup errors (configuration, logging, registry) and I/O failures
pub fn run_cli(matches: &ArgMatches) -> Result<()> {
    let config_path = matches.get_one::<String>("config").map(Path::new);
    let config = setup::load_config(config_path)?;
    setup::init_tracing(&config.log.level)?;
    let interpreter = setup::build_interpreter(&config)?;

    if matches.get_flag("interactive") {
        let stdin = io::stdin();
        repl::run(&interpreter, &config.repl, stdin.lock(), io::stdout().lock())
            .context("Interactive session failed")?;
        return Ok(());
    }

    let line = join_words(matches);
    tracing::debug!(line = %line, "evaluating");
    let evaluation = interpreter.run(&line);

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(evaluation.render().as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write response")
}

/// Positional words joined with single spaces.
fn join_words(matches: &ArgMatches) -> String {
    matches
        .get_many::<String>("words")
        .map(|words| words.map(String::as_str).collect::<Vec<_>>().join(" "))
        .unwrap_or_default()
}
