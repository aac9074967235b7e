//! Built-in `help` command
//!
//! `help` lists every registered command with its description, `help <name>`
//! prints one `usage:` line per signature of that command.

use itertools::Itertools;

use crate::{
    args::{ArgKind, Arguments, Param},
    descriptor::{Action, CommandDescriptor},
    dispatch::EvalError,
    registry::Registry,
};

const INDENT: &str = "    ";

pub(crate) fn command() -> CommandDescriptor {
    CommandDescriptor::with_action("help", "displays information about commands", Action::Help)
        .param(Param::optional("command", ArgKind::String))
}

pub(crate) fn run(registry: &Registry, args: &Arguments) -> Result<String, EvalError> {
    match args.str("command") {
        None => Ok(listing(registry)),
        Some(name) => registry
            .get(name)
            .map(|cmd| cmd.usage().lines().map(|line| format!("usage: {line}")).join("\n"))
            .ok_or_else(|| EvalError::CommandNotFound {
                command: name.to_string(),
            }),
    }
}

/// `list of commands:` followed by one aligned line per command.
pub fn listing(registry: &Registry) -> String {
    let width = registry
        .iter()
        .map(|cmd| cmd.name().chars().count())
        .max()
        .unwrap_or(0);

    std::iter::once(String::from("list of commands:"))
        .chain(registry.iter().map(|cmd| {
            format!("{INDENT}{:<width$}{INDENT}{}", cmd.name(), cmd.description())
        }))
        .join("\n")
}
