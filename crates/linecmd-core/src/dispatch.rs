//! Command dispatch: lookup, argument validation, execution and rendering
//!
//! # Validation order
//!
//! Lookup always comes first. For a found command the checks run in a fixed
//! order and the first failure wins:
//!
//! 1. fewer arguments than required parameters: `missing arg {param}`, naming
//!    the first parameter that has no argument
//! 2. an argument that does not parse as its parameter's kind: `bad argument value`
//! 3. more arguments than parameters, unless the command ignores extras:
//!    `too many args`
//!
//! A command with overloads tries each signature in declaration order and
//! runs the first one that accepts the arguments. When none does, the error
//! comes from the first signature whose arity fits the argument count, or
//! from the primary signature if no arity fits. A single-signature command
//! therefore reports exactly the error of the checks above.
//!
//! A rejected line never reaches the command's effect.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    args::Arguments,
    descriptor::{Action, CommandDescriptor, ExtraArgs, Signature},
    help,
    registry::Registry,
    tokenizer::Lexer,
};

/// Every way an evaluation can be rejected. The display strings are the
/// literal response text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("command not found for {command}")]
    CommandNotFound { command: String },

    /// A required parameter had no argument.
    ///
    /// `arg` is the parameter's declared name, so the item commands yield
    /// the two fixed forms: `arg: "item"` is the missing-item error and
    /// `arg: "value"` the missing-value error of `enable`.
    #[error("missing arg {arg} for {command}")]
    MissingArg { command: String, arg: &'static str },

    #[error("bad argument value for {command}")]
    BadArgumentValue { command: String },

    #[error("too many args for {command}")]
    TooManyArgs { command: String },
}

impl EvalError {
    /// The command name the error is about.
    pub fn command(&self) -> &str {
        match self {
            Self::CommandNotFound { command }
            | Self::MissingArg { command, .. }
            | Self::BadArgumentValue { command }
            | Self::TooManyArgs { command } => command,
        }
    }
}

/// Outcome of evaluating one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// Blank line, nothing to run
    Empty,
    /// The command ran and produced this message
    Success(String),
    /// The line was rejected before any effect ran
    Failure(EvalError),
}

impl Evaluation {
    fn from_result(result: Result<Option<String>, EvalError>) -> Self {
        match result {
            Ok(None) => Self::Empty,
            Ok(Some(message)) => Self::Success(message),
            Err(err) => Self::Failure(err),
        }
    }

    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The response text: empty for a blank line, otherwise the message or
    /// error followed by exactly one `\n`.
    pub fn render(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Success(message) => format!("{message}\n"),
            Self::Failure(err) => format!("{err}\n"),
        }
    }
}

/// Check `args` against one signature and parse them.
fn check(name: &str, signature: &Signature, args: &[String]) -> Result<Arguments, EvalError> {
    let params = signature.params();

    if let Some(missing) = params.iter().filter(|p| p.required).nth(args.len()) {
        return Err(EvalError::MissingArg {
            command: name.to_string(),
            arg: missing.name,
        });
    }

    let mut parsed = Arguments::default();
    for (param, token) in params.iter().zip(args) {
        let value = param
            .kind
            .parse(token)
            .ok_or_else(|| EvalError::BadArgumentValue {
                command: name.to_string(),
            })?;
        parsed.push(param.name, value);
    }

    if signature.extra_args() == ExtraArgs::Reject && args.len() > params.len() {
        return Err(EvalError::TooManyArgs {
            command: name.to_string(),
        });
    }

    Ok(parsed)
}

/// Find the first signature of `command` that accepts `args`.
///
/// # Errors
///
/// `MissingArg`, `BadArgumentValue` or `TooManyArgs`, chosen as described in
/// the module docs.
pub fn resolve<'c>(
    command: &'c CommandDescriptor,
    args: &[String],
) -> Result<(&'c Signature, Arguments), EvalError> {
    let name = command.name();
    let primary_err = match check(name, command.primary(), args) {
        Ok(parsed) => return Ok((command.primary(), parsed)),
        Err(err) => err,
    };

    let mut fitting_err = command
        .primary()
        .accepts_count(args.len())
        .then(|| primary_err.clone());

    for signature in command.signatures().skip(1) {
        match check(name, signature, args) {
            Ok(parsed) => return Ok((signature, parsed)),
            Err(err) if fitting_err.is_none() && signature.accepts_count(args.len()) => {
                fitting_err = Some(err);
            }
            Err(_) => {}
        }
    }

    Err(fitting_err.unwrap_or(primary_err))
}

/// Validate `args` and return the parsed arguments of the matching signature.
///
/// # Errors
///
/// See [`resolve`].
pub fn validate(command: &CommandDescriptor, args: &[String]) -> Result<Arguments, EvalError> {
    resolve(command, args).map(|(_, parsed)| parsed)
}

/// Resolve and run already tokenized input.
///
/// `Ok(None)` for an empty token list, `Ok(Some(message))` after a successful
/// effect.
///
/// # Errors
///
/// Any [`EvalError`]; the effect has not run in that case.
pub fn execute(registry: &Registry, tokens: &[String]) -> Result<Option<String>, EvalError> {
    let Some((name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = registry
        .get(name)
        .ok_or_else(|| EvalError::CommandNotFound {
            command: name.clone(),
        })?;

    let (signature, arguments) = resolve(command, args)?;
    tracing::debug!(command = %name, args = args.len(), "running command");

    match signature.action() {
        Action::Run(handler) => Ok(Some(handler(&arguments))),
        Action::Help => help::run(registry, &arguments).map(Some),
    }
}

/// Evaluate a token list against `registry` and render the response.
pub fn evaluate_tokens(registry: &Registry, tokens: &[String]) -> String {
    Evaluation::from_result(execute(registry, tokens)).render()
}

/// Line evaluator over a shared, read-only registry.
///
/// Cloning is cheap and clones share the registry, so one interpreter can
/// serve many threads.
#[derive(Debug, Clone)]
pub struct Interpreter {
    registry: Arc<Registry>,
}

impl Interpreter {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Tokenize, validate and run one line.
    pub fn run(&self, line: &str) -> Evaluation {
        let lexed = Lexer::lex(line);
        if !lexed.termination.is_clean() {
            tracing::debug!(termination = ?lexed.termination, "line ended mid-token");
        }

        let evaluation = Evaluation::from_result(execute(&self.registry, &lexed.tokens));
        if let Evaluation::Failure(err) = &evaluation {
            tracing::debug!(command = err.command(), error = %err, "line rejected");
        }
        evaluation
    }

    /// Evaluate one line and return the rendered response.
    pub fn evaluate(&self, line: &str) -> String {
        self.run(line).render()
    }
}
