//! linecmd-core - Line-oriented command interpreter
//!
//! This crate provides:
//! - A quote and escape aware tokenizer
//! - Command descriptors with typed parameters
//! - A fixed-capacity registry with a built-in `help` command
//! - Validation and dispatch of one line to one response
//! - The `enable`/`disable` item commands and their shared store
//! - Layered configuration
//!
//! ## Evaluating a line
//!
//! ```
//! use std::sync::Arc;
//!
//! use linecmd_core::{builtins, Interpreter, ItemStore};
//!
//! let store = Arc::new(ItemStore::new());
//! let registry = builtins::standard_registry(8, true, &store)?;
//! let interpreter = Interpreter::new(registry);
//!
//! assert_eq!(interpreter.evaluate("enable thing 4"), "enabled thing with value 4\n");
//! assert_eq!(interpreter.evaluate("disable"), "missing arg item for disable\n");
//! # Ok::<(), linecmd_core::RegistryError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod args;
pub mod builtins;
pub mod config;
pub mod descriptor;
pub mod dispatch;
mod error;
mod help;
pub mod registry;
pub mod store;
pub mod tokenizer;

pub use args::{ArgKind, Arguments, Param, Value};
pub use config::Config;
pub use descriptor::{Action, CommandDescriptor, ExtraArgs, Handler, Signature};
pub use dispatch::{
    evaluate_tokens, execute, resolve, validate, EvalError, Evaluation, Interpreter,
};
pub use error::{Error, Result};
pub use help::listing;
pub use registry::{Registry, RegistryError};
pub use store::{ItemState, ItemStore};
pub use tokenizer::{tokenize, Lexed, Lexer, Termination};
