//! linecmd - single-line command console
//!
//! Thin front-end over `linecmd-core`: argument parsing, logging setup and
//! the interactive loop.

pub mod cli;
