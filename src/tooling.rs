//! Tooling & Integration Layer
//!
//! CLI entry points, the interactive shell, and text formatting for the
//! contact book session.

pub mod cli;
pub mod format;
pub mod shell;

pub use cli::{Cli, CliContext, Commands};
