//! Work journal CLI library.
//!
//! This crate provides the CLI interface for the work journal: argument
//! parsing, configuration, the `git log` subprocess collaborator, and the
//! command implementations.

mod cli;
pub mod commands;
mod config;
pub mod git;

pub use cli::{Cli, Commands};
pub use config::Config;
