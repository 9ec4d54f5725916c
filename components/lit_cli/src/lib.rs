//! Data literal to JSON CLI Library
//!
//! Provides the Converter struct and supporting modules for the `lit2json`
//! command line tool.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod converter;
pub mod error;
pub mod repl;

pub use cli::Cli;
pub use converter::Converter;
pub use error::{CliError, CliResult};
