//! sidegen CLI library.
//!
//! Thin I/O collaborator around the `sidegen` engine: argument parsing,
//! per-file conversion (read, parse, generate, atomic write), and status
//! reporting. The engine itself stays a pure function; every policy
//! decision about failing runs lives here.

#![warn(missing_docs)]

mod commands;
mod config;
mod convert;
mod error;
mod output;

pub use commands::{Cli, ColorArg};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use convert::convert_file;
pub use error::{CliError, CliResult};
pub use output::Reporter;
