//! Error types for the CLI

use std::path::PathBuf;

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Translation failure from the engine, tagged with the input file
    #[error("{}: {source}", .path.display())]
    Convert {
        /// The `.side` file that failed
        path: PathBuf,
        /// The underlying engine error
        source: sidegen::GenError,
    },

    /// Some suites failed in keep-going mode
    #[error("{failed} of {total} suites failed")]
    PartialFailure {
        /// Number of failing input files
        failed: usize,
        /// Total number of input files
        total: usize,
    },
}

impl CliError {
    /// Tag an engine error with the file it came from
    #[must_use]
    pub fn convert(path: impl Into<PathBuf>, source: sidegen::GenError) -> Self {
        Self::Convert {
            path: path.into(),
            source,
        }
    }
}
