//! Error types for the translation engine.

use thiserror::Error;

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, GenError>;

/// Errors that can occur while translating a recorded suite.
///
/// Every variant is a structural input error; none are transient, so the
/// engine never retries. The first error aborts generation for the whole
/// suite and no partial output is valid.
#[derive(Debug, Error)]
pub enum GenError {
    /// Locator strategy unrecognized or malformed.
    #[error("invalid locator: {raw}")]
    InvalidLocator {
        /// The original locator string, verbatim.
        raw: String,
    },

    /// A `sendKeys` value with no known translation.
    #[error("unknown keycode: {value}")]
    UnknownKeyCode {
        /// The untranslatable value.
        value: String,
    },

    /// A `select` value missing the `<mode>=<payload>` shape.
    #[error("invalid select option: {value}")]
    InvalidSelectOption {
        /// The malformed value.
        value: String,
    },

    /// A `select` mode outside the supported table.
    #[error("unsupported select option: {mode}")]
    UnsupportedSelectOption {
        /// The unmapped mode.
        mode: String,
    },

    /// Command name outside the closed vocabulary.
    #[error("unknown command: {command}:{value}")]
    UnknownCommand {
        /// The unrecognized command name.
        command: String,
        /// The command's value, for context.
        value: String,
    },

    /// A name that cannot be repaired into a Java identifier.
    #[error("invalid identifier '{name}': {reason}")]
    InvalidIdentifier {
        /// The offending name.
        name: String,
        /// Why it is invalid.
        reason: String,
    },

    /// Malformed `.side` document.
    #[error("malformed .side document: {0}")]
    Json(#[from] serde_json::Error),
}
