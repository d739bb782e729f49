//! Validated Java identifiers.
//!
//! Recorded suite and test names come from a GUI text field and arrive with
//! spaces, punctuation, anything. They are used verbatim as class and method
//! names in the generated source, so they must be validated (or repaired)
//! before emission.

use crate::{GenError, Result};

/// A validated Java identifier.
///
/// Identifiers are checked at construction time: non-empty, no leading
/// digit, only `[A-Za-z0-9_$]`, not a reserved word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Java reserved words (plus the literals `true`, `false`, `null`) that
    /// cannot be used as identifiers.
    pub const RESERVED_WORDS: &'static [&'static str] = &[
        "abstract",
        "assert",
        "boolean",
        "break",
        "byte",
        "case",
        "catch",
        "char",
        "class",
        "const",
        "continue",
        "default",
        "do",
        "double",
        "else",
        "enum",
        "extends",
        "final",
        "finally",
        "float",
        "for",
        "goto",
        "if",
        "implements",
        "import",
        "instanceof",
        "int",
        "interface",
        "long",
        "native",
        "new",
        "package",
        "private",
        "protected",
        "public",
        "return",
        "short",
        "static",
        "strictfp",
        "super",
        "switch",
        "synchronized",
        "this",
        "throw",
        "throws",
        "transient",
        "try",
        "void",
        "volatile",
        "while",
        "true",
        "false",
        "null",
    ];

    /// Create a new identifier, validating it.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidIdentifier`] if the name is empty, starts
    /// with a digit, contains a character outside `[A-Za-z0-9_$]`, or is a
    /// reserved word.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(GenError::InvalidIdentifier {
                name,
                reason: "identifier cannot be empty".to_string(),
            });
        }

        if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Err(GenError::InvalidIdentifier {
                name,
                reason: "identifier cannot start with a digit".to_string(),
            });
        }

        for c in name.chars() {
            if !c.is_ascii_alphanumeric() && c != '_' && c != '$' {
                return Err(GenError::InvalidIdentifier {
                    name,
                    reason: format!("invalid character '{c}'"),
                });
            }
        }

        if Self::RESERVED_WORDS.contains(&name.as_str()) {
            return Err(GenError::InvalidIdentifier {
                name,
                reason: "reserved word".to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Repair an arbitrary recorded name into a valid identifier.
    ///
    /// Disallowed characters (whitespace, punctuation) are dropped, a
    /// leading digit gets a `_` prefix, and a reserved word gets a `_`
    /// suffix. `"Login Test"` becomes `LoginTest`.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidIdentifier`] when nothing salvageable
    /// remains, e.g. an all-whitespace name.
    pub fn sanitize(raw: &str) -> Result<Self> {
        let mut name: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '$')
            .collect();

        if name.is_empty() {
            return Err(GenError::InvalidIdentifier {
                name: raw.to_string(),
                reason: "no valid identifier characters".to_string(),
            });
        }
        if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            name.insert(0, '_');
        }
        if Self::RESERVED_WORDS.contains(&name.as_str()) {
            name.push('_');
        }

        Self::new(name)
    }

    /// Get the identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
