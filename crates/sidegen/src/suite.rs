//! Document model for recorded `.side` suites.
//!
//! The `.side` format is the JSON document Selenium IDE saves: one suite,
//! an ordered list of tests, each an ordered list of commands. The model is
//! read-only for the engine; nothing here is mutated after deserialization.

use serde::Deserialize;

use crate::{Identifier, Result};

/// A whole recorded test script document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Suite {
    /// Recording id (a UUID in practice).
    pub id: String,
    /// `.side` schema version.
    pub version: String,
    /// Suite name as typed in the recorder; feeds [`Suite::class_name`].
    pub name: String,
    /// Base URL every relative `open` target resolves against.
    pub url: String,
    /// Recorded tests, in suite order.
    pub tests: Vec<SideTest>,
    /// URLs the recording touched.
    pub urls: Vec<String>,
    /// Recorder plugins, unused by the engine.
    pub plugins: Vec<String>,
}

/// One named sequence of commands, mapped 1:1 to a generated test method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SideTest {
    /// Recording id.
    pub id: String,
    /// Test name; sanitized into the generated method identifier.
    pub name: String,
    /// Recorded commands, in execution order.
    pub commands: Vec<SideCommand>,
}

/// One recorded UI action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SideCommand {
    /// Recording id.
    pub id: String,
    /// Free-text comment from the recorder.
    pub comment: String,
    /// Command name, e.g. `click`, `type`, `open`.
    pub command: String,
    /// Primary locator string, `"<strategy>=<payload>"` or a literal.
    pub target: String,
    /// Alternative locator strategies recorded as fallbacks. Parsed for
    /// schema fidelity, never consulted by the engine.
    pub targets: Vec<Vec<String>>,
    /// Command value (typed text, key code, select option, window size).
    pub value: String,
}

impl Suite {
    /// Parse a suite from `.side` JSON.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The generated class name: the suite name with whitespace stripped,
    /// repaired into a valid Java identifier. Also names the output file,
    /// `<ClassName>.java`.
    pub fn class_name(&self) -> Result<Identifier> {
        Identifier::sanitize(&self.name)
    }
}
