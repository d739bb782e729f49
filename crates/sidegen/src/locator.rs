//! Locator-string translation.
//!
//! A recorded locator has the shape `"<strategy>=<payload>"`. Five
//! strategies are recognized; each maps to one Selenide selector
//! expression. A string without `=` is a literal and flows through
//! untouched.

use crate::{GenError, Result};

/// Translate a recorded locator into a Selenide selector expression.
///
/// The split is on the first `=`, so payloads may themselves contain `=`
/// (`css=div[data-kind=submit]` stays one CSS selector).
///
/// # Errors
///
/// Returns [`GenError::InvalidLocator`] for a strategy outside
/// `{id, name, css, xpath, index}`.
pub fn translate(raw: &str) -> Result<String> {
    let Some((strategy, payload)) = raw.split_once('=') else {
        return Ok(raw.to_owned());
    };

    match strategy {
        "id" => Ok(format!("\"#{payload}\"")),
        "name" => Ok(format!("byName(\"{payload}\")")),
        "css" => Ok(format!("\"{payload}\"")),
        "xpath" => Ok(format!("byXpath(\"{payload}\")")),
        "index" => Ok(payload.to_owned()),
        _ => Err(GenError::InvalidLocator {
            raw: raw.to_owned(),
        }),
    }
}
