//! Special command-value translation.
//!
//! Two independent mappings: symbolic key constants for `sendKeys`, and the
//! `<mode>=<payload>` grammar of `select` values. Both are closed tables;
//! unmapped input is an error, never a silent pass-through.

use crate::{GenError, Result};

/// Translate a symbolic key constant into a Selenium `Keys` expression.
///
/// # Errors
///
/// Returns [`GenError::UnknownKeyCode`] for anything but `${KEY_ENTER}`,
/// the only constant the recorder vocabulary covers so far.
pub fn translate_key(value: &str) -> Result<String> {
    match value {
        "${KEY_ENTER}" => Ok("Keys.ENTER".to_owned()),
        _ => Err(GenError::UnknownKeyCode {
            value: value.to_owned(),
        }),
    }
}

/// Translate a `select` value into a Selenide option-select method call.
///
/// # Errors
///
/// Returns [`GenError::InvalidSelectOption`] when the value has no
/// `<mode>=<payload>` shape, and [`GenError::UnsupportedSelectOption`] for
/// any mode other than `label`.
pub fn translate_select_option(value: &str) -> Result<String> {
    let Some((mode, payload)) = value.split_once('=') else {
        return Err(GenError::InvalidSelectOption {
            value: value.to_owned(),
        });
    };

    match mode {
        "label" => Ok(format!("selectOption(\"{payload}\")")),
        _ => Err(GenError::UnsupportedSelectOption {
            mode: mode.to_owned(),
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn key_enter_translates() {
        assert_eq!(translate_key("${KEY_ENTER}").unwrap(), "Keys.ENTER");
    }

    #[test]
    fn other_keys_are_rejected() {
        let err = translate_key("${KEY_TAB}").unwrap_err();
        assert!(matches!(err, GenError::UnknownKeyCode { ref value } if value == "${KEY_TAB}"));
    }

    #[test]
    fn plain_text_is_not_a_key() {
        assert!(translate_key("hello").is_err());
    }

    #[test]
    fn select_by_label() {
        assert_eq!(
            translate_select_option("label=Standard shipping").unwrap(),
            "selectOption(\"Standard shipping\")"
        );
    }

    #[test]
    fn select_unsupported_mode() {
        let err = translate_select_option("value=std").unwrap_err();
        assert!(matches!(err, GenError::UnsupportedSelectOption { ref mode } if mode == "value"));
    }

    #[test]
    fn select_missing_separator() {
        let err = translate_select_option("Standard").unwrap_err();
        assert!(matches!(err, GenError::InvalidSelectOption { .. }));
    }

    #[test]
    fn select_label_keeps_embedded_separator() {
        assert_eq!(
            translate_select_option("label=a=b").unwrap(),
            "selectOption(\"a=b\")"
        );
    }
}
