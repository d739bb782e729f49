//! Property-based tests for the translation engine.
//!
//! proptest invariants over locator translation, identifier sanitization,
//! and generator determinism.

#![allow(clippy::unwrap_used)]

use proptest::prelude::*;
use sidegen::prelude::*;
use sidegen::{locator, value};

// === Locator Property Tests ===

proptest! {
    /// Strings without `=` pass through unchanged, never erroring.
    #[test]
    fn prop_no_separator_passes_through(raw in "[^=]{0,30}") {
        prop_assert_eq!(locator::translate(&raw).unwrap(), raw);
    }

    /// All five strategies translate, with the payload embedded verbatim.
    #[test]
    fn prop_known_strategies_translate(
        idx in 0usize..5,
        payload in "[a-zA-Z0-9_#./\\[\\]=-]{1,20}"
    ) {
        let strategy = ["id", "name", "css", "xpath", "index"][idx];
        let raw = format!("{strategy}={payload}");
        let expr = locator::translate(&raw).unwrap();
        prop_assert!(expr.contains(&payload), "{} missing from {}", payload, expr);
    }

    /// The split is on the first `=`: payloads keep their own separators.
    #[test]
    fn prop_split_is_on_first_separator(payload in "[a-z]{1,5}=[a-z]{1,5}") {
        let expr = locator::translate(&format!("css={payload}")).unwrap();
        prop_assert_eq!(expr, format!("\"{}\"", payload));
    }

    /// Strategies outside the table are rejected.
    #[test]
    fn prop_unknown_strategy_rejected(
        strategy in "[a-z]{1,12}",
        payload in "[a-z0-9]{0,10}"
    ) {
        prop_assume!(!["id", "name", "css", "xpath", "index"].contains(&strategy.as_str()));
        let raw = format!("{strategy}={payload}");
        prop_assert!(
            matches!(
                locator::translate(&raw),
                Err(GenError::InvalidLocator { .. })
            ),
            "expected Err(GenError::InvalidLocator) for {}",
            raw
        );
    }
}

// === Value Property Tests ===

proptest! {
    /// Only the one symbolic key constant translates.
    #[test]
    fn prop_unknown_keys_rejected(v in "[a-zA-Z${}_]{1,20}") {
        prop_assume!(v != "${KEY_ENTER}");
        prop_assert!(value::translate_key(&v).is_err());
    }

    /// `label=` always yields a selectOption call with the label verbatim.
    #[test]
    fn prop_select_label_translates(label in "[a-zA-Z0-9 ]{1,20}") {
        let expr = value::translate_select_option(&format!("label={label}")).unwrap();
        prop_assert_eq!(expr, format!("selectOption(\"{}\")", label));
    }
}

// === Identifier Property Tests ===

proptest! {
    /// Sanitizing keeps every alphanumeric character and yields a name that
    /// re-validates.
    #[test]
    fn prop_sanitize_yields_valid_identifier(raw in "[a-zA-Z][a-zA-Z0-9 .,!-]{0,20}") {
        let ident = Identifier::sanitize(&raw).unwrap();
        prop_assert!(Identifier::new(ident.as_str()).is_ok());
    }

    /// Sanitized identifiers contain no whitespace or punctuation.
    #[test]
    fn prop_sanitize_output_charset(raw in "[a-zA-Z0-9 .,!()-]{1,20}") {
        if let Ok(ident) = Identifier::sanitize(&raw) {
            prop_assert!(ident
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$'));
        }
    }

    /// Already-valid identifiers survive sanitization unchanged.
    #[test]
    fn prop_sanitize_is_identity_on_valid(name in "[a-zA-Z_$][a-zA-Z0-9_$]{0,15}") {
        prop_assume!(!Identifier::RESERVED_WORDS.contains(&name.as_str()));
        let ident = Identifier::sanitize(&name).unwrap();
        prop_assert_eq!(ident.as_str(), name.as_str());
    }
}

// === Generator Property Tests ===

proptest! {
    /// Same suite in, byte-identical lines out.
    #[test]
    fn prop_generation_deterministic(
        suite_name in "[A-Z][a-zA-Z ]{1,15}",
        test_name in "[A-Z][a-zA-Z]{1,15}",
        path in "/[a-z]{1,10}",
        element in "[a-z][a-z0-9]{1,10}"
    ) {
        let suite = Suite {
            name: suite_name,
            url: "https://example.com".to_string(),
            tests: vec![SideTest {
                name: test_name,
                commands: vec![
                    SideCommand {
                        command: "open".to_string(),
                        target: path,
                        ..SideCommand::default()
                    },
                    SideCommand {
                        command: "click".to_string(),
                        target: format!("id={element}"),
                        ..SideCommand::default()
                    },
                ],
                ..SideTest::default()
            }],
            ..Suite::default()
        };
        prop_assert_eq!(generate(&suite).unwrap(), generate(&suite).unwrap());
    }
}
