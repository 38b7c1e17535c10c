//! Edge Case Tests
//!
//! Reverse lookup compares identity tokens only:
//! - A foreign instance with a known token maps to that case
//! - Tokens are case-sensitive and whitespace-sensitive
//! - Unicode and empty tokens simply miss

use crate::*;
use std::io::{self, Write};

fn loud(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "not the real third state")
}

#[test]
fn test_foreign_instance_with_known_token() {
    let registry = CaseRegistry::new();
    let impostor = StateObject::new("third", 99, loud);

    assert_eq!(registry.case_for(&impostor), Some(Case::ThirdState));
    // The registry's own object is untouched
    assert_eq!(registry.resolve(Case::ThirdState).value(), 3);
}

#[test]
fn test_token_near_misses() {
    let registry = CaseRegistry::new();
    let near_misses = vec!["First", "first ", " first", "firstState", "1", "fïrst"];

    for token in near_misses {
        assert_eq!(
            registry.case_for(&StateObject::from(token)),
            None,
            "'{}' should not match any case",
            token
        );
    }
}

#[test]
fn test_unusual_tokens_miss() {
    let registry = CaseRegistry::new();
    let tokens = vec![
        String::new(),
        "\u{1f600}".to_string(),
        "x".repeat(10_000),
        "first\0".to_string(),
    ];

    for token in tokens {
        assert_eq!(registry.case_for_identity(&token), None);
    }
}
