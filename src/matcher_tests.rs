//! Tests for prefix matching

use super::*;
use proptest::prelude::*;

#[test]
fn test_empty_query_matches_everything() {
    assert!(matches("", "Queen"));
    assert!(matches("", ""));
    assert!(matches("   ", "Pink Floyd"));
}

#[test]
fn test_prefix_is_case_insensitive() {
    assert!(matches("jo", "John"));
    assert!(matches("JO", "joanne"));
    assert!(matches("Jo", "JOHN"));
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert!(matches("  jo ", "John"));
    assert!(matches("jo", "  John  "));
}

#[test]
fn test_substring_is_not_a_prefix() {
    assert!(!matches("ohn", "John"));
    assert!(!matches("mike", "John"));
}

#[test]
fn test_empty_name_only_matches_empty_query() {
    assert!(!matches("a", ""));
    assert!(matches("", ""));
}

#[test]
fn test_query_longer_than_name() {
    assert!(!matches("Johnny", "John"));
}

#[test]
fn test_normalize_query() {
    assert_eq!(normalize_query("  The Beatles "), "the beatles");
    assert_eq!(normalize_query(""), "");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_matches_is_trimmed_lowercase_starts_with(
        query in "[a-zA-Z0-9 ]{0,8}",
        name in "[a-zA-Z0-9 ]{0,16}"
    ) {
        let expected = name.trim().to_lowercase().starts_with(&query.trim().to_lowercase());
        prop_assert_eq!(matches(&query, &name), expected);
    }

    #[test]
    fn prop_name_always_matches_its_own_prefix(
        prefix in "[a-zA-Z0-9 ]{0,8}",
        rest in "[a-zA-Z0-9 ]{0,8}"
    ) {
        let name = format!("{}{}", prefix, rest);
        prop_assert!(matches(&prefix, &name));
        prop_assert!(matches(&prefix.to_uppercase(), &name.to_lowercase()));
    }
}
