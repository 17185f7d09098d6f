//! Prefix matching
//!
//! The single matching rule shared by the card grid and the suggestion list:
//! a case-insensitive "starts with" test on trimmed text. Deliberately literal,
//! no ranking or fuzziness.

/// Trim surrounding whitespace and case-fold
pub fn normalize_query(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Whether `name` starts with `query`, ignoring case and surrounding whitespace
///
/// An empty (or all-whitespace) query matches every name.
pub fn matches(query: &str, name: &str) -> bool {
    let query = normalize_query(query);
    if query.is_empty() {
        return true;
    }
    normalize_query(name).starts_with(&query)
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
