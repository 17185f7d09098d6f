//! Catalog records
//!
//! Suggestion candidates and catalog items share the same `{id, name}` shape
//! on the wire, but lookups in the wild are inconsistent about key casing
//! (`name`/`Name`, `id`/`ID`) and id type (string or number). Records are
//! normalized here, once, so nothing past this module sees the ambiguity.

use std::collections::HashSet;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::CardsearchError;

/// A suggestion record returned by the remote lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Candidate {
    pub id: String,
    pub name: String,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Normalize a single JSON record
    ///
    /// Non-object values and missing keys yield empty fields rather than errors.
    pub fn from_json(value: &Value) -> Self {
        match value.as_object() {
            Some(object) => Self {
                id: field_text(object, &["id", "ID"]),
                name: field_text(object, &["name", "Name"]),
            },
            None => Self::default(),
        }
    }

    /// Navigation target for a selected candidate
    pub fn detail_path(&self) -> String {
        format!("/artist/{}", self.id)
    }
}

/// A card already present in the view
///
/// The coordinator never creates or destroys items, it only toggles their
/// visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<Candidate> for Item {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
        }
    }
}

/// Parse a suggestion payload
///
/// Anything other than a JSON array is treated as "no candidates".
pub fn parse_candidates(payload: &Value) -> Vec<Candidate> {
    match payload {
        Value::Array(entries) => entries.iter().map(Candidate::from_json).collect(),
        _ => Vec::new(),
    }
}

/// Parse a catalog document into items
///
/// Unlike suggestion payloads, a catalog must be an array, and every record
/// needs an id of its own: the view tracks visibility per id.
pub fn parse_catalog(content: &str) -> Result<Vec<Item>, CardsearchError> {
    let document: Value = serde_json::from_str(content)
        .map_err(|e| CardsearchError::InvalidCatalog(e.to_string()))?;

    if !document.is_array() {
        return Err(CardsearchError::InvalidCatalog(
            "expected a JSON array of {id, name} records".to_string(),
        ));
    }

    let items: Vec<Item> = parse_candidates(&document)
        .into_iter()
        .map(Item::from)
        .collect();

    let mut seen = HashSet::new();
    for (index, item) in items.iter().enumerate() {
        if item.id.is_empty() {
            return Err(CardsearchError::InvalidCatalog(format!(
                "record {} ({:?}) has no id",
                index, item.name
            )));
        }
        if !seen.insert(item.id.as_str()) {
            return Err(CardsearchError::InvalidCatalog(format!(
                "duplicate id {:?} at record {}",
                item.id, index
            )));
        }
    }

    Ok(items)
}

/// Load a catalog file from disk
pub fn load_catalog(path: &Path) -> Result<Vec<Item>, CardsearchError> {
    let content = std::fs::read_to_string(path).map_err(|source| CardsearchError::CatalogRead {
        path: path.to_path_buf(),
        source,
    })?;
    let items = parse_catalog(&content)?;
    log::debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// First present key among `keys`, rendered as text
fn field_text(object: &Map<String, Value>, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|key| object.get(*key).filter(|v| !v.is_null()))
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
