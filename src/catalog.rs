//! Read-only catalog snapshot consumed by the guide builder.
//!
//! Records are kept as loose JSON objects because the upstream catalog feed
//! does not agree on which field identifies a menu. Lookups go through
//! [`CatalogRecord::text`] and [`extract_menu_key`].

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

/// Fields tried, in order, to identify the menu a catalog menu record describes.
pub const MENU_KEY_FIELDS: [&str; 2] = ["menu_id", "name"];

/// Fields tried, in order, to find the menu an item belongs to.
pub const ITEM_MENU_KEY_FIELDS: [&str; 3] = ["menu_id", "menu_name", "menu"];

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CatalogRecord(pub Map<String, Value>);

impl CatalogRecord {
    /// Trimmed text of a field. Numbers are rendered in decimal; absent,
    /// null and blank fields give `None`.
    pub fn text(&self, field: &str) -> Option<String> {
        let text = match self.0.get(field)? {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Whether a field holds a truthy value: a non-empty string, a non-zero
    /// number or `true`.
    pub fn is_set(&self, field: &str) -> bool {
        match self.0.get(field) {
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0),
            Some(Value::Bool(b)) => *b,
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
            Some(Value::Null) | None => false,
        }
    }
}

impl From<Value> for CatalogRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => CatalogRecord(map),
            _ => CatalogRecord::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub menus: Vec<CatalogRecord>,
    #[serde(default)]
    pub menu_items: Vec<CatalogRecord>,
    #[serde(default)]
    pub styles: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid catalog JSON")
    }

    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json_str(&raw)
            .with_context(|| format!("failed to parse catalog {}", path.display()))?;
        debug!(
            menus = catalog.menus.len(),
            menu_items = catalog.menu_items.len(),
            styles = catalog.styles.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }
}

/// Collapse whitespace runs to a single space and lowercase.
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize_menu_key(value: &str) -> String {
    value
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalized key from the first candidate field that yields a non-empty one,
/// or an empty string when none does.
pub fn extract_menu_key(record: &CatalogRecord, candidates: &[&str]) -> String {
    candidates
        .iter()
        .filter_map(|field| record.text(field))
        .map(|raw| normalize_menu_key(&raw))
        .find(|key| !key.is_empty())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> CatalogRecord {
        CatalogRecord::from(value)
    }

    #[test]
    fn normalize_collapses_and_lowercases() {
        assert_eq!(normalize_menu_key("  Valentine   Dinner "), "valentine dinner");
        assert_eq!(normalize_menu_key("발렌타인\t디너"), "발렌타인 디너");
        assert_eq!(normalize_menu_key("   "), "");
    }

    #[test]
    fn extract_prefers_earlier_candidates() {
        let rec = record(json!({"menu_id": 3, "menu_name": "French Dinner"}));
        assert_eq!(extract_menu_key(&rec, &ITEM_MENU_KEY_FIELDS), "3");
    }

    #[test]
    fn extract_skips_blank_candidates() {
        let rec = record(json!({"menu_id": "  ", "menu_name": null, "menu": "English  Dinner"}));
        assert_eq!(extract_menu_key(&rec, &ITEM_MENU_KEY_FIELDS), "english dinner");
    }

    #[test]
    fn extract_is_total() {
        let rec = record(json!({}));
        assert_eq!(extract_menu_key(&rec, &ITEM_MENU_KEY_FIELDS), "");
    }

    #[test]
    fn unit_price_truthiness() {
        let rec = record(json!({"a": 0, "b": 12000, "c": "", "d": "5000", "e": null}));
        assert!(!rec.is_set("a"));
        assert!(rec.is_set("b"));
        assert!(!rec.is_set("c"));
        assert!(rec.is_set("d"));
        assert!(!rec.is_set("e"));
        assert!(!rec.is_set("missing"));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let catalog = Catalog::from_json_str(r#"{"menus": [{"name": "A"}]}"#).unwrap();
        assert_eq!(catalog.menus.len(), 1);
        assert!(catalog.menu_items.is_empty());
        assert!(catalog.styles.is_empty());
    }
}
