//! The `simple_json` catalog format.
//!
//! A catalog is a JSON object mapping key names to content. Nested objects
//! are accepted on input and flattened with `.` separators; output is always
//! flat.

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::loader::CatalogLoader;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Codec for the `simple_json` format.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleJsonFormat;

impl SimpleJsonFormat {
    /// Format selector understood by the remote download endpoint.
    pub const FORMAT: &'static str = "simple_json";

    /// Encodes a catalog as pretty-printed JSON.
    pub fn dump(&self, catalog: &Catalog) -> CatalogResult<String> {
        let flat: BTreeMap<&str, &str> = catalog.iter().collect();
        serde_json::to_string_pretty(&flat)
            .map_err(|e| CatalogError::invalid_format(Self::FORMAT, e.to_string()))
    }
}

impl CatalogLoader for SimpleJsonFormat {
    fn load(&self, content: &str, locale: &str, domain: &str) -> CatalogResult<Catalog> {
        let mut catalog = Catalog::with_domain(locale, domain);
        if content.trim().is_empty() {
            return Ok(catalog);
        }

        let value: Value = serde_json::from_str(content)
            .map_err(|e| CatalogError::invalid_format(Self::FORMAT, e.to_string()))?;
        let Value::Object(map) = value else {
            return Err(CatalogError::invalid_format(
                Self::FORMAT,
                "expected a JSON object",
            ));
        };

        flatten_into(&mut catalog, "", map)?;
        Ok(catalog)
    }

    fn format(&self) -> Option<&str> {
        Some(Self::FORMAT)
    }
}

fn flatten_into(catalog: &mut Catalog, prefix: &str, map: Map<String, Value>) -> CatalogResult<()> {
    for (key, value) in map {
        let full_key = if prefix.is_empty() {
            key
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::String(content) => catalog.set(full_key, content),
            Value::Number(n) => catalog.set(full_key, n.to_string()),
            Value::Bool(b) => catalog.set(full_key, b.to_string()),
            // untranslated
            Value::Null => {}
            Value::Object(nested) => flatten_into(catalog, &full_key, nested)?,
            Value::Array(_) => return Err(CatalogError::UnsupportedValue { key: full_key }),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn load_flat_object() {
        let catalog = SimpleJsonFormat
            .load(r#"{"hello": "Bonjour", "bye": "Au revoir"}"#, "fr", "messages")
            .unwrap();

        assert_eq!(catalog.locale(), "fr");
        assert_eq!(catalog.domain(), "messages");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("hello"), Some("Bonjour"));
    }

    #[test]
    fn load_flattens_nested_objects() {
        let catalog = SimpleJsonFormat
            .load(
                r#"{"form": {"submit": "Send", "count": 3, "draft": null}}"#,
                "en",
                "validators",
            )
            .unwrap();

        assert_eq!(catalog.get("form.submit"), Some("Send"));
        assert_eq!(catalog.get("form.count"), Some("3"));
        assert!(!catalog.contains("form.draft"));
    }

    #[test]
    fn load_empty_body() {
        let catalog = SimpleJsonFormat.load("  ", "en", "messages").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn load_rejects_non_objects() {
        let err = SimpleJsonFormat.load("[1, 2]", "en", "messages").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFormat { .. }));

        let err = SimpleJsonFormat
            .load(r#"{"list": ["a"]}"#, "en", "messages")
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedValue { key } if key == "list"));

        let err = SimpleJsonFormat.load("{not json", "en", "messages").unwrap_err();
        assert!(err.to_string().starts_with("invalid simple_json content"));
    }

    #[test]
    fn dump_is_flat_and_sorted() {
        let catalog = Catalog::new("en")
            .with_translation("b", "B")
            .with_translation("a.x", "AX");

        let json = SimpleJsonFormat.dump(&catalog).unwrap();
        let a = json.find("\"a.x\"").unwrap();
        let b = json.find("\"b\"").unwrap();
        assert!(a < b);
    }

    proptest! {
        #[test]
        fn dump_then_load_preserves_translations(
            entries in prop::collection::btree_map("[a-z][a-z0-9_]{0,12}", ".{0,40}", 0..20)
        ) {
            let mut catalog = Catalog::new("en");
            catalog.extend(entries);

            let json = SimpleJsonFormat.dump(&catalog).unwrap();
            let loaded = SimpleJsonFormat.load(&json, "en", "messages").unwrap();
            prop_assert_eq!(loaded, catalog);
        }
    }
}
