//! Catalogs of translations for one locale and domain.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Domain used when none is specified.
pub const DEFAULT_DOMAIN: &str = "messages";

/// All translations for one locale within one domain.
///
/// Translations are kept sorted by key so iteration is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    locale: String,
    domain: String,
    translations: BTreeMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog in the default domain.
    pub fn new(locale: impl Into<String>) -> Self {
        Self::with_domain(locale, DEFAULT_DOMAIN)
    }

    /// Creates an empty catalog in the given domain.
    ///
    /// An empty domain falls back to [`DEFAULT_DOMAIN`].
    pub fn with_domain(locale: impl Into<String>, domain: impl Into<String>) -> Self {
        let domain = domain.into();
        Self {
            locale: locale.into(),
            domain: if domain.is_empty() {
                DEFAULT_DOMAIN.to_string()
            } else {
                domain
            },
            translations: BTreeMap::new(),
        }
    }

    /// Adds a translation, builder style.
    pub fn with_translation(mut self, key: impl Into<String>, content: impl Into<String>) -> Self {
        self.set(key, content);
        self
    }

    /// Returns the locale.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Sets a translation, replacing any previous content for the key.
    pub fn set(&mut self, key: impl Into<String>, content: impl Into<String>) {
        self.translations.insert(key.into(), content.into());
    }

    /// Gets the content for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }

    /// Returns true if the catalog has content for the key.
    pub fn contains(&self, key: &str) -> bool {
        self.translations.contains_key(key)
    }

    /// Removes a translation.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.translations.remove(key)
    }

    /// Returns the number of translations.
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    /// Returns true if the catalog has no translations.
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }

    /// Iterates over `(key, content)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.translations
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over key names in key order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.translations.keys().map(String::as_str)
    }

    /// Returns true if both catalogs address the same locale and domain.
    pub fn same_target(&self, other: &Catalog) -> bool {
        self.locale == other.locale && self.domain == other.domain
    }

    /// Copies every translation of `other` into this catalog.
    ///
    /// Content from `other` wins on conflicting keys.
    pub fn merge(&mut self, other: &Catalog) {
        for (key, content) in other.iter() {
            self.set(key, content);
        }
    }

    /// Keeps only the translations whose keys satisfy the predicate.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.translations.retain(|key, _| keep(key));
    }
}

impl IntoIterator for Catalog {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.translations.into_iter()
    }
}

impl Extend<(String, String)> for Catalog {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.translations.extend(iter);
    }
}
