//! Index of keys known to the remote service.

use crate::catalog::Catalog;
use crate::key::{normalize_key_name, TranslationKey};
use std::collections::{BTreeMap, BTreeSet};

/// Mapping from normalized key name to remote key identifier.
///
/// An index is built from scratch for every push cycle; it is never cached
/// or persisted. Lookups normalize the queried name first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoteKeyIndex {
    entries: BTreeMap<String, String>,
}

impl RemoteKeyIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key. A later insert for the same name replaces the id.
    pub fn insert(&mut self, name: &str, remote_id: impl Into<String>) {
        self.entries
            .insert(normalize_key_name(name), remote_id.into());
    }

    /// Returns the remote id for a key name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(&normalize_key_name(name))
            .map(String::as_str)
    }

    /// Returns true if the key name is known remotely.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&normalize_key_name(name))
    }

    /// Returns the number of known keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keys are known.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over bound keys in name order.
    pub fn keys(&self) -> impl Iterator<Item = TranslationKey> + '_ {
        self.entries
            .iter()
            .map(|(name, id)| TranslationKey::new(name).with_remote_id(id.clone()))
    }

    /// Merges all entries of `other` into this index.
    pub fn merge(&mut self, other: RemoteKeyIndex) {
        self.entries.extend(other.entries);
    }

    /// Returns the normalized names of catalog keys unknown to the index.
    ///
    /// Names are de-duplicated and sorted.
    pub fn missing_from(&self, catalog: &Catalog) -> Vec<String> {
        catalog
            .keys()
            .map(normalize_key_name)
            .filter(|name| !self.entries.contains_key(name))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Maps each translation of the catalog onto its remote id.
    ///
    /// Keys with no remote id are left out.
    pub fn rekey(&self, catalog: &Catalog) -> BTreeMap<String, String> {
        catalog
            .iter()
            .filter_map(|(key, content)| {
                self.get(key)
                    .map(|id| (id.to_string(), content.to_string()))
            })
            .collect()
    }
}

impl Extend<(String, String)> for RemoteKeyIndex {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        for (name, id) in iter {
            self.insert(&name, id);
        }
    }
}

impl FromIterator<(String, String)> for RemoteKeyIndex {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut index = RemoteKeyIndex::new();
        index.extend(iter);
        index
    }
}
