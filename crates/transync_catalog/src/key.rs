//! Translation keys.

use serde::{Deserialize, Serialize};

/// Normalizes a key name the way the remote service stores it.
///
/// Leading and trailing whitespace is removed and the name is lower-cased.
pub fn normalize_key_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// A translation key, optionally bound to its remote identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TranslationKey {
    name: String,
    remote_id: Option<String>,
}

impl TranslationKey {
    /// Creates a key with a normalized name and no remote id.
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_key_name(name),
            remote_id: None,
        }
    }

    /// Binds the key to a remote identifier.
    pub fn with_remote_id(mut self, remote_id: impl Into<String>) -> Self {
        self.remote_id = Some(remote_id.into());
        self
    }

    /// Returns the normalized name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the remote identifier, if assigned.
    pub fn remote_id(&self) -> Option<&str> {
        self.remote_id.as_deref()
    }

    /// Returns true once the key exists remotely.
    pub fn is_bound(&self) -> bool {
        self.remote_id.is_some()
    }
}
