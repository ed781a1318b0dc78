//! Flat key/value configuration mapping.
//!
//! Responsibilities:
//! - Store configuration keys with case-insensitive lookup.
//! - Apply last-write-wins semantics for duplicate keys.
//! - Keep values wrapped in `SecretString` so they never reach `Debug` output.
//!
//! Does NOT handle:
//! - Reading secrets from disk (see `loader`).
//! - Layering multiple providers (see `provider`).
//!
//! Invariants:
//! - At most one entry exists per case-folded key.
//! - The stored key spelling and value are those of the most recent insert.
//! - Iteration order is ascending by case-folded key.

use secrecy::SecretString;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone)]
struct Entry {
    key: String,
    value: SecretString,
}

/// A flat mapping from configuration key to secret value.
#[derive(Clone, Default)]
pub struct ConfigurationMapping {
    entries: BTreeMap<String, Entry>,
}

/// Case-folds a configuration key for comparison.
pub(crate) fn fold_key(key: &str) -> String {
    key.to_lowercase()
}

impl ConfigurationMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any entry whose key matches case-insensitively.
    ///
    /// Returns the replaced value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: SecretString) -> Option<SecretString> {
        let key = key.into();
        self.entries
            .insert(fold_key(&key), Entry { key, value })
            .map(|previous| previous.value)
    }

    /// Look up a value by key, ignoring case.
    pub fn get(&self, key: &str) -> Option<&SecretString> {
        self.entries.get(&fold_key(key)).map(|entry| &entry.value)
    }

    /// Look up an entry by key, ignoring case, returning its stored spelling.
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &SecretString)> {
        self.entries
            .get(&fold_key(key))
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    /// Whether a key is present, ignoring case.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&fold_key(key))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys in their stored spelling.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|entry| entry.key.as_str())
    }

    /// Entries in their stored spelling.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SecretString)> {
        self.entries
            .values()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    /// Merge another mapping on top of this one; `other` wins on collision.
    pub fn merge(&mut self, other: ConfigurationMapping) {
        for (folded, entry) in other.entries {
            self.entries.insert(folded, entry);
        }
    }
}

impl fmt::Debug for ConfigurationMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.keys().map(|key| (key, "[REDACTED]")))
            .finish()
    }
}

impl<K: Into<String>> FromIterator<(K, SecretString)> for ConfigurationMapping {
    fn from_iter<I: IntoIterator<Item = (K, SecretString)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iter {
            mapping.insert(key, value);
        }
        mapping
    }
}
