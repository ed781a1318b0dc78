//! File-name policy: namespace extraction, filtering, and key transform.
//!
//! These are pure functions over strings so the policy can be exercised
//! without touching the filesystem.

use crate::constants::CONFIG_KEY_SEPARATOR;
use crate::mapping::fold_key;

/// A file name split into its namespace and key parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretName<'a> {
    /// Namespace prefix, empty when the name has none.
    pub namespace: &'a str,
    /// Everything after the first namespace delimiter.
    pub remainder: &'a str,
}

/// Outcome of applying the file-name policy to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The file is loaded under `key`.
    Accepted { key: String },
    /// The namespace is not accepted by the source.
    Rejected { namespace: String },
    /// The namespace is accepted but no key remains (e.g. `Test.`).
    ///
    /// Such files are skipped and reported; nothing is ever loaded under the
    /// empty key `""`, unlike hosts that accept `Test.` as a root-level value.
    EmptyKey,
}

/// Split on the first occurrence of `delimiter`.
///
/// Names without the delimiter, and any name when the delimiter is empty,
/// have an empty namespace and the whole name as remainder.
pub fn split_namespace<'a>(file_name: &'a str, delimiter: &str) -> SecretName<'a> {
    if !delimiter.is_empty()
        && let Some((namespace, remainder)) = file_name.split_once(delimiter)
    {
        return SecretName {
            namespace,
            remainder,
        };
    }

    SecretName {
        namespace: "",
        remainder: file_name,
    }
}

/// Replace every `key_delimiter` with the hierarchical `:` separator.
///
/// An empty delimiter leaves the remainder unchanged.
pub fn to_config_key(remainder: &str, key_delimiter: &str) -> String {
    if key_delimiter.is_empty() {
        remainder.to_string()
    } else {
        remainder.replace(key_delimiter, CONFIG_KEY_SEPARATOR)
    }
}

/// Decides which namespaces a source accepts.
#[derive(Debug, Clone, Copy)]
pub struct NamespaceFilter<'a> {
    expected: &'a [String],
    include_empty: bool,
}

impl<'a> NamespaceFilter<'a> {
    /// Create a filter over `expected` namespaces.
    pub fn new(expected: &'a [String], include_empty: bool) -> Self {
        Self {
            expected,
            include_empty,
        }
    }

    /// Whether a file with this namespace is loaded.
    pub fn accepts(&self, namespace: &str) -> bool {
        if namespace.is_empty() {
            return self.include_empty;
        }

        let folded = fold_key(namespace);
        self.expected
            .iter()
            .any(|candidate| candidate == namespace || fold_key(candidate) == folded)
    }
}
