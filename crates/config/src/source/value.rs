//! How raw secret file contents become configuration values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ConfigError;
use crate::constants::ENV_VALUE_POLICY;

/// Policy applied to the text read from a secret file.
///
/// Orchestrators commonly append a trailing newline when writing secret
/// files, so `Trim` is the default. Use `Preserve` when the secret must
/// match the file byte-for-byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValuePolicy {
    /// Strip leading and trailing whitespace.
    #[default]
    Trim,
    /// Keep the file contents exactly as read.
    Preserve,
}

impl ValuePolicy {
    /// Apply the policy to raw file contents.
    pub fn apply(self, raw: String) -> String {
        match self {
            ValuePolicy::Preserve => raw,
            ValuePolicy::Trim => {
                let trimmed = raw.trim();
                if trimmed.len() == raw.len() {
                    raw
                } else {
                    trimmed.to_string()
                }
            }
        }
    }
}

impl fmt::Display for ValuePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuePolicy::Trim => f.write_str("trim"),
            ValuePolicy::Preserve => f.write_str("preserve"),
        }
    }
}

impl FromStr for ValuePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trim" => Ok(ValuePolicy::Trim),
            "preserve" => Ok(ValuePolicy::Preserve),
            _ => Err(ConfigError::InvalidValue {
                var: ENV_VALUE_POLICY.to_string(),
                message: format!("must be trim or preserve (got {s})"),
            }),
        }
    }
}
