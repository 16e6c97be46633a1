//! Configuration types for strings-lint.
//!
//! Rule configuration is best-effort: a value that is missing or has the
//! wrong shape is ignored and the rule falls back to its built-in default.
//! Only a document that is not TOML at all is reported as an error.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset name (`recommended`, `legacy` or `all`).
    #[serde(default)]
    pub preset: Option<String>,

    /// Per-rule configurations, keyed by rule identifier.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Returns the configuration block for a rule, if present.
    #[must_use]
    pub fn rule(&self, identifier: &str) -> Option<&RuleConfig> {
        self.rules.get(identifier)
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, identifier: &str) -> bool {
        self.rules
            .get(identifier)
            .map_or(true, |c| c.get_bool("enabled", true))
    }
}

/// Per-rule configuration.
///
/// Values are kept as raw TOML so that one malformed key never prevents the
/// others from being read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Rule-specific options as key-value pairs.
    #[serde(flatten)]
    pub options: HashMap<String, toml::Value>,
}

impl RuleConfig {
    /// Creates a configuration from explicit options.
    #[must_use]
    pub fn from_options<I, K>(options: I) -> Self
    where
        I: IntoIterator<Item = (K, toml::Value)>,
        K: Into<String>,
    {
        Self {
            options: options.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Gets a boolean option with a default value.
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.options.get(key) {
            Some(toml::Value::Boolean(b)) => *b,
            Some(other) => {
                debug!("Ignoring non-boolean value for `{key}`: {other}");
                default
            }
            None => default,
        }
    }

    /// Gets a string option.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.options.get(key)? {
            toml::Value::String(s) => Some(s),
            other => {
                debug!("Ignoring non-string value for `{key}`: {other}");
                None
            }
        }
    }

    /// Gets a string array option.
    ///
    /// Returns `None` if the key is absent or not an array; non-string
    /// entries are skipped.
    #[must_use]
    pub fn get_str_array(&self, key: &str) -> Option<Vec<String>> {
        match self.options.get(key)? {
            toml::Value::Array(arr) => Some(
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect(),
            ),
            other => {
                debug!("Ignoring non-array value for `{key}`: {other}");
                None
            }
        }
    }

    /// Gets a table of string values.
    ///
    /// Returns `None` if the key is absent or not a table; non-string
    /// values are skipped.
    #[must_use]
    pub fn get_str_map(&self, key: &str) -> Option<HashMap<String, String>> {
        match self.options.get(key)? {
            toml::Value::Table(table) => Some(
                table
                    .iter()
                    .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                    .collect(),
            ),
            other => {
                debug!("Ignoring non-table value for `{key}`: {other}");
                None
            }
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Parse error in the configuration document.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
