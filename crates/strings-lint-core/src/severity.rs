//! Per-kind severity resolution shared by every rule.

use crate::config::RuleConfig;
use crate::types::Severity;
use std::collections::HashMap;
use tracing::debug;

/// A closed set of reasons a rule's check can fail.
///
/// The identifier is the configuration lookup key and never depends on the
/// kind's payload: `containsInvalidPlaceholders` is looked up the same way
/// whatever placeholders were rejected.
pub trait ViolationKind {
    /// Stable identifier used in `severity_map`.
    fn identifier(&self) -> &'static str;

    /// The reason fragment describing this kind.
    fn reason(&self) -> String;
}

/// Maps violation-kind identifiers to severities, with a rule-level default.
///
/// Built once when a rule is constructed and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeverityConfiguration {
    default: Severity,
    overrides: HashMap<String, Severity>,
}

impl SeverityConfiguration {
    /// Creates a configuration where every kind uses `default`.
    #[must_use]
    pub fn new(default: Severity) -> Self {
        Self {
            default,
            overrides: HashMap::new(),
        }
    }

    /// Adds an override for one kind.
    #[must_use]
    pub fn with_override(mut self, identifier: impl Into<String>, severity: Severity) -> Self {
        self.overrides.insert(identifier.into(), severity);
        self
    }

    /// Builds a configuration from a rule's `severity` and `severity_map` keys.
    ///
    /// Missing or unparsable values fall back to `default`; this never fails.
    #[must_use]
    pub fn from_rule_config(config: Option<&RuleConfig>, default: Severity) -> Self {
        let Some(config) = config else {
            return Self::new(default);
        };

        let default = config
            .get_str("severity")
            .and_then(|name| parse_or_log("severity", name))
            .unwrap_or(default);

        let overrides = config
            .get_str_map("severity_map")
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(kind, name)| {
                let severity = parse_or_log(&kind, &name)?;
                Some((kind, severity))
            })
            .collect();

        Self { default, overrides }
    }

    /// Returns the rule-level default severity.
    #[must_use]
    pub fn default_severity(&self) -> Severity {
        self.default
    }

    /// Resolves the severity for a kind.
    #[must_use]
    pub fn resolve(&self, kind: &impl ViolationKind) -> Severity {
        self.resolve_identifier(kind.identifier())
    }

    /// Resolves the severity for a kind identifier.
    #[must_use]
    pub fn resolve_identifier(&self, identifier: &str) -> Severity {
        self.overrides
            .get(identifier)
            .copied()
            .unwrap_or(self.default)
    }
}

impl Default for SeverityConfiguration {
    fn default() -> Self {
        Self::new(Severity::Warning)
    }
}

fn parse_or_log(key: &str, name: &str) -> Option<Severity> {
    match name.parse() {
        Ok(severity) => Some(severity),
        Err(e) => {
            debug!("Ignoring severity for `{key}`: {e}");
            None
        }
    }
}
