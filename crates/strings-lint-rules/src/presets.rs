//! Rule presets built from injected readers.

use crate::ignore_file::IgnoreFileParser;
use crate::{JsonCommentRule, StructuredPlaceholderComment, UnusedGeneratedStrings};
use std::sync::Arc;
use strings_lint_core::{ComposedSource, Config, RuleBox, SourceRef};

/// The readers a rule set is built from.
///
/// Readers are shared between rules, so each one must be safe to call from
/// several rules in turn.
#[derive(Clone)]
pub struct Collaborators {
    /// Readers for declaration files.
    pub declarations: Vec<SourceRef>,
    /// Scanners for usage sites in application code.
    pub usages: Vec<SourceRef>,
    /// Reader for ignore files, if the project uses them.
    pub ignore_files: Option<Arc<dyn IgnoreFileParser>>,
}

impl Collaborators {
    /// Creates collaborators with no ignore-file reader.
    #[must_use]
    pub fn new(declarations: Vec<SourceRef>, usages: Vec<SourceRef>) -> Self {
        Self {
            declarations,
            usages,
            ignore_files: None,
        }
    }

    /// Sets the ignore-file reader.
    #[must_use]
    pub fn ignore_files(mut self, parser: Arc<dyn IgnoreFileParser>) -> Self {
        self.ignore_files = Some(parser);
        self
    }

    fn declaration_source(&self) -> SourceRef {
        Arc::new(ComposedSource::new(self.declarations.clone()))
    }

    fn usage_source(&self) -> SourceRef {
        Arc::new(ComposedSource::new(self.usages.clone()))
    }
}

/// Preset rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// The JSON comment rule and the unused-string rule.
    Recommended,
    /// The legacy placeholder comment rule and the unused-string rule.
    Legacy,
    /// Every rule.
    All,
}

impl Preset {
    /// Looks up a preset by its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "recommended" => Some(Self::Recommended),
            "legacy" => Some(Self::Legacy),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self, config: &Config, collaborators: &Collaborators) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(config, collaborators),
            Self::Legacy => legacy_rules(config, collaborators),
            Self::All => all_rules(config, collaborators),
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `json_comment_rule`
/// - `unused_swiftgen_strings`
#[must_use]
pub fn recommended_rules(config: &Config, collaborators: &Collaborators) -> Vec<RuleBox> {
    vec![
        Box::new(JsonCommentRule::from_config(
            config,
            collaborators.declaration_source(),
        )),
        unused_rule(config, collaborators),
    ]
}

/// Returns the legacy set of rules.
///
/// Includes:
/// - `structured_placeholder_comment`
/// - `unused_swiftgen_strings`
#[must_use]
pub fn legacy_rules(config: &Config, collaborators: &Collaborators) -> Vec<RuleBox> {
    vec![
        Box::new(StructuredPlaceholderComment::from_config(
            config,
            collaborators.declaration_source(),
        )),
        unused_rule(config, collaborators),
    ]
}

/// Returns all available rules.
#[must_use]
pub fn all_rules(config: &Config, collaborators: &Collaborators) -> Vec<RuleBox> {
    vec![
        Box::new(JsonCommentRule::from_config(
            config,
            collaborators.declaration_source(),
        )),
        Box::new(StructuredPlaceholderComment::from_config(
            config,
            collaborators.declaration_source(),
        )),
        unused_rule(config, collaborators),
    ]
}

fn unused_rule(config: &Config, collaborators: &Collaborators) -> RuleBox {
    let rule = UnusedGeneratedStrings::from_config(
        config,
        collaborators.declaration_source(),
        collaborators.usage_source(),
    );
    match &collaborators.ignore_files {
        Some(parser) => Box::new(rule.ignore_files(Arc::clone(parser))),
        None => Box::new(rule),
    }
}
