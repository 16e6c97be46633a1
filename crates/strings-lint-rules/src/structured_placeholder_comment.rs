//! Legacy rule checking description and placeholders of structured comments.
//!
//! # Rationale
//!
//! Predates [`crate::JsonCommentRule`] and is kept for projects that have not
//! adopted screenshots or length limits. Unknown keys, `img` and
//! `max_character_count` are not inspected.
//!
//! # Configuration
//!
//! - `severity`: severity of every violation (default: warning)

use crate::comment::CommentValidator;
use crate::reason::comment_reason;
use strings_lint_core::{
    collect_records, Config, LocalizedRecord, Rule, Severity, SeverityConfiguration, SourceFile,
    SourceRef, Violation, ViolationKind,
};

/// Rule identifier for the structured placeholder comment rule.
pub const IDENTIFIER: &str = "structured_placeholder_comment";

/// Rule name for the structured placeholder comment rule.
pub const NAME: &str = "StructuredPlaceholderComment";

/// Checks description and placeholder entries against a fixed vocabulary.
pub struct StructuredPlaceholderComment {
    source: SourceRef,
    validator: CommentValidator,
    severity: Severity,
    declared: Vec<LocalizedRecord>,
}

impl StructuredPlaceholderComment {
    /// Creates a new rule reading declarations from `source`.
    #[must_use]
    pub fn new(source: SourceRef) -> Self {
        Self {
            source,
            validator: CommentValidator::legacy(),
            severity: Severity::Warning,
            declared: Vec::new(),
        }
    }

    /// Creates a rule configured from the `structured_placeholder_comment`
    /// block.
    #[must_use]
    pub fn from_config(config: &Config, source: SourceRef) -> Self {
        let severity =
            SeverityConfiguration::from_rule_config(config.rule(IDENTIFIER), Severity::Warning)
                .default_severity();
        Self::new(source).severity(severity)
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for StructuredPlaceholderComment {
    fn identifier(&self) -> &'static str {
        IDENTIFIER
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Structured placeholder comment is incorrect"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn process_file(&mut self, file: &SourceFile) {
        self.declared.extend(collect_records(self.source.as_ref(), file));
    }

    fn violations(&self) -> Vec<Violation> {
        self.declared
            .iter()
            .filter_map(|record| {
                let kind = self.validator.validate(record)?;
                Some(Violation::new(
                    IDENTIFIER,
                    NAME,
                    self.severity,
                    record.location.clone(),
                    comment_reason(&record.key, &kind.reason(), None),
                ))
            })
            .collect()
    }
}
