//! Rule requiring every declared string to carry a valid structured comment.
//!
//! # Rationale
//!
//! Translators only see the string and its comment. A machine-checkable
//! comment guarantees they get a description, the meaning of each
//! placeholder, a screenshot, and any length limit.
//!
//! # Configuration
//!
//! - `severity`: default severity for every kind (default: warning)
//! - `severity_map`: per-kind overrides, keyed by kind identifier
//!   (e.g. `missingDescription = "error"`)
//! - `valid_placeholders`: replaces the built-in placeholder vocabulary
//! - `help_link`: URL appended to every reason
//!
//! Each declared record is checked independently on the rayon pool.

use crate::comment::{CommentValidator, DEFAULT_PLACEHOLDERS};
use crate::reason::comment_reason;
use strings_lint_core::aggregate::check_each;
use strings_lint_core::{
    collect_records, Config, LocalizedRecord, Rule, Severity, SeverityConfiguration, SourceFile,
    SourceRef, Violation, ViolationKind,
};

/// Rule identifier for the JSON comment rule.
pub const IDENTIFIER: &str = "json_comment_rule";

/// Rule name for the JSON comment rule.
pub const NAME: &str = "JSONCommentRule";

/// Validates the structured JSON comment of every declared string.
pub struct JsonCommentRule {
    source: SourceRef,
    validator: CommentValidator,
    severities: SeverityConfiguration,
    help_link: Option<String>,
    declared: Vec<LocalizedRecord>,
}

impl JsonCommentRule {
    /// Creates a new rule with default settings, reading declarations from
    /// `source`.
    #[must_use]
    pub fn new(source: SourceRef) -> Self {
        Self {
            source,
            validator: CommentValidator::default(),
            severities: SeverityConfiguration::new(Severity::Warning),
            help_link: None,
            declared: Vec::new(),
        }
    }

    /// Creates a rule configured from the `json_comment_rule` block.
    ///
    /// Missing or malformed values fall back to defaults.
    #[must_use]
    pub fn from_config(config: &Config, source: SourceRef) -> Self {
        let block = config.rule(IDENTIFIER);
        let mut rule = Self::new(source).severities(SeverityConfiguration::from_rule_config(
            block,
            Severity::Warning,
        ));

        if let Some(block) = block {
            if let Some(vocabulary) = block
                .get_str_array("valid_placeholders")
                .filter(|v| !v.is_empty())
            {
                rule = rule.valid_placeholders(vocabulary);
            }
            if let Some(link) = block.get_str("help_link") {
                rule = rule.help_link(link);
            }
        }
        rule
    }

    /// Sets the per-kind severities.
    #[must_use]
    pub fn severities(mut self, severities: SeverityConfiguration) -> Self {
        self.severities = severities;
        self
    }

    /// Replaces the placeholder vocabulary.
    #[must_use]
    pub fn valid_placeholders<I, S>(mut self, vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.validator = CommentValidator::new(vocabulary);
        self
    }

    /// Sets the help link appended to reasons.
    #[must_use]
    pub fn help_link(mut self, link: impl Into<String>) -> Self {
        self.help_link = Some(link.into());
        self
    }

    /// Returns the number of declared records accumulated so far.
    #[must_use]
    pub fn declared_count(&self) -> usize {
        self.declared.len()
    }

    fn check(&self, record: &LocalizedRecord) -> Option<Violation> {
        let kind = self.validator.validate(record)?;
        Some(Violation::new(
            IDENTIFIER,
            NAME,
            self.severities.resolve(&kind),
            record.location.clone(),
            comment_reason(&record.key, &kind.reason(), self.help_link.as_deref()),
        ))
    }
}

impl Rule for JsonCommentRule {
    fn identifier(&self) -> &'static str {
        IDENTIFIER
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "Placeholder comment is incorrect"
    }

    fn default_severity(&self) -> Severity {
        self.severities.default_severity()
    }

    fn process_file(&mut self, file: &SourceFile) {
        self.declared.extend(collect_records(self.source.as_ref(), file));
    }

    fn violations(&self) -> Vec<Violation> {
        check_each(&self.declared, |record| self.check(record))
    }
}

/// The built-in vocabulary, for callers building their own configuration.
#[must_use]
pub fn default_placeholders() -> Vec<String> {
    DEFAULT_PLACEHOLDERS.iter().map(|p| (*p).to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;
    use strings_lint_core::{FormatError, LocalizableSource, Location};

    /// Serves pre-built records for any `.strings` file.
    struct Records(Vec<LocalizedRecord>);

    impl LocalizableSource for Records {
        fn name(&self) -> &'static str {
            "records"
        }
        fn supports(&self, file: &SourceFile) -> bool {
            file.has_extension("strings")
        }
        fn parse(&self, _file: &SourceFile) -> Result<Vec<LocalizedRecord>, FormatError> {
            Ok(self.0.clone())
        }
    }

    fn declared(key: &str, line: usize, comment: &str, value: &str) -> LocalizedRecord {
        LocalizedRecord::new(key, Location::new("en.lproj/Localizable.strings", line, 1))
            .with_comment(comment)
            .with_value([value])
    }

    fn run(rule: &mut JsonCommentRule) -> Vec<Violation> {
        rule.process_file(&SourceFile::new("en.lproj/Localizable.strings", ""));
        rule.violations()
    }

    const VALID: &str = r#"{"description": "d", "placeholders": ["number"], "img": "https://x"}"#;

    #[test]
    fn valid_comment_has_no_violation() {
        let mut rule = JsonCommentRule::new(Arc::new(Records(vec![declared(
            "CART.COUNT",
            3,
            VALID,
            "%d items",
        )])));
        assert!(run(&mut rule).is_empty());
    }

    #[test]
    fn count_mismatch_is_reported_at_declaration() {
        let comment = r#"{"description": "d", "placeholders": [], "img": "https://x"}"#;
        let mut rule = JsonCommentRule::new(Arc::new(Records(vec![declared(
            "CART.COUNT",
            7,
            comment,
            "%d items",
        )])));
        let violations = run(&mut rule);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 7);
        assert_eq!(violations[0].severity, Severity::Warning);
        assert_eq!(violations[0].rule_identifier, IDENTIFIER);
        insta::assert_snapshot!(
            violations[0].reason,
            @r#"Comment for Localized string "CART.COUNT" number of placeholders don't match"#
        );
    }

    #[test]
    fn unsupported_files_are_ignored() {
        let mut rule =
            JsonCommentRule::new(Arc::new(Records(vec![declared("A", 1, "oops", "x")])));
        rule.process_file(&SourceFile::new("Sources/App.swift", ""));
        assert_eq!(rule.declared_count(), 0);
        assert!(rule.violations().is_empty());
    }

    #[test]
    fn severity_map_overrides_single_kind() {
        let config = Config::parse(
            r#"
[rules.json_comment_rule.severity_map]
missingDescription = "error"
"#,
        )
        .unwrap();
        let records = vec![
            declared("A", 1, r#"{"img": "https://x"}"#, "a"),
            declared("B", 2, r#"{"description": "d"}"#, "b"),
        ];
        let mut rule = JsonCommentRule::from_config(&config, Arc::new(Records(records)));
        let violations = run(&mut rule);

        let by_line = |line| {
            violations
                .iter()
                .find(|v| v.location.line == line)
                .map(|v| v.severity)
        };
        assert_eq!(by_line(1), Some(Severity::Error));
        assert_eq!(by_line(2), Some(Severity::Warning));
    }

    #[test]
    fn none_severity_is_still_reported() {
        let config = Config::parse(
            r#"
[rules.json_comment_rule.severity_map]
invalidJSON = "error"
missingDescription = "error"
emptyDescription = "error"
containsInvalidPlaceholders = "error"
placeholderCountsDontMatch = "error"
missingScreenshotURL = "none"
invalidScreenshotURL = "none"
maxCharacterCountExceeded = "none"
"#,
        )
        .unwrap();
        let comment = r#"{"description": "d", "placeholders": ["day", "month"], "img": "https://x", "max_character_count": 4}"#;
        let mut rule = JsonCommentRule::from_config(
            &config,
            Arc::new(Records(vec![declared("BAG", 1, comment, "View Bag %@ %@")])),
        );
        let violations = run(&mut rule);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::None);
    }

    #[test]
    fn configured_vocabulary_and_help_link() {
        let config = Config::parse(
            r#"
[rules.json_comment_rule]
severity = "error"
valid_placeholders = ["widget"]
help_link = "https://example.com/l10n"
"#,
        )
        .unwrap();
        let mut rule = JsonCommentRule::from_config(
            &config,
            Arc::new(Records(vec![declared("A", 1, VALID, "%d")])),
        );
        let violations = run(&mut rule);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Error);
        insta::assert_snapshot!(
            violations[0].reason,
            @r#"Comment for Localized string "A" contains invalid placeholders: "number" For more information, please see: https://example.com/l10n"#
        );
    }

    #[test]
    fn empty_vocabulary_keeps_default() {
        let config = Config::parse("[rules.json_comment_rule]\nvalid_placeholders = []\n").unwrap();
        let mut rule = JsonCommentRule::from_config(
            &config,
            Arc::new(Records(vec![declared("A", 1, VALID, "%d")])),
        );
        assert!(run(&mut rule).is_empty());
        assert!(default_placeholders().contains(&"number".to_string()));
    }

    #[test]
    fn evaluation_is_repeatable_over_many_records() {
        let records: Vec<LocalizedRecord> = (1..=500)
            .map(|i| {
                let comment = if i % 3 == 0 { "not json" } else { VALID };
                declared(&format!("KEY_{i}"), i, comment, "%d")
            })
            .collect();
        let mut rule = JsonCommentRule::new(Arc::new(Records(records)));
        let first: HashSet<Violation> = run(&mut rule).into_iter().collect();
        let second: HashSet<Violation> = rule.violations().into_iter().collect();
        assert_eq!(first.len(), 166);
        assert_eq!(first, second);
    }
}
