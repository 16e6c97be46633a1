//! Core types for lint violations and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Severity level for lint violations.
///
/// Totally ordered: `None < Warning < Error`. `None` violations are still
/// computed and reported, so configuration can silence one kind of problem
/// without disabling the check that finds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Suppressed, but still produced.
    None,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl Severity {
    /// Returns the configuration name of this severity.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown severity: {0:?} (expected none, warning or error)")]
pub struct ParseSeverityError(pub String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            _ => Err(ParseSeverityError(s.to_string())),
        }
    }
}

/// Location of a declaration or a usage site.
///
/// Used for diagnostics only; two records are never compared by location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// File path as reported by the reader.
    pub file: PathBuf,
    /// Line number (1-indexed, 0 when unknown).
    pub line: usize,
    /// Column number (1-indexed, 0 when unknown).
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Creates a location that only names a file.
    #[must_use]
    pub fn file(file: impl Into<PathBuf>) -> Self {
        Self::new(file, 0, 0)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// A lint violation found during analysis.
///
/// Built once inside a rule's violation step and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// Rule identifier (e.g., "`json_comment_rule`").
    pub rule_identifier: String,
    /// Human-readable rule name (e.g., "`JSONCommentRule`").
    pub rule_name: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Location copied from the triggering record.
    pub location: Location,
    /// Complete human-readable sentence.
    pub reason: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        rule_identifier: impl Into<String>,
        rule_name: impl Into<String>,
        severity: Severity,
        location: Location,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            rule_identifier: rule_identifier.into(),
            rule_name: rule_name.into(),
            severity,
            location,
            reason: reason.into(),
        }
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "{} at {}\n  {}: {} [{}]\n",
            self.rule_name, self.location, self.severity, self.reason, self.rule_identifier,
        )
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location, self.severity, self.rule_identifier, self.reason
        )
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.rule_identifier, v.reason),
            help: Some(format!("reported at {}", v.location)),
            span: SourceSpan::from((0, 0)),
            label_message: v.rule_name.clone(),
        }
    }
}

/// Result of a lint run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of files processed.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.severity == Severity::Error)
    }

    /// Returns violations filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Violation> {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .collect()
    }

    /// Counts violations by severity as `(errors, warnings, suppressed)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.violations
            .iter()
            .fold((0, 0, 0), |(e, w, n), v| match v.severity {
                Severity::Error => (e + 1, w, n),
                Severity::Warning => (e, w + 1, n),
                Severity::None => (e, w, n + 1),
            })
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations.iter().any(|v| v.severity >= severity)
    }

    /// Sorts violations by file, then line, then column.
    ///
    /// Purely presentational: rules emit in no particular order.
    pub fn sort(&mut self) {
        self.violations.sort_by(|a, b| {
            a.location
                .cmp(&b.location)
                .then_with(|| a.rule_identifier.cmp(&b.rule_identifier))
                .then_with(|| a.reason.cmp(&b.reason))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "json_comment_rule",
            "JSONCommentRule",
            severity,
            Location::new("en.lproj/Localizable.strings", 12, 1),
            "Comment for Localized string \"HOME.TITLE\" is not valid JSON",
        )
    }

    #[test]
    fn severity_is_totally_ordered() {
        assert!(Severity::None < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert_eq!(Severity::Error.max(Severity::None), Severity::Error);
    }

    #[test]
    fn severity_parses_configuration_names() {
        assert_eq!("none".parse::<Severity>(), Ok(Severity::None));
        assert_eq!(" Warning ".parse::<Severity>(), Ok(Severity::Warning));
        assert_eq!("ERROR".parse::<Severity>(), Ok(Severity::Error));
        assert!("fatal".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn display_includes_location_and_identifier() {
        let display = make_violation(Severity::Warning).to_string();
        assert!(display.starts_with("en.lproj/Localizable.strings:12:1: warning"));
        assert!(display.contains("[json_comment_rule]"));
    }

    #[test]
    fn count_by_severity_counts_suppressed() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Error));
        result.violations.push(make_violation(Severity::None));
        result.violations.push(make_violation(Severity::None));
        assert_eq!(result.count_by_severity(), (1, 0, 2));
        assert!(result.has_errors());
    }

    #[test]
    fn has_violations_at_respects_threshold() {
        let mut result = LintResult::new();
        result.violations.push(make_violation(Severity::Warning));
        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
        assert_eq!(result.by_severity(Severity::Warning).len(), 1);
    }

    #[test]
    fn sort_orders_by_location() {
        let mut result = LintResult::new();
        let mut late = make_violation(Severity::Warning);
        late.location.line = 40;
        result.violations.push(late);
        result.violations.push(make_violation(Severity::Warning));
        result.sort();
        assert_eq!(result.violations[0].location.line, 12);
        assert_eq!(result.violations[1].location.line, 40);
    }

    #[test]
    fn diagnostic_carries_identifier() {
        let v = make_violation(Severity::Error);
        let diagnostic = ViolationDiagnostic::from(&v);
        assert!(diagnostic.to_string().starts_with("[json_comment_rule]"));
    }
}
