//! Rule reporting declared strings that no code references.
//!
//! # Rationale
//!
//! Strings that are never referenced still cost translation effort. Keys
//! marked as work in progress are exempt, but referencing one means the
//! feature shipped without the mark being removed.
//!
//! # Configuration
//!
//! - `severity`: severity of every violation (default: warning)
//! - `severity_map`: per-kind overrides for `unusedString`,
//!   `workInProgressReferenced` and `missingOwner`
//! - `ignored`: declaration keys never reported as unused
//! - `work_in_progress`: declaration keys exempt from the unused check but
//!   reported wherever they are referenced
//! - `help_link`: URL appended to every reason
//!
//! Declaration keys are rewritten to their generated accessor names before
//! comparison; see [`crate::normalize`].

use crate::ignore_file::{IgnoreFileFinding, IgnoreFileParser, IgnoredKey};
use crate::normalize::{match_key, to_generated_accessor};
use crate::reason::with_help_link;
use std::collections::HashSet;
use std::sync::Arc;
use strings_lint_core::aggregate::join_all;
use strings_lint_core::{
    collect_records, Config, LocalizedRecord, Location, Rule, Severity, SeverityConfiguration,
    SourceFile, SourceRef, Violation, ViolationKind,
};
use tracing::{debug, warn};

/// Rule identifier for the unused generated strings rule.
pub const IDENTIFIER: &str = "unused_swiftgen_strings";

/// Rule name for the unused generated strings rule.
pub const NAME: &str = "Unused SwiftGen String";

/// Why a cross-reference check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossReferenceViolation {
    /// A declared key is neither used nor exempt.
    UnusedString {
        /// The key as declared.
        original_key: String,
    },
    /// A work-in-progress key is referenced by code.
    WorkInProgressReferenced,
}

impl ViolationKind for CrossReferenceViolation {
    fn identifier(&self) -> &'static str {
        match self {
            Self::UnusedString { .. } => "unusedString",
            Self::WorkInProgressReferenced => "workInProgressReferenced",
        }
    }

    fn reason(&self) -> String {
        match self {
            Self::UnusedString { original_key } => format!(
                "Localized string \"{original_key}\" is unused. If you intend to use this string \
                 in a later PR, please add it to the \"work_in_progress\" list in the lint \
                 configuration or create an ignore file."
            ),
            Self::WorkInProgressReferenced => {
                "This string is marked as WIP but is referenced here.".to_string()
            }
        }
    }
}

/// Reports unused declarations and premature use of work-in-progress keys.
pub struct UnusedGeneratedStrings {
    declarations: SourceRef,
    usages: SourceRef,
    ignore_files: Option<Arc<dyn IgnoreFileParser>>,
    ignored: HashSet<String>,
    work_in_progress: HashSet<String>,
    severities: SeverityConfiguration,
    help_link: Option<String>,
    declared: Vec<LocalizedRecord>,
    used: Vec<LocalizedRecord>,
    ignore_file_keys: Vec<IgnoredKey>,
    findings: Vec<IgnoreFileFinding>,
}

impl UnusedGeneratedStrings {
    /// Creates a new rule reading declarations and usage sites from the given
    /// sources.
    #[must_use]
    pub fn new(declarations: SourceRef, usages: SourceRef) -> Self {
        Self {
            declarations,
            usages,
            ignore_files: None,
            ignored: HashSet::new(),
            work_in_progress: HashSet::new(),
            severities: SeverityConfiguration::new(Severity::Warning),
            help_link: None,
            declared: Vec::new(),
            used: Vec::new(),
            ignore_file_keys: Vec::new(),
            findings: Vec::new(),
        }
    }

    /// Creates a rule configured from the `unused_swiftgen_strings` block.
    #[must_use]
    pub fn from_config(config: &Config, declarations: SourceRef, usages: SourceRef) -> Self {
        let block = config.rule(IDENTIFIER);
        let mut rule = Self::new(declarations, usages).severities(
            SeverityConfiguration::from_rule_config(block, Severity::Warning),
        );

        if let Some(block) = block {
            if let Some(keys) = block.get_str_array("ignored") {
                rule = rule.ignored(keys);
            }
            if let Some(keys) = block.get_str_array("work_in_progress") {
                rule = rule.work_in_progress(keys);
            }
            if let Some(link) = block.get_str("help_link") {
                rule = rule.help_link(link);
            }
        }
        rule
    }

    /// Sets the ignore-file reader.
    #[must_use]
    pub fn ignore_files(mut self, parser: Arc<dyn IgnoreFileParser>) -> Self {
        self.ignore_files = Some(parser);
        self
    }

    /// Adds declaration keys that are never reported as unused.
    #[must_use]
    pub fn ignored<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ignored.extend(keys.into_iter().map(|k| declared_match_key(k.as_ref())));
        self
    }

    /// Adds work-in-progress declaration keys.
    #[must_use]
    pub fn work_in_progress<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.work_in_progress
            .extend(keys.into_iter().map(|k| declared_match_key(k.as_ref())));
        self
    }

    /// Sets the per-kind severities.
    #[must_use]
    pub fn severities(mut self, severities: SeverityConfiguration) -> Self {
        self.severities = severities;
        self
    }

    /// Sets the help link appended to reasons.
    #[must_use]
    pub fn help_link(mut self, link: impl Into<String>) -> Self {
        self.help_link = Some(link.into());
        self
    }

    fn violation(&self, kind: &impl ViolationKind, location: Location) -> Violation {
        Violation::new(
            IDENTIFIER,
            NAME,
            self.severities.resolve(kind),
            location,
            with_help_link(kind.reason(), self.help_link.as_deref()),
        )
    }

    fn ignore_file_match_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.ignore_file_keys
            .iter()
            .map(|entry| declared_match_key(&entry.key))
    }

    fn unused_violations(&self) -> Vec<Violation> {
        let live: HashSet<String> = self
            .used
            .iter()
            .map(|record| record.key.clone())
            .chain(self.ignored.iter().cloned())
            .chain(self.work_in_progress.iter().cloned())
            .chain(self.ignore_file_match_keys())
            .collect();

        self.declared
            .iter()
            .filter(|record| !live.contains(&match_key(&record.key)))
            .filter_map(|record| {
                let original_key = record.comment.as_deref().filter(|c| !c.is_empty())?;
                let kind = CrossReferenceViolation::UnusedString {
                    original_key: original_key.to_string(),
                };
                Some(self.violation(&kind, record.location.clone()))
            })
            .collect()
    }

    fn work_in_progress_violations(&self) -> Vec<Violation> {
        let watched: HashSet<String> = self
            .work_in_progress
            .iter()
            .cloned()
            .chain(self.ignore_file_match_keys())
            .collect();

        self.used
            .iter()
            .filter(|record| watched.contains(&record.key))
            .map(|record| {
                self.violation(
                    &CrossReferenceViolation::WorkInProgressReferenced,
                    record.location.clone(),
                )
            })
            .collect()
    }

    fn process_ignore_file(&mut self, file: &SourceFile) {
        let Some(parser) = self.ignore_files.as_ref().filter(|p| p.supports(file)) else {
            return;
        };
        match parser.parse_file(file) {
            Ok(contents) => {
                debug!(
                    "{}: {} ignored key(s), {} finding(s)",
                    file.path.display(),
                    contents.keys.len(),
                    contents.findings.len()
                );
                self.ignore_file_keys.extend(contents.keys);
                self.findings.extend(contents.findings);
            }
            Err(e) => warn!("Unable to parse ignore file {}: {}", file.path.display(), e),
        }
    }
}

/// Match key of a key as written in a declaration file or the configuration.
fn declared_match_key(key: &str) -> String {
    match_key(&to_generated_accessor(key))
}

impl Rule for UnusedGeneratedStrings {
    fn identifier(&self) -> &'static str {
        IDENTIFIER
    }

    fn name(&self) -> &'static str {
        NAME
    }

    fn description(&self) -> &'static str {
        "L10n string is not used in the app"
    }

    fn default_severity(&self) -> Severity {
        self.severities.default_severity()
    }

    fn process_file(&mut self, file: &SourceFile) {
        let declared = collect_records(self.declarations.as_ref(), file)
            .into_iter()
            .map(|mut record| {
                // The original key is kept in the comment for reporting.
                let accessor = to_generated_accessor(&record.key);
                record.comment = Some(std::mem::replace(&mut record.key, accessor));
                record
            });
        self.declared.extend(declared);

        let used = collect_records(self.usages.as_ref(), file)
            .into_iter()
            .map(|mut record| {
                record.key = record.key.to_lowercase();
                record
            });
        self.used.extend(used);

        self.process_ignore_file(file);
    }

    fn violations(&self) -> Vec<Violation> {
        let mut violations = join_all(
            || self.unused_violations(),
            || self.work_in_progress_violations(),
        );
        violations.extend(
            self.findings
                .iter()
                .map(|finding| self.violation(finding, finding.location().clone())),
        );
        violations
    }
}
