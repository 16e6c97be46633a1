//! Rule trait for defining lint rules.

use crate::source::SourceFile;
use crate::types::{Severity, Violation};

/// A lint rule over localized-string records.
///
/// Rules work in two phases. During accumulation the linter hands every input
/// file to [`Rule::process_file`], one file at a time; the rule parses the
/// files it cares about into its own buffers. Once all files are in, the
/// linter calls [`Rule::violations`], which evaluates the buffers from scratch
/// and may fan out across threads.
///
/// # Example
///
/// ```ignore
/// use strings_lint_core::{Rule, SourceFile, Violation, Severity};
///
/// pub struct CountStrings { seen: usize }
///
/// impl Rule for CountStrings {
///     fn identifier(&self) -> &'static str { "count_strings" }
///     fn name(&self) -> &'static str { "CountStrings" }
///
///     fn process_file(&mut self, file: &SourceFile) {
///         if file.has_extension("strings") {
///             self.seen += 1;
///         }
///     }
///
///     fn violations(&self) -> Vec<Violation> {
///         Vec::new()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the rule identifier, also its configuration key
    /// (e.g., "`json_comment_rule`").
    fn identifier(&self) -> &'static str;

    /// Returns the human-readable rule name.
    fn name(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Accumulates whatever this rule needs from one file.
    ///
    /// Decode failures are logged and the file is skipped; this never fails.
    fn process_file(&mut self, file: &SourceFile);

    /// Computes all violations over the accumulated state.
    ///
    /// Calling this twice without processing more files yields set-equal
    /// results. The order of the returned violations is unspecified.
    fn violations(&self) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
