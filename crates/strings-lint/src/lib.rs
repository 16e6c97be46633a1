//! # strings-lint
//!
//! Linter for localized-string resources.
//!
//! This is the facade crate that re-exports the core framework and the
//! built-in rules.
//!
//! Two families of checks are provided:
//!
//! - every declared string carries a structured JSON comment describing it
//!   for translators
//! - every declared string is referenced by application code, and strings
//!   marked as work in progress are not
//!
//! ## Usage
//!
//! The linter reads nothing from disk. Callers hand it file contents and the
//! format readers to use:
//!
//! ```rust,ignore
//! use strings_lint::{Config, SourceFile};
//! use strings_lint::rules::Collaborators;
//!
//! let config = Config::parse(&std::fs::read_to_string("strings-lint.toml")?)?;
//! let collaborators = Collaborators::new(
//!     vec![Arc::new(StringsReader), Arc::new(StringsdictReader)],
//!     vec![Arc::new(SwiftAccessorScanner)],
//! );
//!
//! let result = strings_lint::lint(&files, &config, &collaborators);
//! for violation in &result.violations {
//!     println!("{violation}");
//! }
//! ```
//!
//! ## Configuration
//!
//! ```toml
//! preset = "recommended"
//!
//! [rules.json_comment_rule]
//! severity = "warning"
//! valid_placeholders = ["number", "date", "person_name"]
//!
//! [rules.json_comment_rule.severity_map]
//! missingScreenshotURL = "none"
//!
//! [rules.unused_swiftgen_strings]
//! work_in_progress = ["NEW_FEATURE.TITLE"]
//! ```

// Re-export core types and traits
pub use strings_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use strings_lint_rules::*;
}

mod runner;

pub use runner::{lint, resolve_preset};
