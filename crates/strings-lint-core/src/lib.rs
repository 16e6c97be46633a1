//! # strings-lint-core
//!
//! Core framework for linting localized-string resources.
//!
//! This crate provides the foundational traits and types shared by every
//! rule:
//!
//! - [`LocalizedRecord`], the record every reader produces
//! - [`LocalizableSource`] and [`ComposedSource`] for format readers
//! - [`Severity`], [`ViolationKind`] and [`SeverityConfiguration`]
//! - [`Rule`] trait for accumulate-then-evaluate rules
//! - [`Linter`] for orchestrating a run
//!
//! ## Example
//!
//! ```ignore
//! use strings_lint_core::{Linter, SourceFile};
//!
//! let result = Linter::builder()
//!     .config(config)
//!     .rule(MyRule::new())
//!     .build()
//!     .lint(&files);
//!
//! for violation in &result.violations {
//!     println!("{violation}");
//! }
//! ```

pub mod aggregate;
mod config;
mod linter;
mod record;
mod rule;
mod severity;
mod source;
mod types;

pub use config::{Config, ConfigError, RuleConfig};
pub use linter::{Linter, LinterBuilder};
pub use record::{count_placeholders, LocalizedRecord};
pub use rule::{Rule, RuleBox};
pub use severity::{SeverityConfiguration, ViolationKind};
pub use source::{
    collect_records, ComposedSource, FormatError, LocalizableSource, SourceFile, SourceRef,
};
pub use types::{
    LintResult, Location, ParseSeverityError, Severity, Violation, ViolationDiagnostic,
};
