//! # strings-lint-rules
//!
//! Built-in lint rules for localized-string resources.
//!
//! ## Available Rules
//!
//! | Identifier | Name | Description |
//! |------------|------|-------------|
//! | `json_comment_rule` | `JSONCommentRule` | Declared strings carry a valid structured JSON comment |
//! | `structured_placeholder_comment` | `StructuredPlaceholderComment` | Legacy description and placeholder check |
//! | `unused_swiftgen_strings` | `Unused SwiftGen String` | Declared strings are referenced; WIP strings are not |
//!
//! Rules never read files themselves. Format readers are injected as
//! [`LocalizableSource`](strings_lint_core::LocalizableSource) trait objects.
//!
//! ## Usage
//!
//! ```ignore
//! use strings_lint_core::Linter;
//! use strings_lint_rules::{Collaborators, Preset};
//!
//! let collaborators = Collaborators::new(vec![strings_reader], vec![swift_scanner]);
//! let result = Linter::builder()
//!     .rules(Preset::Recommended.rules(&config, &collaborators))
//!     .config(config)
//!     .build()
//!     .lint(&files);
//! ```

mod comment;
mod ignore_file;
mod json_comment;
pub mod normalize;
mod presets;
mod reason;
mod structured_placeholder_comment;
mod unused_generated_strings;

pub use comment::{
    CommentValidator, CommentViolation, Profile, ALLOWED_KEYS, DEFAULT_PLACEHOLDERS,
    LEGACY_PLACEHOLDERS,
};
pub use ignore_file::{IgnoreFileContents, IgnoreFileFinding, IgnoreFileParser, IgnoredKey};
pub use json_comment::{default_placeholders, JsonCommentRule};
pub use presets::{all_rules, legacy_rules, recommended_rules, Collaborators, Preset};
pub use structured_placeholder_comment::StructuredPlaceholderComment;
pub use unused_generated_strings::{CrossReferenceViolation, UnusedGeneratedStrings};

/// Re-export core types for convenience.
pub use strings_lint_core::{Rule, Severity, Violation};
