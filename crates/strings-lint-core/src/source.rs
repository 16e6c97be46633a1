//! Source abstraction implemented by format readers.
//!
//! A source answers two questions about a file: whether it understands the
//! file at all, and which [`LocalizedRecord`]s the file contains. Readers for
//! concrete formats live outside this crate; rules only depend on the trait.

use crate::record::LocalizedRecord;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Errors a source reports when a file cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The content does not have the shape the reader expects.
    #[error("Failed to decode {path}: {message}")]
    Decode {
        /// File that failed to decode.
        path: PathBuf,
        /// Reader-specific description.
        message: String,
    },

    /// No reader accepted the file.
    #[error("No reader supports {path}")]
    Unsupported {
        /// File that was offered.
        path: PathBuf,
    },
}

impl FormatError {
    /// Creates a decode error.
    #[must_use]
    pub fn decode(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// An in-memory file handed to sources.
///
/// The linter never reads storage itself; callers supply content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path identifying the file.
    pub path: PathBuf,
    /// Full text content.
    pub content: String,
}

impl SourceFile {
    /// Creates a new source file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Returns the file extension, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|e| e.to_str())
    }

    /// Returns true if the extension matches `ext` (without the dot).
    #[must_use]
    pub fn has_extension(&self, ext: &str) -> bool {
        self.extension().is_some_and(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// A reader for one resource or source format.
///
/// `supports` must be a pure predicate. `parse` must not leave shared state
/// half-updated when it fails.
pub trait LocalizableSource: Send + Sync {
    /// Returns a short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Returns true if this reader understands the file.
    fn supports(&self, file: &SourceFile) -> bool;

    /// Decodes the file into records.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the content cannot be decoded.
    fn parse(&self, file: &SourceFile) -> Result<Vec<LocalizedRecord>, FormatError>;
}

/// Type alias for shared source trait objects.
pub type SourceRef = Arc<dyn LocalizableSource>;

/// Reads the records a source finds in `file`, for use in `Rule::process_file`.
///
/// Returns nothing when the source does not support the file. A decode
/// failure is logged and the file is skipped, so one bad file never stops a
/// run.
#[must_use]
pub fn collect_records(source: &dyn LocalizableSource, file: &SourceFile) -> Vec<LocalizedRecord> {
    if !source.supports(file) {
        return Vec::new();
    }
    match source.parse(file) {
        Ok(records) => records,
        Err(e) => {
            warn!("Unable to parse file {}: {}", file.path.display(), e);
            Vec::new()
        }
    }
}

/// Several sources acting as one.
///
/// Every wrapped source that supports a file is asked to parse it and the
/// results are concatenated in source order. A failing source is logged and
/// skipped; the others still contribute.
#[derive(Clone, Default)]
pub struct ComposedSource {
    sources: Vec<SourceRef>,
}

impl ComposedSource {
    /// Creates a composition over the given sources.
    #[must_use]
    pub fn new(sources: Vec<SourceRef>) -> Self {
        Self { sources }
    }

    /// Adds a source.
    #[must_use]
    pub fn with(mut self, source: SourceRef) -> Self {
        self.sources.push(source);
        self
    }
}

impl std::fmt::Debug for ComposedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.sources.iter().map(|s| s.name()))
            .finish()
    }
}

impl LocalizableSource for ComposedSource {
    fn name(&self) -> &'static str {
        "composed"
    }

    fn supports(&self, file: &SourceFile) -> bool {
        self.sources.iter().any(|s| s.supports(file))
    }

    /// Fails only when every supporting source failed.
    fn parse(&self, file: &SourceFile) -> Result<Vec<LocalizedRecord>, FormatError> {
        if !self.supports(file) {
            return Err(FormatError::Unsupported {
                path: file.path.clone(),
            });
        }

        let mut records = Vec::new();
        let mut first_error = None;
        let mut any_succeeded = false;

        for source in self.sources.iter().filter(|s| s.supports(file)) {
            match source.parse(file) {
                Ok(parsed) => {
                    any_succeeded = true;
                    records.extend(parsed);
                }
                Err(e) => {
                    warn!("{} could not parse {}: {}", source.name(), file.path.display(), e);
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) if !any_succeeded => Err(e),
            _ => Ok(records),
        }
    }
}
