//! Contract for declarative ignore files.
//!
//! An ignore file lists declaration keys that are exempt from the unused
//! check, usually for a feature still being built. Each file must name a
//! responsible owner; a file without one is reported where it is, and its
//! keys still count as exempt.

use strings_lint_core::{FormatError, Location, SourceFile, ViolationKind};

/// Reads ignore files.
pub trait IgnoreFileParser: Send + Sync {
    /// Returns true if this parser handles the file.
    fn supports(&self, file: &SourceFile) -> bool;

    /// Parses one ignore file.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the file cannot be decoded.
    fn parse_file(&self, file: &SourceFile) -> Result<IgnoreFileContents, FormatError>;
}

/// What one ignore file contributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreFileContents {
    /// Structural problems found in the file itself.
    pub findings: Vec<IgnoreFileFinding>,
    /// Declaration keys the file exempts.
    pub keys: Vec<IgnoredKey>,
}

/// A declaration key listed in an ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoredKey {
    /// The declaration key as written.
    pub key: String,
    /// Where the key is listed.
    pub location: Location,
}

impl IgnoredKey {
    /// Creates a new entry.
    #[must_use]
    pub fn new(key: impl Into<String>, location: Location) -> Self {
        Self {
            key: key.into(),
            location,
        }
    }
}

/// A structural problem in an ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreFileFinding {
    /// The file does not name a responsible owner.
    MissingOwner {
        /// The ignore file's location.
        location: Location,
    },
}

impl IgnoreFileFinding {
    /// Where the finding is reported.
    #[must_use]
    pub fn location(&self) -> &Location {
        match self {
            Self::MissingOwner { location } => location,
        }
    }
}

impl ViolationKind for IgnoreFileFinding {
    fn identifier(&self) -> &'static str {
        match self {
            Self::MissingOwner { .. } => "missingOwner",
        }
    }

    fn reason(&self) -> String {
        match self {
            Self::MissingOwner { .. } => {
                "Please specify a responsible owner for these strings.".to_string()
            }
        }
    }
}
