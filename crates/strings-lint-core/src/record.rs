//! The shared record shape produced by readers and consumed by rules.

use crate::types::Location;
use regex::Regex;
use std::sync::LazyLock;

/// One occurrence of a localized string.
///
/// A record is either *declared* (read from a resource file) or *used*
/// (found at a call site by a source scanner). Keys are not unique: the same
/// key is declared once per table or locale and may be used many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedRecord {
    /// Dotted or flat identifier.
    pub key: String,
    /// Table the string belongs to, if known.
    pub table: Option<String>,
    /// Locale the string belongs to, if known.
    pub locale: Option<String>,
    /// Where the record was found.
    pub location: Location,
    /// Free-text annotation attached at declaration time.
    pub comment: Option<String>,
    /// Translated variants; plural forms produce more than one.
    pub value: Vec<String>,
    /// Number of positional format placeholders detected in `value`.
    pub placeholder_count: usize,
}

impl LocalizedRecord {
    /// Creates a record with only a key and a location.
    #[must_use]
    pub fn new(key: impl Into<String>, location: Location) -> Self {
        Self {
            key: key.into(),
            table: None,
            locale: None,
            location,
            comment: None,
            value: Vec::new(),
            placeholder_count: 0,
        }
    }

    /// Sets the table name.
    #[must_use]
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Sets the locale.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Sets the declaration comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets the translated variants and detects their placeholder count.
    ///
    /// The count is the largest number of placeholders found in any variant.
    #[must_use]
    pub fn with_value<I, S>(mut self, value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value = value.into_iter().map(Into::into).collect();
        self.placeholder_count = self
            .value
            .iter()
            .map(|v| count_placeholders(v))
            .max()
            .unwrap_or(0);
        self
    }

    /// Overrides the detected placeholder count.
    #[must_use]
    pub fn with_placeholder_count(mut self, count: usize) -> Self {
        self.placeholder_count = count;
        self
    }
}

// `%%` and `%#@name@` are matched first so that they are skipped.
#[allow(clippy::expect_used)]
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<skip>%%|%(?:\d+\$)?#@[^@\s]*@)",
        r"|%(?:\d+\$)?[-+0#']*(?:\d+|\*)?(?:\.(?:\d+|\*))?",
        r"(?:hh|h|ll|l|q|L|z|t|j)?[@dDiuUxXoOfFeEgGcCsSpaA]",
    ))
    .expect("placeholder pattern is a valid regex")
});

/// Counts positional format placeholders (`%@`, `%d`, `%1$@`, `%.2f`, ...).
///
/// An escaped `%%` is not a placeholder, and neither is a plural variable
/// reference such as `%#@items@`.
#[must_use]
pub fn count_placeholders(text: &str) -> usize {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter(|c| c.name("skip").is_none())
        .count()
}
