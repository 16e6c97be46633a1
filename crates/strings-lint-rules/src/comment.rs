//! Structured-comment validation shared by the comment rules.
//!
//! A structured comment is a JSON object embedded in the free-text comment of
//! a declaration:
//!
//! ```json
//! {
//!   "description": "Button that opens the shopping bag",
//!   "placeholders": ["person_name", "number"],
//!   "img": "https://example.com/screens/bag.png",
//!   "max_character_count": 24
//! }
//! ```
//!
//! Checks run in a fixed order and the first failure wins, so a record yields
//! at most one [`CommentViolation`].

use serde::{Deserialize, Deserializer};
use std::collections::{BTreeSet, HashSet};
use strings_lint_core::{LocalizedRecord, ViolationKind};
use unicode_segmentation::UnicodeSegmentation;
use url::Url;

/// Keys a structured comment may contain.
pub const ALLOWED_KEYS: [&str; 4] = ["description", "placeholders", "img", "max_character_count"];

/// Placeholder vocabulary accepted by the JSON comment rule.
pub const DEFAULT_PLACEHOLDERS: &[&str] = &[
    "number",
    "date",
    "time",
    "money",
    "company_name",
    "formatting",
    "fully_translated_sentence",
    "person_name",
    "currency_code",
    "event_name",
    "email_address",
    "tariff_code",
    "tracking_code",
    "token",
    "sku",
    "month",
    "day",
];

/// The smaller, fixed vocabulary of the legacy placeholder-comment rule.
pub const LEGACY_PLACEHOLDERS: &[&str] = &[
    "number",
    "date",
    "time",
    "money",
    "company_name",
    "formatting",
    "fully_translated_sentence",
    "person_name",
    "currency_code",
    "event_name",
    "email_address",
];

/// Why a structured comment was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentViolation {
    /// The comment is absent or not a JSON object of the expected shape.
    InvalidJson,
    /// The object contains a key outside [`ALLOWED_KEYS`].
    InvalidJsonKey {
        /// The offending key.
        key: String,
    },
    /// `description` is absent.
    MissingDescription,
    /// `description` is an empty string.
    EmptyDescription,
    /// `placeholders` names entries outside the vocabulary.
    ContainsInvalidPlaceholders {
        /// The rejected entries.
        placeholders: BTreeSet<String>,
    },
    /// The declared placeholder count differs from the detected one.
    PlaceholderCountsDontMatch,
    /// `img` is absent.
    MissingScreenshotUrl,
    /// `img` is not a valid URL.
    InvalidScreenshotUrl,
    /// A translated variant is longer than `max_character_count`.
    MaxCharacterCountExceeded,
}

impl ViolationKind for CommentViolation {
    fn identifier(&self) -> &'static str {
        match self {
            Self::InvalidJson => "invalidJSON",
            Self::InvalidJsonKey { .. } => "invalidJSONKey",
            Self::MissingDescription => "missingDescription",
            Self::EmptyDescription => "emptyDescription",
            Self::ContainsInvalidPlaceholders { .. } => "containsInvalidPlaceholders",
            Self::PlaceholderCountsDontMatch => "placeholderCountsDontMatch",
            Self::MissingScreenshotUrl => "missingScreenshotURL",
            Self::InvalidScreenshotUrl => "invalidScreenshotURL",
            Self::MaxCharacterCountExceeded => "maxCharacterCountExceeded",
        }
    }

    fn reason(&self) -> String {
        match self {
            Self::InvalidJson => "is not valid JSON".to_string(),
            Self::InvalidJsonKey { key } => {
                format!("the key {key} is not allowed in this structured comment")
            }
            Self::MissingDescription => "is missing the `description`".to_string(),
            Self::EmptyDescription => "has an empty `description`".to_string(),
            Self::ContainsInvalidPlaceholders { placeholders } => {
                let list: Vec<&str> = placeholders.iter().map(String::as_str).collect();
                format!("contains invalid placeholders: \"{}\"", list.join("\", \""))
            }
            Self::PlaceholderCountsDontMatch => "number of placeholders don't match".to_string(),
            Self::MissingScreenshotUrl => {
                "screenshot URL for this localized string is missing".to_string()
            }
            Self::InvalidScreenshotUrl => {
                "screenshot URL for this localized string is invalid".to_string()
            }
            Self::MaxCharacterCountExceeded => {
                "the string is longer than the max character count allowed".to_string()
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct StructuredComment {
    description: Option<String>,
    placeholders: Option<Vec<String>>,
    img: Option<String>,
    #[serde(default, deserialize_with = "whole_number")]
    max_character_count: Option<i64>,
}

/// Accepts any JSON number with no fractional part, so `4.0` reads as `4`.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn whole_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(number) = Option::<serde_json::Number>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Some(n) = number.as_i64() {
        return Ok(Some(n));
    }
    match number.as_f64() {
        Some(f) if f.fract() == 0.0 => Ok(Some(f as i64)),
        _ => Err(serde::de::Error::custom(format!("{number} is not a whole number"))),
    }
}

/// Which checks a validator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Every check: key whitelist, description, placeholders, screenshot
    /// URL and maximum length.
    Full,
    /// Description and placeholder checks only.
    Legacy,
}

/// Validates structured comments against a placeholder vocabulary.
#[derive(Debug, Clone)]
pub struct CommentValidator {
    vocabulary: HashSet<String>,
    profile: Profile,
}

impl CommentValidator {
    /// Creates a validator running every check with the given vocabulary.
    #[must_use]
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            vocabulary: vocabulary.into_iter().map(Into::into).collect(),
            profile: Profile::Full,
        }
    }

    /// Creates the legacy validator with its fixed vocabulary.
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            profile: Profile::Legacy,
            ..Self::new(LEGACY_PLACEHOLDERS.iter().copied())
        }
    }

    /// Returns the profile in use.
    #[must_use]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Returns the first failing check for a declared record, if any.
    #[must_use]
    pub fn validate(&self, record: &LocalizedRecord) -> Option<CommentViolation> {
        let Some(object) = record
            .comment
            .as_deref()
            .and_then(|c| serde_json::from_str::<serde_json::Value>(c).ok())
            .filter(serde_json::Value::is_object)
        else {
            return Some(CommentViolation::InvalidJson);
        };

        // Known keys with the wrong JSON type are as bad as broken JSON.
        let Ok(comment) = StructuredComment::deserialize(&object) else {
            return Some(CommentViolation::InvalidJson);
        };

        if self.profile == Profile::Full {
            let unknown = object
                .as_object()
                .into_iter()
                .flat_map(serde_json::Map::keys)
                .find(|k| !ALLOWED_KEYS.contains(&k.as_str()));
            if let Some(key) = unknown {
                return Some(CommentViolation::InvalidJsonKey { key: key.clone() });
            }
        }

        match comment.description.as_deref() {
            None => return Some(CommentViolation::MissingDescription),
            Some("") => return Some(CommentViolation::EmptyDescription),
            Some(_) => {}
        }

        let placeholders = comment.placeholders.unwrap_or_default();
        let invalid: BTreeSet<String> = placeholders
            .iter()
            .filter(|p| !self.vocabulary.contains(p.as_str()))
            .cloned()
            .collect();
        if !invalid.is_empty() {
            return Some(CommentViolation::ContainsInvalidPlaceholders {
                placeholders: invalid,
            });
        }

        if placeholders.len() != record.placeholder_count {
            return Some(CommentViolation::PlaceholderCountsDontMatch);
        }

        if self.profile == Profile::Legacy {
            return None;
        }

        match comment.img.as_deref() {
            None => return Some(CommentViolation::MissingScreenshotUrl),
            Some(img) if Url::parse(img).is_err() => {
                return Some(CommentViolation::InvalidScreenshotUrl);
            }
            Some(_) => {}
        }

        if let Some(max) = comment.max_character_count {
            let too_long =
                |v: &String| i64::try_from(v.graphemes(true).count()).unwrap_or(i64::MAX) > max;
            if record.value.iter().any(too_long) {
                return Some(CommentViolation::MaxCharacterCountExceeded);
            }
        }

        None
    }
}

impl Default for CommentValidator {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDERS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strings_lint_core::Location;

    fn record(comment: &str, value: &str) -> LocalizedRecord {
        LocalizedRecord::new("EMPTY_STATE.VIEW_BAG", Location::new("en.strings", 9, 1))
            .with_comment(comment)
            .with_value([value])
    }

    fn validate(comment: &str, value: &str) -> Option<CommentViolation> {
        CommentValidator::default().validate(&record(comment, value))
    }

    #[test]
    fn valid_comment_passes() {
        let comment = r#"{
            "description": "A CTA to go to the bag",
            "placeholders": ["person_name", "number"],
            "img": "https://www.example.com/"
        }"#;
        assert_eq!(validate(comment, "View Bag %@ %@"), None);
    }

    #[test]
    fn newer_placeholder_types_are_accepted() {
        let comment = r#"{"description": "d", "placeholders": ["tariff_code", "sku", "token", "tracking_code"], "img": "https://x"}"#;
        assert_eq!(validate(comment, "%@ %@ %@ %@"), None);
    }

    #[test]
    fn missing_comment_is_invalid_json() {
        let record = LocalizedRecord::new("KEY", Location::default());
        assert_eq!(
            CommentValidator::default().validate(&record),
            Some(CommentViolation::InvalidJson)
        );
    }

    #[test]
    fn free_text_and_non_objects_are_invalid_json() {
        assert_eq!(
            validate("Title of the home screen", "Home"),
            Some(CommentViolation::InvalidJson)
        );
        assert_eq!(validate("[1, 2]", "Home"), Some(CommentViolation::InvalidJson));
        assert_eq!(validate("\"text\"", "Home"), Some(CommentViolation::InvalidJson));
    }

    #[test]
    fn wrongly_typed_fields_are_invalid_json() {
        assert_eq!(
            validate(r#"{"description": 3, "img": "https://x"}"#, "Home"),
            Some(CommentViolation::InvalidJson)
        );
        assert_eq!(
            validate(r#"{"description": "d", "max_character_count": "4"}"#, "Home"),
            Some(CommentViolation::InvalidJson)
        );
        assert_eq!(
            validate(r#"{"description": "d", "max_character_count": 4.5}"#, "Home"),
            Some(CommentViolation::InvalidJson)
        );
    }

    #[test]
    fn wrongly_typed_field_wins_over_unknown_key() {
        assert_eq!(
            validate(r#"{"description": 3, "note": "x"}"#, "Home"),
            Some(CommentViolation::InvalidJson)
        );
    }

    #[test]
    fn unknown_key_is_reported_before_description() {
        assert_eq!(
            validate(r#"{"note": "x"}"#, "Home"),
            Some(CommentViolation::InvalidJsonKey {
                key: "note".to_string()
            })
        );
    }

    #[test]
    fn missing_description_wins_over_later_checks() {
        // Placeholders and img are also wrong, only the first failure counts.
        assert_eq!(
            validate(r#"{"placeholders": ["bogus"]}"#, "%@ %@"),
            Some(CommentViolation::MissingDescription)
        );
        assert_eq!(
            validate(r#"{"description": "", "img": "https://x"}"#, "Home"),
            Some(CommentViolation::EmptyDescription)
        );
    }

    #[test]
    fn invalid_placeholders_are_collected() {
        let comment = r#"{"description": "d", "placeholders": ["zeta", "number", "alpha"], "img": "https://x"}"#;
        let expected: BTreeSet<String> = ["alpha".to_string(), "zeta".to_string()].into();
        assert_eq!(
            validate(comment, "%@ %@ %@"),
            Some(CommentViolation::ContainsInvalidPlaceholders {
                placeholders: expected
            })
        );
    }

    #[test]
    fn placeholder_count_must_match() {
        assert_eq!(
            validate(r#"{"description": "d", "placeholders": [], "img": "https://x"}"#, "Hi %@"),
            Some(CommentViolation::PlaceholderCountsDontMatch)
        );
        assert_eq!(
            validate(r#"{"description": "d", "img": "https://x"}"#, "Hi %@"),
            Some(CommentViolation::PlaceholderCountsDontMatch)
        );
        assert_eq!(validate(r#"{"description": "d", "img": "https://x"}"#, "Hi"), None);
    }

    #[test]
    fn screenshot_url_is_required_and_checked() {
        assert_eq!(
            validate(r#"{"description": "d"}"#, "Home"),
            Some(CommentViolation::MissingScreenshotUrl)
        );
        assert_eq!(
            validate(r#"{"description": "d", "img": "Something not a URL"}"#, "Home"),
            Some(CommentViolation::InvalidScreenshotUrl)
        );
        assert_eq!(
            validate(r#"{"description": "d", "img": ""}"#, "Home"),
            Some(CommentViolation::InvalidScreenshotUrl)
        );
    }

    #[test]
    fn max_character_count_applies_to_every_variant() {
        let comment = r#"{"description": "d", "img": "https://x", "max_character_count": 4}"#;
        assert_eq!(validate(comment, "Home"), None);
        assert_eq!(
            validate(comment, "Homes"),
            Some(CommentViolation::MaxCharacterCountExceeded)
        );

        let plural = LocalizedRecord::new("ITEMS", Location::default())
            .with_comment(comment)
            .with_value(["one", "many"])
            .with_placeholder_count(0);
        assert_eq!(CommentValidator::default().validate(&plural), None);
    }

    #[test]
    fn whole_float_count_is_read_as_integer() {
        let comment = r#"{"description": "d", "img": "https://x", "max_character_count": 4.0}"#;
        assert_eq!(validate(comment, "Home"), None);
        assert_eq!(
            validate(comment, "Homes"),
            Some(CommentViolation::MaxCharacterCountExceeded)
        );
    }

    #[test]
    fn negative_count_is_always_exceeded() {
        let comment = r#"{"description": "d", "img": "https://x", "max_character_count": -1}"#;
        assert_eq!(
            validate(comment, "Home"),
            Some(CommentViolation::MaxCharacterCountExceeded)
        );
        assert_eq!(
            validate(comment, ""),
            Some(CommentViolation::MaxCharacterCountExceeded)
        );
    }

    #[test]
    fn character_count_uses_graphemes() {
        let comment = r#"{"description": "d", "img": "https://x", "max_character_count": 2}"#;
        // Two user-visible characters, more than two code points.
        assert_eq!(validate(comment, "e\u{301}\u{1F1EB}\u{1F1F7}"), None);
    }

    #[test]
    fn custom_vocabulary_replaces_default() {
        let validator = CommentValidator::new(["widget"]);
        let comment = r#"{"description": "d", "placeholders": ["number"], "img": "https://x"}"#;
        let record = record(comment, "%d");
        assert!(matches!(
            validator.validate(&record),
            Some(CommentViolation::ContainsInvalidPlaceholders { .. })
        ));
    }

    #[test]
    fn legacy_profile_skips_full_checks() {
        let validator = CommentValidator::legacy();
        assert_eq!(validator.profile(), Profile::Legacy);
        // Unknown key, no img: fine for the legacy rule.
        let comment = r#"{"description": "d", "placeholders": ["number"], "note": "x"}"#;
        assert_eq!(validator.validate(&record(comment, "%d")), None);
    }

    #[test]
    fn legacy_vocabulary_is_smaller() {
        let comment = r#"{"description": "d", "placeholders": ["sku"]}"#;
        assert!(matches!(
            CommentValidator::legacy().validate(&record(comment, "%@")),
            Some(CommentViolation::ContainsInvalidPlaceholders { .. })
        ));
    }

    #[test]
    fn identifiers_ignore_payload() {
        let a = CommentViolation::ContainsInvalidPlaceholders {
            placeholders: BTreeSet::new(),
        };
        let b = CommentViolation::InvalidJsonKey { key: "x".into() };
        assert_eq!(a.identifier(), "containsInvalidPlaceholders");
        assert_eq!(b.identifier(), "invalidJSONKey");
    }

    #[test]
    fn invalid_placeholder_reason_lists_entries() {
        let kind = CommentViolation::ContainsInvalidPlaceholders {
            placeholders: ["b".to_string(), "a".to_string()].into(),
        };
        insta::assert_snapshot!(kind.reason(), @r#"contains invalid placeholders: "a", "b""#);
    }
}
