//! Declared key to generated accessor name.
//!
//! Resource keys such as `CHECKOUT.PAY_NOW` are exposed to application code
//! through generated accessors such as `L10n.checkout.payNow`. The source
//! scanner reports accessor names, so declared keys are rewritten the same way
//! before the two sides are compared. Any drift from the generator's naming
//! silently breaks the unused-string check.

const PREFIX: &str = "L10n";

/// Rewrites a dotted declaration key into its generated accessor name.
///
/// ```
/// use strings_lint_rules::normalize::to_generated_accessor;
///
/// assert_eq!(to_generated_accessor("FOO"), "l10n.foo");
/// assert_eq!(to_generated_accessor("FOO.BAR_BAZ"), "l10n.foo.barBaz");
/// assert_eq!(to_generated_accessor("A.B.C_D"), "l10n.a.b.cD");
/// ```
#[must_use]
pub fn to_generated_accessor(key: &str) -> String {
    let segments: Vec<&str> = key.split('.').filter(|s| !s.is_empty()).collect();
    let count = segments.len();

    let generated: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let capitalize_first = i > 0 || (count > 1 && i < count - 1);
            lowercase_first(&camel_case(segment, capitalize_first))
        })
        .collect();

    format!("{}.{}", lowercase_first(PREFIX), generated.join("."))
}

/// The case-insensitive form used when comparing declared and used keys.
#[must_use]
pub fn match_key(accessor: &str) -> String {
    accessor.to_lowercase()
}

fn camel_case(segment: &str, capitalize_first: bool) -> String {
    segment
        .split('_')
        .filter(|w| !w.is_empty())
        .enumerate()
        .map(|(i, word)| {
            let word = word.to_lowercase();
            if i > 0 || capitalize_first {
                capitalize(&word)
            } else {
                word
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lowercase_first(component: &str) -> String {
    let mut chars = component.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
