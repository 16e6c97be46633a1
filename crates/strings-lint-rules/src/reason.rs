//! Reason-text helpers shared by the rules.

/// Appends the configured help link, if any, to a reason sentence.
pub(crate) fn with_help_link(reason: String, help_link: Option<&str>) -> String {
    match help_link {
        Some(link) => format!("{reason} For more information, please see: {link}"),
        None => reason,
    }
}

/// Reason sentence for a rejected structured comment.
pub(crate) fn comment_reason(key: &str, fragment: &str, help_link: Option<&str>) -> String {
    with_help_link(
        format!("Comment for Localized string \"{key}\" {fragment}"),
        help_link,
    )
}
