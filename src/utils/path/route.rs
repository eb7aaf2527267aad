//! URL reference helpers.
//!
//! - Link type detection (external vs local)
//! - Leading slash handling

/// Strip exactly one leading slash from a URL path
///
/// # Examples
/// ```ignore
/// assert_eq!(strip_one_slash("/images/a.png"), "images/a.png");
/// assert_eq!(strip_one_slash("images/a.png"), "images/a.png");
/// ```
#[inline]
pub fn strip_one_slash(url: &str) -> &str {
    url.strip_prefix('/').unwrap_or(url)
}

/// Check if a link is external (has a URL scheme like http:, data:, etc.)
///
/// A valid scheme must:
/// - Start with an ASCII letter
/// - Only contain ASCII alphanumeric or `+`, `-`, `.` up to the colon
///
/// So a bare file name like `a:b.png` reads as scheme `a`, while
/// `2024:cover.png` stays local.
///
/// # Examples
/// ```ignore
/// assert!(is_external_link("https://example.com/a.png"));
/// assert!(is_external_link("data:image/png;base64,AAAA"));
/// assert!(!is_external_link("/images/a.png"));
/// ```
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.split_once(':').is_some_and(|(scheme, _)| {
        scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Check if a link is protocol-relative (`//host/path`)
#[inline]
pub fn is_protocol_relative(link: &str) -> bool {
    link.starts_with("//")
}
