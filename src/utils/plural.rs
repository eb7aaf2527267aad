//! Pluralization for summary lines.

/// Return "s" suffix for plural counts
///
/// - `plural_s(0)` -> `"s"` (0 images)
/// - `plural_s(1)` -> `""` (1 image)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(3, "image")` -> `"3 images"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
