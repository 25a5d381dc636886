//! Cleaning of raw slug generator output.
//!
//! Generators return free text. Before a candidate may be used as a short
//! code it is reduced to `[a-z0-9-]{3,8}` with no leading or trailing hyphen.

use regex::Regex;
use std::sync::LazyLock;

/// Shortest acceptable slug.
pub const MIN_SLUG_LEN: usize = 3;

/// Longest acceptable slug; longer candidates are truncated.
pub const MAX_SLUG_LEN: usize = 8;

/// Codes shadowed by fixed routes; a mapping stored under one of these would
/// never be reachable through `GET /{code}`.
pub const RESERVED_CODES: &[&str] = &["health", "api"];

/// Everything outside the slug alphabet.
static DISALLOWED_CHARS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]").unwrap());

/// Cleans raw generator output into a usable slug.
///
/// Trims whitespace, lowercases, strips characters outside `[a-z0-9-]`, trims
/// hyphens, and truncates to [`MAX_SLUG_LEN`]. Hyphens exposed by truncation
/// are trimmed again.
///
/// Returns `None` when fewer than [`MIN_SLUG_LEN`] characters remain.
///
/// # Examples
///
/// ```
/// use slugshort::domain::slug::clean_slug;
///
/// assert_eq!(clean_slug("  GHub\n").as_deref(), Some("ghub"));
/// assert_eq!(clean_slug("\"stack-overflow\"").as_deref(), Some("stack-ov"));
/// assert_eq!(clean_slug("--a--"), None);
/// ```
pub fn clean_slug(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    let stripped = DISALLOWED_CHARS.replace_all(&lowered, "");

    // Only ASCII remains, so byte truncation is safe.
    let trimmed = stripped.trim_matches('-');
    let truncated = &trimmed[..trimmed.len().min(MAX_SLUG_LEN)];
    let slug = truncated.trim_end_matches('-');

    if slug.len() < MIN_SLUG_LEN {
        return None;
    }

    Some(slug.to_string())
}

/// Returns `true` if `code` collides with a fixed route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
