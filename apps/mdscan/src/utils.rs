//! Supporting helpers: colored message prefixes, case-insensitive ordering,
//! and the minimal path encoding used in outline links.

use owo_colors::OwoColorize;
use std::cmp::Ordering;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

pub fn error_prefix() -> String {
    if colors_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

pub fn note_prefix() -> String {
    if colors_enabled() {
        "note:".yellow().bold().to_string()
    } else {
        "note:".to_string()
    }
}

pub fn info_prefix() -> String {
    if colors_enabled() {
        "info:".blue().bold().to_string()
    } else {
        "info:".to_string()
    }
}

/// Character-wise comparison with both sides folded to lowercase.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Heading of the alphabetical group a name belongs to: its first
/// character, uppercased. Empty for an empty name.
pub fn letter_group(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// Encode a relative path for use as a markdown link target.
///
/// Only spaces and the star glyph are escaped; everything else is left as is.
pub fn encode_path(path: &str) -> String {
    path.replace(' ', "%20").replace('\u{2B50}', "%E2%AD%90")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_ignore_case() {
        assert_eq!(cmp_ignore_case("Apple", "apple"), Ordering::Equal);
        assert_eq!(cmp_ignore_case("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_ignore_case("Zeta", "alpha"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("ab", "abc"), Ordering::Less);
        assert_eq!(cmp_ignore_case("Éa", "éz"), Ordering::Less);
    }

    #[test]
    fn test_letter_group() {
        assert_eq!(letter_group("apple.md"), "A");
        assert_eq!(letter_group("éz.md"), "É");
        assert_eq!(letter_group("Éa.md"), "É");
        assert_eq!(letter_group("_x.md"), "_");
        assert_eq!(letter_group(""), "");
    }

    #[test]
    fn test_encode_path_is_minimal() {
        assert_eq!(encode_path("My Notes/a b.md"), "My%20Notes/a%20b.md");
        assert_eq!(encode_path("\u{2B50} Fav/x.md"), "%E2%AD%90%20Fav/x.md");
        assert_eq!(encode_path("a&b#c?.md"), "a&b#c?.md");
    }
}
