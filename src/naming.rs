//! Filesystem-safe names for generated booklets.

use std::sync::LazyLock;

use regex::Regex;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("Invalid filename filter regex"));

/// Reduces a display name to a safe file stem.
///
/// Characters outside word characters, whitespace, and hyphens are
/// dropped, the result is trimmed, and spaces become underscores. A name
/// that strips to nothing falls back to `Unknown`.
pub fn safe_stem(name: &str) -> String {
    let stripped = UNSAFE_CHARS.replace_all(name, "");
    let trimmed = stripped.trim();
    if trimmed.is_empty() {
        return "Unknown".to_string();
    }
    trimmed.replace(' ', "_")
}

/// File stem for one student's booklet, `{identifier}_{safe name}`.
pub fn booklet_stem(identifier: &str, name: &str) -> String {
    format!("{}_{}", identifier, safe_stem(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_underscores() {
        assert_eq!(safe_stem("Partho Sutra Dhor"), "Partho_Sutra_Dhor");
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(safe_stem("O'Connor, Jr."), "OConnor_Jr");
    }

    #[test]
    fn hyphens_survive() {
        assert_eq!(safe_stem("Anne-Marie"), "Anne-Marie");
    }

    #[test]
    fn unicode_word_characters_survive() {
        assert_eq!(safe_stem("Ayşe Yılmaz"), "Ayşe_Yılmaz");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(safe_stem("  Bob  "), "Bob");
    }

    #[test]
    fn unusable_names_fall_back_to_unknown() {
        assert_eq!(safe_stem(""), "Unknown");
        assert_eq!(safe_stem("???"), "Unknown");
        assert_eq!(safe_stem("   "), "Unknown");
    }

    #[test]
    fn booklet_stem_joins_identifier_and_name() {
        assert_eq!(booklet_stem("12345", "Alice Smith"), "12345_Alice_Smith");
        assert_eq!(booklet_stem("221-15-4023", "???"), "221-15-4023_Unknown");
    }
}
