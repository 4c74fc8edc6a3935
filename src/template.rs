//! Flat `@Key@` placeholder substitution for LaTeX templates.
//!
//! Templates are ordinary `.tex` files; nothing in them is interpreted
//! beyond the delimited tokens, so course staff can edit them freely.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MillError, Result};

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([A-Za-z0-9_]+)@").expect("Invalid placeholder token regex"));

/// An ordered set of placeholder keys and their replacement values.
///
/// Keys are validated on insertion: non-empty, free of `@`, and unique.
/// Under those rules no replacement can create or destroy another key's
/// token, so the application order never changes the output.
#[derive(Debug, Default)]
pub struct Placements {
    entries: Vec<(String, String)>,
}

impl Placements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a key and its replacement text.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Result<()> {
        let key = key.into();
        if key.is_empty() {
            return Err(MillError::UserError(
                "placeholder key must not be empty".to_string(),
            ));
        }
        if key.contains('@') {
            return Err(MillError::UserError(format!(
                "placeholder key '{key}' must not contain '@'"
            )));
        }
        if self.entries.iter().any(|(existing, _)| *existing == key) {
            return Err(MillError::UserError(format!(
                "duplicate placeholder key '{key}'"
            )));
        }
        self.entries.push((key, value.into()));
        Ok(())
    }

    /// Replaces every `@Key@` token for every registered key. Tokens with
    /// no registered key are left verbatim.
    pub fn apply(&self, template: &str) -> String {
        let mut output = template.to_string();
        for (key, value) in &self.entries {
            output = output.replace(&format!("@{key}@"), value);
        }
        output
    }

    /// Registered keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

/// Placeholder tokens still present in rendered output, in order of first
/// appearance. Used to flag typos like `@Sectoin@` after a render.
pub fn unresolved_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for capture in TOKEN_REGEX.captures_iter(text) {
        let name = capture[1].to_string();
        if !tokens.contains(&name) {
            tokens.push(name);
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_registered_placeholders() {
        let mut placements = Placements::new();
        placements.insert("Name", "Alice").unwrap();
        placements.insert("ID", "7").unwrap();
        assert_eq!(
            placements.apply("Hello @Name@, ID @ID@"),
            "Hello Alice, ID 7"
        );
    }

    #[test]
    fn unknown_tokens_stay_verbatim() {
        let mut placements = Placements::new();
        placements.insert("Name", "Alice").unwrap();
        assert_eq!(
            placements.apply("Hello @Name@ @Extra@"),
            "Hello Alice @Extra@"
        );
    }

    #[test]
    fn replaces_every_occurrence() {
        let mut placements = Placements::new();
        placements.insert("Section", "12").unwrap();
        assert_eq!(
            placements.apply("@Section@ and @Section@ again"),
            "12 and 12 again"
        );
    }

    #[test]
    fn short_key_does_not_clobber_longer_key() {
        let mut placements = Placements::new();
        placements.insert("Q1", "first").unwrap();
        placements.insert("Q10", "tenth").unwrap();
        assert_eq!(placements.apply("@Q1@ / @Q10@"), "first / tenth");

        let mut reversed = Placements::new();
        reversed.insert("Q10", "tenth").unwrap();
        reversed.insert("Q1", "first").unwrap();
        assert_eq!(reversed.apply("@Q1@ / @Q10@"), "first / tenth");
    }

    #[test]
    fn empty_key_is_rejected() {
        let mut placements = Placements::new();
        assert!(placements.insert("", "x").is_err());
    }

    #[test]
    fn key_containing_delimiter_is_rejected() {
        let mut placements = Placements::new();
        let err = placements.insert("Na@me", "x").unwrap_err();
        assert!(err.to_string().contains("must not contain '@'"));
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut placements = Placements::new();
        placements.insert("Name", "Alice").unwrap();
        let err = placements.insert("Name", "Bob").unwrap_err();
        assert!(err.to_string().contains("duplicate placeholder key"));
    }

    #[test]
    fn keys_iterate_in_insertion_order() {
        let mut placements = Placements::new();
        placements.insert("Name", "").unwrap();
        placements.insert("ID", "").unwrap();
        placements.insert("Q1", "").unwrap();
        let keys: Vec<_> = placements.keys().collect();
        assert_eq!(keys, vec!["Name", "ID", "Q1"]);
    }

    #[test]
    fn unresolved_tokens_are_reported_once_each() {
        let tokens = unresolved_tokens("@Sectoin@ text @Q16@ more @Sectoin@");
        assert_eq!(tokens, vec!["Sectoin", "Q16"]);
    }

    #[test]
    fn lone_delimiters_are_not_tokens() {
        assert!(unresolved_tokens("mail@example and a@@b").is_empty());
    }

    #[test]
    fn fully_rendered_output_scans_clean() {
        let mut placements = Placements::new();
        placements.insert("Name", "Alice").unwrap();
        let rendered = placements.apply("Hello @Name@");
        assert!(unresolved_tokens(&rendered).is_empty());
    }
}
