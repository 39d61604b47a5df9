//! Selection keys - correlate a menu pick with the kill-count form without server state.
//!
//! The bot keeps no session table. The chosen (category, entry) pair is encoded into the
//! select-menu option value, copied into the modal's custom id, and decoded again when the
//! modal is submitted. Fields are joined with the ASCII unit separator, which cannot appear
//! in configured category names and is refused in entry names.

use crate::errors::{Error, Result};

/// Delimiter between the encoded fields.
pub const FIELD_SEPARATOR: char = '\u{1f}';

/// Longest encoded key, in characters. Leaves room for a component prefix inside
/// Discord's 100-character custom id limit.
pub const MAX_ENCODED_LEN: usize = 80;

/// A user's pick: which entry of which category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionKey {
    /// Category the entry belongs to
    pub category: String,
    /// Entry name within the category
    pub entry: String,
}

impl SelectionKey {
    /// Creates a key.
    #[must_use]
    pub fn new(category: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            entry: entry.into(),
        }
    }

    /// Encodes the key into an opaque string.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSelection`] if a field is empty or contains the separator,
    /// or the encoded key would exceed [`MAX_ENCODED_LEN`].
    pub fn encode(&self) -> Result<String> {
        for (field, value) in [("category", &self.category), ("entry", &self.entry)] {
            if value.is_empty() {
                return Err(invalid(format!("{field} name is empty")));
            }
            if value.contains(FIELD_SEPARATOR) {
                return Err(invalid(format!("{field} name contains a reserved character")));
            }
        }

        let encoded = format!("{}{FIELD_SEPARATOR}{}", self.category, self.entry);
        let length = encoded.chars().count();
        if length > MAX_ENCODED_LEN {
            return Err(invalid(format!(
                "'{}' is too long to select ({length} > {MAX_ENCODED_LEN} characters)",
                self.entry
            )));
        }
        Ok(encoded)
    }

    /// Decodes a string produced by [`SelectionKey::encode`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidSelection`] if the string does not hold exactly two
    /// non-empty fields.
    pub fn decode(raw: &str) -> Result<Self> {
        let (category, entry) = raw
            .split_once(FIELD_SEPARATOR)
            .ok_or_else(|| invalid("missing separator".to_string()))?;

        if category.is_empty() || entry.is_empty() || entry.contains(FIELD_SEPARATOR) {
            return Err(invalid("malformed selection".to_string()));
        }
        Ok(Self::new(category, entry))
    }
}

fn invalid(reason: String) -> Error {
    Error::InvalidSelection { reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_with_legacy_delimiters_in_names() -> Result<()> {
        let key = SelectionKey::new("Capes - Quivers", "Dizana's | Quiver: blessed");
        let decoded = SelectionKey::decode(&key.encode()?)?;
        assert_eq!(decoded, key);
        Ok(())
    }

    #[test]
    fn test_encode_rejects_separator_and_empty_fields() {
        let with_separator = SelectionKey::new("Bosses", format!("Vork{FIELD_SEPARATOR}ath"));
        assert!(matches!(
            with_separator.encode(),
            Err(Error::InvalidSelection { .. })
        ));
        assert!(SelectionKey::new("", "Vorkath").encode().is_err());
        assert!(SelectionKey::new("Bosses", "").encode().is_err());
    }

    #[test]
    fn test_encode_rejects_over_long_keys() {
        let key = SelectionKey::new("Bosses", "x".repeat(MAX_ENCODED_LEN));
        assert!(key.encode().is_err());

        let fits = SelectionKey::new("Bosses", "x".repeat(MAX_ENCODED_LEN - "Bosses".len() - 1));
        assert!(fits.encode().is_ok());
    }

    #[test]
    fn test_decode_rejects_garbage() {
        for raw in [
            "",
            "Bosses|Vorkath",
            "Bosses.json|Vorkath",
            "\u{1f}Vorkath",
            "Bosses\u{1f}",
            "a\u{1f}b\u{1f}c",
        ] {
            assert!(
                matches!(
                    SelectionKey::decode(raw),
                    Err(Error::InvalidSelection { .. })
                ),
                "{raw:?} should not decode"
            );
        }
    }
}
