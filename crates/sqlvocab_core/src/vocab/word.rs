//! Case-normalized keyword spellings.
//!
//! SQL keywords are case-insensitive: `select`, `SELECT` and `Select` are the same word. Every spelling is folded to
//! uppercase before it is stored or looked up, so the rest of the system can compare words byte-for-byte.
//!
//! ## Examples
//! ```rust
//! use sqlvocab_core::vocab::word::{self, Word};
//!
//! assert_eq!(Word::new("Disk").unwrap().as_str(), "DISK");
//! assert!(Word::new("two words").is_none());
//! assert_eq!(word::normalize("GOTO"), "GOTO");
//! ```

use std::borrow::{Borrow, Cow};
use std::fmt;

/// A non-empty, whitespace-free spelling folded to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(Box<str>);

impl Word {
    /// Normalize and validate a spelling.
    ///
    /// ## Returns
    /// - `Some(Word)` holding the uppercase spelling.
    /// - `None` if `text` is empty or contains whitespace.
    pub fn new(text: &str) -> Option<Word> {
        if !is_word_shaped(text) {
            return None;
        }
        Some(Word(normalize(text).into_owned().into_boxed_str()))
    }

    /// The normalized spelling.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

/// Check the shape invariant shared by every word: non-empty, no whitespace.
pub fn is_word_shaped(text: &str) -> bool {
    !text.is_empty() && !text.chars().any(char::is_whitespace)
}

/// Fold `text` to its canonical (uppercase) spelling.
///
/// ## Notes
/// - Borrows when `text` is already canonical, so hot lookup paths on uppercase input do not allocate.
/// - Folding is Unicode-aware (`char::to_uppercase`), not ASCII-only.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_canonical_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.to_uppercase())
    }
}

fn is_canonical_char(c: char) -> bool {
    let mut upper = c.to_uppercase();
    upper.next() == Some(c) && upper.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uppercases() {
        assert_eq!(Word::new("select").unwrap().as_str(), "SELECT");
        assert_eq!(Word::new("Select").unwrap(), Word::new("SELECT").unwrap());
    }

    #[test]
    fn test_new_rejects_empty_and_whitespace() {
        assert!(Word::new("").is_none());
        assert!(Word::new("GO TO").is_none());
        assert!(Word::new("TAB\t").is_none());
        assert!(Word::new(" ").is_none());
    }

    #[test]
    fn test_new_keeps_punctuation() {
        // `END-EXEC` is a real future-reserved T-SQL word.
        assert_eq!(Word::new("end-exec").unwrap().as_str(), "END-EXEC");
    }

    #[test]
    fn test_normalize_borrows_canonical_input() {
        assert!(matches!(normalize("CURRENT_USER"), Cow::Borrowed(_)));
        assert!(matches!(normalize("current_user"), Cow::Owned(_)));
        assert!(matches!(normalize("REGR_R2"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_unicode() {
        assert_eq!(normalize("straße"), "STRASSE");
    }

    #[test]
    fn test_borrow_lookup() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Word::new("goto").unwrap());
        assert!(set.contains("GOTO"));
        assert!(!set.contains("goto"));
    }
}
