//! Token classification against a resolved vocabulary.
//!
//! The classifier answers one question for the tokenizer/parser: may this word stand where an identifier is expected?
//! It is a pure function of a [`KeywordSet`] and the token text and never fails; text that is not a keyword is an
//! identifier.
//!
//! ## Notes
//! - Future-reserved words classify as [`TokenClass::Identifier`]. [`inspect`] additionally reports
//!   [`Advisory::FutureReserved`] so tooling can warn about forward compatibility without rejecting anything.
//!
//! ## Examples
//! ```rust
//! use sqlvocab::builtin;
//! use sqlvocab::classifier::{self, Advisory, TokenClass};
//!
//! let registry = builtin::tsql_family().unwrap();
//! let tsql = registry.resolve(builtin::TSQL).unwrap();
//!
//! assert_eq!(classifier::classify(&tsql, "select"), TokenClass::Reserved);
//! assert_eq!(classifier::classify(&tsql, "Disk"), TokenClass::Unreserved);
//! assert_eq!(classifier::classify(&tsql, "customers"), TokenClass::Identifier);
//! assert_eq!(classifier::inspect(&tsql, "array").advisory, Some(Advisory::FutureReserved));
//! ```

use std::fmt;

use sqlvocab_core::vocab::{Category, Word};

use crate::keyword_set::KeywordSet;

/// How a parser may use a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Never valid as an unquoted identifier.
    Reserved,
    /// An identifier that some grammar rules also accept as syntax.
    Unreserved,
    /// A plain identifier.
    Identifier,
}

impl TokenClass {
    /// Whether the word may appear unquoted in identifier position.
    pub fn can_be_identifier(self) -> bool {
        !matches!(self, TokenClass::Reserved)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenClass::Reserved => "reserved",
            TokenClass::Unreserved => "unreserved",
            TokenClass::Identifier => "identifier",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Non-blocking hints attached to a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Advisory {
    /// The word is expected to become reserved in a later standard revision.
    FutureReserved,
}

/// A classification plus any advisory for tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification {
    pub class: TokenClass,
    pub advisory: Option<Advisory>,
}

/// Classify `text` in the dialect described by `set`.
pub fn classify(set: &KeywordSet, text: &str) -> TokenClass {
    inspect(set, text).class
}

/// Classify `text` and report advisories.
pub fn inspect(set: &KeywordSet, text: &str) -> Classification {
    let category = set.category_of(text);
    let class = match category {
        Some(category) if category.is_enforced() => TokenClass::Reserved,
        Some(Category::Unreserved) => TokenClass::Unreserved,
        _ => TokenClass::Identifier,
    };
    Classification {
        class,
        advisory: matches!(category, Some(Category::FutureReserved)).then_some(Advisory::FutureReserved),
    }
}

/// Enumerate the words of `category` in `set`, alphabetically. Restart by calling again.
///
/// Grammar rules that accept "any unreserved keyword as an identifier" use this with [`Category::Unreserved`].
pub fn iterate_category(set: &KeywordSet, category: Category) -> impl Iterator<Item = &Word> + Clone + '_ {
    set.iter_category(category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword_set::WorkingSet;

    fn set() -> KeywordSet {
        let entries: WorkingSet = [
            ("SELECT", Category::Reserved),
            ("DISK", Category::Unreserved),
            ("DUMP", Category::Unreserved),
            ("ARRAY", Category::FutureReserved),
        ]
        .into_iter()
        .map(|(w, c)| (Word::new(w).unwrap(), c))
        .collect();
        KeywordSet::freeze("test", entries)
    }

    #[test]
    fn test_classify_categories() {
        let set = set();
        assert_eq!(classify(&set, "SELECT"), TokenClass::Reserved);
        assert_eq!(classify(&set, "disk"), TokenClass::Unreserved);
        assert_eq!(classify(&set, "array"), TokenClass::Identifier);
        assert_eq!(classify(&set, "orders"), TokenClass::Identifier);
    }

    #[test]
    fn test_classify_is_total() {
        let set = set();
        assert_eq!(classify(&set, ""), TokenClass::Identifier);
        assert_eq!(classify(&set, "two words"), TokenClass::Identifier);
    }

    #[test]
    fn test_inspect_advisory_only_for_future_reserved() {
        let set = set();
        assert_eq!(inspect(&set, "Array").advisory, Some(Advisory::FutureReserved));
        assert_eq!(inspect(&set, "select").advisory, None);
        assert_eq!(inspect(&set, "orders").advisory, None);
    }

    #[test]
    fn test_can_be_identifier() {
        assert!(!TokenClass::Reserved.can_be_identifier());
        assert!(TokenClass::Unreserved.can_be_identifier());
        assert!(TokenClass::Identifier.can_be_identifier());
    }

    #[test]
    fn test_token_class_names() {
        assert_eq!(TokenClass::Reserved.as_str(), "reserved");
        assert_eq!(TokenClass::Unreserved.to_string(), "unreserved");
        assert_eq!(format!("{}", classify(&set(), "orders")), "identifier");
    }

    #[test]
    fn test_iterate_category_restartable() {
        let set = set();
        let words = iterate_category(&set, Category::Unreserved);
        let again = words.clone();
        assert_eq!(words.map(Word::as_str).collect::<Vec<_>>(), vec!["DISK", "DUMP"]);
        assert_eq!(again.count(), 2);
    }
}
