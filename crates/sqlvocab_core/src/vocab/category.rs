//! Keyword categories.
//!
//! Every word in a resolved keyword set carries exactly one [`Category`]. The categories are disjoint: a word that is
//! future-reserved is neither reserved nor unreserved in the same set.
//!
//! ## Examples
//! ```rust
//! use sqlvocab_core::vocab::category::{self, Category};
//!
//! assert_eq!(category::from_str("reserved"), Some(Category::Reserved));
//! assert_eq!(Category::FutureReserved.as_str(), "future_reserved");
//! assert!(Category::Reserved.is_enforced());
//! assert!(!Category::FutureReserved.is_enforced());
//! ```

use std::fmt;

/// Label attached to a keyword within one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Never usable unquoted as an identifier.
    Reserved,
    /// Special meaning in some grammar positions, otherwise an ordinary identifier.
    Unreserved,
    /// Expected to become reserved in a later standard revision; not enforced.
    FutureReserved,
}

/// Every category, in declaration order.
pub const CATEGORIES: &[Category] = &[Category::Reserved, Category::Unreserved, Category::FutureReserved];

impl Category {
    /// Canonical snake_case spelling, used in diagnostics and generated docs.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Reserved => "reserved",
            Category::Unreserved => "unreserved",
            Category::FutureReserved => "future_reserved",
        }
    }

    /// Whether the category restricts identifier use today.
    ///
    /// ## Notes
    /// - Only [`Category::Reserved`] is enforced. Future-reserved words parse as identifiers.
    pub fn is_enforced(self) -> bool {
        matches!(self, Category::Reserved)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup by canonical spelling.
///
/// ## Returns
/// - `Some(Category)` for `"reserved"`, `"unreserved"` or `"future_reserved"`.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<Category> {
    CATEGORIES.iter().copied().find(|c| c.as_str() == s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spellings_round_trip() {
        for &category in CATEGORIES {
            assert_eq!(from_str(category.as_str()), Some(category));
        }
    }

    #[test]
    fn test_unknown_spelling() {
        assert_eq!(from_str("RESERVED"), None);
        assert_eq!(from_str(""), None);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Category::Unreserved.to_string(), "unreserved");
    }
}
