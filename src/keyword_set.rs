//! Resolved, immutable keyword vocabularies.
//!
//! A [`KeywordSet`] maps each keyword of one dialect to exactly one [`Category`]. Sets are produced by the registry's
//! resolver and shared behind `Arc`; no public API mutates them once built.
//!
//! ## Notes
//! - Lookups normalize their input, so `category_of("select")` and `category_of("SELECT")` agree.
//! - Per-category listings are kept sorted so enumeration order is stable across runs.

use std::collections::HashMap;

use sqlvocab_core::vocab::{Category, Word, normalize};

/// Mutable word → category map used while folding patches.
pub(crate) type WorkingSet = HashMap<Word, Category>;

/// The effective keyword vocabulary of one dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    dialect: String,
    entries: HashMap<Word, Category>,
    reserved: Vec<Word>,
    unreserved: Vec<Word>,
    future_reserved: Vec<Word>,
}

impl KeywordSet {
    /// Freeze a working set into its final, queryable form.
    pub(crate) fn freeze(dialect: impl Into<String>, entries: WorkingSet) -> Self {
        let mut reserved = Vec::new();
        let mut unreserved = Vec::new();
        let mut future_reserved = Vec::new();
        for (word, category) in &entries {
            match category {
                Category::Reserved => reserved.push(word.clone()),
                Category::Unreserved => unreserved.push(word.clone()),
                Category::FutureReserved => future_reserved.push(word.clone()),
            }
        }
        reserved.sort_unstable();
        unreserved.sort_unstable();
        future_reserved.sort_unstable();
        Self {
            dialect: dialect.into(),
            entries,
            reserved,
            unreserved,
            future_reserved,
        }
    }

    /// Copy the entries out as the starting point for a child dialect's fold.
    pub(crate) fn to_working(&self) -> WorkingSet {
        self.entries.clone()
    }

    /// Name of the dialect this set was resolved for.
    pub fn dialect(&self) -> &str {
        &self.dialect
    }

    /// Category of `word` in this dialect, or `None` if it is not a keyword.
    pub fn category_of(&self, word: &str) -> Option<Category> {
        self.entries.get(&*normalize(word)).copied()
    }

    /// Whether `word` is a keyword of exactly `category`.
    pub fn contains(&self, word: &str, category: Category) -> bool {
        self.category_of(word) == Some(category)
    }

    /// Whether `word` is a keyword of any category.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.category_of(word).is_some()
    }

    /// Enumerate the words of one category in alphabetical order.
    ///
    /// ## Notes
    /// - The iterator is lazy and finite; call again (or clone it) to restart.
    pub fn iter_category(&self, category: Category) -> std::slice::Iter<'_, Word> {
        self.words_of(category).iter()
    }

    /// Number of words in `category`.
    pub fn count(&self, category: Category) -> usize {
        self.words_of(category).len()
    }

    /// Enumerate every keyword with its category, alphabetically within each category
    /// (reserved, then unreserved, then future-reserved).
    pub fn iter(&self) -> impl Iterator<Item = (&Word, Category)> + '_ {
        self.reserved
            .iter()
            .map(|w| (w, Category::Reserved))
            .chain(self.unreserved.iter().map(|w| (w, Category::Unreserved)))
            .chain(self.future_reserved.iter().map(|w| (w, Category::FutureReserved)))
    }

    /// Total number of keywords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn words_of(&self, category: Category) -> &[Word] {
        match category {
            Category::Reserved => &self.reserved,
            Category::Unreserved => &self.unreserved,
            Category::FutureReserved => &self.future_reserved,
        }
    }
}
