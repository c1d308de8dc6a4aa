//! Declarative keyword deltas and the fold that applies them.
//!
//! A [`DialectPatch`] describes how a dialect's vocabulary differs from its parent's. Patches are validated when their
//! dialect is registered and folded onto the inherited vocabulary when the dialect is resolved.
//!
//! ## Fold order
//!
//! Folding a patch onto an inherited working set runs these steps in order:
//!
//! 1. `remove`: drop each word whatever its category. Absent words are ignored.
//! 2. `redesignate`: move an inherited word to another category. Absent words are an error.
//! 3. `add_future_reserved`, `add_reserved`, then `add_unreserved`: insert each word, overwriting any earlier
//!    category.
//!
//! Step 3 is the tie-break for words that vendor documentation reserves but the grammar accepts as identifiers: the
//! unreserved listing is applied last, so it wins over an inherited or same-step reserved listing.
//!
//! ## Examples
//! ```rust
//! use sqlvocab::patch::DialectPatch;
//! use sqlvocab::Category;
//!
//! let patch = DialectPatch::new("acme-core")
//!     .add_reserved(["QUALIFY"])
//!     .add_unreserved(["DISK"])
//!     .remove(["GOTO"])
//!     .redesignate("LABEL", Category::Reserved);
//! assert_eq!(patch.name(), "acme-core");
//! ```

use std::collections::HashMap;
use std::fmt;

use sqlvocab_core::vocab::{Category, Word};

use crate::config::RegistryConfig;
use crate::errors::VocabularyError;
use crate::keyword_set::WorkingSet;

/// One list inside a patch. Used to attribute errors to a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatchStep {
    Remove,
    Redesignate,
    AddFutureReserved,
    AddReserved,
    AddUnreserved,
}

impl PatchStep {
    pub fn as_str(self) -> &'static str {
        match self {
            PatchStep::Remove => "remove",
            PatchStep::Redesignate => "redesignate",
            PatchStep::AddFutureReserved => "add_future_reserved",
            PatchStep::AddReserved => "add_reserved",
            PatchStep::AddUnreserved => "add_unreserved",
        }
    }

    /// The category an add-list assigns, if this step is an add-list.
    pub fn added_category(self) -> Option<Category> {
        match self {
            PatchStep::AddFutureReserved => Some(Category::FutureReserved),
            PatchStep::AddReserved => Some(Category::Reserved),
            PatchStep::AddUnreserved => Some(Category::Unreserved),
            PatchStep::Remove | PatchStep::Redesignate => None,
        }
    }

    fn is_reserving(self) -> bool {
        matches!(self, PatchStep::AddReserved | PatchStep::AddFutureReserved)
    }

    fn is_exclusive_with_add(self) -> bool {
        self.added_category().is_some() || self == PatchStep::Remove
    }
}

impl fmt::Display for PatchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether listing one word in both steps of a single patch is ambiguous.
///
/// ## Notes
/// - A reserving add-list (`add_reserved`, `add_future_reserved`) is exclusive with every other add-list and with
///   `remove`.
/// - `add_unreserved` together with `remove` is allowed: the word is dropped, then re-added as unreserved.
/// - `redesignate` never conflicts here; it runs before the add-lists and needs the word to be inherited.
fn steps_conflict(a: PatchStep, b: PatchStep) -> bool {
    a != b && (a.is_reserving() || b.is_reserving()) && a.is_exclusive_with_add() && b.is_exclusive_with_add()
}

/// A named, declarative delta against a parent dialect's vocabulary.
///
/// Spellings are kept as written until the owning dialect is registered; registration normalizes and validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialectPatch {
    name: String,
    add_future_reserved: Vec<String>,
    add_reserved: Vec<String>,
    add_unreserved: Vec<String>,
    remove: Vec<String>,
    redesignate: Vec<(String, Category)>,
}

impl DialectPatch {
    /// Create an empty patch.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append words to `add_reserved`.
    pub fn add_reserved<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_spellings(&mut self.add_reserved, words);
        self
    }

    /// Append words to `add_unreserved`.
    pub fn add_unreserved<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_spellings(&mut self.add_unreserved, words);
        self
    }

    /// Append words to `add_future_reserved`.
    pub fn add_future_reserved<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_spellings(&mut self.add_future_reserved, words);
        self
    }

    /// Append words to `remove`.
    pub fn remove<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_spellings(&mut self.remove, words);
        self
    }

    /// Move an inherited word into `category`. Later redesignations of the same word win.
    pub fn redesignate(mut self, word: impl AsRef<str>, category: Category) -> Self {
        self.redesignate.push((word.as_ref().to_string(), category));
        self
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.add_future_reserved.is_empty()
            && self.add_reserved.is_empty()
            && self.add_unreserved.is_empty()
            && self.remove.is_empty()
            && self.redesignate.is_empty()
    }

    /// Normalize and validate the patch for `dialect`.
    ///
    /// ## Errors
    /// - [`VocabularyError::InvalidWord`] if a spelling is empty or contains whitespace.
    /// - [`VocabularyError::AmbiguousPatch`] if one word is listed in two conflicting steps.
    pub(crate) fn compile(&self, dialect: &str) -> Result<CompiledPatch, VocabularyError> {
        let compiled = CompiledPatch {
            name: self.name.clone(),
            remove: self.words(dialect, PatchStep::Remove, &self.remove)?,
            redesignate: self
                .redesignate
                .iter()
                .map(|(spelling, category)| Ok((self.word(dialect, PatchStep::Redesignate, spelling)?, *category)))
                .collect::<Result<_, VocabularyError>>()?,
            add_future_reserved: self.words(dialect, PatchStep::AddFutureReserved, &self.add_future_reserved)?,
            add_reserved: self.words(dialect, PatchStep::AddReserved, &self.add_reserved)?,
            add_unreserved: self.words(dialect, PatchStep::AddUnreserved, &self.add_unreserved)?,
        };
        compiled.check_unambiguous(dialect)?;
        Ok(compiled)
    }

    fn words(&self, dialect: &str, step: PatchStep, spellings: &[String]) -> Result<Vec<Word>, VocabularyError> {
        spellings.iter().map(|s| self.word(dialect, step, s)).collect()
    }

    fn word(&self, dialect: &str, step: PatchStep, spelling: &str) -> Result<Word, VocabularyError> {
        Word::new(spelling).ok_or_else(|| VocabularyError::InvalidWord {
            dialect: dialect.to_string(),
            patch: self.name.clone(),
            step,
            word: spelling.to_string(),
        })
    }
}

fn extend_spellings<I, S>(target: &mut Vec<String>, words: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    target.extend(words.into_iter().map(|w| w.as_ref().to_string()));
}

/// A validated patch, ready to fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CompiledPatch {
    name: String,
    remove: Vec<Word>,
    redesignate: Vec<(Word, Category)>,
    add_future_reserved: Vec<Word>,
    add_reserved: Vec<Word>,
    add_unreserved: Vec<Word>,
}

/// Per-step counts of one or more folds, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FoldStats {
    pub removed: usize,
    pub absent_removals: usize,
    pub redesignated: usize,
    pub added: usize,
    pub overridden: usize,
}

impl std::ops::AddAssign for FoldStats {
    fn add_assign(&mut self, other: Self) {
        self.removed += other.removed;
        self.absent_removals += other.absent_removals;
        self.redesignated += other.redesignated;
        self.added += other.added;
        self.overridden += other.overridden;
    }
}

impl CompiledPatch {
    /// Build the implicit patch for a root dialect's literal tables.
    ///
    /// ## Notes
    /// - No ambiguity check runs here: raw literal tables may list a word as both reserved and unreserved, and the
    ///   fold order resolves that overlap in favor of the unreserved listing.
    pub(crate) fn from_literal_tables(
        name: &str,
        future_reserved: Vec<Word>,
        reserved: Vec<Word>,
        unreserved: Vec<Word>,
    ) -> Self {
        Self {
            name: name.to_string(),
            remove: Vec::new(),
            redesignate: Vec::new(),
            add_future_reserved: future_reserved,
            add_reserved: reserved,
            add_unreserved: unreserved,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    fn steps(&self) -> [(PatchStep, &[Word]); 4] {
        [
            (PatchStep::AddFutureReserved, self.add_future_reserved.as_slice()),
            (PatchStep::AddReserved, self.add_reserved.as_slice()),
            (PatchStep::AddUnreserved, self.add_unreserved.as_slice()),
            (PatchStep::Remove, self.remove.as_slice()),
        ]
    }

    fn check_unambiguous(&self, dialect: &str) -> Result<(), VocabularyError> {
        let mut seen: HashMap<&Word, Vec<PatchStep>> = HashMap::new();
        for (step, words) in self.steps() {
            for word in words {
                let steps = seen.entry(word).or_default();
                if let Some(&first) = steps.iter().find(|&&prev| steps_conflict(prev, step)) {
                    return Err(VocabularyError::AmbiguousPatch {
                        dialect: dialect.to_string(),
                        patch: self.name.clone(),
                        word: word.to_string(),
                        first,
                        second: step,
                    });
                }
                if !steps.contains(&step) {
                    steps.push(step);
                }
            }
        }
        Ok(())
    }

    /// Fold this patch onto `working`, the vocabulary inherited so far.
    ///
    /// ## Errors
    /// - [`VocabularyError::UnknownWord`] if `redesignate` names a word absent from `working` at that point.
    ///   `working` may already be partially updated; callers discard it on error.
    pub(crate) fn apply(
        &self,
        dialect: &str,
        working: &mut WorkingSet,
        config: &RegistryConfig,
    ) -> Result<FoldStats, VocabularyError> {
        let mut stats = FoldStats::default();

        for word in &self.remove {
            if working.remove(word).is_some() {
                stats.removed += 1;
            } else {
                stats.absent_removals += 1;
                if config.report_absent_removals {
                    tracing::warn!(dialect, patch = %self.name, %word, "remove names a word that is not inherited");
                }
            }
        }

        for (word, category) in &self.redesignate {
            match working.get_mut(word) {
                Some(current) => {
                    *current = *category;
                    stats.redesignated += 1;
                }
                None => {
                    return Err(VocabularyError::UnknownWord {
                        dialect: dialect.to_string(),
                        patch: self.name.clone(),
                        step: PatchStep::Redesignate,
                        word: word.to_string(),
                    });
                }
            }
        }

        let additions = [
            (Category::FutureReserved, &self.add_future_reserved),
            (Category::Reserved, &self.add_reserved),
            (Category::Unreserved, &self.add_unreserved),
        ];
        for (category, words) in additions {
            for word in words {
                match working.insert(word.clone(), category) {
                    Some(previous) if previous != category => stats.overridden += 1,
                    Some(_) => {}
                    None => stats.added += 1,
                }
            }
        }

        tracing::debug!(
            dialect,
            patch = %self.name,
            removed = stats.removed,
            absent_removals = stats.absent_removals,
            redesignated = stats.redesignated,
            added = stats.added,
            overridden = stats.overridden,
            "patch folded"
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn working(entries: &[(&str, Category)]) -> WorkingSet {
        entries.iter().map(|&(w, c)| (word(w), c)).collect()
    }

    fn quiet() -> RegistryConfig {
        RegistryConfig::default().with_report_absent_removals(false)
    }

    // ========================================
    // Registration-time validation
    // ========================================

    #[test]
    fn test_compile_normalizes_spellings() {
        let compiled = DialectPatch::new("p").add_reserved(["qualify"]).compile("d").unwrap();
        assert_eq!(compiled.add_reserved, vec![word("QUALIFY")]);
    }

    #[test]
    fn test_reserved_and_unreserved_is_ambiguous() {
        let err = DialectPatch::new("p")
            .add_reserved(["FOO"])
            .add_unreserved(["foo"])
            .compile("d")
            .unwrap_err();
        assert_eq!(
            err,
            VocabularyError::AmbiguousPatch {
                dialect: "d".to_string(),
                patch: "p".to_string(),
                word: "FOO".to_string(),
                first: PatchStep::AddReserved,
                second: PatchStep::AddUnreserved,
            }
        );
    }

    #[test]
    fn test_reserved_and_remove_is_ambiguous() {
        let err = DialectPatch::new("p")
            .add_reserved(["FOO"])
            .remove(["FOO"])
            .compile("d")
            .unwrap_err();
        assert!(matches!(
            err,
            VocabularyError::AmbiguousPatch {
                first: PatchStep::AddReserved,
                second: PatchStep::Remove,
                ..
            }
        ));
    }

    #[test]
    fn test_future_reserved_and_unreserved_is_ambiguous() {
        let err = DialectPatch::new("p")
            .add_future_reserved(["FOO"])
            .add_unreserved(["FOO"])
            .compile("d")
            .unwrap_err();
        assert!(matches!(err, VocabularyError::AmbiguousPatch { .. }));
    }

    #[test]
    fn test_unreserved_and_remove_is_allowed() {
        let patch = DialectPatch::new("p").add_unreserved(["FOO"]).remove(["FOO"]);
        assert!(patch.compile("d").is_ok());
    }

    #[test]
    fn test_duplicates_within_one_step_are_allowed() {
        let patch = DialectPatch::new("p").add_reserved(["TRAN", "tran"]);
        assert!(patch.compile("d").is_ok());
    }

    #[test]
    fn test_invalid_word_names_step() {
        let err = DialectPatch::new("p").remove(["GO TO"]).compile("d").unwrap_err();
        assert_eq!(
            err,
            VocabularyError::InvalidWord {
                dialect: "d".to_string(),
                patch: "p".to_string(),
                step: PatchStep::Remove,
                word: "GO TO".to_string(),
            }
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(DialectPatch::new("p").is_empty());
        assert!(!DialectPatch::new("p").redesignate("X", Category::Reserved).is_empty());
    }

    // ========================================
    // Fold
    // ========================================

    #[test]
    fn test_remove_is_idempotent() {
        let patch = DialectPatch::new("p").remove(["GOTO", "NOPE"]).compile("d").unwrap();
        let mut set = working(&[("GOTO", Category::Reserved)]);
        let stats = patch.apply("d", &mut set, &quiet()).unwrap();
        assert!(set.is_empty());
        assert_eq!(stats.removed, 1);
        assert_eq!(stats.absent_removals, 1);
    }

    #[test]
    fn test_redesignate_moves_inherited_word() {
        let patch = DialectPatch::new("p")
            .redesignate("label", Category::Reserved)
            .compile("d")
            .unwrap();
        let mut set = working(&[("LABEL", Category::Unreserved)]);
        patch.apply("d", &mut set, &quiet()).unwrap();
        assert_eq!(set.get("LABEL"), Some(&Category::Reserved));
    }

    #[test]
    fn test_redesignate_absent_word_fails() {
        let patch = DialectPatch::new("p")
            .redesignate("LABEL", Category::Reserved)
            .compile("d")
            .unwrap();
        let mut set = WorkingSet::new();
        let err = patch.apply("d", &mut set, &quiet()).unwrap_err();
        assert_eq!(
            err,
            VocabularyError::UnknownWord {
                dialect: "d".to_string(),
                patch: "p".to_string(),
                step: PatchStep::Redesignate,
                word: "LABEL".to_string(),
            }
        );
    }

    #[test]
    fn test_redesignate_after_remove_fails() {
        let patch = DialectPatch::new("p")
            .remove(["LABEL"])
            .redesignate("LABEL", Category::Reserved)
            .compile("d")
            .unwrap();
        let mut set = working(&[("LABEL", Category::Unreserved)]);
        assert!(matches!(
            patch.apply("d", &mut set, &quiet()),
            Err(VocabularyError::UnknownWord { .. })
        ));
    }

    #[test]
    fn test_add_unreserved_overrides_inherited_reserved() {
        let patch = DialectPatch::new("p").add_unreserved(["DISK"]).compile("d").unwrap();
        let mut set = working(&[("DISK", Category::Reserved)]);
        let stats = patch.apply("d", &mut set, &quiet()).unwrap();
        assert_eq!(set.get("DISK"), Some(&Category::Unreserved));
        assert_eq!(stats.overridden, 1);
    }

    #[test]
    fn test_add_unreserved_clears_future_reserved() {
        let patch = DialectPatch::new("p").add_unreserved(["ARRAY"]).compile("d").unwrap();
        let mut set = working(&[("ARRAY", Category::FutureReserved)]);
        patch.apply("d", &mut set, &quiet()).unwrap();
        assert_eq!(set.get("ARRAY"), Some(&Category::Unreserved));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_remove_then_readd_in_one_patch() {
        let patch = DialectPatch::new("p")
            .remove(["FOO"])
            .add_unreserved(["FOO"])
            .compile("d")
            .unwrap();
        let mut set = working(&[("FOO", Category::Reserved)]);
        patch.apply("d", &mut set, &quiet()).unwrap();
        assert_eq!(set.get("FOO"), Some(&Category::Unreserved));
    }

    #[test]
    fn test_literal_tables_prefer_unreserved() {
        let base = CompiledPatch::from_literal_tables(
            "base",
            vec![word("ARRAY")],
            vec![word("WHILE"), word("SELECT")],
            vec![word("WHILE")],
        );
        let mut set = WorkingSet::new();
        base.apply("root", &mut set, &quiet()).unwrap();
        assert_eq!(set.get("WHILE"), Some(&Category::Unreserved));
        assert_eq!(set.get("SELECT"), Some(&Category::Reserved));
        assert_eq!(set.get("ARRAY"), Some(&Category::FutureReserved));
    }

    #[test]
    fn test_absent_removal_reporting_does_not_change_fold() {
        let patch = DialectPatch::new("p").remove(["GHOST", "DISK"]).compile("d").unwrap();
        let mut reported = working(&[("DISK", Category::Reserved), ("SELECT", Category::Reserved)]);
        let mut silent = reported.clone();

        let loud = patch.apply("d", &mut reported, &RegistryConfig::default()).unwrap();
        let quiet_stats = patch.apply("d", &mut silent, &quiet()).unwrap();

        assert_eq!(reported, silent);
        assert_eq!(loud, quiet_stats);
        assert_eq!(loud.absent_removals, 1);
        assert_eq!(loud.removed, 1);
    }

    #[test]
    fn test_fold_stats_accumulate() {
        let mut totals = FoldStats::default();
        totals += FoldStats {
            removed: 1,
            added: 2,
            ..FoldStats::default()
        };
        totals += FoldStats {
            added: 3,
            overridden: 1,
            absent_removals: 4,
            ..FoldStats::default()
        };
        assert_eq!(
            totals,
            FoldStats {
                removed: 1,
                absent_removals: 4,
                redesignated: 0,
                added: 5,
                overridden: 1,
            }
        );
    }
}
