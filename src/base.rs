//! Literal base vocabularies for root dialects.
//!
//! A root dialect has no parent to inherit from. Its vocabulary starts from raw literal tables (reserved, unreserved
//! and future-reserved lists, typically transcribed from vendor documentation) that may overlap. The tables are folded
//! through an implicit patch named [`BASE_PATCH_NAME`], in the order future-reserved, reserved, unreserved, so a word
//! listed both as reserved and as unreserved resolves to unreserved.
//!
//! ## Examples
//! ```rust
//! use sqlvocab::BaseVocabulary;
//!
//! let base = BaseVocabulary::new()
//!     .reserved(["SELECT", "WHILE"])
//!     .unreserved(["WHILE"]) // documented as reserved, parses as identifier
//!     .future_reserved(["ARRAY"]);
//! assert_eq!(base.len(), 4);
//! ```

use sqlvocab_core::vocab::Word;

use crate::errors::VocabularyError;
use crate::patch::{CompiledPatch, PatchStep};

/// Name under which a root dialect's literal tables appear in logs and errors.
pub const BASE_PATCH_NAME: &str = "base";

/// Raw literal tables for a root dialect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseVocabulary {
    reserved: Vec<String>,
    unreserved: Vec<String>,
    future_reserved: Vec<String>,
}

impl BaseVocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the reserved table.
    pub fn reserved<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.reserved.extend(words.into_iter().map(|w| w.as_ref().to_string()));
        self
    }

    /// Append to the unreserved table.
    pub fn unreserved<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.unreserved.extend(words.into_iter().map(|w| w.as_ref().to_string()));
        self
    }

    /// Append to the future-reserved table.
    pub fn future_reserved<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.future_reserved.extend(words.into_iter().map(|w| w.as_ref().to_string()));
        self
    }

    /// Number of raw table entries, counting overlaps and duplicates.
    pub fn len(&self) -> usize {
        self.reserved.len() + self.unreserved.len() + self.future_reserved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate the tables and turn them into the implicit base patch.
    ///
    /// ## Errors
    /// - [`VocabularyError::InvalidWord`] if a spelling is empty or contains whitespace.
    pub(crate) fn compile(&self, dialect: &str) -> Result<CompiledPatch, VocabularyError> {
        Ok(CompiledPatch::from_literal_tables(
            BASE_PATCH_NAME,
            table(dialect, PatchStep::AddFutureReserved, &self.future_reserved)?,
            table(dialect, PatchStep::AddReserved, &self.reserved)?,
            table(dialect, PatchStep::AddUnreserved, &self.unreserved)?,
        ))
    }
}

fn table(dialect: &str, step: PatchStep, spellings: &[String]) -> Result<Vec<Word>, VocabularyError> {
    spellings
        .iter()
        .map(|spelling| {
            Word::new(spelling).ok_or_else(|| VocabularyError::InvalidWord {
                dialect: dialect.to_string(),
                patch: BASE_PATCH_NAME.to_string(),
                step,
                word: spelling.clone(),
            })
        })
        .collect()
}
