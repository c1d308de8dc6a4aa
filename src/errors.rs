//! Errors raised while registering or resolving dialect vocabularies.
//!
//! Every variant is a structural/configuration error: a dialect definition that cannot be turned into a keyword
//! set. They surface at registration time (ambiguous patches, malformed words, duplicate names) or on first
//! resolution (unknown parents, cycles, redesignating a word the dialect never inherited). Classification itself is
//! total and never fails.
//!
//! ## Notes
//! - Messages always name the offending dialect and, where one exists, the patch, the patch step and the word.
//! - A failed dialect never poisons the registry: unrelated dialects keep resolving normally.

use miette::Diagnostic;
use thiserror::Error;

use crate::patch::PatchStep;

/// Errors produced by dialect registration and vocabulary resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum VocabularyError {
    #[error("dialect `{dialect}`: patch `{patch}` lists `{word}` in both {first} and {second}")]
    #[diagnostic(
        code(sqlvocab::ambiguous_patch),
        help("a reserving add-list cannot share words with another add-list or with `remove` in the same patch")
    )]
    AmbiguousPatch {
        dialect: String,
        patch: String,
        word: String,
        first: PatchStep,
        second: PatchStep,
    },

    #[error("dialect `{dialect}`: patch `{patch}` has an invalid word {word:?} in {step}")]
    #[diagnostic(
        code(sqlvocab::invalid_word),
        help("keywords must be non-empty and must not contain whitespace")
    )]
    InvalidWord {
        dialect: String,
        patch: String,
        step: PatchStep,
        word: String,
    },

    #[error("dialect `{dialect}`: patch `{patch}` cannot {step} `{word}`, which is not in the inherited vocabulary")]
    #[diagnostic(
        code(sqlvocab::unknown_word),
        help("`redesignate` only moves inherited words; use an add-list to introduce a new word")
    )]
    UnknownWord {
        dialect: String,
        patch: String,
        step: PatchStep,
        word: String,
    },

    #[error("dialect `{dialect}` names unknown parent dialect `{parent}`")]
    #[diagnostic(code(sqlvocab::unknown_parent), help("register the parent dialect before building the registry"))]
    UnknownParent { dialect: String, parent: String },

    #[error("dialect `{dialect}` has cyclic ancestry: {}", .chain.join(" -> "))]
    #[diagnostic(code(sqlvocab::cyclic_dialect))]
    CyclicDialect { dialect: String, chain: Vec<String> },

    #[error("dialect `{dialect}` is already registered")]
    #[diagnostic(code(sqlvocab::duplicate_dialect))]
    DuplicateDialect { dialect: String },

    #[error("unknown dialect `{dialect}`")]
    #[diagnostic(code(sqlvocab::unknown_dialect))]
    UnknownDialect { dialect: String },
}

impl VocabularyError {
    /// Name of the dialect the error is attributed to.
    pub fn dialect(&self) -> &str {
        match self {
            VocabularyError::AmbiguousPatch { dialect, .. }
            | VocabularyError::InvalidWord { dialect, .. }
            | VocabularyError::UnknownWord { dialect, .. }
            | VocabularyError::UnknownParent { dialect, .. }
            | VocabularyError::CyclicDialect { dialect, .. }
            | VocabularyError::DuplicateDialect { dialect }
            | VocabularyError::UnknownDialect { dialect } => dialect,
        }
    }

    /// Whether the error is raised while registering a dialect (as opposed to while resolving one).
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            VocabularyError::AmbiguousPatch { .. }
                | VocabularyError::InvalidWord { .. }
                | VocabularyError::DuplicateDialect { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_patch_message() {
        let err = VocabularyError::AmbiguousPatch {
            dialect: "acme".to_string(),
            patch: "acme-core".to_string(),
            word: "FOO".to_string(),
            first: PatchStep::AddReserved,
            second: PatchStep::AddUnreserved,
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"dialect `acme`: patch `acme-core` lists `FOO` in both add_reserved and add_unreserved"
        );
        assert!(err.is_registration_error());
        assert_eq!(err.dialect(), "acme");
    }

    #[test]
    fn test_cyclic_dialect_message() {
        let err = VocabularyError::CyclicDialect {
            dialect: "a".to_string(),
            chain: vec!["a".to_string(), "b".to_string(), "a".to_string()],
        };
        insta::assert_snapshot!(err.to_string(), @"dialect `a` has cyclic ancestry: a -> b -> a");
        assert!(!err.is_registration_error());
    }

    #[test]
    fn test_unknown_word_message_names_step() {
        let err = VocabularyError::UnknownWord {
            dialect: "typo".to_string(),
            patch: "oops".to_string(),
            step: PatchStep::Redesignate,
            word: "SELEKT".to_string(),
        };
        insta::assert_snapshot!(
            err.to_string(),
            @"dialect `typo`: patch `oops` cannot redesignate `SELEKT`, which is not in the inherited vocabulary"
        );
        assert!(!err.is_registration_error());
    }

    #[test]
    fn test_diagnostic_codes() {
        let err = VocabularyError::UnknownParent {
            dialect: "child".to_string(),
            parent: "ghost".to_string(),
        };
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("sqlvocab::unknown_parent"));
        assert!(err.help().is_some());
    }
}
