#![forbid(unsafe_code)]
//! Keyword vocabulary resolution and classification for families of SQL dialects.
//!
//! SQL dialects come in families: each dialect inherits a parent's keyword vocabulary and patches it (adds words,
//! removes them, or moves them between categories). This crate computes the effective vocabulary of each dialect and
//! classifies token text against it as a reserved keyword, an unreserved keyword, or a plain identifier.
//!
//! ## Layout
//!
//! - [`patch`]: declarative deltas and the fold policy (including the "unreserved wins" tie-break).
//! - [`registry`]: registration phase + read-only resolver with a per-dialect cache.
//! - [`classifier`]: the total, stateless classification used by tokenizers and parsers.
//! - [`builtin`]: the Transact-SQL / Azure Synapse family built from `sqlvocab_core` tables.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or_else`. Registry internals index their own arena
//!   by ids they handed out themselves.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! use sqlvocab::{builtin, classifier, TokenClass};
//!
//! let registry = builtin::tsql_family().unwrap();
//! let tsql = registry.resolve(builtin::TSQL).unwrap();
//! assert_eq!(classifier::classify(&tsql, "goto"), TokenClass::Reserved);
//! assert!(classifier::classify(&tsql, "while").can_be_identifier());
//! ```

pub mod base;
pub mod builtin;
pub mod classifier;
pub mod config;
pub mod dialect;
pub mod errors;
pub mod keyword_set;
pub mod patch;
pub mod registry;

pub use base::BaseVocabulary;
pub use classifier::{Advisory, Classification, TokenClass, classify, inspect, iterate_category};
pub use config::RegistryConfig;
pub use dialect::{Dialect, DialectId, DialectOrigin};
pub use errors::VocabularyError;
pub use keyword_set::KeywordSet;
pub use patch::{DialectPatch, PatchStep};
pub use registry::{DialectRegistry, DialectRegistryBuilder};
pub use sqlvocab_core::vocab::{Category, Word};
