//! SQL keyword vocabulary: categories, normalized words, and literal dialect tables.
//!
//! The design goal is to keep spellings in one place. Dialect definitions in the `sqlvocab` crate build their base
//! vocabularies and patches from the tables declared here instead of scattering string literals across the resolver.
//!
//! ## Notes
//! - Tables are **raw**: they are transcribed from vendor documentation plus practical parser experience and may list
//!   the same word more than once.
//! - All table spellings are already uppercase; [`Word::new`] still normalizes them.
//!
//! ## See also
//! - [`tsql`] for the Transact-SQL base vocabulary.
//! - [`synapse`] for the Azure Synapse Analytics delta.

pub mod category;
pub mod synapse;
pub mod tsql;
pub mod word;

pub use category::{CATEGORIES, Category};
pub use word::{Word, is_word_shaped, normalize};
