//! Provide canonical, pure keyword vocabulary data for the `sqlvocab` resolver.
//!
//! This crate is intentionally small and dependency-free. It contains:
//! - the [`vocab::Category`] tag shared by every keyword table,
//! - [`vocab::Word`], the case-normalized spelling used for storage and lookup,
//! - literal keyword tables for the built-in dialect family (T-SQL and Azure Synapse Analytics).
//!
//! ## Notes
//!
//! - This is a “vocabulary core” crate: **no IO**, no global state, and no resolution logic.
//! - Tables are plain `&'static [&'static str]` slices. They may overlap (a word listed both as reserved and as
//!   unreserved); collapsing overlaps into one category per word is the resolver's job, not this crate's.
//!
//! ## Examples
//! ```rust
//! use sqlvocab_core::vocab::{self, Category, Word};
//!
//! let word = Word::new("select").unwrap();
//! assert_eq!(word.as_str(), "SELECT");
//! assert_eq!(vocab::category::from_str("unreserved"), Some(Category::Unreserved));
//! ```

pub mod vocab;
