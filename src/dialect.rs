//! Dialect definitions.
//!
//! A [`Dialect`] is either a root (it owns a [`BaseVocabulary`]) or derived from a parent named by string. Either kind
//! may carry an ordered list of [`DialectPatch`]es, folded in declaration order. Registered dialects live in the
//! registry's arena and are referred to by [`DialectId`].
//!
//! ## Examples
//! ```rust
//! use sqlvocab::{BaseVocabulary, Dialect, DialectPatch};
//!
//! let root = Dialect::root("ansi", BaseVocabulary::new().reserved(["SELECT"]));
//! let child = Dialect::derived("acme", "ansi").with_patch(DialectPatch::new("acme-core").add_reserved(["QUALIFY"]));
//! assert_eq!(root.parent(), None);
//! assert_eq!(child.parent(), Some("ansi"));
//! ```

use std::fmt;

use crate::base::BaseVocabulary;
use crate::patch::DialectPatch;

/// Stable index of a registered dialect inside one registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DialectId(pub(crate) usize);

impl DialectId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DialectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a dialect's inherited vocabulary comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialectOrigin {
    /// Root of a family: starts from literal tables.
    Root(BaseVocabulary),
    /// Inherits the resolved vocabulary of the named parent.
    Derived { parent: String },
}

/// A dialect definition, as supplied at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialect {
    name: String,
    origin: DialectOrigin,
    patches: Vec<DialectPatch>,
}

impl Dialect {
    /// Define a root dialect.
    pub fn root(name: impl Into<String>, base: BaseVocabulary) -> Self {
        Self {
            name: name.into(),
            origin: DialectOrigin::Root(base),
            patches: Vec::new(),
        }
    }

    /// Define a dialect that inherits from `parent`.
    pub fn derived(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            origin: DialectOrigin::Derived { parent: parent.into() },
            patches: Vec::new(),
        }
    }

    /// Append a patch. Patches fold in the order they are added.
    pub fn with_patch(mut self, patch: DialectPatch) -> Self {
        self.patches.push(patch);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin(&self) -> &DialectOrigin {
        &self.origin
    }

    /// Parent name for derived dialects.
    pub fn parent(&self) -> Option<&str> {
        match &self.origin {
            DialectOrigin::Root(_) => None,
            DialectOrigin::Derived { parent } => Some(parent.as_str()),
        }
    }

    pub fn patches(&self) -> &[DialectPatch] {
        &self.patches
    }
}
