//! Dialect registry and vocabulary resolver.
//!
//! Usage has two phases:
//!
//! 1. **Registration.** A [`DialectRegistryBuilder`] collects [`Dialect`] definitions. Each definition is validated as
//!    it is registered; a rejected dialect is simply absent from the registry.
//! 2. **Steady state.** [`DialectRegistryBuilder::build`] produces a read-only [`DialectRegistry`]. Callers resolve a
//!    dialect's [`KeywordSet`] by name and share it (`Arc`) with their tokenizers.
//!
//! ## Resolution
//!
//! Resolving a dialect walks its ancestry (child → … → root) without recursion, reporting unknown parents and cycles
//! before anything is folded. It then folds root-first: each ancestor's set is taken from the cache or computed from
//! its parent's set plus its own patches, in declaration order. A root's first patch is its base vocabulary.
//!
//! ## Notes
//! - The cache holds one cell per dialect and each cell is initialized at most once, so concurrent callers never fold
//!   the same dialect twice and readers of a populated cell take no lock.
//! - Failures are returned but never cached; they cannot affect unrelated dialects.
//!
//! ## Examples
//! ```rust
//! use sqlvocab::{BaseVocabulary, Category, Dialect, DialectPatch, DialectRegistry};
//!
//! let mut builder = DialectRegistry::builder();
//! builder
//!     .register(Dialect::root("base", BaseVocabulary::new().reserved(["SELECT", "DISK", "GOTO"])))
//!     .unwrap();
//! builder
//!     .register(Dialect::derived("child", "base").with_patch(DialectPatch::new("p").add_unreserved(["DISK"])))
//!     .unwrap();
//! let registry = builder.build();
//!
//! let child = registry.resolve("child").unwrap();
//! assert_eq!(child.category_of("select"), Some(Category::Reserved));
//! assert_eq!(child.category_of("disk"), Some(Category::Unreserved));
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use once_cell::sync::OnceCell;
use sqlvocab_core::vocab::Category;

use crate::config::RegistryConfig;
use crate::dialect::{Dialect, DialectId, DialectOrigin};
use crate::errors::VocabularyError;
use crate::keyword_set::KeywordSet;
use crate::patch::{CompiledPatch, FoldStats};

/// How a registered dialect reaches its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ParentLink {
    Root,
    Known(DialectId),
    Missing(String),
}

#[derive(Debug)]
struct PendingDialect {
    name: String,
    parent: Option<String>,
    patches: Vec<CompiledPatch>,
}

#[derive(Debug)]
struct DialectNode {
    name: String,
    parent: ParentLink,
    patches: Vec<CompiledPatch>,
}

/// Collects and validates dialect definitions before the registry goes read-only.
#[derive(Debug, Default)]
pub struct DialectRegistryBuilder {
    config: RegistryConfig,
    pending: Vec<PendingDialect>,
    ids: HashMap<String, DialectId>,
}

impl DialectRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the configuration used by the registry.
    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate and register a dialect.
    ///
    /// Parents are looked up by name when the registry is built, so dialects may be registered in any order.
    ///
    /// ## Errors
    /// - [`VocabularyError::DuplicateDialect`] if the name is taken.
    /// - [`VocabularyError::InvalidWord`] / [`VocabularyError::AmbiguousPatch`] if a patch (or the base vocabulary) is
    ///   malformed. The dialect is not registered, so no keyword set is ever produced for it.
    pub fn register(&mut self, dialect: Dialect) -> Result<DialectId, VocabularyError> {
        self.try_register(dialect).inspect_err(|err| {
            tracing::warn!(dialect = err.dialect(), error = %err, "dialect rejected");
        })
    }

    fn try_register(&mut self, dialect: Dialect) -> Result<DialectId, VocabularyError> {
        let name = dialect.name();
        if self.ids.contains_key(name) {
            return Err(VocabularyError::DuplicateDialect {
                dialect: name.to_string(),
            });
        }

        let mut patches = Vec::with_capacity(dialect.patches().len() + 1);
        if let DialectOrigin::Root(base) = dialect.origin() {
            patches.push(base.compile(name)?);
        }
        for patch in dialect.patches() {
            patches.push(patch.compile(name)?);
        }

        let id = DialectId(self.pending.len());
        tracing::debug!(dialect = name, %id, parent = dialect.parent(), patches = patches.len(), "dialect registered");
        self.ids.insert(name.to_string(), id);
        self.pending.push(PendingDialect {
            name: name.to_string(),
            parent: dialect.parent().map(str::to_string),
            patches,
        });
        Ok(id)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Finish registration.
    ///
    /// With [`RegistryConfig::eager_resolution`], every dialect is resolved here; failures are logged and left for
    /// [`DialectRegistry::resolve`] to report again.
    pub fn build(self) -> DialectRegistry {
        let DialectRegistryBuilder { config, pending, ids } = self;
        let nodes: Vec<DialectNode> = pending
            .into_iter()
            .map(|p| {
                let parent = match p.parent {
                    None => ParentLink::Root,
                    Some(parent) => match ids.get(&parent) {
                        Some(&id) => ParentLink::Known(id),
                        None => ParentLink::Missing(parent),
                    },
                };
                DialectNode {
                    name: p.name,
                    parent,
                    patches: p.patches,
                }
            })
            .collect();
        let cache = nodes.iter().map(|_| OnceCell::new()).collect();
        let registry = DialectRegistry {
            config,
            nodes,
            ids,
            cache,
        };

        if registry.config.eager_resolution {
            for (dialect, err) in registry.resolve_all() {
                tracing::warn!(%dialect, error = %err, "eager resolution failed");
            }
        }
        registry
    }
}

/// Read-only set of registered dialects with a per-dialect resolution cache.
#[derive(Debug)]
pub struct DialectRegistry {
    config: RegistryConfig,
    nodes: Vec<DialectNode>,
    ids: HashMap<String, DialectId>,
    cache: Vec<OnceCell<Arc<KeywordSet>>>,
}

impl DialectRegistry {
    pub fn builder() -> DialectRegistryBuilder {
        DialectRegistryBuilder::new()
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Number of registered dialects.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn id_of(&self, name: &str) -> Option<DialectId> {
        self.ids.get(name).copied()
    }

    pub fn name_of(&self, id: DialectId) -> Option<&str> {
        self.nodes.get(id.index()).map(|node| node.name.as_str())
    }

    /// Registered dialect names, in registration order.
    pub fn dialects(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(|node| node.name.as_str())
    }

    /// Declared parent of `name`, whether or not that parent is registered.
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        let node = &self.nodes[self.id_of(name)?.index()];
        match &node.parent {
            ParentLink::Root => None,
            ParentLink::Known(parent) => self.name_of(*parent),
            ParentLink::Missing(parent) => Some(parent.as_str()),
        }
    }

    /// Whether `name` has a cached keyword set.
    pub fn is_resolved(&self, name: &str) -> bool {
        self.id_of(name)
            .and_then(|id| self.cache.get(id.index()))
            .is_some_and(|cell| cell.get().is_some())
    }

    /// Resolve the effective keyword set of `name`.
    ///
    /// ## Errors
    /// - [`VocabularyError::UnknownDialect`] if `name` is not registered.
    /// - [`VocabularyError::UnknownParent`] / [`VocabularyError::CyclicDialect`] if the ancestry is broken.
    /// - [`VocabularyError::UnknownWord`] if a patch on the way redesignates a word it does not inherit.
    #[tracing::instrument(level = "debug", skip_all, fields(dialect = name))]
    pub fn resolve(&self, name: &str) -> Result<Arc<KeywordSet>, VocabularyError> {
        let id = self.id_of(name).ok_or_else(|| VocabularyError::UnknownDialect {
            dialect: name.to_string(),
        })?;
        self.resolve_id(id)
    }

    /// Resolve by id. See [`DialectRegistry::resolve`].
    pub fn resolve_id(&self, id: DialectId) -> Result<Arc<KeywordSet>, VocabularyError> {
        let Some(cell) = self.cache.get(id.index()) else {
            return Err(VocabularyError::UnknownDialect { dialect: id.to_string() });
        };
        if let Some(set) = cell.get() {
            tracing::trace!(dialect = %set.dialect(), "vocabulary cache hit");
            return Ok(Arc::clone(set));
        }

        let mut inherited: Option<Arc<KeywordSet>> = None;
        for ancestor in self.ancestry(id)? {
            inherited = Some(self.resolve_node(ancestor, inherited.as_deref())?);
        }
        self.resolve_node(id, inherited.as_deref())
    }

    /// Resolve every registered dialect, collecting failures by dialect name.
    ///
    /// One dialect's failure never stops the others from resolving.
    #[tracing::instrument(level = "debug", skip_all, fields(dialect_count = self.nodes.len()))]
    pub fn resolve_all(&self) -> Vec<(String, VocabularyError)> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(index, node)| match self.resolve_id(DialectId(index)) {
                Ok(_) => None,
                Err(err) => Some((node.name.clone(), err)),
            })
            .collect()
    }

    /// Drop every cached keyword set. The next resolution recomputes them.
    pub fn invalidate(&mut self) {
        for cell in &mut self.cache {
            cell.take();
        }
    }

    fn resolve_node(&self, id: DialectId, parent: Option<&KeywordSet>) -> Result<Arc<KeywordSet>, VocabularyError> {
        let set = self.cache[id.index()].get_or_try_init(|| self.fold(id, parent).map(Arc::new))?;
        Ok(Arc::clone(set))
    }

    fn fold(&self, id: DialectId, parent: Option<&KeywordSet>) -> Result<KeywordSet, VocabularyError> {
        let node = &self.nodes[id.index()];
        let mut working = parent.map(KeywordSet::to_working).unwrap_or_default();
        let mut totals = FoldStats::default();
        for patch in &node.patches {
            tracing::trace!(dialect = %node.name, patch = patch.name(), "folding patch");
            totals += patch.apply(&node.name, &mut working, &self.config)?;
        }

        let set = KeywordSet::freeze(node.name.clone(), working);
        tracing::debug!(
            dialect = %node.name,
            patches = node.patches.len(),
            removed = totals.removed,
            absent_removals = totals.absent_removals,
            redesignated = totals.redesignated,
            added = totals.added,
            overridden = totals.overridden,
            reserved = set.count(Category::Reserved),
            unreserved = set.count(Category::Unreserved),
            future_reserved = set.count(Category::FutureReserved),
            "vocabulary resolved"
        );
        Ok(set)
    }

    /// Ancestors of `id`, root first, excluding `id` itself.
    fn ancestry(&self, id: DialectId) -> Result<Vec<DialectId>, VocabularyError> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut current = id;
        loop {
            let node = &self.nodes[current.index()];
            match &node.parent {
                ParentLink::Root => break,
                ParentLink::Missing(parent) => {
                    return Err(VocabularyError::UnknownParent {
                        dialect: node.name.clone(),
                        parent: parent.clone(),
                    });
                }
                ParentLink::Known(parent) => {
                    if !seen.insert(*parent) {
                        let names = std::iter::once(id)
                            .chain(chain.iter().copied())
                            .chain(std::iter::once(*parent))
                            .map(|link| self.nodes[link.index()].name.clone())
                            .collect();
                        return Err(VocabularyError::CyclicDialect {
                            dialect: self.nodes[id.index()].name.clone(),
                            chain: names,
                        });
                    }
                    chain.push(*parent);
                    current = *parent;
                }
            }
        }
        chain.reverse();
        Ok(chain)
    }
}
