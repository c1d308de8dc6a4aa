//! Built-in dialect family: Transact-SQL and Azure Synapse Analytics.
//!
//! `tsql` is the root; its base vocabulary comes from [`sqlvocab_core::vocab::tsql`]. `synapse` derives from it and
//! reserves the words listed in [`sqlvocab_core::vocab::synapse`].
//!
//! ## Examples
//! ```rust
//! use sqlvocab::builtin;
//! use sqlvocab::Category;
//!
//! let registry = builtin::tsql_family().unwrap();
//! let synapse = registry.resolve(builtin::SYNAPSE).unwrap();
//! assert_eq!(synapse.category_of("label"), Some(Category::Reserved));
//! ```

use sqlvocab_core::vocab::{synapse, tsql};

use crate::base::BaseVocabulary;
use crate::config::RegistryConfig;
use crate::dialect::Dialect;
use crate::errors::VocabularyError;
use crate::patch::DialectPatch;
use crate::registry::{DialectRegistry, DialectRegistryBuilder};

/// Transact-SQL (Microsoft SQL Server).
pub const TSQL: &str = "tsql";

/// Azure Synapse Analytics.
pub const SYNAPSE: &str = "synapse";

/// T-SQL base vocabulary.
///
/// ## Notes
/// - Documented-only reserved words are listed as reserved *and* unreserved, mirroring the vendor reference; the base
///   fold resolves them to unreserved.
pub fn tsql_base() -> BaseVocabulary {
    BaseVocabulary::new()
        .reserved(tsql::RESERVED_KEYWORDS)
        .reserved(tsql::DOCUMENTED_ONLY_RESERVED_KEYWORDS)
        .future_reserved(tsql::FUTURE_RESERVED_KEYWORDS)
        .unreserved(tsql::UNRESERVED_KEYWORDS)
}

pub fn tsql_dialect() -> Dialect {
    Dialect::root(TSQL, tsql_base())
}

pub fn synapse_dialect() -> Dialect {
    Dialect::derived(SYNAPSE, TSQL)
        .with_patch(DialectPatch::new("synapse-reserved").add_reserved(synapse::RESERVED_KEYWORDS))
}

/// Register the built-in family into an existing builder.
pub fn register_tsql_family(builder: &mut DialectRegistryBuilder) -> Result<(), VocabularyError> {
    builder.register(tsql_dialect())?;
    builder.register(synapse_dialect())?;
    Ok(())
}

/// Build a registry holding only the built-in family, with default configuration.
pub fn tsql_family() -> Result<DialectRegistry, VocabularyError> {
    tsql_family_with_config(RegistryConfig::default())
}

pub fn tsql_family_with_config(config: RegistryConfig) -> Result<DialectRegistry, VocabularyError> {
    let mut builder = DialectRegistry::builder().with_config(config);
    register_tsql_family(&mut builder)?;
    Ok(builder.build())
}
