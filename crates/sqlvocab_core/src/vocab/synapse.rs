//! Azure Synapse Analytics keyword delta against Transact-SQL.
//!
//! Synapse (dedicated SQL pools) shares the T-SQL vocabulary. Its own statement words (`DISTRIBUTION`, `HEAP`,
//! `ROUND_ROBIN`, ...) are already unreserved in [`crate::vocab::tsql::UNRESERVED_KEYWORDS`], so the delta only has to
//! tighten words that Synapse reserves.

/// Words Synapse reserves on top of the T-SQL vocabulary.
///
/// ## Notes
/// - `LABEL` stays unreserved in plain T-SQL, where reserving it would break parsing of existing scripts.
pub const RESERVED_KEYWORDS: &[&str] = &["LABEL"];
