//! Error types for element conversion.

use thiserror::Error;

/// Failure to map a raw value onto an [`Element`](crate::Element).
///
/// The trie itself never fails: its keys are already-valid elements. These
/// errors surface only at the boundary where numbers or symbols come in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    /// Atomic number outside 1..=118.
    #[error("no element with atomic number {0}")]
    UnknownNumber(u8),

    /// Unrecognized chemical symbol (symbols are case-sensitive).
    #[error("invalid or unsupported element symbol: '{0}'")]
    UnknownSymbol(String),
}
