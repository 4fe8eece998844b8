//! Prefix tree keyed by chemical element sequences.
//!
//! Compounds are indexed by their constituent elements: a composition such
//! as `[Al, Al, O, O, O]` selects a path of child slots from the root, and
//! the record stored for it (typically a [`Molecule`] with thermodynamic
//! data) lives on the last node of that path.
//!
//! # Key properties
//!
//! - **Bounded alphabet**: 118 slots per node, one per [`Element`], stored
//!   bitmap-compressed in a `u128`
//! - **Deterministic traversal**: pre-order, ascending atomic number
//! - **Selectable path rule**: [`PathRule::Legacy`] reproduces the historical
//!   head-branching/tail-trimming layout, [`PathRule::Prefix`] is a
//!   conventional trie
//! - **COW structural sharing**: O(1) checkpoint and rollback
//! - **Zero `unsafe`**: enforced by `#![forbid(unsafe_code)]`
//!
//! # Example
//!
//! ```
//! use element_trie::{Element, ElementTrie, Molecule};
//!
//! let mut trie = ElementTrie::new();
//! trie.add_molecule(Molecule::alumina());
//! trie.add_molecule(Molecule::aluminum());
//!
//! let lengths: Vec<usize> = trie.traverse(|m| m.elements.len()).collect();
//! assert_eq!(lengths, [1, 5]);
//! assert!(trie.contains(&[Element::Al]));
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(clippy::module_name_repetitions)]

use std::fmt;

use safe_bump::Idx;

pub mod arena;
pub mod arena_sync;
pub mod element;
pub mod error;
pub mod iter;
pub mod molecule;
pub mod node;
pub mod rule;
pub mod store;

mod ops;
mod trie;
mod trie_sync;

#[cfg(test)]
mod tests;

pub use element::{ELEMENT_COUNT, Element};
pub use error::ElementError;
pub use molecule::{Information, Molecule, Properties, State};
pub use rule::PathRule;
pub use trie::ElementTrie;
pub use trie_sync::ElementTrieSync;

/// What an [`add`](ElementTrie::add) call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertResult {
    /// A payload was stored at a node that had none.
    Inserted,
    /// The path already carried a payload; it was replaced.
    Updated,
    /// The composition was empty; nothing changed.
    Empty,
}

/// Saved trie state for rollback.
///
/// Created by [`ElementTrie::checkpoint`] or [`ElementTrieSync::checkpoint`].
/// Restoring via `rollback` discards all insertions made after the checkpoint.
pub struct TrieCheckpoint<P> {
    /// Three-arena store checkpoint.
    pub store: store::StoreCheckpoint<P>,
    /// Root node index at checkpoint time.
    pub root: Option<Idx<node::Node<P>>>,
    /// Payload count at checkpoint time.
    pub size: usize,
}

// TrieCheckpoint contains only indices and primitives — no payload data.

impl<P> Clone for TrieCheckpoint<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for TrieCheckpoint<P> {}

impl<P> fmt::Debug for TrieCheckpoint<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieCheckpoint")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
