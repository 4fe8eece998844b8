//! Storage abstraction for element-trie operations.

use safe_bump::{Checkpoint, Idx};

use crate::node::{Entry, Node};

/// Saved state of the three storage arenas.
pub struct StoreCheckpoint<P> {
    /// Nodes arena checkpoint.
    pub nodes: Checkpoint<Node<P>>,
    /// Entries arena checkpoint.
    pub entries: Checkpoint<Entry<P>>,
    /// Children arena checkpoint.
    pub children: Checkpoint<Idx<Node<P>>>,
}

// StoreCheckpoint contains only Checkpoint<T> values (Copy) — no payload data.

impl<P> Clone for StoreCheckpoint<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for StoreCheckpoint<P> {}

/// Storage backend for trie operations.
///
/// Abstracts over [`Arena`](safe_bump::Arena) (single-thread) and
/// [`SharedArena`](safe_bump::SharedArena) (multi-thread) backends.
pub trait TrieStore<P> {
    /// Allocates a single node, returning its index.
    fn alloc_node(&mut self, node: Node<P>) -> Idx<Node<P>>;

    /// Returns a reference to the node at `idx`.
    fn get_node(&self, idx: Idx<Node<P>>) -> &Node<P>;

    /// Allocates an entry, returning its index.
    fn alloc_entry(&mut self, entry: Entry<P>) -> Idx<Entry<P>>;

    /// Returns a reference to the entry at `idx`.
    fn get_entry(&self, idx: Idx<Entry<P>>) -> &Entry<P>;

    /// Allocates a contiguous block of child node indices, returning the
    /// index of the first one. Returns `None` if the iterator is empty.
    fn alloc_children(
        &mut self,
        iter: impl IntoIterator<Item = Idx<Node<P>>>,
    ) -> Option<Idx<Idx<Node<P>>>>;

    /// Returns a reference to the child index at `idx`.
    fn get_child(&self, idx: Idx<Idx<Node<P>>>) -> &Idx<Node<P>>;

    /// Saves the current state of all three arenas.
    fn checkpoint(&self) -> StoreCheckpoint<P>;

    /// Rolls back all three arenas to a previous checkpoint.
    fn rollback(&mut self, cp: StoreCheckpoint<P>);

    /// Returns the total number of allocated items in each arena:
    /// `(nodes, entries, children)`.
    ///
    /// Includes dead COW copies — reflects true memory footprint.
    fn arena_len(&self) -> (usize, usize, usize);
}
