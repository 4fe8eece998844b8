//! Arena-backed storage (single-threaded).

use safe_bump::{Arena, Idx};

use crate::node::{Entry, Node};
use crate::store::{StoreCheckpoint, TrieStore};

/// Single-threaded storage backend using three [`Arena`]s.
pub struct TrieArena<P> {
    nodes: Arena<Node<P>>,
    entries: Arena<Entry<P>>,
    children: Arena<Idx<Node<P>>>,
}

impl<P> TrieArena<P> {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            entries: Arena::new(),
            children: Arena::new(),
        }
    }
}

impl<P> Default for TrieArena<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> TrieStore<P> for TrieArena<P> {
    fn alloc_node(&mut self, node: Node<P>) -> Idx<Node<P>> {
        self.nodes.alloc(node)
    }

    fn get_node(&self, idx: Idx<Node<P>>) -> &Node<P> {
        self.nodes.get(idx)
    }

    fn alloc_entry(&mut self, entry: Entry<P>) -> Idx<Entry<P>> {
        self.entries.alloc(entry)
    }

    fn get_entry(&self, idx: Idx<Entry<P>>) -> &Entry<P> {
        self.entries.get(idx)
    }

    fn alloc_children(
        &mut self,
        iter: impl IntoIterator<Item = Idx<Node<P>>>,
    ) -> Option<Idx<Idx<Node<P>>>> {
        self.children.alloc_extend(iter)
    }

    fn get_child(&self, idx: Idx<Idx<Node<P>>>) -> &Idx<Node<P>> {
        self.children.get(idx)
    }

    fn checkpoint(&self) -> StoreCheckpoint<P> {
        StoreCheckpoint {
            nodes: self.nodes.checkpoint(),
            entries: self.entries.checkpoint(),
            children: self.children.checkpoint(),
        }
    }

    fn rollback(&mut self, cp: StoreCheckpoint<P>) {
        self.nodes.rollback(cp.nodes);
        self.entries.rollback(cp.entries);
        self.children.rollback(cp.children);
    }

    fn arena_len(&self) -> (usize, usize, usize) {
        (self.nodes.len(), self.entries.len(), self.children.len())
    }
}
