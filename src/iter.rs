//! Pre-order payload iterator.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use safe_bump::Idx;

use crate::node::{self, Node};
use crate::store::TrieStore;

/// Lazy iterator over stored payloads of an element trie.
///
/// Visits each node's payload before its children, and children in ascending
/// atomic-number order. Created by `iter` on
/// [`ElementTrie`](crate::ElementTrie) and [`ElementTrieSync`](crate::ElementTrieSync).
pub struct Iter<'a, P, S> {
    store: &'a S,
    stack: Vec<Idx<Node<P>>>,
    remaining: usize,
    _payload: PhantomData<&'a P>,
}

impl<'a, P, S: TrieStore<P>> Iter<'a, P, S> {
    /// Creates an iterator starting at `root`.
    ///
    /// `len` is the number of terminal nodes below `root`.
    pub fn new(store: &'a S, root: Option<Idx<Node<P>>>, len: usize) -> Self {
        Self {
            store,
            stack: root.into_iter().collect(),
            remaining: len,
            _payload: PhantomData,
        }
    }
}

impl<'a, P: 'a, S: TrieStore<P>> Iterator for Iter<'a, P, S> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;
        while let Some(idx) = self.stack.pop() {
            let node = store.get_node(idx);
            // Reverse push: the lowest slot is popped first.
            let start = node.children_start;
            self.stack.extend(
                (0..node.children_len())
                    .rev()
                    .map(|i| *store.get_child(node::offset(start, i))),
            );
            if let Some(entry) = node.entry {
                self.remaining -= 1;
                return Some(&store.get_entry(entry).payload);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, P: 'a, S: TrieStore<P>> ExactSizeIterator for Iter<'a, P, S> {}

impl<'a, P: 'a, S: TrieStore<P>> FusedIterator for Iter<'a, P, S> {}
