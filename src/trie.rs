//! Single-threaded element trie.

use std::fmt;
use std::ops;

use safe_bump::Idx;

use crate::arena::TrieArena;
use crate::element::Element;
use crate::iter::Iter;
use crate::molecule::Molecule;
use crate::node::{Entry, Node};
use crate::ops::get::get_path;
use crate::ops::insert::insert_recursive;
use crate::ops::walk::count_nodes;
use crate::rule::PathRule;
use crate::store::TrieStore;
use crate::{InsertResult, TrieCheckpoint};

/// Prefix tree keyed by element sequences, single-threaded.
///
/// Every node has one logical child slot per element. A composition is
/// mapped to a slot path by the trie's [`PathRule`]; the payload lives on
/// the last node of that path. Insertion copies the touched path, so older
/// roots stay valid and [`checkpoint`](Self::checkpoint) is O(1).
pub struct ElementTrie<P> {
    store: TrieArena<P>,
    root: Option<Idx<Node<P>>>,
    rule: PathRule,
    size: usize,
}

// ---------------------------------------------------------------------------
// Construction & accessors — no trait bounds
// ---------------------------------------------------------------------------

impl<P> ElementTrie<P> {
    /// Creates an empty trie using [`PathRule::Legacy`].
    #[must_use]
    pub const fn new() -> Self {
        Self::with_rule(PathRule::Legacy)
    }

    /// Creates an empty trie that derives paths with `rule`.
    #[must_use]
    pub const fn with_rule(rule: PathRule) -> Self {
        Self {
            store: TrieArena::new(),
            root: None,
            rule,
            size: 0,
        }
    }

    /// Returns the path rule this trie was built with.
    #[must_use]
    pub const fn rule(&self) -> PathRule {
        self.rule
    }

    /// Returns the number of stored payloads (terminal nodes).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if nothing has been stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of live nodes below the root.
    ///
    /// A single composition of length `n` under either rule yields `n`.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.root.map_or(0, |root| count_nodes(&self.store, root))
    }

    /// Saves the current trie state for later rollback.
    #[must_use]
    pub fn checkpoint(&self) -> TrieCheckpoint<P> {
        TrieCheckpoint {
            store: self.store.checkpoint(),
            root: self.root,
            size: self.size,
        }
    }

    /// Returns the total number of allocated items in each arena:
    /// `(nodes, entries, children)`.
    ///
    /// Includes dead COW copies — reflects true memory footprint.
    #[must_use]
    pub fn arena_len(&self) -> (usize, usize, usize) {
        self.store.arena_len()
    }

    /// Restores the trie to a previously saved checkpoint.
    ///
    /// All insertions made after the checkpoint are discarded.
    pub fn rollback(&mut self, cp: TrieCheckpoint<P>) {
        self.store.rollback(cp.store);
        tracing::debug!(
            discarded = self.size.saturating_sub(cp.size),
            "element trie rolled back"
        );
        self.root = cp.root;
        self.size = cp.size;
    }
}

// ---------------------------------------------------------------------------
// Insertion & lookup
// ---------------------------------------------------------------------------

impl<P> ElementTrie<P> {
    /// Stores `payload` under `composition`.
    ///
    /// An empty composition is ignored. Storing to a path that already holds
    /// a payload replaces it; the node stays terminal.
    ///
    /// Insertion copies the path instead of mutating it, so a replaced
    /// payload stays allocated (unreachable) until the trie is dropped or
    /// rolled back to a checkpoint taken before it was replaced.
    pub fn add(&mut self, composition: &[Element], payload: P) -> InsertResult {
        let path = self.rule.path(composition);
        let Some(&head) = path.first() else {
            tracing::trace!("ignoring empty composition");
            return InsertResult::Empty;
        };

        let entry = self.store.alloc_entry(Entry {
            composition: composition.into(),
            payload,
        });
        let root = self
            .root
            .map_or_else(Node::empty, |idx| *self.store.get_node(idx));
        let outcome = insert_recursive(&mut self.store, root, &path, entry);
        self.root = Some(outcome.node);

        if outcome.replaced {
            tracing::trace!(%head, depth = path.len(), "replaced stored payload");
            InsertResult::Updated
        } else {
            self.size += 1;
            InsertResult::Inserted
        }
    }

    /// Returns the payload stored under exactly `composition`.
    ///
    /// The composition is mapped through the same [`PathRule`] as
    /// [`add`](Self::add). Under [`PathRule::Legacy`] several compositions
    /// share a node; only the one last added there is found.
    #[must_use]
    pub fn get(&self, composition: &[Element]) -> Option<&P> {
        let root = self.root?;
        get_path(&self.store, root, &self.rule.path(composition))
            .filter(|entry| *entry.composition == *composition)
            .map(|entry| &entry.payload)
    }

    /// Returns `true` if a payload is stored under `composition`.
    #[must_use]
    pub fn contains(&self, composition: &[Element]) -> bool {
        self.get(composition).is_some()
    }
}

impl ElementTrie<Molecule> {
    /// Stores `molecule` under its own element sequence.
    pub fn add_molecule(&mut self, molecule: Molecule) -> InsertResult {
        let composition = molecule.elements.clone();
        self.add(&composition, molecule)
    }
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

impl<P> ElementTrie<P> {
    /// Returns a pre-order iterator over stored payloads.
    ///
    /// A node's payload comes before its children; children are visited in
    /// ascending atomic-number order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, P, TrieArena<P>> {
        Iter::new(&self.store, self.root, self.size)
    }

    /// Lazily applies `transform` to every payload in pre-order.
    pub fn traverse<O, F>(&self, transform: F) -> impl Iterator<Item = O>
    where
        F: FnMut(&P) -> O,
    {
        self.iter().map(transform)
    }

    /// Applies a fallible `transform` to every payload in pre-order.
    ///
    /// # Errors
    ///
    /// Stops at the first payload whose transform fails and returns that
    /// error; later payloads are not visited.
    pub fn try_traverse<O, E, F>(&self, transform: F) -> Result<Vec<O>, E>
    where
        F: FnMut(&P) -> Result<O, E>,
    {
        self.iter().map(transform).collect()
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl<P> Default for ElementTrie<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for ElementTrie<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementTrie")
            .field("len", &self.size)
            .field("rule", &self.rule)
            .finish_non_exhaustive()
    }
}

impl<C: AsRef<[Element]>, P> Extend<(C, P)> for ElementTrie<P> {
    fn extend<I: IntoIterator<Item = (C, P)>>(&mut self, iter: I) {
        for (composition, payload) in iter {
            self.add(composition.as_ref(), payload);
        }
    }
}

impl<C: AsRef<[Element]>, P> FromIterator<(C, P)> for ElementTrie<P> {
    fn from_iter<I: IntoIterator<Item = (C, P)>>(iter: I) -> Self {
        let mut trie = Self::new();
        trie.extend(iter);
        trie
    }
}

impl<P> ops::Index<&[Element]> for ElementTrie<P> {
    type Output = P;

    fn index(&self, composition: &[Element]) -> &P {
        self.get(composition).expect("composition not found")
    }
}

impl<'a, P> IntoIterator for &'a ElementTrie<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P, TrieArena<P>>;

    fn into_iter(self) -> Iter<'a, P, TrieArena<P>> {
        self.iter()
    }
}
