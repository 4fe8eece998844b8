//! Lookup operation — follows a slot path down from the root.

use safe_bump::Idx;

use crate::element::Element;
use crate::node::{self, Entry, Node};
use crate::store::TrieStore;

/// Returns the child of `node` in `element`'s slot, if occupied.
pub fn child_of<P, S: TrieStore<P>>(
    store: &S,
    node: &Node<P>,
    element: Element,
) -> Option<Idx<Node<P>>> {
    let bit = node::mask(element.slot());
    if node.child_map & bit == 0 {
        return None;
    }
    let pos = node::index(node.child_map, bit);
    Some(*store.get_child(node::offset(node.children_start, pos)))
}

/// Follows `path` from `root` and returns the entry at its end.
///
/// Returns `None` if the path leaves the tree or ends on a non-terminal node.
/// An empty path ends on the root, which is never terminal.
pub fn get_path<'a, P, S>(
    store: &'a S,
    root: Idx<Node<P>>,
    path: &[Element],
) -> Option<&'a Entry<P>>
where
    P: 'a,
    S: TrieStore<P>,
{
    let mut current = root;
    for &element in path {
        current = child_of(store, store.get_node(current), element)?;
    }
    store
        .get_node(current)
        .entry
        .map(|idx| store.get_entry(idx))
}
