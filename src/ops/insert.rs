//! Insertion operation — COW path-copy insert along a slot path.

use safe_bump::Idx;

use crate::element::Element;
use crate::node::{self, Entry, Node};
use crate::ops::get::child_of;
use crate::store::TrieStore;

/// Outcome of a recursive insert.
pub struct InsertOutcome<P> {
    /// Index of the new (COW-copied) root of the modified subtree.
    pub node: Idx<Node<P>>,
    /// `true` if the end of the path already carried an entry.
    pub replaced: bool,
}

/// Attaches `entry` at the end of `path` below `node`, copying every node
/// on the way down.
///
/// Missing nodes along the path are created. `node` is taken by value so a
/// not-yet-existing subtree can be passed as [`Node::empty`].
pub fn insert_recursive<P, S>(
    store: &mut S,
    node: Node<P>,
    path: &[Element],
    entry: Idx<Entry<P>>,
) -> InsertOutcome<P>
where
    S: TrieStore<P>,
{
    let Some((&head, rest)) = path.split_first() else {
        // End of path: this node becomes (or stays) terminal.
        let replaced = node.is_terminal();
        let new_node = store.alloc_node(Node {
            entry: Some(entry),
            ..node
        });
        return InsertOutcome {
            node: new_node,
            replaced,
        };
    };

    let existing = child_of(&*store, &node, head);
    let child = existing.map_or_else(Node::empty, |idx| *store.get_node(idx));
    let outcome = insert_recursive(store, child, rest, entry);

    let bit = node::mask(head.slot());
    let pos = node::index(node.child_map, bit);
    let len = node.children_len();
    let children = if existing.is_some() {
        build_children_replacing(&*store, node.children_start, len, pos, outcome.node)
    } else {
        build_children_inserting(&*store, node.children_start, len, pos, outcome.node)
    };
    let children_start = store.alloc_children(children).expect("non-empty");
    let new_node = store.alloc_node(Node {
        child_map: node.child_map | bit,
        children_start,
        entry: node.entry,
    });

    InsertOutcome {
        node: new_node,
        replaced: outcome.replaced,
    }
}

fn build_children_inserting<P, S: TrieStore<P>>(
    store: &S,
    start: Idx<Idx<Node<P>>>,
    len: usize,
    at: usize,
    child: Idx<Node<P>>,
) -> Vec<Idx<Node<P>>> {
    let mut out = Vec::with_capacity(len + 1);
    for i in 0..at {
        out.push(*store.get_child(node::offset(start, i)));
    }
    out.push(child);
    for i in at..len {
        out.push(*store.get_child(node::offset(start, i)));
    }
    out
}

fn build_children_replacing<P, S: TrieStore<P>>(
    store: &S,
    start: Idx<Idx<Node<P>>>,
    len: usize,
    at: usize,
    child: Idx<Node<P>>,
) -> Vec<Idx<Node<P>>> {
    (0..len)
        .map(|i| {
            if i == at {
                child
            } else {
                *store.get_child(node::offset(start, i))
            }
        })
        .collect()
}
