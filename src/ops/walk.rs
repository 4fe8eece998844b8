//! Whole-tree walks that do not yield payloads.

use safe_bump::Idx;

use crate::node::{self, Node};
use crate::store::TrieStore;

/// Counts the nodes reachable below `root`, not counting `root` itself.
///
/// Dead COW copies are not reachable and are not counted.
pub fn count_nodes<P, S: TrieStore<P>>(store: &S, root: Idx<Node<P>>) -> usize {
    let mut stack = vec![root];
    let mut count = 0;
    while let Some(idx) = stack.pop() {
        let node = store.get_node(idx);
        let len = node.children_len();
        count += len;
        stack.extend((0..len).map(|i| *store.get_child(node::offset(node.children_start, i))));
    }
    count
}
