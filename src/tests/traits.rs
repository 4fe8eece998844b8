use crate::{Element, ElementTrie, InsertResult, TrieCheckpoint};

use Element::{Ca, Cl, K, Na};

#[test]
fn default_is_empty() {
    let trie: ElementTrie<i32> = ElementTrie::default();
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 0);
}

#[test]
fn debug_format() {
    let trie: ElementTrie<i32> = ElementTrie::new();
    let dbg = format!("{trie:?}");
    assert!(dbg.contains("ElementTrie"));
    assert!(dbg.contains("len"));
    assert!(dbg.contains("Legacy"));
}

#[test]
fn checkpoint_debug_and_copy() {
    let mut trie = ElementTrie::new();
    trie.add(&[K], 19);
    let cp: TrieCheckpoint<i32> = trie.checkpoint();
    let copy = cp;
    trie.add(&[Ca], 20);
    trie.rollback(copy);
    trie.rollback(cp);
    assert!(format!("{cp:?}").contains("size: 1"));
    assert_eq!(trie.len(), 1);
}

#[test]
fn from_iterator() {
    let trie: ElementTrie<&str> = vec![(vec![Na], "Na"), (vec![K], "K"), (vec![Ca], "Ca")]
        .into_iter()
        .collect();
    assert_eq!(trie.len(), 3);
    assert_eq!(trie.get(&[K]), Some(&"K"));
}

#[test]
fn extend_trait() {
    let mut trie = ElementTrie::new();
    trie.add(&[Na], 11);
    trie.extend([([Na, Cl], 58), ([K, Cl], 74)]);
    assert_eq!(trie.len(), 3);
}

#[test]
fn insert_result_variants() {
    let mut trie = ElementTrie::new();
    assert_eq!(trie.add(&[Na], ()), InsertResult::Inserted);
    assert_eq!(trie.add(&[Na], ()), InsertResult::Updated);
    assert_eq!(trie.add(&[], ()), InsertResult::Empty);
}

#[test]
fn index_existing() {
    let mut trie = ElementTrie::new();
    trie.add(&[Na, Cl], 42);
    assert_eq!(trie[&[Na, Cl][..]], 42);
}

#[test]
#[should_panic(expected = "composition not found")]
fn index_missing_panics() {
    let trie: ElementTrie<i32> = ElementTrie::new();
    let _ = trie[&[Na][..]];
}
