//! Path layout under `PathRule::Prefix`: a conventional trie.

use crate::{Element, ElementTrie, InsertResult, Molecule, PathRule};

use Element::{Al, H, O};

fn prefix_trie<P>() -> ElementTrie<P> {
    ElementTrie::with_rule(PathRule::Prefix)
}

#[test]
fn path_is_the_composition() {
    assert_eq!(
        &*PathRule::Prefix.path(&[Al, Al, O, O, O]),
        &[Al, Al, O, O, O]
    );
}

#[test]
fn same_head_and_length_are_distinct() {
    let mut trie = prefix_trie();
    assert_eq!(trie.add(&[Al, O], "AlO"), InsertResult::Inserted);
    assert_eq!(trie.add(&[Al, Al], "Al2"), InsertResult::Inserted);

    assert_eq!(trie.len(), 2);
    assert_eq!(trie.node_count(), 3);
    assert_eq!(trie.get(&[Al, O]), Some(&"AlO"));
    assert_eq!(trie.get(&[Al, Al]), Some(&"Al2"));
    // O (8) before Al (13) under the shared Al node.
    assert_eq!(trie.iter().copied().collect::<Vec<_>>(), ["AlO", "Al2"]);
}

#[test]
fn prefix_sharing() {
    let mut trie = prefix_trie();
    trie.add_molecule(Molecule::alumina());
    trie.add_molecule(Molecule::aluminum());
    assert_eq!(trie.node_count(), 5);

    trie.add(&[Al, O], Molecule::new([Al, O], Default::default()));
    assert_eq!(trie.node_count(), 6);
    assert_eq!(trie.len(), 3);
}

#[test]
fn preorder_follows_element_order() {
    let mut trie = prefix_trie();
    trie.add(&[O, H], "OH");
    trie.add(&[H, H, O], "H2O");
    trie.add(&[H], "H");
    trie.add(&[O], "O");
    trie.add(&[H, O], "HO");

    assert_eq!(
        trie.iter().copied().collect::<Vec<_>>(),
        ["H", "H2O", "HO", "O", "OH"]
    );
}

#[test]
fn overwrite_keeps_count() {
    let mut trie = prefix_trie();
    trie.add(&[H, H, O], 1);
    assert_eq!(trie.add(&[H, H, O], 2), InsertResult::Updated);
    assert_eq!(trie.len(), 1);
    assert_eq!(trie[&[H, H, O][..]], 2);
}
