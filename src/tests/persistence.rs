use crate::{Element, ElementTrie, PathRule};

use Element::{Fe, H, O, S};

/// Checkpoint + insert + rollback = original state.
#[test]
fn rollback_after_insert() {
    let mut trie = ElementTrie::new();
    trie.add(&[Fe], 26);
    trie.add(&[O, O], 16);

    let cp = trie.checkpoint();
    let saved_len = trie.len();
    let saved_nodes = trie.node_count();

    trie.add(&[S], 16);
    trie.add(&[H, H], 2);
    assert_eq!(trie.len(), 4);

    trie.rollback(cp);
    assert_eq!(trie.len(), saved_len);
    assert_eq!(trie.node_count(), saved_nodes);
    assert_eq!(trie.get(&[Fe]), Some(&26));
    assert_eq!(trie.get(&[O, O]), Some(&16));
    assert_eq!(trie.get(&[S]), None);
    assert_eq!(trie.get(&[H, H]), None);
}

/// Checkpoint + overwrite + rollback restores the old payload.
#[test]
fn rollback_after_overwrite() {
    let mut trie = ElementTrie::new();
    trie.add(&[Fe, O], "FeO");
    let cp = trie.checkpoint();

    trie.add(&[Fe, O], "wustite");
    assert_eq!(trie.get(&[Fe, O]), Some(&"wustite"));

    trie.rollback(cp);
    assert_eq!(trie.get(&[Fe, O]), Some(&"FeO"));
    assert_eq!(trie.len(), 1);
}

/// Checkpoint on empty trie + insert + rollback = empty.
#[test]
fn rollback_to_empty() {
    let mut trie: ElementTrie<i32> = ElementTrie::with_rule(PathRule::Prefix);
    let cp = trie.checkpoint();

    trie.add(&[H], 1);
    trie.add(&[H, H], 2);

    trie.rollback(cp);
    assert!(trie.is_empty());
    assert_eq!(trie.node_count(), 0);
    assert_eq!(trie.arena_len(), (0, 0, 0));
    assert_eq!(trie.iter().count(), 0);
}

/// Multiple checkpoints: rollback to the earlier one.
#[test]
fn nested_checkpoints() {
    let mut trie = ElementTrie::new();
    trie.add(&[H], 1);
    let cp1 = trie.checkpoint();

    trie.add(&[O], 8);
    let _cp2 = trie.checkpoint();

    trie.add(&[S], 16);

    // Rollback to cp1 (before O and S were added).
    trie.rollback(cp1);
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.get(&[H]), Some(&1));
    assert_eq!(trie.get(&[O]), None);
}

/// Path copying leaves dead nodes behind but only live ones are counted.
#[test]
fn cow_copies_are_not_live() {
    let mut trie = ElementTrie::new();
    trie.add(&[O, O, O], 1);
    trie.add(&[O, O, O], 2);
    let (nodes, entries, _) = trie.arena_len();
    assert_eq!(nodes, 8);
    assert_eq!(entries, 2);
    assert_eq!(trie.node_count(), 3);
}

/// A replaced payload stays in the arena until rollback releases it.
#[test]
fn overwritten_payload_is_kept_until_rollback() {
    let mut trie = ElementTrie::new();
    trie.add(&[Fe, O], String::from("FeO"));
    let cp = trie.checkpoint();

    trie.add(&[Fe, O], String::from("wustite"));
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.arena_len().1, 2);

    trie.rollback(cp);
    assert_eq!(trie.arena_len().1, 1);
    assert_eq!(trie.get(&[Fe, O]).map(String::as_str), Some("FeO"));
}
