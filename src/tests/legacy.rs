//! Path layout under `PathRule::Legacy`: branch on the head, trim the tail.

use crate::{Element, ElementTrie, ElementTrieSync, InsertResult, Molecule, PathRule};

use Element::{Al, H, Na, O};

#[test]
fn default_rule_is_legacy() {
    assert_eq!(ElementTrie::<()>::new().rule(), PathRule::Legacy);
    assert_eq!(PathRule::default(), PathRule::Legacy);
}

#[test]
fn path_repeats_first_element() {
    assert_eq!(
        &*PathRule::Legacy.path(&[Al, Al, O, O, O]),
        &[Al, Al, Al, Al, Al]
    );
    assert_eq!(&*PathRule::Legacy.path(&[H, H, O]), &[H, H, H]);
    assert_eq!(&*PathRule::Legacy.path(&[O]), &[O]);
    assert!(PathRule::Legacy.path(&[]).is_empty());
}

#[test]
fn path_length_matches_composition() {
    let mut trie = ElementTrie::new();
    trie.add_molecule(Molecule::alumina());
    assert_eq!(trie.node_count(), 5);
    assert_eq!(trie.len(), 1);
}

#[test]
fn same_head_and_length_share_a_node() {
    let mut trie = ElementTrie::new();
    assert_eq!(trie.add(&[Al, O], "AlO"), InsertResult::Inserted);
    assert_eq!(trie.add(&[Al, Al], "Al2"), InsertResult::Updated);

    assert_eq!(trie.len(), 1);
    assert_eq!(trie.node_count(), 2);
    assert_eq!(trie.iter().copied().collect::<Vec<_>>(), ["Al2"]);
    // Only the composition stored last is found at the shared node.
    assert_eq!(trie.get(&[Al, Al]), Some(&"Al2"));
    assert_eq!(trie.get(&[Al, O]), None);
    assert_eq!(trie.get(&[Al, Na]), None);
}

#[test]
fn lookup_ignores_compositions_never_added() {
    let mut trie = ElementTrie::new();
    trie.add_molecule(Molecule::new([Al, O], Default::default()));
    trie.add_molecule(Molecule::water());

    assert!(trie.contains(&[Al, O]));
    assert_eq!(trie.get(&[Al, Na]), None);
    assert!(trie.contains(&[H, H, O]));
    assert!(!trie.contains(&[H, O, O]));
    assert!(!trie.contains(&[H, H, H]));
}

#[test]
fn sync_lookup_ignores_compositions_never_added() {
    let mut trie = ElementTrieSync::new();
    trie.add_molecule(Molecule::new([Al, O], Default::default()));
    trie.add_molecule(Molecule::water());

    assert!(trie.contains(&[Al, O]));
    assert_eq!(trie.get(&[Al, Na]), None);
    assert!(!trie.contains(&[H, O, O]));
}

#[test]
fn shorter_composition_shares_the_chain() {
    let mut trie = ElementTrie::new();
    trie.add_molecule(Molecule::alumina());
    trie.add_molecule(Molecule::aluminum());

    assert_eq!(trie.len(), 2);
    assert_eq!(trie.node_count(), 5);
    assert_eq!(trie.get(&[Al]), Some(&Molecule::aluminum()));
}

#[test]
fn terminal_flag_survives_longer_insert() {
    let mut trie = ElementTrie::new();
    trie.add(&[O], "O");
    trie.add(&[O, H], "OH");
    trie.add(&[O, O, O], "O3");

    assert_eq!(trie.get(&[O]), Some(&"O"));
    assert_eq!(trie.get(&[O, H]), Some(&"OH"));
    assert_eq!(trie.get(&[O, O, O]), Some(&"O3"));
    assert_eq!(trie.iter().copied().collect::<Vec<_>>(), ["O", "OH", "O3"]);
}

/// The sample data set: Al and Al₂O₃, then water.
#[test]
fn sample_data_order() {
    let mut trie = ElementTrie::new();
    trie.add_molecule(Molecule::aluminum());
    trie.add_molecule(Molecule::alumina());
    let first: Vec<usize> = trie.traverse(|m| m.elements.len()).collect();
    assert_eq!(first, [1, 5]);

    trie.add_molecule(Molecule::water());
    let second: Vec<Molecule> = trie.iter().cloned().collect();
    assert_eq!(
        second,
        [Molecule::water(), Molecule::aluminum(), Molecule::alumina()]
    );
}
