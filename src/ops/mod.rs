//! Recursive trie operations, generic over [`TrieStore`](crate::store::TrieStore).

pub mod get;
pub mod insert;
pub mod walk;
