//! Composition → trie path mapping.
//!
//! Insertion and lookup never walk a composition directly. They walk the
//! *path* the trie's [`PathRule`] derives from it, so a trie answers lookups
//! consistently with however it was built.

use std::borrow::Cow;

use crate::element::Element;

/// How a composition is turned into the sequence of slots walked from the root.
///
/// Both rules produce a path as long as the composition and put the payload
/// on its last node; they differ only in which slot each level takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathRule {
    /// Bit-compatible with existing element-trie data.
    ///
    /// Each level branches on the head of the remaining sequence, and the
    /// sequence then loses its *last* element. The head never changes, so
    /// `[Al, Al, O, O, O]` is stored along `Al → Al → Al → Al → Al`, and
    /// every composition sharing a first element and a length shares a node.
    #[default]
    Legacy,
    /// Conventional trie: each level consumes the head element.
    ///
    /// `[Al, Al, O, O, O]` is stored along `Al → Al → O → O → O`.
    Prefix,
}

impl PathRule {
    /// Returns the slot sequence walked for `composition`.
    ///
    /// Empty in, empty out.
    #[must_use]
    pub fn path(self, composition: &[Element]) -> Cow<'_, [Element]> {
        match self {
            Self::Prefix => Cow::Borrowed(composition),
            Self::Legacy => Cow::Owned(legacy_path(composition)),
        }
    }
}

/// Branch on the head, then trim the tail, until nothing remains.
fn legacy_path(composition: &[Element]) -> Vec<Element> {
    let mut path = Vec::with_capacity(composition.len());
    let mut remaining = composition;
    while let (Some(&head), Some((_, init))) = (remaining.first(), remaining.split_last()) {
        path.push(head);
        remaining = init;
    }
    path
}
