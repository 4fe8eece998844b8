//! Trie node type and slot-bitmap helpers.
//!
//! A node logically owns one child slot per element. Only occupied slots are
//! stored: `child_map` has bit `slot` set for every present child, and the
//! child indices sit contiguously in the children arena, ordered by slot.

use std::fmt;

use safe_bump::Idx;

use crate::element::{ELEMENT_COUNT, Element};

// 118 slots fit in a single u128 bitmap.
const _: () = assert!(ELEMENT_COUNT <= u128::BITS as usize);

/// Stored record: the composition exactly as it was added, and its payload.
///
/// Under [`PathRule::Legacy`](crate::PathRule::Legacy) several compositions
/// share a path, so the path alone does not identify what was stored.
pub struct Entry<P> {
    /// The composition passed to `add`.
    pub composition: Box<[Element]>,
    /// The payload.
    pub payload: P,
}

/// Element-trie node.
///
/// A node is terminal exactly when `entry` is `Some`; insertion sets it and
/// nothing clears it.
pub struct Node<P> {
    /// Bitmap of occupied child slots (bit `n - 1` for atomic number `n`).
    pub child_map: u128,
    /// Index of the first child pointer in the children arena.
    ///
    /// Meaningless when `child_map == 0`.
    pub children_start: Idx<Idx<Self>>,
    /// Entry stored at this node, if some composition ends here.
    pub entry: Option<Idx<Entry<P>>>,
}

impl<P> Node<P> {
    /// A fresh node: no children, not terminal.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            child_map: 0,
            children_start: Idx::from_raw(0),
            entry: None,
        }
    }

    /// Returns `true` if a composition ends at this node.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.entry.is_some()
    }

    /// Returns the number of occupied child slots.
    #[must_use]
    pub const fn children_len(&self) -> usize {
        self.child_map.count_ones() as usize
    }

    /// Returns the occupied slots' elements in ascending order.
    pub fn child_elements(&self) -> impl Iterator<Item = Element> + use<P> {
        let map = self.child_map;
        (0..ELEMENT_COUNT)
            .filter(move |&slot| map & mask(slot) != 0)
            .map(Element::from_slot)
    }
}

// ---------------------------------------------------------------------------
// Bitmap helpers
// ---------------------------------------------------------------------------

/// Returns the single-bit mask for the given slot (0..118).
#[inline]
#[must_use]
pub const fn mask(slot: usize) -> u128 {
    1 << slot
}

/// Returns the compact index of `bit` within `bitmap`.
///
/// Counts the number of set bits below `bit`.
#[inline]
#[must_use]
pub const fn index(bitmap: u128, bit: u128) -> usize {
    (bitmap & (bit - 1)).count_ones() as usize
}

/// Offsets a base index by `n` positions.
#[inline]
#[must_use]
pub const fn offset<T>(base: Idx<T>, n: usize) -> Idx<T> {
    Idx::from_raw(base.into_raw() + n)
}

// ---------------------------------------------------------------------------
// Manual trait impls — avoid a false `P: Trait` bound.
// Node contains only indices (Copy) and a bitmap — no payload data.
// ---------------------------------------------------------------------------

impl<P> Clone for Node<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for Node<P> {}

impl<P> Default for Node<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> fmt::Debug for Node<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("children", &self.child_elements().collect::<Vec<_>>())
            .field("terminal", &self.is_terminal())
            .finish_non_exhaustive()
    }
}
