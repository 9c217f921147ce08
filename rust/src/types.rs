//! Core container type and public aliases for sorted node storage.
//!
//! `SortedEntries` composes the fixed-capacity vector with an entry shape,
//! a duplicate policy and a key comparator. The four aliases below cover
//! the set/map and unique/duplicate combinations a B+ tree layer picks
//! from when declaring its node payload type.

use std::marker::PhantomData;

use crate::entry::{EntryKind, MapEntry, SetEntry};
use crate::fixed_vec::FixedVec;
use crate::iteration::IntoIter;
use crate::order::NaturalOrder;
use crate::policy::{AllowDuplicates, DenyDuplicates};

/// A sorted, capacity-bounded associative container over inline storage.
///
/// Entries are kept sorted non-decreasing by their projected key under the
/// comparator `C`. Under [`AllowDuplicates`] equal-key runs preserve
/// arrival order; under [`DenyDuplicates`] keys are strictly increasing.
/// Every mutation funnels through the underlying [`FixedVec`], so a full
/// container reports `CapacityExceeded` and stays untouched, which is the
/// split signal for the tree layer above.
///
/// Most code uses one of the aliases: [`NodeMap`], [`NodeMultiMap`],
/// [`NodeSet`], [`NodeMultiSet`].
///
/// # Examples
///
/// ```
/// use bptree_node::NodeMap;
///
/// let mut node: NodeMap<i32, char, 10> = NodeMap::new();
/// for (key, value) in [(6, 'a'), (1, 'b'), (5, 'c')] {
///     node.insert((key, value)).unwrap();
/// }
///
/// let keys: Vec<i32> = node.iter().map(|entry| entry.0).collect();
/// assert_eq!(keys, vec![1, 5, 6]);
/// ```
pub struct SortedEntries<E, P, const N: usize, C = NaturalOrder>
where
    E: EntryKind,
{
    /// Sorted backing storage.
    pub(crate) entries: FixedVec<E::Value, N>,
    /// The key comparator, an ordinary field: swapping two containers
    /// swaps their comparators along with their contents.
    pub(crate) order: C,
    pub(crate) _policy: PhantomData<P>,
}

/// Unique-key map-shaped node storage.
pub type NodeMap<K, T, const N: usize, C = NaturalOrder> =
    SortedEntries<MapEntry<K, T>, DenyDuplicates, N, C>;

/// Multi-key map-shaped node storage; equal keys keep arrival order.
pub type NodeMultiMap<K, T, const N: usize, C = NaturalOrder> =
    SortedEntries<MapEntry<K, T>, AllowDuplicates, N, C>;

/// Unique-key set-shaped node storage.
pub type NodeSet<K, const N: usize, C = NaturalOrder> =
    SortedEntries<SetEntry<K>, DenyDuplicates, N, C>;

/// Multi-key set-shaped node storage; equal keys keep arrival order.
pub type NodeMultiSet<K, const N: usize, C = NaturalOrder> =
    SortedEntries<SetEntry<K>, AllowDuplicates, N, C>;

// ============================================================================
// STD TRAIT IMPLEMENTATIONS
// ============================================================================

impl<E, P, const N: usize, C> Clone for SortedEntries<E, P, N, C>
where
    E: EntryKind,
    E::Value: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            order: self.order.clone(),
            _policy: PhantomData,
        }
    }
}

impl<E, P, const N: usize, C> PartialEq for SortedEntries<E, P, N, C>
where
    E: EntryKind,
    E::Value: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries.as_slice() == other.entries.as_slice()
    }
}

impl<E, P, const N: usize, C> Eq for SortedEntries<E, P, N, C>
where
    E: EntryKind,
    E::Value: Eq,
{
}

impl<E, P, const N: usize, C> PartialOrd for SortedEntries<E, P, N, C>
where
    E: EntryKind,
    E::Value: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.entries.as_slice().partial_cmp(other.entries.as_slice())
    }
}

impl<E, P, const N: usize, C> Ord for SortedEntries<E, P, N, C>
where
    E: EntryKind,
    E::Value: Ord,
{
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.entries.as_slice().cmp(other.entries.as_slice())
    }
}

impl<E, P, const N: usize, C> std::fmt::Debug for SortedEntries<E, P, N, C>
where
    E: EntryKind,
    E::Value: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.as_slice()).finish()
    }
}

impl<E, P, const N: usize, C> IntoIterator for SortedEntries<E, P, N, C>
where
    E: EntryKind,
{
    type Item = E::Value;
    type IntoIter = IntoIter<E::Value, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, E, P, const N: usize, C> IntoIterator for &'a SortedEntries<E, P, N, C>
where
    E: EntryKind,
{
    type Item = &'a E::Value;
    type IntoIter = std::slice::Iter<'a, E::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.as_slice().iter()
    }
}
