//! Read operations for the sorted node containers: size queries, binary
//! search bounds, keyed lookup and range views.
//!
//! Every lookup is generic over a probe type `Q`; the bound
//! `C: KeyOrder<Q, E::Key>` is what makes a probe type admissible. With the
//! default [`NaturalOrder`](crate::NaturalOrder) comparator that covers the
//! stored key type itself plus anything it borrows as (`String` probed by
//! `&str`, and so on).

use std::cmp::Ordering;
use std::ops::{Bound, Range, RangeBounds};
use std::slice;

use crate::entry::EntryKind;
use crate::order::KeyOrder;
use crate::types::SortedEntries;

// ============================================================================
// SIZE AND VIEW BASICS
// ============================================================================

impl<E, P, const N: usize, C> SortedEntries<E, P, N, C>
where
    E: EntryKind,
{
    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the container is at capacity. The next
    /// non-rejected insert will report `CapacityExceeded`.
    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    /// Returns the fixed capacity `N`.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the sorted entries as a slice.
    pub fn as_slice(&self) -> &[E::Value] {
        self.entries.as_slice()
    }

    /// Returns an iterator over the entries in key order.
    pub fn iter(&self) -> slice::Iter<'_, E::Value> {
        self.as_slice().iter()
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<&E::Value> {
        self.as_slice().first()
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<&E::Value> {
        self.as_slice().last()
    }

    /// Returns the key comparator.
    pub fn key_order(&self) -> &C {
        &self.order
    }
}

// ============================================================================
// BINARY SEARCH AND KEYED LOOKUP
// ============================================================================

impl<E, P, const N: usize, C> SortedEntries<E, P, N, C>
where
    E: EntryKind,
{
    /// Position of the first entry whose key is not less than `key`.
    /// O(log n).
    pub fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        C: KeyOrder<Q, E::Key>,
    {
        self.as_slice()
            .partition_point(|stored| self.order.cmp(key, E::key(stored)) == Ordering::Greater)
    }

    /// Position after the last entry whose key equals `key`; equivalently
    /// the first position whose key is strictly greater. O(log n).
    pub fn upper_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        C: KeyOrder<Q, E::Key>,
    {
        self.as_slice()
            .partition_point(|stored| self.order.cmp(key, E::key(stored)) != Ordering::Less)
    }

    /// The index range of all entries whose key equals `key`.
    pub fn equal_range<Q>(&self, key: &Q) -> Range<usize>
    where
        Q: ?Sized,
        C: KeyOrder<Q, E::Key>,
    {
        self.lower_bound(key)..self.upper_bound(key)
    }

    /// Position of the first entry whose key equals `key`, if any.
    pub fn find_index<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        C: KeyOrder<Q, E::Key>,
    {
        let lower = self.lower_bound(key);
        let stored = self.as_slice().get(lower)?;
        if self.order.cmp(key, E::key(stored)) == Ordering::Equal {
            Some(lower)
        } else {
            None
        }
    }

    /// The first entry whose key equals `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree_node::NodeMap;
    ///
    /// let node = NodeMap::<i32, char, 8>::try_from_iter([(2, 'b'), (1, 'a')]).unwrap();
    /// assert_eq!(node.find(&2), Some(&(2, 'b')));
    /// assert_eq!(node.find(&9), None);
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Option<&E::Value>
    where
        Q: ?Sized,
        C: KeyOrder<Q, E::Key>,
    {
        self.find_index(key).map(|index| &self.as_slice()[index])
    }

    /// Returns true if an entry with this key is stored.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        C: KeyOrder<Q, E::Key>,
    {
        self.find_index(key).is_some()
    }

    /// Number of entries whose key equals `key`.
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        C: KeyOrder<Q, E::Key>,
    {
        self.equal_range(key).len()
    }

    /// The contiguous run of entries whose keys fall inside `range`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree_node::NodeSet;
    ///
    /// let node = NodeSet::<i32, 10>::try_from_iter([1, 3, 5, 7, 9]).unwrap();
    /// assert_eq!(node.range(3..8), &[3, 5, 7]);
    /// assert_eq!(node.range(..=5), &[1, 3, 5]);
    /// assert_eq!(node.range(..), &[1, 3, 5, 7, 9]);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> &[E::Value]
    where
        Q: ?Sized,
        R: RangeBounds<Q>,
        C: KeyOrder<Q, E::Key>,
    {
        let start = match range.start_bound() {
            Bound::Included(key) => self.lower_bound(key),
            Bound::Excluded(key) => self.upper_bound(key),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(key) => self.upper_bound(key),
            Bound::Excluded(key) => self.lower_bound(key),
            Bound::Unbounded => self.len(),
        };
        if start >= end {
            return &[];
        }
        &self.as_slice()[start..end]
    }
}

#[cfg(test)]
mod tests {
    use crate::{NodeMap, NodeMultiSet, NodeSet};

    fn sample() -> NodeMultiSet<i32, 10> {
        NodeMultiSet::try_from_iter([5, 1, 3, 5, 9, 5, 7]).unwrap()
    }

    #[test]
    fn bounds_bracket_equal_runs() {
        let node = sample();
        assert_eq!(node.as_slice(), &[1, 3, 5, 5, 5, 7, 9]);

        assert_eq!(node.lower_bound(&5), 2);
        assert_eq!(node.upper_bound(&5), 5);
        assert_eq!(node.equal_range(&5), 2..5);
        assert_eq!(node.count(&5), 3);

        assert_eq!(node.lower_bound(&0), 0);
        assert_eq!(node.upper_bound(&9), 7);
        assert_eq!(node.equal_range(&4), 2..2);
    }

    #[test]
    fn find_reports_the_first_equal_entry() {
        let node = sample();
        assert_eq!(node.find_index(&5), Some(2));
        assert_eq!(node.find(&7), Some(&7));
        assert_eq!(node.find(&4), None);
        assert!(node.contains_key(&9));
        assert!(!node.contains_key(&2));
    }

    #[test]
    fn first_and_last_follow_key_order() {
        let node = sample();
        assert_eq!(node.first(), Some(&1));
        assert_eq!(node.last(), Some(&9));

        let empty: NodeSet<i32, 4> = NodeSet::new();
        assert_eq!(empty.first(), None);
        assert_eq!(empty.last(), None);
    }

    #[test]
    fn range_views() {
        let node = sample();
        assert_eq!(node.range(3..7), &[3, 5, 5, 5]);
        assert_eq!(node.range(..3), &[1]);
        assert_eq!(node.range(6..), &[7, 9]);
        assert_eq!(node.range::<i32, _>(..), &[1, 3, 5, 5, 5, 7, 9]);
        assert_eq!(node.range(4..4), &[] as &[i32]);
    }

    #[test]
    fn string_keys_probed_by_str() {
        let node = NodeMap::<String, i32, 8>::try_from_iter([
            ("pine".to_string(), 1),
            ("fir".to_string(), 2),
            ("oak".to_string(), 3),
        ])
        .unwrap();

        assert!(node.contains_key("oak"));
        assert_eq!(node.find("fir"), Some(&("fir".to_string(), 2)));
        assert_eq!(node.lower_bound("gum"), 1);
        assert_eq!(node.find("elm"), None);
    }
}
