//! Removal operations for the sorted node containers.

use crate::entry::EntryKind;
use crate::error::NodeResult;
use crate::order::KeyOrder;
use crate::types::SortedEntries;

impl<E, P, const N: usize, C> SortedEntries<E, P, N, C>
where
    E: EntryKind,
{
    /// Removes every entry whose key equals `key` and returns how many
    /// were removed. O(log n) search plus one bulk relocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree_node::NodeMultiSet;
    ///
    /// let mut node = NodeMultiSet::<i32, 10>::try_from_iter([6, 1, 6, 3, 6]).unwrap();
    /// assert_eq!(node.remove(&6), 3);
    /// assert_eq!(node.as_slice(), &[1, 3]);
    /// assert_eq!(node.remove(&6), 0);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> usize
    where
        Q: ?Sized,
        C: KeyOrder<Q, E::Key>,
    {
        let range = self.equal_range(key);
        let removed = range.len();
        self.entries
            .remove_range(range)
            .expect("equal_range lies within the live range");
        removed
    }

    /// Removes and returns the entry at `index`.
    ///
    /// Fails with `IndexOutOfRange` when `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> NodeResult<E::Value> {
        self.entries.remove(index)
    }

    /// Destroys all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
