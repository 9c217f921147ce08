//! Payload access for the map-shaped containers.
//!
//! These impls exist only for `MapEntry` instantiations: lookups that hand
//! back the payload instead of the whole pair, checked access that fails
//! with `KeyNotFound`, and the defaulting accessor on unique maps. Keys
//! stay immutable; mutable access never reaches the key component.

use std::cmp::Ordering;

use crate::entry::MapEntry;
use crate::error::{NodeError, NodeResult};
use crate::order::KeyOrder;
use crate::policy::DenyDuplicates;
use crate::types::SortedEntries;

impl<K, T, P, const N: usize, C> SortedEntries<MapEntry<K, T>, P, N, C> {
    /// Returns the payload stored under `key`, if any. For a multimap this
    /// is the first entry of the equal-key run.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree_node::NodeMap;
    ///
    /// let node = NodeMap::<i32, char, 8>::try_from_iter([(1, 'a'), (2, 'b')]).unwrap();
    /// assert_eq!(node.get(&2), Some(&'b'));
    /// assert_eq!(node.get(&9), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        Q: ?Sized,
        C: KeyOrder<Q, K>,
    {
        self.find_index(key).map(|index| &self.as_slice()[index].1)
    }

    /// Returns a mutable reference to the payload stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut T>
    where
        Q: ?Sized,
        C: KeyOrder<Q, K>,
    {
        let index = self.find_index(key)?;
        Some(&mut self.entries.as_mut_slice()[index].1)
    }

    /// Checked payload access; fails with `KeyNotFound` when absent and
    /// never modifies the container.
    pub fn try_get<Q>(&self, key: &Q) -> NodeResult<&T>
    where
        Q: ?Sized,
        C: KeyOrder<Q, K>,
    {
        self.get(key).ok_or(NodeError::KeyNotFound)
    }

    /// Checked mutable payload access; fails with `KeyNotFound` when
    /// absent.
    pub fn try_get_mut<Q>(&mut self, key: &Q) -> NodeResult<&mut T>
    where
        Q: ?Sized,
        C: KeyOrder<Q, K>,
    {
        self.get_mut(key).ok_or(NodeError::KeyNotFound)
    }

    /// Returns an iterator over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|entry| &entry.0)
    }

    /// Returns an iterator over the payloads in key order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|entry| &entry.1)
    }

    /// Returns an iterator of mutable payload references in key order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.entries.as_mut_slice().iter_mut().map(|entry| &mut entry.1)
    }
}

impl<K, T, const N: usize, C> SortedEntries<MapEntry<K, T>, DenyDuplicates, N, C>
where
    C: KeyOrder<K>,
{
    /// Returns a mutable reference to the payload under `key`, inserting a
    /// default payload first when the key is absent.
    ///
    /// Fails with `CapacityExceeded` when the key is absent and the node
    /// is full; the contents are left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree_node::NodeMap;
    ///
    /// let mut node: NodeMap<i32, u32, 8> = NodeMap::new();
    /// *node.get_or_default(3).unwrap() += 1;
    /// *node.get_or_default(3).unwrap() += 1;
    /// assert_eq!(node.get(&3), Some(&2));
    /// ```
    pub fn get_or_default(&mut self, key: K) -> NodeResult<&mut T>
    where
        T: Default,
    {
        let position = self.lower_bound(&key);
        let present = match self.as_slice().get(position) {
            Some(stored) => self.order.cmp(&key, &stored.0) == Ordering::Equal,
            None => false,
        };
        if !present {
            self.entries.insert(position, (key, T::default()))?;
        }
        Ok(&mut self.entries.as_mut_slice()[position].1)
    }
}

#[cfg(test)]
mod tests {
    use crate::{NodeError, NodeMap, NodeMultiMap};

    #[test]
    fn payload_lookup_and_mutation() {
        let mut node = NodeMap::<i32, String, 8>::try_from_iter([
            (2, "two".to_string()),
            (1, "one".to_string()),
        ])
        .unwrap();

        assert_eq!(node.get(&1).map(String::as_str), Some("one"));
        assert_eq!(node.get(&3), None);

        node.get_mut(&2).unwrap().push_str(" owls");
        assert_eq!(node.get(&2).map(String::as_str), Some("two owls"));
    }

    #[test]
    fn checked_access_fails_without_mutating() {
        let mut node = NodeMap::<i32, char, 8>::try_from_iter([(1, 'a')]).unwrap();

        assert_eq!(node.try_get(&9).unwrap_err(), NodeError::KeyNotFound);
        assert_eq!(node.try_get_mut(&9).unwrap_err(), NodeError::KeyNotFound);
        assert_eq!(node.len(), 1);
        assert_eq!(*node.try_get(&1).unwrap(), 'a');
    }

    #[test]
    fn multimap_get_sees_the_first_of_the_run() {
        let mut node: NodeMultiMap<i32, char, 8> = NodeMultiMap::new();
        for entry in [(2, 'a'), (2, 'b'), (1, 'c')] {
            node.insert(entry).unwrap();
        }
        assert_eq!(node.get(&2), Some(&'a'));
    }

    #[test]
    fn keys_and_values_iterate_in_key_order() {
        let mut node = NodeMap::<i32, i32, 8>::try_from_iter([(3, 30), (1, 10), (2, 20)]).unwrap();

        let keys: Vec<i32> = node.keys().copied().collect();
        let values: Vec<i32> = node.values().copied().collect();
        assert_eq!(keys, vec![1, 2, 3]);
        assert_eq!(values, vec![10, 20, 30]);

        for value in node.values_mut() {
            *value += 1;
        }
        assert_eq!(node.get(&2), Some(&21));
    }

    #[test]
    fn get_or_default_inserts_then_reuses() {
        let mut node: NodeMap<i32, Vec<i32>, 4> = NodeMap::new();
        node.get_or_default(7).unwrap().push(1);
        node.get_or_default(7).unwrap().push(2);
        assert_eq!(node.len(), 1);
        assert_eq!(node.get(&7), Some(&vec![1, 2]));
    }

    #[test]
    fn get_or_default_respects_capacity() {
        let mut node = NodeMap::<i32, i32, 2>::try_from_iter([(1, 0), (2, 0)]).unwrap();

        // Present key still works at capacity.
        *node.get_or_default(1).unwrap() = 5;

        let err = node.get_or_default(3).unwrap_err();
        assert!(err.is_capacity_exceeded());
        let keys: Vec<i32> = node.keys().copied().collect();
        assert_eq!(keys, vec![1, 2]);
    }
}
