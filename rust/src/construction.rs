//! Construction and initialization for the sorted node containers.

use std::marker::PhantomData;

use crate::entry::EntryKind;
use crate::error::NodeResult;
use crate::fixed_vec::FixedVec;
use crate::order::KeyOrder;
use crate::policy::DuplicatePolicy;
use crate::types::SortedEntries;

impl<E, P, const N: usize, C> SortedEntries<E, P, N, C>
where
    E: EntryKind,
{
    /// Creates an empty container with a default-constructed comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree_node::NodeSet;
    ///
    /// let node: NodeSet<i32, 16> = NodeSet::new();
    /// assert!(node.is_empty());
    /// assert_eq!(node.capacity(), 16);
    /// ```
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::with_order(C::default())
    }

    /// Creates an empty container with the supplied comparator.
    pub fn with_order(order: C) -> Self {
        Self {
            entries: FixedVec::new(),
            order,
            _policy: PhantomData,
        }
    }
}

impl<E, P, const N: usize, C> SortedEntries<E, P, N, C>
where
    E: EntryKind,
    P: DuplicatePolicy,
    C: KeyOrder<E::Key>,
{
    /// Builds a container from arbitrary-order values, applying the
    /// duplicate policy to each.
    ///
    /// Fails with `CapacityExceeded` when the stored values do not fit.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree_node::NodeSet;
    ///
    /// let node = NodeSet::<i32, 8>::try_from_iter([3, 1, 3, 2]).unwrap();
    /// assert_eq!(node.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn try_from_iter<I>(values: I) -> NodeResult<Self>
    where
        I: IntoIterator<Item = E::Value>,
        C: Default,
    {
        let mut node = Self::new();
        node.try_extend(values)?;
        Ok(node)
    }
}

impl<E, P, const N: usize, C> Default for SortedEntries<E, P, N, C>
where
    E: EntryKind,
    C: Default,
{
    fn default() -> Self {
        Self::new()
    }
}
