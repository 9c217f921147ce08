//! Key comparators for the sorted node containers.
//!
//! A container compares stored keys with each other through
//! `KeyOrder<K, K>` and, for lookups, compares a probe value against a
//! stored key through `KeyOrder<Q, K>`. Implementing the second
//! instantiation on a comparator is the explicit opt-in that unlocks
//! lookups by a type other than the stored key (for example probing a
//! `String`-keyed node with `&str`); without it only exact-key lookups
//! type-check.

use std::borrow::Borrow;
use std::cmp::Ordering;

/// A strict weak ordering over keys, usable with a probe type `Q` on the
/// left and the stored key type `K` on the right.
///
/// The default `K = Q` instantiation is the ordinary two-stored-keys
/// comparison every container requires.
pub trait KeyOrder<Q: ?Sized, K: ?Sized = Q> {
    /// Compares a probe value against a stored key.
    fn cmp(&self, probe: &Q, stored: &K) -> Ordering;
}

/// Comparator that uses the key type's own `Ord`.
///
/// Through [`Borrow`] it accepts any probe type the stored key borrows as,
/// which makes the standard library's heterogeneous-lookup pattern
/// available here as well.
///
/// # Examples
///
/// ```
/// use bptree_node::{KeyOrder, NaturalOrder};
/// use std::cmp::Ordering;
///
/// let order = NaturalOrder;
/// assert_eq!(order.cmp(&1, &3), Ordering::Less);
///
/// // Probe a stored String with a str.
/// let stored = String::from("mango");
/// assert_eq!(order.cmp("apple", &stored), Ordering::Less);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<Q, K> KeyOrder<Q, K> for NaturalOrder
where
    Q: Ord + ?Sized,
    K: Borrow<Q> + ?Sized,
{
    fn cmp(&self, probe: &Q, stored: &K) -> Ordering {
        probe.cmp(stored.borrow())
    }
}
