//! Insert operations for the sorted node containers.
//!
//! One algorithm serves both duplicate policies: binary-search the
//! upper-bound position, probe the predecessor for key equality only when
//! the policy is unique, and let the policy decide between storing the
//! value and reporting the existing entry. The hinted variant validates
//! the hint in O(1) and falls back to a subrange search, so a wrong hint
//! can never change the outcome.

use std::cmp::Ordering;

use crate::entry::EntryKind;
use crate::error::NodeResult;
use crate::order::KeyOrder;
use crate::policy::{DuplicatePolicy, Insertion};
use crate::types::SortedEntries;

impl<E, P, const N: usize, C> SortedEntries<E, P, N, C>
where
    E: EntryKind,
    P: DuplicatePolicy,
    C: KeyOrder<E::Key>,
{
    /// Inserts a value at its sorted position.
    ///
    /// Under [`DenyDuplicates`](crate::DenyDuplicates) an equal-key insert
    /// returns `Insertion::Rejected` with the existing entry's position and
    /// drops the candidate; under
    /// [`AllowDuplicates`](crate::AllowDuplicates) the value lands after
    /// the run of equal keys, preserving arrival order. O(log n)
    /// comparisons plus O(n) relocation.
    ///
    /// Fails with `CapacityExceeded` when the value would be stored in a
    /// full container; a rejected duplicate is not a capacity failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use bptree_node::NodeSet;
    ///
    /// let mut node: NodeSet<i32, 8> = NodeSet::new();
    /// assert!(node.insert(5).unwrap().is_inserted());
    /// assert!(node.insert(2).unwrap().is_inserted());
    ///
    /// let rejected = node.insert(5).unwrap();
    /// assert!(!rejected.is_inserted());
    /// assert_eq!(rejected.index(), 1);
    /// assert_eq!(node.as_slice(), &[2, 5]);
    /// ```
    pub fn insert(&mut self, value: E::Value) -> NodeResult<Insertion> {
        let upper = self.upper_bound_in(0, self.len(), E::key(&value));
        self.insert_decided(upper, value)
    }

    /// Inserts a value using `hint` as a position candidate.
    ///
    /// A correct hint (the position the hintless insert would pick) skips
    /// the binary search. Any other hint, including one past the end, is
    /// detected in O(1) and replaced by a search over the half the value
    /// belongs to; contents and returned position always match the
    /// hintless path.
    pub fn insert_with_hint(&mut self, hint: usize, value: E::Value) -> NodeResult<Insertion> {
        let len = self.len();
        let hint = hint.min(len);
        let key = E::key(&value);
        let slice = self.entries.as_slice();

        let upper = if hint > 0 && self.order.cmp(key, E::key(&slice[hint - 1])) == Ordering::Less {
            // The value sorts before the hint's predecessor; its upper
            // bound lies somewhere left of the hint.
            self.upper_bound_in(0, hint, key)
        } else if hint < len && self.order.cmp(key, E::key(&slice[hint])) != Ordering::Less {
            // The value does not sort before the entry at the hint; its
            // upper bound lies right of the hint.
            self.upper_bound_in(hint + 1, len, key)
        } else {
            hint
        };

        self.insert_decided(upper, value)
    }

    /// Inserts every value of the iterator, applying the policy to each.
    ///
    /// Stops at the first capacity failure; values inserted before the
    /// failure remain stored.
    pub fn try_extend<I>(&mut self, values: I) -> NodeResult<()>
    where
        I: IntoIterator<Item = E::Value>,
    {
        for value in values {
            self.insert(value)?;
        }
        Ok(())
    }

    /// Upper bound of `key` inside the index range `[lo, hi)`.
    fn upper_bound_in(&self, lo: usize, hi: usize, key: &E::Key) -> usize {
        lo + self.entries.as_slice()[lo..hi]
            .partition_point(|stored| self.order.cmp(key, E::key(stored)) != Ordering::Less)
    }

    /// Applies the duplicate policy at a resolved upper-bound position and
    /// performs the store.
    fn insert_decided(&mut self, upper: usize, value: E::Value) -> NodeResult<Insertion> {
        let equal_predecessor = if P::UNIQUE && upper > 0 {
            let predecessor = &self.entries.as_slice()[upper - 1];
            if self.order.cmp(E::key(&value), E::key(predecessor)) == Ordering::Equal {
                Some(upper - 1)
            } else {
                None
            }
        } else {
            None
        };

        match P::decide(upper, equal_predecessor) {
            Insertion::Inserted(position) => {
                self.entries.insert(position, value)?;
                Ok(Insertion::Inserted(position))
            }
            rejected => Ok(rejected),
        }
    }
}
