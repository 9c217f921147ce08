//! Invariant checking for the sorted node containers.
//!
//! Exercised heavily by the test suites; a tree layer can also call it
//! after a batch of node edits when debugging.

use std::cmp::Ordering;

use crate::entry::EntryKind;
use crate::order::KeyOrder;
use crate::policy::DuplicatePolicy;
use crate::types::SortedEntries;

impl<E, P, const N: usize, C> SortedEntries<E, P, N, C>
where
    E: EntryKind,
    P: DuplicatePolicy,
    C: KeyOrder<E::Key>,
{
    /// Checks the container invariants with detailed error reporting.
    ///
    /// Verifies the length bound, non-decreasing key order between every
    /// adjacent pair, and strictly increasing keys when the policy denies
    /// duplicates.
    pub fn check_invariants(&self) -> Result<(), String> {
        if self.len() > N {
            return Err(format!("length {} exceeds capacity {}", self.len(), N));
        }

        for (index, pair) in self.as_slice().windows(2).enumerate() {
            match self.order.cmp(E::key(&pair[0]), E::key(&pair[1])) {
                Ordering::Greater => {
                    return Err(format!("entries {} and {} are out of order", index, index + 1));
                }
                Ordering::Equal if P::UNIQUE => {
                    return Err(format!(
                        "entries {} and {} share a key in a unique container",
                        index,
                        index + 1
                    ));
                }
                _ => {}
            }
        }

        Ok(())
    }
}
