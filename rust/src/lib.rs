//! Fixed-capacity sorted node storage for in-memory B+ trees.
//!
//! This crate provides the storage primitives a B+ tree builds its nodes
//! from, with no heap allocation anywhere:
//!
//! - [`FixedVec`]: an inline vector with a compile-time capacity and
//!   manual element lifetimes over uninitialized slots.
//! - [`SortedEntries`]: a sorted, capacity-bounded associative container
//!   on top of it, generic over an entry shape ([`SetEntry`] /
//!   [`MapEntry`]), a duplicate policy ([`DenyDuplicates`] /
//!   [`AllowDuplicates`]) and a key comparator ([`KeyOrder`]), with the
//!   aliases [`NodeMap`], [`NodeMultiMap`], [`NodeSet`], [`NodeMultiSet`].
//!
//! A full node rejects further inserts with
//! [`NodeError::CapacityExceeded`] and stays untouched; splitting,
//! merging and root management belong to the tree layer above this crate.
//!
//! # Examples
//!
//! ```
//! use bptree_node::{NodeError, NodeMap};
//!
//! let mut node: NodeMap<i32, &str, 4> = NodeMap::new();
//! for (key, value) in [(3, "three"), (1, "one"), (2, "two")] {
//!     node.insert((key, value)).unwrap();
//! }
//!
//! assert_eq!(node.get(&2), Some(&"two"));
//! let keys: Vec<i32> = node.keys().copied().collect();
//! assert_eq!(keys, vec![1, 2, 3]);
//!
//! node.insert((4, "four")).unwrap();
//! // The node is full: the tree layer would split it now.
//! assert_eq!(
//!     node.insert((5, "five")).unwrap_err(),
//!     NodeError::CapacityExceeded { capacity: 4 },
//! );
//! ```

mod construction;
mod delete_operations;
mod entry;
mod error;
mod fixed_vec;
mod get_operations;
mod insert_operations;
mod iteration;
mod map_operations;
mod order;
mod policy;
mod types;
mod validation;

pub use entry::{EntryKind, MapEntry, SetEntry};
pub use error::{NodeError, NodeResult};
pub use fixed_vec::FixedVec;
pub use iteration::IntoIter;
pub use order::{KeyOrder, NaturalOrder};
pub use policy::{AllowDuplicates, DenyDuplicates, DuplicatePolicy, Insertion};
pub use types::{NodeMap, NodeMultiMap, NodeMultiSet, NodeSet, SortedEntries};
