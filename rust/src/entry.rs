//! Entry shapes for the sorted node containers.
//!
//! An entry shape says what a stored value is and how to project it to its
//! ordering key. `SetEntry` stores bare keys; `MapEntry` stores `(key,
//! payload)` pairs ordered by the key alone. One algorithmic core serves
//! both.

use std::marker::PhantomData;

/// Projection from a stored value to its ordering key.
pub trait EntryKind {
    /// The key the container orders by.
    type Key;
    /// The value actually stored in a node.
    type Value;

    /// Borrows the ordering key out of a stored value.
    fn key(value: &Self::Value) -> &Self::Key;
}

/// Set-shaped entries: the stored value is the key itself.
pub struct SetEntry<K> {
    _marker: PhantomData<K>,
}

impl<K> EntryKind for SetEntry<K> {
    type Key = K;
    type Value = K;

    fn key(value: &K) -> &K {
        value
    }
}

/// Map-shaped entries: `(key, payload)` pairs ordered by the key. The key
/// is immutable once stored; mutable access reaches the payload only.
pub struct MapEntry<K, T> {
    _marker: PhantomData<(K, T)>,
}

impl<K, T> EntryKind for MapEntry<K, T> {
    type Key = K;
    type Value = (K, T);

    fn key(value: &(K, T)) -> &K {
        &value.0
    }
}
