//! Error handling and result types for node storage operations.
//!
//! Every failure a node container can report is one of a small set of
//! recoverable kinds. In particular `CapacityExceeded` is the signal a
//! B+ tree layer reacts to by splitting the node; it is never conflated
//! with out-of-range access or a missing key.

/// Error type for node storage operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeError {
    /// The operation would grow the container past its fixed capacity.
    CapacityExceeded {
        /// Capacity of the container the operation was attempted on.
        capacity: usize,
    },
    /// Checked positional access outside the live range.
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// Checked keyed access on a key that is not present.
    KeyNotFound,
    /// Removal from an empty sequence.
    Empty,
}

impl NodeError {
    /// Create a CapacityExceeded error for a container of the given capacity.
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    /// Create an IndexOutOfRange error with access context.
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }

    /// Check if this error is a capacity error.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }

    /// Check if this error is an out-of-range access.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Check if this error is a missing-key lookup.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::KeyNotFound)
    }
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeError::CapacityExceeded { capacity } => {
                write!(f, "capacity exceeded: node holds at most {} entries", capacity)
            }
            NodeError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for length {}", index, len)
            }
            NodeError::KeyNotFound => write!(f, "key not found in node"),
            NodeError::Empty => write!(f, "node is empty"),
        }
    }
}

impl std::error::Error for NodeError {}

/// Result type for node storage operations that may fail.
pub type NodeResult<T> = Result<T, NodeError>;
