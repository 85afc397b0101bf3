//! Error type shared by the drills
//!
//! [`DrillError`] covers every failure the simulated memory, the node chain,
//! the bounded view and the snapshot history can report. Only
//! [`DrillError::AllocationFailure`] is expected in a well-formed run; the
//! other variants surface misuse of stale addresses or bad view bounds.

use crate::memory::value::Address;
use thiserror::Error;

/// Errors raised while running a drill
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DrillError {
    /// The node heap has no room for another block
    #[error("out of memory: {live} nodes live, limit is {limit}")]
    AllocationFailure { live: usize, limit: usize },

    /// Access through an address whose block was already freed
    #[error("use-after-free: address 0x{address:x} has been freed")]
    UseAfterFree { address: Address },

    /// Second free of the same block
    #[error("double free detected at address 0x{address:x}")]
    DoubleFree { address: Address },

    /// Free of an address that was never allocated
    #[error("invalid free: address 0x{address:x} was never allocated")]
    InvalidFree { address: Address },

    /// Dereference of an address that names no block
    #[error("invalid pointer: address 0x{address:x} not allocated")]
    InvalidPointer { address: Address },

    /// View bounds outside `begin <= end <= len`
    #[error("invalid view: [{begin}, {end}) over a buffer of length {len}")]
    InvalidView { begin: usize, end: usize, len: usize },

    /// Lookup of a local that no frame declares
    #[error("undefined variable '{name}'")]
    UndefinedVariable { name: String },

    /// Stack operation with no active frame
    #[error("no stack frame available")]
    NoStackFrame,

    /// Snapshot history would grow past its budget
    #[error("snapshot memory limit exceeded: {current} bytes used, limit is {limit}")]
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// Stepping past either end of the recorded history
    #[error("history operation failed: {message}")]
    HistoryOperationFailed { message: String },
}

impl DrillError {
    /// Whether this error is the allocation failure raised by `push_front`
    pub fn is_allocation_failure(&self) -> bool {
        matches!(self, DrillError::AllocationFailure { .. })
    }

    /// Address the error refers to, if any (used to highlight it in the heap pane)
    pub fn address(&self) -> Option<Address> {
        match self {
            DrillError::UseAfterFree { address }
            | DrillError::DoubleFree { address }
            | DrillError::InvalidFree { address }
            | DrillError::InvalidPointer { address } => Some(*address),
            _ => None,
        }
    }
}
