//! Error types for mmdict
//!
//! Provides a unified error type for all dictionary operations.

use thiserror::Error;

use crate::store::StoreState;

/// Result type alias using DictError
pub type Result<T> = std::result::Result<T, DictError>;

/// Unified error type for mmdict operations
#[derive(Debug, Error)]
pub enum DictError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    /// Open, create, resize, map or flush failure. The OS error is preserved.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Capacity Errors
    // -------------------------------------------------------------------------
    #[error("Invalid capacity: {capacity} (must be > 0 and addressable)")]
    InvalidCapacity { capacity: usize },

    #[error("Source has more words than the dictionary capacity of {capacity}")]
    CapacityExceeded { capacity: usize },

    #[error("Slot {slot} out of range for capacity {capacity}")]
    SlotOutOfRange { slot: usize, capacity: usize },

    // -------------------------------------------------------------------------
    // Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("Cannot {operation} a store in state {state:?}")]
    InvalidState {
        operation: &'static str,
        state: StoreState,
    },
}
