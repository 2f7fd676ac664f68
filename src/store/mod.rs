//! Store Module
//!
//! Owns the backing file and its memory mapping, and answers queries directly
//! against mapped memory.
//!
//! ## Responsibilities
//! - Size the backing file to exactly `capacity * RECORD_SIZE` before mapping
//! - Populate slots from a newline-delimited word list (generate)
//! - Attach to a previously generated file (load)
//! - Linear-scan lookups and length-bucket counts
//! - Flush and unmap on close, or on drop as a fallback
//!
//! ## Lifecycle
//! ```text
//!              generate / load                close
//!   Unopened ───────────────────▶ Opened ───────────────▶ Closed
//! ```
//!
//! A failed generate or load leaves the store Unopened with nothing held
//! open, so it can be retried.
//!
//! There is no locking. Two stores over the same path, in one process or
//! across processes, interleave writes arbitrarily.

mod dictionary;
mod mapping;
mod query;
mod source;

pub use dictionary::{GenerateReport, Store};
pub use query::DictStats;

/// Observable lifecycle state of a [`Store`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// Path and capacity known, nothing opened
    Unopened,

    /// Backing file open and mapped
    Opened,

    /// Mapping flushed and released; the store is unusable
    Closed,
}
