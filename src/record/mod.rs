//! Record Module
//!
//! Fixed-width on-disk encoding of one dictionary word.
//!
//! ## Responsibilities
//! - Bounded word buffer with a checked copy-in
//! - Encode a word into a slot, decode a slot into a read-only view
//! - Compute the backing file size for a given capacity
//!
//! ## Record Format (108 bytes, no padding)
//! ```text
//! ┌──────────────────────────────────────────┬──────────────────┐
//! │ Word (100)                               │ Length (8)       │
//! │ up to 99 bytes, zero padded, >= 1 zero   │ u64 little-endian│
//! └──────────────────────────────────────────┴──────────────────┘
//! ```
//!
//! Records are laid out back to back from offset 0. There is no file header:
//! a file of `capacity` slots is exactly `capacity * RECORD_SIZE` bytes.

mod codec;

pub use codec::{file_size, record_size, Record, RecordView, WordBuf};

// =============================================================================
// Shared Constants (used by codec and store)
// =============================================================================

/// Size of the word buffer, terminator included
pub const WORD_CAPACITY: usize = 100;

/// Longest word a record can hold; longer words are truncated
pub const MAX_WORD_LEN: usize = WORD_CAPACITY - 1;

/// Size of the length field: u64 little-endian
pub const LEN_FIELD_SIZE: usize = 8;

/// Size of one record on disk
pub const RECORD_SIZE: usize = WORD_CAPACITY + LEN_FIELD_SIZE;
