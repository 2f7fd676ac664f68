//! # mmdict
//!
//! A fixed-record, memory-mapped word dictionary:
//! - Builds a flat file of fixed-size records from a newline-delimited word list
//! - Serves existence and length-distribution queries straight from the mapping
//! - Flushes and unmaps on close (or drop)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Store                                 │
//! │        generate / load / exists / count_* / close            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ Word Source │          │  MappedFile │
//!   │ (BufReader) │          │  (MmapMut)  │
//!   └─────────────┘          └──────┬──────┘
//!                                   │
//!                                   ▼
//!                           ┌─────────────┐
//!                           │   Record    │
//!                           │   Codec     │
//!                           └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use mmdict::Store;
//!
//! # fn main() -> mmdict::Result<()> {
//! let mut store = Store::new("words.dict", 500_000)?;
//! store.generate("/usr/share/dict/words")?;
//! assert!(store.exists(b"hello")?.is_some());
//! store.close()?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod record;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DictError, Result};
pub use config::{Config, LengthBound, OverflowPolicy};
pub use record::{file_size, record_size, Record, RecordView, MAX_WORD_LEN, RECORD_SIZE};
pub use store::{DictStats, GenerateReport, Store, StoreState};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of mmdict
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
