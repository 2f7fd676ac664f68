//! Dictionary Store
//!
//! File and mapping lifecycle: construction, generate, load and close.

use std::path::Path;

use crate::config::{Config, OverflowPolicy};
use crate::error::{DictError, Result};
use crate::record::{file_size, Record, MAX_WORD_LEN};

use super::mapping::MappedFile;
use super::source::{count_words, WordSource};
use super::StoreState;

/// Summary of a generate run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Records written, starting at slot 0
    pub words_written: usize,
    /// Empty lines ignored
    pub lines_skipped: usize,
    /// Words stored as their first `MAX_WORD_LEN` bytes
    pub words_truncated: usize,
    /// Words that did not fit (only under `OverflowPolicy::Truncate`)
    pub lines_dropped: usize,
}

enum Backing {
    Unopened,
    Opened(MappedFile),
    Closed,
}

/// Fixed-capacity, memory-mapped word dictionary
///
/// ## Ownership
/// The store exclusively owns the backing file handle and its mapping. Both
/// are acquired together by `generate`/`load` and released together by
/// `close`. Dropping an opened store flushes and releases them as well, but
/// a flush failure on drop can only be logged.
pub struct Store {
    /// Store configuration
    config: Config,

    /// Exact backing file size, fixed by the capacity
    file_len: u64,

    /// Open file and mapping, when Opened
    backing: Backing,
}

impl Store {
    /// Create an unopened store for `path` with `capacity` slots
    ///
    /// Uses default config for everything else.
    pub fn new(path: impl AsRef<Path>, capacity: usize) -> Result<Self> {
        let config = Config::builder()
            .path(path.as_ref())
            .capacity(capacity)
            .build();
        Self::with_config(config)
    }

    /// Create an unopened store from a config
    ///
    /// Fails with `InvalidCapacity` if the capacity is zero or the file
    /// size cannot be addressed on this platform.
    pub fn with_config(config: Config) -> Result<Self> {
        let capacity = config.capacity;
        let file_len = file_size(capacity)
            .filter(|&len| capacity > 0 && usize::try_from(len).is_ok())
            .ok_or(DictError::InvalidCapacity { capacity })?;

        Ok(Self {
            config,
            file_len,
            backing: Backing::Unopened,
        })
    }

    /// Build a fresh dictionary from a newline-delimited word list
    ///
    /// Steps:
    /// 1. Open the source (under `Reject`, count its words first)
    /// 2. Create/truncate the backing file, size it and map it
    /// 3. Encode each non-empty line into the next slot
    /// 4. Keep the mapping open for queries
    ///
    /// The new records live in the mapping; they are only guaranteed on
    /// disk after `close`.
    pub fn generate(&mut self, source: impl AsRef<Path>) -> Result<GenerateReport> {
        self.expect_unopened("generate")?;
        let source = source.as_ref();

        let capacity = self.config.capacity;

        // Step 1: Open the source before touching the backing file
        let mut words = WordSource::open(source)?;
        if self.config.overflow_policy == OverflowPolicy::Reject {
            let total = count_words(source)?;
            if total > capacity {
                tracing::warn!(
                    "Rejecting {}: {} words for {} slots",
                    source.display(),
                    total,
                    capacity
                );
                return Err(DictError::CapacityExceeded { capacity });
            }
        }

        // Step 2: Fresh, zeroed mapping
        let mut mapped = MappedFile::open(&self.config.path, self.file_len, true)?;

        // Step 3: Populate slots in source order
        let mut report = GenerateReport::default();

        while let Some(word) = words.next_word()? {
            if report.words_written == capacity {
                match self.config.overflow_policy {
                    OverflowPolicy::Truncate => {
                        report.lines_dropped += 1;
                        continue;
                    }
                    // Source grew since it was counted. Leave an empty
                    // dictionary rather than a truncated one.
                    OverflowPolicy::Reject => {
                        mapped.zero();
                        mapped.close()?;
                        return Err(DictError::CapacityExceeded { capacity });
                    }
                }
            }

            if word.len() > MAX_WORD_LEN {
                tracing::debug!(
                    "Truncating {}-byte word to {} bytes",
                    word.len(),
                    MAX_WORD_LEN
                );
                report.words_truncated += 1;
            }

            let slot = mapped
                .slot_mut(report.words_written)
                .ok_or(DictError::SlotOutOfRange {
                    slot: report.words_written,
                    capacity,
                })?;
            Record::encode(word).write_to(slot);
            report.words_written += 1;
        }
        report.lines_skipped = words.skipped();

        if report.lines_dropped > 0 {
            tracing::warn!(
                "Dictionary full at {} slots: dropped {} words from {}",
                capacity,
                report.lines_dropped,
                source.display()
            );
        }

        tracing::info!(
            path = %self.config.path.display(),
            source = %source.display(),
            written = report.words_written,
            skipped = report.lines_skipped,
            truncated = report.words_truncated,
            "generated dictionary"
        );

        // Step 4: Commit
        self.backing = Backing::Opened(mapped);
        Ok(report)
    }

    /// Attach to a previously generated backing file
    ///
    /// The file is resized to this store's capacity unconditionally. Loading
    /// with a capacity other than the one used at generate time reinterprets
    /// or truncates the existing records without any error.
    pub fn load(&mut self) -> Result<()> {
        self.expect_unopened("load")?;

        let mapped = MappedFile::open(&self.config.path, self.file_len, false)?;

        tracing::info!(
            path = %self.config.path.display(),
            capacity = self.config.capacity,
            "loaded dictionary"
        );

        self.backing = Backing::Opened(mapped);
        Ok(())
    }

    /// Flush the mapping to disk and release it along with the file
    ///
    /// The store is Closed afterwards even if the flush fails. The backing
    /// file is left in place.
    pub fn close(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.backing, Backing::Closed) {
            Backing::Opened(mapped) => {
                mapped.close()?;
                tracing::debug!("Closed dictionary {}", self.config.path.display());
                Ok(())
            }
            other => {
                self.backing = other;
                Err(DictError::InvalidState {
                    operation: "close",
                    state: self.state(),
                })
            }
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current lifecycle state
    pub fn state(&self) -> StoreState {
        match self.backing {
            Backing::Unopened => StoreState::Unopened,
            Backing::Opened(_) => StoreState::Opened,
            Backing::Closed => StoreState::Closed,
        }
    }

    /// True while the backing file is mapped
    pub fn is_open(&self) -> bool {
        matches!(self.backing, Backing::Opened(_))
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Number of slots
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Exact size of the backing file once opened
    pub fn file_len(&self) -> u64 {
        self.file_len
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    /// The open mapping, or `InvalidState` naming `operation`
    pub(super) fn mapped(&self, operation: &'static str) -> Result<&MappedFile> {
        match &self.backing {
            Backing::Opened(mapped) => Ok(mapped),
            _ => Err(DictError::InvalidState {
                operation,
                state: self.state(),
            }),
        }
    }

    fn expect_unopened(&self, operation: &'static str) -> Result<()> {
        match self.backing {
            Backing::Unopened => Ok(()),
            _ => Err(DictError::InvalidState {
                operation,
                state: self.state(),
            }),
        }
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        if let Backing::Opened(mapped) = std::mem::replace(&mut self.backing, Backing::Closed) {
            if let Err(e) = mapped.close() {
                tracing::warn!(
                    "Failed to flush {} on drop: {}",
                    self.config.path.display(),
                    e
                );
            }
        }
    }
}
