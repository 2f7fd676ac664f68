//! Configuration for mmdict
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a dictionary store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing file holding the fixed-size records
    pub path: PathBuf,

    /// Number of slots in the backing file. Not recorded in the file itself,
    /// so the same value must be supplied on every load.
    pub capacity: usize,

    // -------------------------------------------------------------------------
    // Generate Configuration
    // -------------------------------------------------------------------------
    /// What generate does with words past the last slot
    pub overflow_policy: OverflowPolicy,

    // -------------------------------------------------------------------------
    // Query Configuration
    // -------------------------------------------------------------------------
    /// Which `n` values the length-count queries accept
    pub length_bound: LengthBound,
}

/// Handling of source words that do not fit in the dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Drop excess lines and report them in the generate summary
    #[default]
    Truncate,

    /// Fail generate with `CapacityExceeded`
    Reject,
}

/// Domain restriction applied to the `n` of the length-count queries.
///
/// Queries with `n` outside the domain return 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthBound {
    /// `n < capacity`. Couples the queryable length to the slot count; kept
    /// as the default for compatibility with existing dictionaries.
    #[default]
    SlotCount,

    /// `n <= MAX_WORD_LEN`, bounded by the widest storable word
    WordWidth,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./words.dict"),
            capacity: 500_000, // roughly /usr/share/dict/words
            overflow_policy: OverflowPolicy::default(),
            length_bound: LengthBound::default(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the slot capacity
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the overflow policy used by generate
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.config.overflow_policy = policy;
        self
    }

    /// Set the domain of the length-count queries
    pub fn length_bound(mut self, bound: LengthBound) -> Self {
        self.config.length_bound = bound;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
