//! Dictionary Queries
//!
//! Point lookup and length-bucket counts, all as linear scans over the
//! mapped slots in ascending index order. Empty slots (length 0) never match
//! a lookup.

use crate::config::LengthBound;
use crate::error::{DictError, Result};
use crate::record::{RecordView, MAX_WORD_LEN};

use super::Store;

/// Occupancy and word-length summary of an opened dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DictStats {
    /// Total number of slots
    pub capacity: usize,
    /// Slots holding a word
    pub populated: usize,
    /// Unused slots
    pub empty: usize,
    /// Shortest stored word length, if any word is stored
    pub min_len: Option<u64>,
    /// Longest stored word length, if any word is stored
    pub max_len: Option<u64>,
    /// Sum of all stored word lengths
    pub total_len: u64,
}

impl Store {
    /// Slot index of the first populated record equal to `word`
    ///
    /// Words longer than `MAX_WORD_LEN` were stored truncated, so they are
    /// only found by their truncated form. An empty `word` is never found.
    pub fn exists(&self, word: &[u8]) -> Result<Option<usize>> {
        let mapped = self.mapped("query")?;
        if word.is_empty() {
            return Ok(None);
        }
        Ok(mapped.slots().position(|record| record.matches(word)))
    }

    /// Count of slots whose length is strictly greater than `n`
    ///
    /// Returns 0 when `n` is outside the configured [`LengthBound`].
    pub fn count_longer_than(&self, n: usize) -> Result<usize> {
        self.count_where(n, |len| len > n as u64)
    }

    /// Count of populated slots whose length is strictly less than `n`
    ///
    /// Returns 0 when `n` is outside the configured [`LengthBound`].
    pub fn count_shorter_than(&self, n: usize) -> Result<usize> {
        self.count_where(n, |len| len != 0 && len < n as u64)
    }

    /// Count of slots whose length equals `n`
    ///
    /// `n == 0` counts empty slots. Returns 0 when `n` is outside the
    /// configured [`LengthBound`].
    pub fn count_equal_to(&self, n: usize) -> Result<usize> {
        self.count_where(n, |len| len == n as u64)
    }

    /// View of the record in `slot`, empty or not
    pub fn get(&self, slot: usize) -> Result<RecordView<'_>> {
        self.mapped("get")?
            .slot(slot)
            .ok_or(DictError::SlotOutOfRange {
                slot,
                capacity: self.capacity(),
            })
    }

    /// Iterate populated slots as `(slot, record)` in ascending order
    pub fn iter(&self) -> Result<impl Iterator<Item = (usize, RecordView<'_>)>> {
        let mapped = self.mapped("iterate")?;
        Ok(mapped
            .slots()
            .enumerate()
            .filter(|(_, record)| !record.is_empty()))
    }

    /// Occupancy and length summary in a single scan
    pub fn stats(&self) -> Result<DictStats> {
        let mapped = self.mapped("stats")?;

        let mut stats = DictStats {
            capacity: mapped.slot_count(),
            ..DictStats::default()
        };

        for record in mapped.slots() {
            let len = record.length();
            if len == 0 {
                stats.empty += 1;
                continue;
            }
            stats.populated += 1;
            stats.total_len = stats.total_len.saturating_add(len);
            stats.min_len = Some(stats.min_len.map_or(len, |min| min.min(len)));
            stats.max_len = Some(stats.max_len.map_or(len, |max| max.max(len)));
        }

        Ok(stats)
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Whether `n` is a queryable length under the configured bound
    fn length_in_domain(&self, n: usize) -> bool {
        match self.config().length_bound {
            LengthBound::SlotCount => n < self.capacity(),
            LengthBound::WordWidth => n <= MAX_WORD_LEN,
        }
    }

    fn count_where(&self, n: usize, predicate: impl Fn(u64) -> bool) -> Result<usize> {
        let mapped = self.mapped("query")?;
        if !self.length_in_domain(n) {
            return Ok(0);
        }
        Ok(mapped
            .slots()
            .filter(|record| predicate(record.length()))
            .count())
    }
}
