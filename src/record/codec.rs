//! Record Codec
//!
//! Encodes words into fixed-width records and decodes slots of mapped memory.

use std::fmt;

use super::{LEN_FIELD_SIZE, MAX_WORD_LEN, RECORD_SIZE, WORD_CAPACITY};

/// Byte size of one record
pub const fn record_size() -> usize {
    RECORD_SIZE
}

/// Byte size of a backing file holding `capacity` records.
///
/// Returns `None` if the size does not fit in a u64.
pub fn file_size(capacity: usize) -> Option<u64> {
    (capacity as u64).checked_mul(RECORD_SIZE as u64)
}

// =============================================================================
// WordBuf
// =============================================================================

/// Bounded, zero-initialized word buffer
#[derive(Clone, PartialEq, Eq)]
pub struct WordBuf {
    bytes: [u8; WORD_CAPACITY],
}

impl WordBuf {
    /// Create an all-zero buffer
    pub fn new() -> Self {
        Self {
            bytes: [0u8; WORD_CAPACITY],
        }
    }

    /// Copy at most `MAX_WORD_LEN` bytes of `word` into the buffer.
    ///
    /// Bytes past the copied prefix are zeroed, so the last byte is always a
    /// terminator. Returns the number of bytes stored.
    pub fn copy_from(&mut self, word: &[u8]) -> usize {
        let stored = word.len().min(MAX_WORD_LEN);
        self.bytes[..stored].copy_from_slice(&word[..stored]);
        self.bytes[stored..].fill(0);
        stored
    }

    /// Raw buffer, padding included
    pub fn as_bytes(&self) -> &[u8; WORD_CAPACITY] {
        &self.bytes
    }
}

impl Default for WordBuf {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Record (owned)
// =============================================================================

/// One word encoded for storage
#[derive(Clone, PartialEq, Eq)]
pub struct Record {
    word: WordBuf,
    len: u64,
}

impl Record {
    /// Encode a word (line terminator already stripped).
    ///
    /// Words longer than `MAX_WORD_LEN` bytes are truncated; compare with
    /// `word.len()` to detect it.
    pub fn encode(word: &[u8]) -> Self {
        let mut buf = WordBuf::new();
        let stored = buf.copy_from(word);
        Self {
            word: buf,
            len: stored as u64,
        }
    }

    /// The stored word bytes
    pub fn word(&self) -> &[u8] {
        &self.word.as_bytes()[..self.len as usize]
    }

    /// Number of stored word bytes
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True for the empty-slot record
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Serialize into the on-disk layout
    pub fn to_bytes(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        self.write_to(&mut out);
        out
    }

    /// Write the record into one slot
    pub fn write_to(&self, slot: &mut [u8; RECORD_SIZE]) {
        slot[..WORD_CAPACITY].copy_from_slice(self.word.as_bytes());
        slot[WORD_CAPACITY..RECORD_SIZE].copy_from_slice(&self.len.to_le_bytes());
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("word", &String::from_utf8_lossy(self.word()))
            .field("len", &self.len)
            .finish()
    }
}

// =============================================================================
// RecordView (borrowed from mapped memory)
// =============================================================================

/// Read-only view over one slot of mapped memory
#[derive(Clone, Copy)]
pub struct RecordView<'a> {
    bytes: &'a [u8],
}

impl<'a> RecordView<'a> {
    /// Interpret the first `RECORD_SIZE` bytes as a record.
    ///
    /// Returns `None` if fewer bytes are available.
    pub fn decode(bytes: &'a [u8]) -> Option<Self> {
        bytes.get(..RECORD_SIZE).map(|bytes| Self { bytes })
    }

    /// The length field as stored.
    ///
    /// A file generated at a different capacity can hold any value here.
    pub fn length(&self) -> u64 {
        let mut raw = [0u8; LEN_FIELD_SIZE];
        raw.copy_from_slice(&self.bytes[WORD_CAPACITY..RECORD_SIZE]);
        u64::from_le_bytes(raw)
    }

    /// Stored word, bounded by both the length field and `MAX_WORD_LEN`
    pub fn word(&self) -> &'a [u8] {
        let len = self.length().min(MAX_WORD_LEN as u64) as usize;
        &self.bytes[..len]
    }

    /// True for an unused slot
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Exact byte match against a populated slot
    pub fn matches(&self, word: &[u8]) -> bool {
        !self.is_empty() && self.word() == word
    }

    /// Copy the view into an owned record
    pub fn to_record(&self) -> Record {
        Record::encode(self.word())
    }
}

impl fmt::Debug for RecordView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordView")
            .field("word", &String::from_utf8_lossy(self.word()))
            .field("len", &self.length())
            .finish()
    }
}
