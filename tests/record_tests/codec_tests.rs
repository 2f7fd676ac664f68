//! Tests for the record codec
//!
//! These tests verify:
//! - Record and file size arithmetic
//! - Bounded copy-in and truncation of long words
//! - On-disk layout (zero padding, little-endian length)
//! - Decoding views over raw slot bytes

use mmdict::record::{WordBuf, LEN_FIELD_SIZE, MAX_WORD_LEN, WORD_CAPACITY};
use mmdict::{file_size, record_size, Record, RecordView, RECORD_SIZE};

// =============================================================================
// Size Tests
// =============================================================================

#[test]
fn test_record_size_is_word_plus_length() {
    assert_eq!(record_size(), WORD_CAPACITY + LEN_FIELD_SIZE);
    assert_eq!(record_size(), 108);
    assert_eq!(RECORD_SIZE, record_size());
}

#[test]
fn test_file_size_scales_with_capacity() {
    assert_eq!(file_size(0), Some(0));
    assert_eq!(file_size(1), Some(108));
    assert_eq!(file_size(10), Some(1080));
    assert_eq!(file_size(500_000), Some(54_000_000));
}

#[test]
fn test_file_size_overflow() {
    assert_eq!(file_size(usize::MAX), None);
}

// =============================================================================
// WordBuf Tests
// =============================================================================

#[test]
fn test_wordbuf_copy_returns_stored_len() {
    let mut buf = WordBuf::new();

    assert_eq!(buf.copy_from(b"hello"), 5);
    assert_eq!(&buf.as_bytes()[..5], b"hello");
    assert!(buf.as_bytes()[5..].iter().all(|&b| b == 0));
}

#[test]
fn test_wordbuf_copy_clears_previous_contents() {
    let mut buf = WordBuf::new();
    buf.copy_from(b"elephant");
    buf.copy_from(b"cat");

    assert_eq!(&buf.as_bytes()[..3], b"cat");
    assert!(buf.as_bytes()[3..].iter().all(|&b| b == 0));
}

#[test]
fn test_wordbuf_keeps_terminator() {
    let mut buf = WordBuf::new();
    let long = vec![b'x'; WORD_CAPACITY * 2];

    assert_eq!(buf.copy_from(&long), MAX_WORD_LEN);
    assert_eq!(buf.as_bytes()[WORD_CAPACITY - 1], 0);
}

// =============================================================================
// Encode Tests
// =============================================================================

#[test]
fn test_encode_short_word() {
    let record = Record::encode(b"dog");

    assert_eq!(record.word(), b"dog");
    assert_eq!(record.len(), 3);
    assert!(!record.is_empty());
}

#[test]
fn test_encode_empty_word_is_empty_slot() {
    let record = Record::encode(b"");

    assert!(record.is_empty());
    assert_eq!(record.to_bytes(), [0u8; RECORD_SIZE]);
}

#[test]
fn test_encode_max_len_word_is_not_truncated() {
    let word = vec![b'a'; MAX_WORD_LEN];
    let record = Record::encode(&word);

    assert_eq!(record.len(), MAX_WORD_LEN);
    assert_eq!(record.word(), word.as_slice());
}

#[test]
fn test_encode_truncates_long_word() {
    let word: Vec<u8> = (0..150u8).map(|i| b'a' + (i % 26)).collect();
    let record = Record::encode(&word);

    assert_eq!(record.len(), MAX_WORD_LEN);
    assert_eq!(record.word(), &word[..MAX_WORD_LEN]);
}

#[test]
fn test_encode_layout() {
    let bytes = Record::encode(b"cat").to_bytes();

    assert_eq!(&bytes[..3], b"cat");
    assert!(bytes[3..WORD_CAPACITY].iter().all(|&b| b == 0));
    assert_eq!(&bytes[WORD_CAPACITY..], &3u64.to_le_bytes());
}

#[test]
fn test_encode_non_utf8_word() {
    let record = Record::encode(&[0xff, 0xfe, b'z']);

    assert_eq!(record.word(), &[0xff, 0xfe, b'z']);
    assert_eq!(record.len(), 3);
}

#[test]
fn test_write_to_overwrites_whole_slot() {
    let mut slot = [0xAAu8; RECORD_SIZE];
    Record::encode(b"owl").write_to(&mut slot);

    assert_eq!(&slot[..3], b"owl");
    assert!(slot[3..WORD_CAPACITY].iter().all(|&b| b == 0));
    assert_eq!(&slot[WORD_CAPACITY..], &3u64.to_le_bytes());
}

#[test]
fn test_write_to_slot_within_larger_buffer() {
    let mut buffer = [0xAAu8; RECORD_SIZE + 4];
    let (head, tail) = buffer.split_at_mut(RECORD_SIZE);
    Record::encode(b"owl").write_to((&mut *head).try_into().unwrap());

    assert_eq!(&head[..3], b"owl");
    assert_eq!(&tail[..], &[0xAA; 4]);
}

// =============================================================================
// Decode Tests
// =============================================================================

#[test]
fn test_decode_view() {
    let bytes = Record::encode(b"elephant").to_bytes();
    let view = RecordView::decode(&bytes).unwrap();

    assert_eq!(view.word(), b"elephant");
    assert_eq!(view.length(), 8);
    assert!(view.matches(b"elephant"));
    assert!(!view.matches(b"elephan"));
    assert!(!view.matches(b"elephants"));
}

#[test]
fn test_decode_short_buffer() {
    let bytes = [0u8; RECORD_SIZE - 1];
    assert!(RecordView::decode(&bytes).is_none());
}

#[test]
fn test_decode_empty_slot() {
    let bytes = [0u8; RECORD_SIZE];
    let view = RecordView::decode(&bytes).unwrap();

    assert!(view.is_empty());
    assert_eq!(view.word(), b"");
    assert!(!view.matches(b""));
}

#[test]
fn test_decode_bounds_corrupt_length() {
    let mut bytes = [b'q'; RECORD_SIZE];
    bytes[WORD_CAPACITY..].copy_from_slice(&u64::MAX.to_le_bytes());
    let view = RecordView::decode(&bytes).unwrap();

    assert_eq!(view.length(), u64::MAX);
    assert_eq!(view.word().len(), MAX_WORD_LEN);
}

#[test]
fn test_view_to_record() {
    let original = Record::encode(b"zebra");
    let bytes = original.to_bytes();
    let view = RecordView::decode(&bytes).unwrap();

    assert_eq!(view.to_record(), original);
}
