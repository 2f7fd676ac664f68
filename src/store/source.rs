//! Word source reader
//!
//! Reads a newline-delimited word list as raw bytes.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::Result;

/// Line reader that yields non-empty words with terminators stripped
pub(crate) struct WordSource {
    reader: BufReader<File>,
    line: Vec<u8>,
    skipped: usize,
}

impl WordSource {
    /// Open a word list for reading
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(Self {
            reader: BufReader::new(file),
            line: Vec::new(),
            skipped: 0,
        })
    }

    /// Next non-empty word, or `None` at end of input.
    ///
    /// Strips a trailing `\n` and a `\r` before it. Lines that are empty
    /// after stripping are counted in [`skipped`](Self::skipped).
    pub(crate) fn next_word(&mut self) -> Result<Option<&[u8]>> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                return Ok(None);
            }

            let word = strip_terminator(&self.line);
            if word.is_empty() {
                self.skipped += 1;
                continue;
            }

            let len = word.len();
            return Ok(Some(&self.line[..len]));
        }
    }

    /// Empty lines seen so far
    pub(crate) fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Number of non-empty words in the list at `path`
pub(crate) fn count_words(path: &Path) -> Result<usize> {
    let mut source = WordSource::open(path)?;
    let mut count = 0;
    while source.next_word()?.is_some() {
        count += 1;
    }
    Ok(count)
}

fn strip_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
