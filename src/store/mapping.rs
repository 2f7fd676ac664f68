//! Mapped backing file
//!
//! A file handle and its shared read-write mapping, acquired and released
//! together.

use std::fs::{File, OpenOptions};
use std::path::Path;

use memmap2::{MmapMut, MmapOptions};

use crate::error::Result;
use crate::record::{RecordView, RECORD_SIZE};

/// Open backing file plus its mapping.
///
/// Field order matters: the mapping is dropped before the file.
pub(crate) struct MappedFile {
    mmap: MmapMut,
    _file: File,
}

impl MappedFile {
    /// Open or create `path`, resize it to exactly `len` bytes and map it.
    ///
    /// With `fresh` set the file is truncated to zero first, so every slot
    /// reads back as empty.
    pub(crate) fn open(path: &Path, len: u64, fresh: bool) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(fresh)
            .open(path)?;

        file.set_len(len)?;

        // SAFETY: the file was just resized to `len` and this handle is the
        // only one the process holds. Concurrent external modification is
        // unsupported, as documented on the store.
        let mmap = unsafe { MmapOptions::new().len(len as usize).map_mut(&file)? };

        tracing::debug!(path = %path.display(), len, fresh, "mapped backing file");

        Ok(Self { mmap, _file: file })
    }

    /// Number of whole slots in the mapping
    pub(crate) fn slot_count(&self) -> usize {
        self.mmap.len() / RECORD_SIZE
    }

    /// View of slot `index`, or `None` past the end
    pub(crate) fn slot(&self, index: usize) -> Option<RecordView<'_>> {
        let start = index.checked_mul(RECORD_SIZE)?;
        RecordView::decode(self.mmap.get(start..)?)
    }

    /// Writable bytes of slot `index`, or `None` past the end
    pub(crate) fn slot_mut(&mut self, index: usize) -> Option<&mut [u8; RECORD_SIZE]> {
        let start = index.checked_mul(RECORD_SIZE)?;
        let end = start.checked_add(RECORD_SIZE)?;
        self.mmap.get_mut(start..end)?.try_into().ok()
    }

    /// Reset every slot to empty
    pub(crate) fn zero(&mut self) {
        self.mmap.fill(0);
    }

    /// All slots in ascending index order
    pub(crate) fn slots(&self) -> impl Iterator<Item = RecordView<'_>> {
        self.mmap
            .chunks_exact(RECORD_SIZE)
            .filter_map(RecordView::decode)
    }

    /// Synchronously write dirty pages back to the file
    pub(crate) fn flush(&self) -> Result<()> {
        self.mmap.flush()?;
        Ok(())
    }

    /// Flush, then release the mapping and the file handle.
    ///
    /// Both are released even when the flush fails.
    pub(crate) fn close(self) -> Result<()> {
        let flushed = self.flush();
        drop(self);
        flushed
    }
}
