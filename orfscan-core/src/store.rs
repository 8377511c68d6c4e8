//! Ordered store of ORF records accumulated over a session.
//!
//! Records keep their discovery order: within one scan, forward records
//! precede reverse records, and each batch is in scan order. Stores from
//! separate scans are concatenated with [`RecordStore::merge`].
//!
//! The store has no internal synchronization. A driver that shares it
//! between threads must put it behind a single `Mutex`.

use crate::types::{OrfRecord, OrfScanError};

/// Positional handle to a record, returned by [`RecordStore::append`].
///
/// Removing a record shifts every later record down by one, which makes
/// handles obtained before the removal point at different records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordHandle(usize);

impl RecordHandle {
    /// Zero-based index of the record in its store
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Ordered, append-and-merge collection of ORF records.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::store::RecordStore;
/// use orfscan_core::OrfScanner;
///
/// let scanner = OrfScanner::default();
/// let mut history = RecordStore::new();
///
/// let mut turn = scanner.scan("AUGCCCUAA")?.into_store()?;
/// history.merge(&mut turn)?;
///
/// assert_eq!(history.len(), 1);
/// assert!(turn.is_empty());
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<OrfRecord>,
}

impl RecordStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Number of records held
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`OrfScanError::AllocationFailure`] if the store cannot grow;
    /// the store is left unchanged.
    pub fn append(&mut self, record: OrfRecord) -> Result<RecordHandle, OrfScanError> {
        self.records.try_reserve(1)?;
        self.records.push(record);
        Ok(RecordHandle(self.records.len() - 1))
    }

    /// Moves every record of `other` after this store's tail.
    ///
    /// Relative order within both stores is preserved and `other` is left
    /// empty. An empty store adopts `other`'s contents without copying.
    ///
    /// # Errors
    ///
    /// Returns [`OrfScanError::AllocationFailure`] if this store cannot grow.
    /// Both stores are left unchanged in that case.
    pub fn merge(&mut self, other: &mut Self) -> Result<(), OrfScanError> {
        if self.records.is_empty() {
            std::mem::swap(&mut self.records, &mut other.records);
            return Ok(());
        }
        self.records.try_reserve(other.records.len())?;
        self.records.append(&mut other.records);
        Ok(())
    }

    /// Iterates records in insertion order.
    ///
    /// Calling `iter` again restarts from the first record.
    pub fn iter(&self) -> std::slice::Iter<'_, OrfRecord> {
        self.records.iter()
    }

    /// Handles of every record, in insertion order
    pub fn handles(&self) -> impl Iterator<Item = RecordHandle> + use<> {
        (0..self.records.len()).map(RecordHandle)
    }

    #[must_use]
    pub fn get(&self, handle: RecordHandle) -> Option<&OrfRecord> {
        self.records.get(handle.0)
    }

    /// Detaches the record at `handle` and hands it back.
    ///
    /// Not used by the scanning flow. Returns `None` for a stale handle.
    pub fn remove(&mut self, handle: RecordHandle) -> Option<OrfRecord> {
        (handle.0 < self.records.len()).then(|| self.records.remove(handle.0))
    }

    /// Records as a slice, in insertion order
    #[must_use]
    pub fn as_slice(&self) -> &[OrfRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a OrfRecord;
    type IntoIter = std::slice::Iter<'a, OrfRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl IntoIterator for RecordStore {
    type Item = OrfRecord;
    type IntoIter = std::vec::IntoIter<OrfRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl FromIterator<OrfRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = OrfRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<OrfRecord> for RecordStore {
    fn extend<I: IntoIterator<Item = OrfRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl From<Vec<OrfRecord>> for RecordStore {
    fn from(records: Vec<OrfRecord>) -> Self {
        Self { records }
    }
}
