use crate::store::RecordStore;
use crate::types::{OrfRecord, OrfScanError};

/// ORFs found in one scanned sequence.
///
/// Forward and reverse records are kept as two batches; [`into_store`]
/// concatenates them forward first, which is the order a session stores
/// them in.
///
/// [`into_store`]: ScanResults::into_store
///
/// # Examples
///
/// ```rust
/// use orfscan_core::OrfScanner;
///
/// let results = OrfScanner::default().scan("AUGCCCUAA")?;
///
/// println!("Sequence: {}", results.sequence_info.header);
/// println!("Length: {} nt", results.sequence_info.length);
/// println!("ORFs: {}", results.total_orfs());
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResults {
    /// Records from the forward stream, in scan order.
    pub forward_orfs: Vec<OrfRecord>,

    /// Records from the reverse stream, in scan order.
    pub reverse_orfs: Vec<OrfRecord>,

    /// Information about the scanned sequence.
    pub sequence_info: SequenceInfo,
}

impl ScanResults {
    /// Number of records in both directions
    #[must_use]
    pub fn total_orfs(&self) -> usize {
        self.forward_orfs.len() + self.reverse_orfs.len()
    }

    /// Forward records followed by reverse records
    pub fn records(&self) -> impl Iterator<Item = &OrfRecord> {
        self.forward_orfs.iter().chain(&self.reverse_orfs)
    }

    /// Moves both batches into a new store, forward first.
    ///
    /// # Errors
    ///
    /// Returns [`OrfScanError::AllocationFailure`] if the store cannot grow.
    pub fn into_store(self) -> Result<RecordStore, OrfScanError> {
        let mut store = RecordStore::from(self.forward_orfs);
        let mut reverse = RecordStore::from(self.reverse_orfs);
        store.merge(&mut reverse)?;
        Ok(store)
    }
}

/// Information about a scanned sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceInfo {
    /// Length of the prepared sequence in nucleotides.
    pub length: usize,

    /// Sequence identifier.
    ///
    /// The FASTA identifier for file input, a default name otherwise.
    pub header: String,

    /// Remainder of the FASTA header line, if any.
    pub description: Option<String>,
}
