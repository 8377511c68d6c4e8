use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::algorithms::extract_orfs;
use crate::archive::Archive;
use crate::config::{SavePolicy, ScanConfig};
use crate::constants::DEFAULT_SEQUENCE_HEADER;
use crate::results::{ScanResults, SequenceInfo};
use crate::sequence::{
    CodonClassifier, FastaRecord, prepare_sequence, read_fasta_sequences, tokenize_with,
};
use crate::store::RecordStore;
use crate::types::OrfScanError;

/// High-level ORF scanner.
///
/// Prepares raw input, tokenizes it in both directions and extracts the
/// closed start-to-stop runs of each direction. The scan buffers only live
/// for the duration of one call.
///
/// # Examples
///
/// ## Scan a sequence string
///
/// ```rust
/// use orfscan_core::OrfScanner;
/// use orfscan_core::types::Direction;
///
/// let scanner = OrfScanner::default();
/// let results = scanner.scan("AUGCCCUAA")?;
///
/// assert_eq!(results.forward_orfs.len(), 1);
/// assert_eq!(results.forward_orfs[0].direction, Direction::Forward);
/// assert!(results.reverse_orfs.is_empty());
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
///
/// ## Scan a FASTA file
///
/// ```rust,no_run
/// use orfscan_core::{OrfScanner, config::ScanConfig};
///
/// let scanner = OrfScanner::new(ScanConfig {
///     num_threads: Some(4),
///     ..Default::default()
/// });
///
/// for result in scanner.scan_fasta_file("transcripts.fasta")? {
///     println!("{}: {} ORFs", result.sequence_info.header, result.total_orfs());
/// }
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrfScanner {
    /// Configuration options for scanning
    pub config: ScanConfig,
    classifier: CodonClassifier,
}

impl OrfScanner {
    /// Creates a scanner with the standard codon tables
    #[must_use]
    pub fn new(config: ScanConfig) -> Self {
        Self::with_classifier(config, CodonClassifier::default())
    }

    /// Creates a scanner with custom codon tables
    #[must_use]
    pub const fn with_classifier(config: ScanConfig, classifier: CodonClassifier) -> Self {
        Self { config, classifier }
    }

    /// Scans a raw sequence under the default header.
    ///
    /// # Errors
    ///
    /// - [`OrfScanError::InvalidSequence`] if preparation rejects the input.
    /// - [`OrfScanError::PreconditionViolation`] if its length is not a
    ///   multiple of three.
    /// - [`OrfScanError::AllocationFailure`] if a buffer cannot grow.
    pub fn scan(&self, raw: &str) -> Result<ScanResults, OrfScanError> {
        self.scan_named(raw, DEFAULT_SEQUENCE_HEADER.to_string(), None)
    }

    /// Scans a raw sequence under the given header.
    ///
    /// # Errors
    ///
    /// Same as [`scan`](Self::scan).
    pub fn scan_named(
        &self,
        raw: &str,
        header: String,
        description: Option<String>,
    ) -> Result<ScanResults, OrfScanError> {
        let sequence = prepare_sequence(raw, self.config.max_sequence_length)?;
        self.scan_prepared(sequence.as_bytes(), header, description)
    }

    /// Scans a sequence that has already been prepared.
    ///
    /// Skips normalization and alphabet checks; the caller vouches for them.
    ///
    /// # Errors
    ///
    /// - [`OrfScanError::PreconditionViolation`] if the length is not a
    ///   multiple of three.
    /// - [`OrfScanError::AllocationFailure`] if a buffer cannot grow.
    pub fn scan_prepared(
        &self,
        sequence: &[u8],
        header: String,
        description: Option<String>,
    ) -> Result<ScanResults, OrfScanError> {
        let (forward, reverse) = tokenize_with(&self.classifier, sequence, sequence.len())?;
        let forward_orfs = extract_orfs(&forward)?;
        let reverse_orfs = extract_orfs(&reverse)?;

        if !self.config.quiet {
            info!(
                header = %header,
                length = sequence.len(),
                forward = forward_orfs.len(),
                reverse = reverse_orfs.len(),
                "scanned sequence"
            );
        }

        Ok(ScanResults {
            forward_orfs,
            reverse_orfs,
            sequence_info: SequenceInfo {
                length: sequence.len(),
                header,
                description,
            },
        })
    }

    /// Scans every record of a FASTA file.
    ///
    /// # Errors
    ///
    /// Returns the first error met while reading the file or scanning any
    /// record.
    pub fn scan_fasta_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<Vec<ScanResults>, OrfScanError> {
        let records = read_fasta_sequences(path)?;
        self.scan_records(records)
    }

    /// Scans a batch of FASTA records in parallel.
    ///
    /// Results come back in input order. When `config.num_threads` is set
    /// the scan runs on a dedicated pool of that size.
    ///
    /// # Errors
    ///
    /// - [`OrfScanError::ConfigError`] if the thread pool cannot be built.
    /// - Any error from [`scan_named`](Self::scan_named) for a record.
    pub fn scan_records(
        &self,
        records: Vec<FastaRecord>,
    ) -> Result<Vec<ScanResults>, OrfScanError> {
        debug!(records = records.len(), "scanning batch");

        let scan_all = || {
            records
                .into_par_iter()
                .map(|(header, description, sequence)| {
                    let raw = String::from_utf8(sequence).map_err(|e| {
                        OrfScanError::InvalidSequence(format!("{}: {}", header, e))
                    })?;
                    self.scan_named(&raw, header, description)
                })
                .collect::<Result<Vec<_>, _>>()
        };

        match self.config.num_threads {
            Some(num_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map_err(|e| {
                    OrfScanError::ConfigError(format!("Failed to configure thread pool: {}", e))
                })?
                .install(scan_all),
            None => scan_all(),
        }
    }
}

/// An interactive scanning session.
///
/// Loads the archived history when opened, merges every analyzed
/// sequence's records into it, and writes it back either after each turn
/// or when the session finishes, per [`SavePolicy`].
///
/// # Examples
///
/// ```rust,no_run
/// use orfscan_core::{Session, config::ScanConfig};
///
/// let mut session = Session::open(ScanConfig::default())?;
/// let results = session.analyze("AUGCCCUAA")?;
/// println!("{} new ORFs, {} in history", results.total_orfs(), session.history().len());
/// session.finish()?;
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
#[derive(Debug)]
pub struct Session {
    scanner: OrfScanner,
    archive: Archive,
    history: RecordStore,
    unsaved: bool,
}

impl Session {
    /// Opens a session, loading history from the configured archive.
    ///
    /// # Errors
    ///
    /// Any error from [`Archive::load`].
    pub fn open(config: ScanConfig) -> Result<Self, OrfScanError> {
        let archive = Archive::from_config(&config);
        let history = archive.load()?;
        if !config.quiet {
            info!(records = history.len(), "loaded history");
        }
        Ok(Self::with_history(config, history))
    }

    /// Starts a session from an existing history without touching the archive
    #[must_use]
    pub fn with_history(config: ScanConfig, history: RecordStore) -> Self {
        Self {
            archive: Archive::from_config(&config),
            scanner: OrfScanner::new(config),
            history,
            unsaved: false,
        }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.scanner.config
    }

    /// Every record found so far, archived ones first
    pub fn history(&self) -> &RecordStore {
        &self.history
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    /// Scans one sequence and merges its records into the history.
    ///
    /// A rejected sequence leaves the history untouched. Under
    /// [`SavePolicy::EachTurn`] the archive is rewritten afterwards; a
    /// failed write is returned as the error but the records stay merged.
    ///
    /// # Errors
    ///
    /// Any error from [`OrfScanner::scan`] or [`Archive::save`].
    pub fn analyze(&mut self, raw: &str) -> Result<ScanResults, OrfScanError> {
        let results = self.scanner.scan(raw)?;
        self.absorb(results.clone().into_store()?)?;
        self.save_if_each_turn()?;
        Ok(results)
    }

    /// Scans every record of a FASTA file and merges them in file order.
    ///
    /// # Errors
    ///
    /// Any error from [`OrfScanner::scan_fasta_file`] or [`Archive::save`].
    pub fn analyze_fasta_file<P: AsRef<Path>>(
        &mut self,
        path: P,
    ) -> Result<Vec<ScanResults>, OrfScanError> {
        let results = self.scanner.scan_fasta_file(path)?;

        let mut batch = RecordStore::new();
        for result in &results {
            let mut turn = result.clone().into_store()?;
            batch.merge(&mut turn)?;
        }
        self.absorb(batch)?;
        self.save_if_each_turn()?;
        Ok(results)
    }

    /// Writes the full history to the archive, returning the path written
    ///
    /// # Errors
    ///
    /// Any error from [`Archive::save`].
    pub fn save(&mut self) -> Result<PathBuf, OrfScanError> {
        let path = self.archive.save(&self.history)?;
        self.unsaved = false;
        if !self.scanner.config.quiet {
            info!(path = %path.display(), records = self.history.len(), "saved history");
        }
        Ok(path)
    }

    /// Ends the session, saving any unsaved records, and hands back the history.
    ///
    /// # Errors
    ///
    /// Any error from [`Archive::save`].
    pub fn finish(mut self) -> Result<RecordStore, OrfScanError> {
        if self.unsaved {
            self.save()?;
        }
        Ok(self.history)
    }

    /// Merges one turn into the history in a single step, so a failed
    /// merge leaves the history as it was.
    fn absorb(&mut self, mut turn: RecordStore) -> Result<(), OrfScanError> {
        if turn.is_empty() {
            return Ok(());
        }
        self.history.merge(&mut turn)?;
        self.unsaved = true;
        Ok(())
    }

    fn save_if_each_turn(&mut self) -> Result<(), OrfScanError> {
        if self.unsaved && self.scanner.config.save_policy == SavePolicy::EachTurn {
            self.save()?;
        }
        Ok(())
    }
}
