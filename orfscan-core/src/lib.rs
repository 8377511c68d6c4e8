//! # orfscan - Open Reading Frame Scanner
//!
//! Scans nucleotide sequences for open reading frames (ORFs): runs that
//! begin with a start codon and end at the first following stop codon in
//! the same frame. Every sequence is read twice, forward and reversed, and
//! the frames found across a session are kept in a record store that
//! persists to a JSON archive.
//!
//! ## Features
//!
//! - **Dual-Direction Scanning**: Forward reading plus a character-reversed reading
//! - **Session History**: Records accumulate across scans and are archived as JSON
//! - **Multiple Output Formats**: Text, TSV, GFF3 and JSON
//! - **Batch Processing**: FASTA files are scanned in parallel using Rayon
//! - **Recoverable Errors**: Allocation failure and malformed archives surface as errors
//!
//! ## Quick Start
//!
//! ```rust
//! use orfscan_core::{OrfScanner, config::ScanConfig};
//!
//! let scanner = OrfScanner::new(ScanConfig::default());
//! let results = scanner.scan("AUGCCCUAA")?;
//!
//! println!("Found {} ORFs", results.total_orfs());
//! # Ok::<(), orfscan_core::types::OrfScanError>(())
//! ```
//!
//! ## Architecture
//!
//! The lower-level pipeline can be driven directly:
//!
//! ```rust
//! use orfscan_core::algorithms::extract_orfs_both;
//! use orfscan_core::sequence::{prepare_sequence, tokenize};
//! use orfscan_core::RecordStore;
//!
//! let sequence = prepare_sequence("augcccuaa", 10_000)?;
//! let (forward, reverse) = tokenize(sequence.as_bytes(), sequence.len())?;
//!
//! let mut history = RecordStore::new();
//! let mut found: RecordStore = extract_orfs_both(&forward, &reverse)?.into();
//! history.merge(&mut found)?;
//!
//! assert_eq!(history.len(), 1);
//! assert!(found.is_empty());
//! # Ok::<(), orfscan_core::types::OrfScanError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for scanning sessions
//! - [`engine`]: Scanner and session entry points
//! - [`types`]: Codons, ORF records and the error type
//! - [`results`]: Per-sequence scan results
//! - [`sequence`]: Preparation, classification, tokenization and FASTA input
//! - [`algorithms`]: ORF extraction
//! - [`store`]: Ordered record store
//! - [`archive`]: JSON archive codec and file handling
//! - [`output`]: Output formatting for the supported formats
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, OrfScanError>`](types::OrfScanError),
//! covering:
//!
//! - Allocation failure while growing a buffer
//! - Malformed or unrecognized archive content
//! - Sequences that are too long, empty, off-alphabet or not a whole number of codons
//! - I/O errors during file operations

pub mod algorithms;
pub mod archive;
pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod sequence;
pub mod store;
pub mod types;

pub use engine::{OrfScanner, Session};
pub use store::RecordStore;
pub use types::OrfScanError;
