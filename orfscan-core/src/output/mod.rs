//! Output formatting for ORF records.
//!
//! This module renders [`ScanResults`] or a whole [`RecordStore`] in one of
//! the formats named by [`OutputFormat`].
//!
//! ## Supported Formats
//!
//! - **Text**: Human-readable listing, one block per record
//! - **TSV**: Tab-delimited table with a header row
//! - **GFF3**: General Feature Format version 3
//! - **JSON**: The archive encoding
//!
//! ## Examples
//!
//! ### Write scan results to stdout
//!
//! ```rust
//! use orfscan_core::{OrfScanner, config::OutputFormat};
//! use orfscan_core::output::write_results;
//! use std::io::stdout;
//!
//! let results = OrfScanner::default().scan("AUGCCCUAA")?;
//! write_results(&mut stdout(), &results, OutputFormat::Tsv)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ### Write the session history to a file
//!
//! ```rust,no_run
//! use orfscan_core::{Session, config::{OutputFormat, ScanConfig}};
//! use orfscan_core::output::write_store;
//! use std::fs::File;
//!
//! let session = Session::open(ScanConfig::default())?;
//! let mut file = File::create("history.gff")?;
//! write_store(&mut file, session.history(), "history", OutputFormat::Gff)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Write;

use crate::archive::serialize;
use crate::config::OutputFormat;
use crate::results::ScanResults;
use crate::store::RecordStore;
use crate::types::{Direction, OrfRecord, OrfScanError};

mod formats {
    pub mod gff;
    pub mod text;
    pub mod tsv;
}

use formats::{gff::write_gff_format, text::write_text_format, tsv::write_tsv_format};

/// Writes the records of one scan in the specified format.
///
/// Forward records come first, then reverse records. The sequence header
/// is used as the GFF seqid and as the text heading.
///
/// # Errors
///
/// Returns [`OrfScanError::IoError`] if writing fails, or
/// [`OrfScanError::ValidationError`] if JSON encoding meets an unknown
/// variant.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &ScanResults,
    format: OutputFormat,
) -> Result<(), OrfScanError> {
    let seqid = &results.sequence_info.header;
    match format {
        OutputFormat::Text => write_text_format(writer, seqid, results.records()),
        OutputFormat::Tsv => write_tsv_format(writer, results.records()),
        OutputFormat::Gff => write_gff_format(writer, seqid, results.records()),
        OutputFormat::Json => {
            let store: RecordStore = results.records().cloned().collect();
            write_json(writer, &store)
        }
    }
}

/// Writes every record of a store in the specified format.
///
/// # Errors
///
/// Same as [`write_results`].
pub fn write_store<W: Write>(
    writer: &mut W,
    store: &RecordStore,
    seqid: &str,
    format: OutputFormat,
) -> Result<(), OrfScanError> {
    match format {
        OutputFormat::Text => write_text_format(writer, seqid, store.iter()),
        OutputFormat::Tsv => write_tsv_format(writer, store.iter()),
        OutputFormat::Gff => write_gff_format(writer, seqid, store.iter()),
        OutputFormat::Json => write_json(writer, store),
    }
}

fn write_json<W: Write>(writer: &mut W, store: &RecordStore) -> Result<(), OrfScanError> {
    writeln!(writer, "{}", serialize(store)?)?;
    Ok(())
}

/// 1-based inclusive span covered by a record in the scanned sequence.
///
/// Forward records grow rightwards from their start codon; reverse records
/// end at their start codon's window end.
pub(crate) fn record_span(record: &OrfRecord) -> (usize, usize) {
    let position = record.position_in_supersequence;
    match record.direction {
        Direction::Reverse => {
            ((position + 1).saturating_sub(record.length).max(1), position)
        }
        _ => (position, (position + record.length).saturating_sub(1).max(position)),
    }
}
