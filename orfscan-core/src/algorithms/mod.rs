//! Core ORF-finding algorithms.
//!
//! ## Modules
//!
//! - [`orf_extraction`]: Start-to-stop run detection over a classified codon stream
//!
//! ## Algorithm Overview
//!
//! Each direction's codon stream is walked once with a two-state machine:
//!
//! ```text
//! Idle         --START-->  Accumulating   (remember start position)
//! Accumulating --any---->  Accumulating   (append codon)
//! Accumulating --STOP--->  Idle           (append codon, emit record)
//! Idle         --other-->  Idle
//! ```
//!
//! A second start codon inside a run does not restart it. A run still open
//! when the stream ends never produces a record.

pub mod orf_extraction;

pub use orf_extraction::{extract_orfs, extract_orfs_both};
