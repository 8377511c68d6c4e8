//! Sequence preparation, codon classification and tokenization.
//!
//! ## Overview
//!
//! A raw sequence goes through three steps before ORFs can be extracted:
//!
//! 1. [`prepare_sequence`] trims, uppercases and validates it against the
//!    `{A, C, G, U}` alphabet and a maximum length.
//! 2. [`tokenize`] cuts it into 3-symbol windows and produces two
//!    [`SequenceBuffer`]s, one per [`Direction`].
//! 3. Every window is classified by a [`CodonClassifier`] as start, stop or
//!    plain.
//!
//! The reverse buffer is a character reversal, not a reverse complement: the
//! windows are taken in reverse order and each window's symbols are reversed.
//!
//! ## Modules
//!
//! - [`classify`]: Start/stop codon tables and lookup
//! - [`tokenize`](mod@tokenize): Dual-direction codon streams
//! - [`prepare`]: Normalization and validation of driver input
//! - [`io`]: FASTA file reading
//!
//! ## Examples
//!
//! ```rust
//! use orfscan_core::sequence::{prepare_sequence, tokenize};
//! use orfscan_core::types::CodonCode;
//!
//! let sequence = prepare_sequence("augcccuaa", 100)?;
//! let (forward, reverse) = tokenize(sequence.as_bytes(), sequence.len())?;
//!
//! assert_eq!(forward.codons[0].code, CodonCode::Start);
//! assert_eq!(reverse.codons[0].symbols_str(), "AAU");
//! # Ok::<(), orfscan_core::types::OrfScanError>(())
//! ```

use crate::types::{Codon, Direction};

pub mod classify;
pub mod io;
pub mod prepare;
pub mod tokenize;

pub use classify::*;
pub use io::*;
pub use prepare::*;
pub use tokenize::*;

/// Transient scan buffer holding one direction's classified codons.
///
/// Created by [`tokenize`] and dropped once its ORFs have been extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceBuffer {
    /// Number of nucleotides read (always a multiple of three)
    pub length: usize,
    /// Reading direction of `codons`
    pub direction: Direction,
    /// 1-based offset of this buffer within the scanned sequence
    pub position_in_supersequence: usize,
    /// Always `None` on scan buffers; only extracted records carry a verdict
    pub is_coding_sequence: Option<bool>,
    /// `length / 3` classified codons
    pub codons: Vec<Codon>,
}

impl SequenceBuffer {
    /// Number of codons in the buffer
    #[must_use]
    pub fn codon_count(&self) -> usize {
        self.codons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }
}
