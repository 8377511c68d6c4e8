use tracing::trace;

use super::{CodonClassifier, SequenceBuffer};
use crate::constants::CODON_LENGTH;
use crate::types::{Codon, Direction, OrfScanError};

/// Splits a sequence into forward and reverse codon streams using the
/// standard codon tables.
///
/// See [`tokenize_with`] for the exact layout of both buffers.
///
/// # Errors
///
/// Returns [`OrfScanError::PreconditionViolation`] if `length` is not a
/// multiple of three or differs from `sequence.len()`, and
/// [`OrfScanError::AllocationFailure`] if a buffer cannot be allocated.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::sequence::tokenize;
/// use orfscan_core::types::CodonCode;
///
/// let (forward, reverse) = tokenize(b"AUGCCCUAA", 9)?;
///
/// let codes: Vec<_> = forward.codons.iter().map(|c| c.code).collect();
/// assert_eq!(codes, [CodonCode::Start, CodonCode::Plain, CodonCode::Stop]);
/// assert_eq!(reverse.codons[2].symbols_str(), "GUA");
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
pub fn tokenize(
    sequence: &[u8],
    length: usize,
) -> Result<(SequenceBuffer, SequenceBuffer), OrfScanError> {
    tokenize_with(&CodonClassifier::default(), sequence, length)
}

/// Splits a sequence into forward and reverse codon streams.
///
/// For every window start `i` (stepping by three):
///
/// - the forward codon is `sequence[i..i + 3]`, stored at index `i / 3`
///   with position `i + 1`;
/// - the reverse codon is `sequence[i..i + 3]` with its symbols reversed,
///   stored at index `(length - i) / 3 - 1` with position `i + 3`.
///
/// Both buffers hold exactly `length / 3` codons.
///
/// # Errors
///
/// Same as [`tokenize`].
pub fn tokenize_with(
    classifier: &CodonClassifier,
    sequence: &[u8],
    length: usize,
) -> Result<(SequenceBuffer, SequenceBuffer), OrfScanError> {
    if length != sequence.len() {
        return Err(OrfScanError::PreconditionViolation(format!(
            "declared length {} does not match sequence length {}",
            length,
            sequence.len()
        )));
    }
    if !length.is_multiple_of(CODON_LENGTH) {
        return Err(OrfScanError::PreconditionViolation(format!(
            "sequence length {} is not a multiple of {}",
            length, CODON_LENGTH
        )));
    }

    let codon_count = length / CODON_LENGTH;
    let mut forward_codons = Vec::new();
    forward_codons.try_reserve_exact(codon_count)?;
    let mut reverse_codons = Vec::new();
    reverse_codons.try_reserve_exact(codon_count)?;

    for (window_index, window) in sequence.chunks_exact(CODON_LENGTH).enumerate() {
        let symbols = [window[0], window[1], window[2]];
        forward_codons.push(Codon::new(
            classifier.classify(&symbols),
            symbols,
            window_index * CODON_LENGTH + 1,
        ));
    }

    // Walking the windows back-to-front fills reverse slot (length - i) / 3 - 1
    // in index order.
    for (window_index, window) in sequence.chunks_exact(CODON_LENGTH).enumerate().rev() {
        let symbols = [window[2], window[1], window[0]];
        reverse_codons.push(Codon::new(
            classifier.classify(&symbols),
            symbols,
            window_index * CODON_LENGTH + CODON_LENGTH,
        ));
    }

    trace!(codon_count, "tokenized sequence in both directions");

    Ok((
        SequenceBuffer {
            length,
            direction: Direction::Forward,
            position_in_supersequence: 1,
            is_coding_sequence: None,
            codons: forward_codons,
        },
        SequenceBuffer {
            length,
            direction: Direction::Reverse,
            position_in_supersequence: 1,
            is_coding_sequence: None,
            codons: reverse_codons,
        },
    ))
}
