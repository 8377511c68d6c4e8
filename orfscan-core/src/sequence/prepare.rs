use bio::alphabets::Alphabet;

use crate::constants::NUCLEOTIDE_ALPHABET;
use crate::types::OrfScanError;

/// Normalizes and validates a raw sequence for scanning.
///
/// Surrounding whitespace is trimmed and lowercase symbols are uppercased.
/// The result must be non-empty, no longer than `max_length`, and made only
/// of `A`, `C`, `G` and `U`.
///
/// The codon-width requirement is left to [`tokenize`](super::tokenize),
/// which reports it as a precondition violation.
///
/// # Errors
///
/// Returns [`OrfScanError::InvalidSequence`] for empty, over-long or
/// out-of-alphabet input.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::sequence::prepare_sequence;
///
/// assert_eq!(prepare_sequence("  augccc\n", 100)?, "AUGCCC");
/// assert!(prepare_sequence("ATGCCC", 100).is_err());
/// assert!(prepare_sequence("AUGCCC", 3).is_err());
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
pub fn prepare_sequence(raw: &str, max_length: usize) -> Result<String, OrfScanError> {
    let normalized = raw.trim().to_ascii_uppercase();

    if normalized.is_empty() {
        return Err(OrfScanError::InvalidSequence(
            "sequence is empty".to_string(),
        ));
    }

    if normalized.len() > max_length {
        return Err(OrfScanError::InvalidSequence(format!(
            "sequence length {} exceeds the maximum of {}",
            normalized.len(),
            max_length
        )));
    }

    let alphabet = Alphabet::new(NUCLEOTIDE_ALPHABET);
    if !alphabet.is_word(normalized.as_bytes()) {
        let (offset, symbol) = normalized
            .char_indices()
            .find(|(_, c)| !c.is_ascii() || !alphabet.symbols.contains(*c as usize))
            .unwrap_or((0, '?'));
        return Err(OrfScanError::InvalidSequence(format!(
            "invalid symbol '{}' at position {} (allowed: A, C, G, U)",
            symbol,
            offset + 1
        )));
    }

    Ok(normalized)
}
