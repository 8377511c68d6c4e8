use tracing::debug;

use crate::constants::CODON_LENGTH;
use crate::sequence::SequenceBuffer;
use crate::types::{Codon, CodonCode, OrfRecord, OrfScanError};

/// Extractor state while walking a codon stream
#[derive(Debug)]
enum ExtractorState {
    /// Not inside a candidate run
    Idle,
    /// Collecting codons since the last start codon
    Accumulating { position: usize, codons: Vec<Codon> },
}

/// Extracts every closed start-to-stop run from one codon stream.
///
/// Records come out in scan order. Runs without a stop codon before the
/// end of the stream are discarded.
///
/// # Errors
///
/// Returns [`OrfScanError::PreconditionViolation`] if the buffer's length
/// is not a multiple of three or does not match its codon count, and
/// [`OrfScanError::AllocationFailure`] if a run or the result list cannot
/// grow. No partial result is returned on failure.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::algorithms::extract_orfs;
/// use orfscan_core::sequence::tokenize;
///
/// let (forward, _) = tokenize(b"CCCAUGCCCUAACCC", 15)?;
/// let orfs = extract_orfs(&forward)?;
///
/// assert_eq!(orfs.len(), 1);
/// assert_eq!(orfs[0].length, 9);
/// assert_eq!(orfs[0].position_in_supersequence, 4);
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
pub fn extract_orfs(buffer: &SequenceBuffer) -> Result<Vec<OrfRecord>, OrfScanError> {
    check_buffer_shape(buffer)?;

    let mut records = Vec::new();
    let mut state = ExtractorState::Idle;

    for codon in &buffer.codons {
        state = match state {
            ExtractorState::Idle if codon.code == CodonCode::Start => {
                let mut codons = Vec::new();
                push_checked(&mut codons, *codon)?;
                ExtractorState::Accumulating {
                    position: codon.position,
                    codons,
                }
            }
            ExtractorState::Idle => ExtractorState::Idle,
            ExtractorState::Accumulating {
                position,
                mut codons,
            } => {
                push_checked(&mut codons, *codon)?;
                if codon.code == CodonCode::Stop {
                    let record = OrfRecord {
                        length: codons.len() * CODON_LENGTH,
                        direction: buffer.direction,
                        position_in_supersequence: position,
                        is_coding_sequence: true,
                        codons,
                    };
                    push_checked(&mut records, record)?;
                    ExtractorState::Idle
                } else {
                    ExtractorState::Accumulating { position, codons }
                }
            }
        };
    }

    if let ExtractorState::Accumulating { position, codons } = state {
        debug!(
            direction = %buffer.direction,
            position,
            codons = codons.len(),
            "discarding unterminated run"
        );
    }

    debug!(
        direction = %buffer.direction,
        records = records.len(),
        "extracted open reading frames"
    );

    Ok(records)
}

/// Extracts from the forward buffer, then the reverse buffer, and returns
/// both batches concatenated in that order.
///
/// # Errors
///
/// Same as [`extract_orfs`].
pub fn extract_orfs_both(
    forward: &SequenceBuffer,
    reverse: &SequenceBuffer,
) -> Result<Vec<OrfRecord>, OrfScanError> {
    let mut records = extract_orfs(forward)?;
    let reverse_records = extract_orfs(reverse)?;
    records.try_reserve(reverse_records.len())?;
    records.extend(reverse_records);
    Ok(records)
}

fn check_buffer_shape(buffer: &SequenceBuffer) -> Result<(), OrfScanError> {
    if !buffer.length.is_multiple_of(CODON_LENGTH) {
        return Err(OrfScanError::PreconditionViolation(format!(
            "buffer length {} is not a multiple of {}",
            buffer.length, CODON_LENGTH
        )));
    }
    if buffer.codons.len() != buffer.length / CODON_LENGTH {
        return Err(OrfScanError::PreconditionViolation(format!(
            "buffer holds {} codons but its length implies {}",
            buffer.codons.len(),
            buffer.length / CODON_LENGTH
        )));
    }
    Ok(())
}

fn push_checked<T>(target: &mut Vec<T>, item: T) -> Result<(), OrfScanError> {
    target.try_reserve(1)?;
    target.push(item);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::tokenize;
    use crate::types::Direction;

    fn buffer_from_codes(codes: &[CodonCode]) -> SequenceBuffer {
        let codons = codes
            .iter()
            .enumerate()
            .map(|(i, &code)| {
                let symbols = match code {
                    CodonCode::Start => *b"AUG",
                    CodonCode::Stop => *b"UAA",
                    _ => *b"CCC",
                };
                Codon::new(code, symbols, i * 3 + 1)
            })
            .collect::<Vec<_>>();
        SequenceBuffer {
            length: codons.len() * 3,
            direction: Direction::Forward,
            position_in_supersequence: 1,
            is_coding_sequence: None,
            codons,
        }
    }

    #[test]
    fn test_single_orf_between_plain_codons() {
        let buffer = buffer_from_codes(&[
            CodonCode::Plain,
            CodonCode::Start,
            CodonCode::Plain,
            CodonCode::Stop,
            CodonCode::Plain,
        ]);
        let records = extract_orfs(&buffer).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].length, 9);
        assert_eq!(records[0].position_in_supersequence, 4);
        assert_eq!(records[0].direction, Direction::Forward);
        assert!(records[0].is_coding_sequence);
        assert_eq!(records[0].codons.len(), 3);
    }

    #[test]
    fn test_start_without_stop_emits_nothing() {
        let buffer = buffer_from_codes(&[CodonCode::Start, CodonCode::Plain, CodonCode::Plain]);
        assert!(extract_orfs(&buffer).unwrap().is_empty());
    }

    #[test]
    fn test_stop_without_start_emits_nothing() {
        let buffer = buffer_from_codes(&[CodonCode::Plain, CodonCode::Stop, CodonCode::Stop]);
        assert!(extract_orfs(&buffer).unwrap().is_empty());
    }

    #[test]
    fn test_second_start_keeps_accumulating() {
        let buffer = buffer_from_codes(&[
            CodonCode::Start,
            CodonCode::Plain,
            CodonCode::Start,
            CodonCode::Stop,
        ]);
        let records = extract_orfs(&buffer).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].position_in_supersequence, 1);
        assert_eq!(records[0].length, 12);
        assert_eq!(records[0].codons[2].code, CodonCode::Start);
    }

    #[test]
    fn test_consecutive_orfs_in_scan_order() {
        let buffer = buffer_from_codes(&[
            CodonCode::Start,
            CodonCode::Stop,
            CodonCode::Plain,
            CodonCode::Start,
            CodonCode::Plain,
            CodonCode::Stop,
            CodonCode::Start,
        ]);
        let records = extract_orfs(&buffer).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].position_in_supersequence, 1);
        assert_eq!(records[0].length, 6);
        assert_eq!(records[1].position_in_supersequence, 10);
        assert_eq!(records[1].length, 9);
    }

    #[test]
    fn test_records_start_with_start_and_end_with_stop() {
        let buffer = buffer_from_codes(&[
            CodonCode::Plain,
            CodonCode::Start,
            CodonCode::Plain,
            CodonCode::Plain,
            CodonCode::Stop,
            CodonCode::Start,
            CodonCode::Stop,
        ]);
        for record in extract_orfs(&buffer).unwrap() {
            assert_eq!(record.start_codon().unwrap().code, CodonCode::Start);
            assert_eq!(record.stop_codon().unwrap().code, CodonCode::Stop);
            let interior = &record.codons[1..record.codons.len() - 1];
            assert!(interior.iter().all(|c| c.code != CodonCode::Stop));
        }
    }

    #[test]
    fn test_end_to_end_forward_scan() {
        let (forward, reverse) = tokenize(b"AUGCCCUAA", 9).unwrap();
        let records = extract_orfs(&forward).unwrap();

        assert_eq!(
            records,
            vec![OrfRecord {
                length: 9,
                direction: Direction::Forward,
                position_in_supersequence: 1,
                is_coding_sequence: true,
                codons: vec![
                    Codon::new(CodonCode::Start, *b"AUG", 1),
                    Codon::new(CodonCode::Plain, *b"CCC", 4),
                    Codon::new(CodonCode::Stop, *b"UAA", 7),
                ],
            }]
        );
        assert!(extract_orfs(&reverse).unwrap().is_empty());
    }

    #[test]
    fn test_reverse_orf_uses_window_end_position() {
        let (forward, reverse) = tokenize(b"AAUCCCGUA", 9).unwrap();
        let records = extract_orfs_both(&forward, &reverse).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].direction, Direction::Reverse);
        assert_eq!(records[0].position_in_supersequence, 9);
        assert_eq!(records[0].symbols(), "AUGCCCUAA");
    }

    #[test]
    fn test_both_directions_forward_first() {
        // Forward reads AUG UAA first; the reversed GUA and AAU windows
        // read as AUG ... UAA in the reverse stream.
        let sequence = b"AUGUAAAAUCCCGUA";
        let (forward, reverse) = tokenize(sequence, sequence.len()).unwrap();
        let records = extract_orfs_both(&forward, &reverse).unwrap();

        let directions: Vec<_> = records.iter().map(|r| r.direction).collect();
        assert_eq!(directions, vec![Direction::Forward, Direction::Reverse]);
        assert_eq!(records[0].position_in_supersequence, 1);
        assert_eq!(records[1].position_in_supersequence, 15);
    }

    #[test]
    fn test_no_start_or_stop_yields_nothing() {
        let (forward, reverse) = tokenize(b"CCCCCC", 6).unwrap();
        assert!(extract_orfs_both(&forward, &reverse).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_buffer_is_rejected() {
        let mut buffer = buffer_from_codes(&[CodonCode::Start, CodonCode::Stop]);
        buffer.length = 7;
        assert!(matches!(
            extract_orfs(&buffer),
            Err(OrfScanError::PreconditionViolation(_))
        ));

        buffer.length = 9;
        assert!(matches!(
            extract_orfs(&buffer),
            Err(OrfScanError::PreconditionViolation(_))
        ));
    }
}
