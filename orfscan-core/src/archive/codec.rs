use serde::{Deserialize, Serialize};

use crate::constants::CODON_LENGTH;
use crate::store::RecordStore;
use crate::types::{Codon, CodonCode, Direction, OrfRecord, OrfScanError};

/// One record as laid out in the archive
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArchivedRecord {
    length: usize,
    direction: String,
    position_in_supersequence: usize,
    is_coding_sequence: bool,
    codons: Vec<ArchivedCodon>,
}

/// One codon as laid out in the archive
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArchivedCodon {
    #[serde(rename = "type")]
    code: String,
    codon_sequence: String,
    position_in_sequence: usize,
}

/// Encodes a store as a pretty-printed JSON array.
///
/// Each element has the fields `length`, `direction`,
/// `positionInSupersequence`, `isCodingSequence` and `codons`; each codon
/// has `type`, `codonSequence` and `positionInSequence`.
///
/// # Errors
///
/// Returns [`OrfScanError::ValidationError`] if a record or codon carries an
/// `Unknown` direction or code, which has no archive spelling.
///
/// # Examples
///
/// ```rust
/// use orfscan_core::archive::{deserialize, serialize};
/// use orfscan_core::OrfScanner;
///
/// let store = OrfScanner::default().scan("AUGCCCUAA")?.into_store()?;
/// let text = serialize(&store)?;
///
/// assert!(text.contains("\"positionInSupersequence\": 1"));
/// assert_eq!(deserialize(&text)?, store);
/// # Ok::<(), orfscan_core::types::OrfScanError>(())
/// ```
pub fn serialize(store: &RecordStore) -> Result<String, OrfScanError> {
    let mut archived = Vec::new();
    archived.try_reserve_exact(store.len())?;

    for (index, record) in store.iter().enumerate() {
        archived.push(archive_record(index, record)?);
    }

    Ok(serde_json::to_string_pretty(&archived)?)
}

/// Rebuilds a store from archive text.
///
/// Blank text yields an empty store.
///
/// # Errors
///
/// - [`OrfScanError::ParseError`] if the text is not a JSON array of records
///   with the expected field types.
/// - [`OrfScanError::ValidationError`] if a `direction` or codon `type` is
///   not one of the recognized spellings, or a `codonSequence` is not three
///   ASCII characters.
pub fn deserialize(text: &str) -> Result<RecordStore, OrfScanError> {
    if text.trim().is_empty() {
        return Ok(RecordStore::new());
    }

    let archived: Vec<ArchivedRecord> = serde_json::from_str(text)?;
    let mut store = RecordStore::new();
    for (index, record) in archived.into_iter().enumerate() {
        store.append(restore_record(index, record)?)?;
    }
    Ok(store)
}

fn archive_record(index: usize, record: &OrfRecord) -> Result<ArchivedRecord, OrfScanError> {
    if record.direction == Direction::Unknown {
        return Err(OrfScanError::ValidationError(format!(
            "record {} has no archivable direction",
            index
        )));
    }

    let codons = record
        .codons
        .iter()
        .map(|codon| {
            if codon.code == CodonCode::Unknown {
                return Err(OrfScanError::ValidationError(format!(
                    "record {} has a codon at position {} with no archivable type",
                    index, codon.position
                )));
            }
            Ok(ArchivedCodon {
                code: codon.code.as_str().to_string(),
                codon_sequence: codon.symbols_str().to_string(),
                position_in_sequence: codon.position,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ArchivedRecord {
        length: record.length,
        direction: record.direction.as_str().to_string(),
        position_in_supersequence: record.position_in_supersequence,
        is_coding_sequence: record.is_coding_sequence,
        codons,
    })
}

fn restore_record(index: usize, record: ArchivedRecord) -> Result<OrfRecord, OrfScanError> {
    let direction = Direction::from_archive_str(&record.direction);
    if direction == Direction::Unknown {
        return Err(OrfScanError::ValidationError(format!(
            "record {}: unrecognized direction \"{}\"",
            index, record.direction
        )));
    }

    let mut codons = Vec::new();
    codons.try_reserve_exact(record.codons.len())?;
    for codon in record.codons {
        codons.push(restore_codon(index, codon)?);
    }

    Ok(OrfRecord {
        length: record.length,
        direction,
        position_in_supersequence: record.position_in_supersequence,
        is_coding_sequence: record.is_coding_sequence,
        codons,
    })
}

fn restore_codon(index: usize, codon: ArchivedCodon) -> Result<Codon, OrfScanError> {
    let code = CodonCode::from_archive_str(&codon.code);
    if code == CodonCode::Unknown {
        return Err(OrfScanError::ValidationError(format!(
            "record {}: unrecognized codon type \"{}\"",
            index, codon.code
        )));
    }

    let symbols: [u8; CODON_LENGTH] = codon
        .codon_sequence
        .as_bytes()
        .try_into()
        .ok()
        .filter(|symbols: &[u8; CODON_LENGTH]| symbols.is_ascii())
        .ok_or_else(|| {
            OrfScanError::ValidationError(format!(
                "record {}: codon sequence \"{}\" is not {} ASCII symbols",
                index, codon.codon_sequence, CODON_LENGTH
            ))
        })?;

    Ok(Codon::new(code, symbols, codon.position_in_sequence))
}
