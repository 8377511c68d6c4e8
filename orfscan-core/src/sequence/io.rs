use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;

use crate::types::OrfScanError;

/// A FASTA record as (identifier, description, sequence bytes)
pub type FastaRecord = (String, Option<String>, Vec<u8>);

/// Read every record of a FASTA file using rust-bio
pub fn read_fasta_sequences<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>, OrfScanError> {
    let file = File::open(path)?;
    read_fasta_from(file)
}

/// Read every record from any FASTA-formatted reader
pub fn read_fasta_from<R: Read>(reader: R) -> Result<Vec<FastaRecord>, OrfScanError> {
    let reader = fasta::Reader::new(reader);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| OrfScanError::ParseError(e.to_string()))?;
        let id = record.id().to_string();
        let description = record.desc().map(String::from);
        let seq = record.seq().to_vec();
        sequences.push((id, description, seq));
    }

    Ok(sequences)
}
