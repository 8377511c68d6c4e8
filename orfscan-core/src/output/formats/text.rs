use std::io::Write;

use crate::types::{OrfRecord, OrfScanError};

/// Write records as a readable listing
pub fn write_text_format<'a, W, I>(
    writer: &mut W,
    seqid: &str,
    records: I,
) -> Result<(), OrfScanError>
where
    W: Write,
    I: IntoIterator<Item = &'a OrfRecord>,
{
    writeln!(writer, "# {}", seqid)?;

    let mut count = 0;
    for record in records {
        count += 1;
        writeln!(
            writer,
            "ORF {}: {} at position {}, {} nt, {} codons",
            count,
            record.direction,
            record.position_in_supersequence,
            record.length,
            record.codons.len()
        )?;
        for codon in &record.codons {
            writeln!(writer, "    {:<5} {}", codon.code, codon)?;
        }
    }

    if count == 0 {
        writeln!(writer, "No open reading frames found.")?;
    }
    Ok(())
}
