use std::io::Write;

use crate::{
    constants::VERSION,
    output::record_span,
    types::{Direction, OrfRecord, OrfScanError},
};

/// Write records in GFF format
pub fn write_gff_format<'a, W, I>(
    writer: &mut W,
    seqid: &str,
    records: I,
) -> Result<(), OrfScanError>
where
    W: Write,
    I: IntoIterator<Item = &'a OrfRecord>,
{
    writeln!(writer, "##gff-version 3")?;
    writeln!(writer, "# Model Data: version=orfscan.v{}", VERSION)?;

    for (index, record) in records.into_iter().enumerate() {
        // The reverse reading is a character reversal, not a strand.
        let strand_char = match record.direction {
            Direction::Forward => '+',
            _ => '.',
        };
        let (begin, end) = record_span(record);

        writeln!(
            writer,
            concat!(
                "{}\torfscan_v{}\tORF\t{}\t{}\t.\t{}\t0\t",
                "ID={}_{};direction={};start_codon={};codons={};"
            ),
            seqid,
            VERSION,
            begin,
            end,
            strand_char,
            seqid,
            index + 1,
            record.direction,
            record.start_codon().map_or("NA", |codon| codon.symbols_str()),
            record.codons.len()
        )?;
    }
    Ok(())
}
