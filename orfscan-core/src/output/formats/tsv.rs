use std::io::Write;

use crate::types::{OrfRecord, OrfScanError};

/// Write records as a tab-delimited table with a header row
pub fn write_tsv_format<'a, W, I>(writer: &mut W, records: I) -> Result<(), OrfScanError>
where
    W: Write,
    I: IntoIterator<Item = &'a OrfRecord>,
{
    writeln!(writer, "index\tdirection\tposition\tlength\tcodons\tsequence")?;
    for (index, record) in records.into_iter().enumerate() {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            index + 1,
            record.direction,
            record.position_in_supersequence,
            record.length,
            record.codons.len(),
            record.symbols()
        )?;
    }
    Ok(())
}
