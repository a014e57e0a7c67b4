use std::io::Write;

use crate::{results::ExtractionResults, types::SignetError};

/// Write the canonical three-column signed edge table.
///
/// Tab-separated with header `source`, `interaction`, `target`; the
/// `interaction` column holds the integer sign. The header is written even
/// when the network is empty.
pub fn write_table_format<W: Write>(
    writer: &mut W,
    results: &ExtractionResults,
) -> Result<(), SignetError> {
    writeln!(writer, "source\tinteraction\ttarget")?;
    for edge in &results.edges {
        writeln!(writer, "{}\t{}\t{}", edge.source, edge.sign, edge.target)?;
    }
    Ok(())
}
