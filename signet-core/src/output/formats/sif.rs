use std::io::Write;

use crate::{
    results::ExtractionResults,
    types::{Sign, SignetError},
};

/// Write the network in Cytoscape simple-interaction format.
///
/// One `source<TAB>relationship<TAB>target` line per edge, no header.
pub fn write_sif_format<W: Write>(
    writer: &mut W,
    results: &ExtractionResults,
) -> Result<(), SignetError> {
    for edge in &results.edges {
        let relationship = match edge.sign {
            Sign::Activation => "activation",
            Sign::Inhibition => "inhibition",
        };
        writeln!(writer, "{}\t{}\t{}", edge.source, relationship, edge.target)?;
    }
    Ok(())
}
