use std::io::Write;

use crate::{
    results::ExtractionResults,
    types::{Sign, SignetError},
};

/// Write the network as a Graphviz digraph.
///
/// Activation edges use the default arrowhead, inhibition edges a tee.
/// Identifiers are quoted, so complex names survive untouched.
pub fn write_dot_format<W: Write>(
    writer: &mut W,
    results: &ExtractionResults,
) -> Result<(), SignetError> {
    writeln!(writer, "digraph network {{")?;
    for edge in &results.edges {
        match edge.sign {
            Sign::Activation => {
                writeln!(writer, "    \"{}\" -> \"{}\";", edge.source, edge.target)?;
            }
            Sign::Inhibition => {
                writeln!(
                    writer,
                    "    \"{}\" -> \"{}\" [arrowhead=tee];",
                    edge.source, edge.target
                )?;
            }
        }
    }
    writeln!(writer, "}}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::NetworkInfo;
    use crate::types::SignedEdge;
    use std::io::Cursor;

    #[test]
    fn test_write_dot_format_edge_styles() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let results = ExtractionResults {
            edges: vec![
                SignedEdge {
                    source: "EGF".to_string(),
                    sign: Sign::Activation,
                    target: "EGFR".to_string(),
                },
                SignedEdge {
                    source: "PTEN".to_string(),
                    sign: Sign::Inhibition,
                    target: "AKT1".to_string(),
                },
            ],
            network_info: NetworkInfo::default(),
        };
        write_dot_format(&mut cursor, &results).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let expected = concat!(
            "digraph network {\n",
            "    \"EGF\" -> \"EGFR\";\n",
            "    \"PTEN\" -> \"AKT1\" [arrowhead=tee];\n",
            "}\n",
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn test_write_dot_format_empty_network_is_valid_digraph() {
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let results = ExtractionResults {
            edges: vec![],
            network_info: NetworkInfo::default(),
        };
        write_dot_format(&mut cursor, &results).unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "digraph network {\n}\n");
    }
}
