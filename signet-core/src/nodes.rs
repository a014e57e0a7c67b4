//! Node-table marshaling for downstream solver inputs.
//!
//! Causal-network solvers take, alongside the edge table, node tables: scored
//! "measured" nodes (e.g. regulator activities) and weighted "initial"
//! perturbation nodes. Those tables are produced by other tools with their
//! own naming conventions, so before the solver sees them their identifiers
//! must match the extracted network — same separator rewrite, restricted to
//! identifiers that actually occur as network nodes.

use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, warn};

use crate::extract::normalize_identifier;
use crate::interactions::open_table_reader;
use crate::types::SignetError;

/// A single scored node row.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeScore {
    /// Node identifier, normalized to match the network artifact
    pub id: String,
    /// Score or weight attached to the node
    pub value: f64,
}

/// A parsed (identifier, value) node table.
///
/// The original header names are preserved so the re-emitted table keeps the
/// producing tool's column vocabulary.
#[derive(Debug, Clone)]
pub struct NodeTable {
    /// Header name of the identifier column
    pub id_column: String,
    /// Header name of the value column
    pub value_column: String,
    /// Parsed rows in input order
    pub scores: Vec<NodeScore>,
    /// Number of malformed data rows dropped during parsing
    pub rows_skipped: usize,
}

impl NodeTable {
    /// Drop rows whose identifier does not occur in the given node set.
    ///
    /// Returns the number of rows removed. Solver inputs referencing nodes
    /// absent from the network are useless to the solver and are discarded
    /// here rather than passed through.
    pub fn restrict_to(&mut self, nodes: &HashSet<&str>) -> usize {
        let before = self.scores.len();
        self.scores.retain(|score| nodes.contains(score.id.as_str()));
        let removed = before - self.scores.len();
        if removed > 0 {
            warn!(
                "Dropped {} node score(s) absent from the extracted network",
                removed
            );
        }
        removed
    }

    /// Write the table as tab-separated text with its original header names.
    ///
    /// # Errors
    ///
    /// Returns [`SignetError`] if writing fails.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), SignetError> {
        writeln!(writer, "{}\t{}", self.id_column, self.value_column)?;
        for score in &self.scores {
            writeln!(writer, "{}\t{}", score.id, score.value)?;
        }
        Ok(())
    }
}

/// Read a two-column (identifier, numeric value) table from a tab-separated
/// file.
///
/// The first two header columns are taken as identifier and value columns;
/// identifiers go through the same separator rewrite as the network
/// ([`normalize_identifier`]). Rows with an empty identifier or a
/// non-numeric value are dropped silently and counted.
///
/// # Errors
///
/// Returns [`SignetError`] if the file cannot be opened, has no header line,
/// or the header has fewer than two columns.
pub fn read_node_table<P: AsRef<Path>>(path: P) -> Result<NodeTable, SignetError> {
    let path = path.as_ref();
    let reader = open_table_reader(path)?;
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Err(SignetError::EmptyTable(path.display().to_string())),
    };
    let mut header = header_line.split('\t');
    let (Some(id_column), Some(value_column)) = (header.next(), header.next()) else {
        return Err(SignetError::ParseError(format!(
            "Node table {} needs an identifier and a value column",
            path.display()
        )));
    };

    let mut table = NodeTable {
        id_column: id_column.to_string(),
        value_column: value_column.to_string(),
        scores: Vec::new(),
        rows_skipped: 0,
    };

    for (line_number, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let id = fields.next().map(str::trim).unwrap_or_default();
        let value = fields.next().and_then(|cell| cell.trim().parse::<f64>().ok());

        match (id.is_empty(), value) {
            (false, Some(value)) => table.scores.push(NodeScore {
                id: normalize_identifier(id),
                value,
            }),
            _ => {
                debug!("Dropping malformed node row at line {}", line_number + 2);
                table.rows_skipped += 1;
            }
        }
    }

    if table.rows_skipped > 0 {
        warn!(
            "Dropped {} malformed row(s) while reading {}",
            table.rows_skipped,
            path.display()
        );
    }

    Ok(table)
}
