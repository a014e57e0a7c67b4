//! Interaction-table parsing.
//!
//! Reads literature-curated interaction dumps: tab-separated tables with a
//! header row. Required columns are located by name, so column order is free
//! and extra annotation columns are ignored. Dumps compressed with gzip
//! (`.gz`) are handled transparently.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::{debug, warn};

use crate::types::{InteractionRecord, SignetError};

/// Required column: source entity identifier
pub const SOURCE_COLUMN: &str = "source";
/// Required column: target entity identifier
pub const TARGET_COLUMN: &str = "target";
/// Required column: directionality consensus flag
pub const DIRECTION_COLUMN: &str = "consensus_direction";
/// Required column: stimulation consensus flag
pub const STIMULATION_COLUMN: &str = "consensus_stimulation";
/// Required column: inhibition consensus flag
pub const INHIBITION_COLUMN: &str = "consensus_inhibition";

/// A parsed interaction table.
///
/// `rows_skipped` counts data rows that were dropped as unresolvable
/// evidence: missing fields, empty identifiers, or unparseable flags.
#[derive(Debug, Default)]
pub struct InteractionTable {
    /// Records parsed from the table, in input order
    pub records: Vec<InteractionRecord>,
    /// Number of malformed data rows dropped during parsing
    pub rows_skipped: usize,
}

/// Open a table file as a buffered reader, handling gzip transparently.
pub fn open_table_reader(path: &Path) -> Result<Box<dyn BufRead>, SignetError> {
    let is_gz = path.extension().map(|ext| ext == "gz").unwrap_or(false);
    let file = File::open(path)?;

    if is_gz {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Parse a boolean-like consensus flag cell (`0`/`1`/`true`/`false`).
fn parse_flag(cell: &str) -> Option<bool> {
    match cell.trim() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Locate a required column in the header fields.
fn column_index(header: &[&str], name: &str) -> Result<usize, SignetError> {
    header
        .iter()
        .position(|column| *column == name)
        .ok_or_else(|| SignetError::MissingColumn(name.to_string()))
}

/// Read an interaction table from a tab-separated file.
///
/// The header must expose the five required columns ([`SOURCE_COLUMN`],
/// [`TARGET_COLUMN`], [`DIRECTION_COLUMN`], [`STIMULATION_COLUMN`],
/// [`INHIBITION_COLUMN`]); anything else in the header is ignored. Data rows
/// with missing fields, empty identifiers, or unparseable flags are dropped
/// silently and counted in [`InteractionTable::rows_skipped`].
///
/// # Errors
///
/// Returns [`SignetError`] if the file cannot be opened, has no header line,
/// or its header lacks a required column.
pub fn read_interaction_table<P: AsRef<Path>>(path: P) -> Result<InteractionTable, SignetError> {
    let path = path.as_ref();
    let reader = open_table_reader(path)?;
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Err(SignetError::EmptyTable(path.display().to_string())),
    };
    let header: Vec<&str> = header_line.split('\t').collect();

    let source_idx = column_index(&header, SOURCE_COLUMN)?;
    let target_idx = column_index(&header, TARGET_COLUMN)?;
    let direction_idx = column_index(&header, DIRECTION_COLUMN)?;
    let stimulation_idx = column_index(&header, STIMULATION_COLUMN)?;
    let inhibition_idx = column_index(&header, INHIBITION_COLUMN)?;

    let mut table = InteractionTable::default();

    for (line_number, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();

        let parsed = parse_record(
            &fields,
            source_idx,
            target_idx,
            direction_idx,
            stimulation_idx,
            inhibition_idx,
        );

        match parsed {
            Some(record) => table.records.push(record),
            None => {
                // Header is line 1, so the first data row is line 2.
                debug!("Dropping malformed row at line {}", line_number + 2);
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

fn parse_record(
    fields: &[&str],
    source_idx: usize,
    target_idx: usize,
    direction_idx: usize,
    stimulation_idx: usize,
    inhibition_idx: usize,
) -> Option<InteractionRecord> {
    let source = fields.get(source_idx)?.trim();
    let target = fields.get(target_idx)?.trim();
    if source.is_empty() || target.is_empty() {
        return None;
    }

    Some(InteractionRecord {
        source: source.to_string(),
        target: target.to_string(),
        is_directed: parse_flag(fields.get(direction_idx)?)?,
        is_stimulation: parse_flag(fields.get(stimulation_idx)?)?,
        is_inhibition: parse_flag(fields.get(inhibition_idx)?)?,
    })
}
