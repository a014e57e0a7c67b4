//! Sign-consistency network extraction.
//!
//! Turns a raw interaction-database dump into the directed, signed edge list
//! consumed by causal-network solvers. The pipeline is a pure, single-pass
//! filter-map-distinct over a finite record set:
//!
//! 1. keep directionally-resolved records (directionality consensus set)
//! 2. keep records asserting a regulatory polarity (stimulation or inhibition)
//! 3. derive a polarity from each of the two flags and keep only records
//!    where both derivations agree ([`Sign::from_consensus`])
//! 4. project to (source, sign, target) with normalized identifiers and
//!    collapse exact duplicate triples, first occurrence wins
//!
//! Running the pipeline twice on the same input yields identical output;
//! there is no shared state and no ordering dependence beyond input order.

use std::collections::HashSet;
use std::path::Path;

use log::info;

use crate::config::SignetConfig;
use crate::interactions::read_interaction_table;
use crate::results::{ExtractionResults, NetworkInfo};
use crate::types::{InteractionRecord, Sign, SignedEdge, SignetError};

/// Separator used by the source encoding for multi-subunit complex names.
const COMPLEX_SEPARATOR: char = ':';

/// Replacement separator safe for downstream consumers that tokenize on `:`.
const SAFE_SEPARATOR: &str = "_";

/// Rewrite the reserved complex-name separator to a safe one.
///
/// Compound identifiers such as `COMPLEX:SMAD2:SMAD4` become
/// `COMPLEX_SMAD2_SMAD4`, so downstream consumers that tokenize on `:`
/// see a single token per entity.
///
/// # Examples
///
/// ```rust
/// use signet_core::extract::normalize_identifier;
///
/// assert_eq!(normalize_identifier("SMAD2:SMAD4"), "SMAD2_SMAD4");
/// assert_eq!(normalize_identifier("TP53"), "TP53");
/// ```
#[must_use]
pub fn normalize_identifier(identifier: &str) -> String {
    identifier.replace(COMPLEX_SEPARATOR, SAFE_SEPARATOR)
}

/// Collect the distinct node identifiers of an edge list.
#[must_use]
pub fn node_set(edges: &[SignedEdge]) -> HashSet<&str> {
    edges
        .iter()
        .flat_map(|edge| [edge.source.as_str(), edge.target.as_str()])
        .collect()
}

/// Main signed-network extraction engine.
///
/// Holds the run configuration and exposes the extraction entry points:
/// [`extract_file`](Self::extract_file) for reading an interaction table from
/// disk and [`extract_records`](Self::extract_records) for records already in
/// memory.
///
/// # Examples
///
/// ```rust,no_run
/// use signet_core::{NetworkExtractor, config::SignetConfig};
///
/// let extractor = NetworkExtractor::new(SignetConfig::default());
/// let results = extractor.extract_file("interactions.tsv")?;
///
/// for edge in &results.edges {
///     println!("{edge}");
/// }
/// # Ok::<(), signet_core::types::SignetError>(())
/// ```
#[derive(Debug, Default)]
pub struct NetworkExtractor {
    /// Configuration options for extraction and output
    pub config: SignetConfig,
}

impl NetworkExtractor {
    /// Creates a new extractor with the specified configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use signet_core::{NetworkExtractor, config::SignetConfig};
    ///
    /// let extractor = NetworkExtractor::new(SignetConfig::default());
    /// ```
    #[must_use]
    pub const fn new(config: SignetConfig) -> Self {
        Self { config }
    }

    /// Extracts the signed network from an interaction table on disk.
    ///
    /// Reads the table (gzip handled transparently) and runs the
    /// sign-consistency pipeline over its records.
    ///
    /// # Errors
    ///
    /// Returns [`SignetError`] if the file cannot be read or its header
    /// lacks a required column. Malformed data rows are dropped and counted,
    /// never surfaced as errors.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<ExtractionResults, SignetError> {
        let table = read_interaction_table(path)?;
        let mut results = self.extract_records(&table.records);
        results.network_info.rows_skipped = table.rows_skipped;
        Ok(results)
    }

    /// Runs the sign-consistency pipeline over in-memory records.
    ///
    /// This is the pure core: no I/O, no external state, deterministic for a
    /// given input sequence. Empty input yields an empty edge list.
    #[must_use]
    pub fn extract_records(&self, records: &[InteractionRecord]) -> ExtractionResults {
        let mut info = NetworkInfo {
            records_read: records.len(),
            ..Default::default()
        };

        let mut seen: HashSet<SignedEdge> = HashSet::new();
        let mut edges: Vec<SignedEdge> = Vec::new();

        for record in records {
            if !record.is_directed {
                info.undirected += 1;
                continue;
            }
            if !record.is_stimulation && !record.is_inhibition {
                info.unpolarized += 1;
                continue;
            }
            let Some(sign) = Sign::from_consensus(record.is_stimulation, record.is_inhibition)
            else {
                info.contradictory += 1;
                continue;
            };

            let edge = SignedEdge {
                source: normalize_identifier(&record.source),
                sign,
                target: normalize_identifier(&record.target),
            };

            if seen.insert(edge.clone()) {
                edges.push(edge);
            } else {
                info.duplicates += 1;
            }
        }

        info.num_edges = edges.len();
        info.num_nodes = node_set(&edges).len();
        info.activations = edges.iter().filter(|e| e.sign == Sign::Activation).count();
        info.inhibitions = info.num_edges - info.activations;

        info!(
            "Extracted {} signed edges over {} nodes from {} records \
             (dropped: {} undirected, {} unpolarized, {} contradictory, {} duplicate)",
            info.num_edges,
            info.num_nodes,
            info.records_read,
            info.undirected,
            info.unpolarized,
            info.contradictory,
            info.duplicates
        );

        ExtractionResults {
            edges,
            network_info: info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        source: &str,
        target: &str,
        directed: bool,
        stimulation: bool,
        inhibition: bool,
    ) -> InteractionRecord {
        InteractionRecord {
            source: source.to_string(),
            target: target.to_string(),
            is_directed: directed,
            is_stimulation: stimulation,
            is_inhibition: inhibition,
        }
    }

    fn extract(records: &[InteractionRecord]) -> ExtractionResults {
        NetworkExtractor::default().extract_records(records)
    }

    #[test]
    fn test_extract_basic_activation_and_inhibition() {
        let records = vec![
            record("EGF", "EGFR", true, true, false),
            record("PTEN", "AKT1", true, false, true),
        ];

        let results = extract(&records);
        assert_eq!(results.edges.len(), 2);
        assert_eq!(results.edges[0].sign, Sign::Activation);
        assert_eq!(results.edges[1].sign, Sign::Inhibition);
        assert_eq!(results.network_info.activations, 1);
        assert_eq!(results.network_info.inhibitions, 1);
        assert_eq!(results.network_info.num_nodes, 4);
    }

    #[test]
    fn test_extract_drops_undirected_records() {
        let records = vec![
            record("EGF", "EGFR", false, true, false),
            record("PTEN", "AKT1", true, false, true),
        ];

        let results = extract(&records);
        assert_eq!(results.edges.len(), 1);
        assert_eq!(results.edges[0].source, "PTEN");
        assert_eq!(results.network_info.undirected, 1);
    }

    #[test]
    fn test_extract_drops_unpolarized_records() {
        let records = vec![record("EGF", "EGFR", true, false, false)];

        let results = extract(&records);
        assert!(results.edges.is_empty());
        assert_eq!(results.network_info.unpolarized, 1);
        // The activity filter claims flag-free records before the
        // consistency check sees them.
        assert_eq!(results.network_info.contradictory, 0);
    }

    #[test]
    fn test_extract_drops_contradictory_records() {
        let records = vec![record("EGF", "EGFR", true, true, true)];

        let results = extract(&records);
        assert!(results.edges.is_empty());
        assert_eq!(results.network_info.contradictory, 1);
    }

    #[test]
    fn test_extract_collapses_exact_duplicates() {
        let records = vec![
            record("EGF", "EGFR", true, true, false),
            record("EGF", "EGFR", true, true, false),
            record("EGF", "EGFR", true, true, false),
        ];

        let results = extract(&records);
        assert_eq!(results.edges.len(), 1);
        assert_eq!(results.network_info.duplicates, 2);
    }

    #[test]
    fn test_extract_keeps_opposite_signs_for_same_pair() {
        // Dedup is per exact triple, not per (source, target) pair.
        let records = vec![
            record("X", "Y", true, true, false),
            record("X", "Y", true, false, true),
        ];

        let results = extract(&records);
        assert_eq!(results.edges.len(), 2);
        assert_eq!(results.edges[0].sign, Sign::Activation);
        assert_eq!(results.edges[1].sign, Sign::Inhibition);
        assert_eq!(results.network_info.duplicates, 0);
        assert_eq!(results.network_info.num_nodes, 2);
    }

    #[test]
    fn test_extract_normalizes_complex_identifiers() {
        let records = vec![record("SMAD2:SMAD4", "MYC", true, false, true)];

        let results = extract(&records);
        assert_eq!(results.edges[0].source, "SMAD2_SMAD4");
        assert_eq!(results.edges[0].target, "MYC");
    }

    #[test]
    fn test_extract_dedups_after_normalization() {
        // Two raw identifiers that collide after the separator rewrite must
        // not produce two byte-identical output rows.
        let records = vec![
            record("A:B", "C", true, true, false),
            record("A_B", "C", true, true, false),
        ];

        let results = extract(&records);
        assert_eq!(results.edges.len(), 1);
        assert_eq!(results.edges[0].source, "A_B");
        assert_eq!(results.network_info.duplicates, 1);
    }

    #[test]
    fn test_extract_empty_input() {
        let results = extract(&[]);
        assert!(results.edges.is_empty());
        assert_eq!(results.network_info, NetworkInfo::default());
    }

    #[test]
    fn test_extract_preserves_input_order() {
        let records = vec![
            record("C", "D", true, true, false),
            record("A", "B", true, true, false),
            record("E", "F", true, false, true),
        ];

        let results = extract(&records);
        let sources: Vec<&str> = results.edges.iter().map(|e| e.source.as_str()).collect();
        assert_eq!(sources, vec!["C", "A", "E"]);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let records = vec![
            record("EGF", "EGFR", true, true, false),
            record("EGF", "EGFR", true, true, false),
            record("PTEN", "AKT1", true, false, true),
            record("TP53", "MDM2", true, true, true),
            record("RAF1", "MAP2K1", false, true, false),
        ];

        let first = extract(&records);
        let second = extract(&records);
        assert_eq!(first.edges, second.edges);
        assert_eq!(first.network_info, second.network_info);
    }

    #[test]
    fn test_extract_stats_account_for_every_record() {
        let records = vec![
            record("EGF", "EGFR", true, true, false),
            record("EGF", "EGFR", true, true, false),
            record("PTEN", "AKT1", true, false, true),
            record("TP53", "MDM2", true, true, true),
            record("RAF1", "MAP2K1", false, true, false),
            record("STAT3", "BCL2", true, false, false),
        ];

        let info = extract(&records).network_info;
        assert_eq!(
            info.records_read,
            info.undirected + info.unpolarized + info.contradictory + info.duplicates
                + info.num_edges
        );
    }

    #[test]
    fn test_node_set_counts_shared_endpoints_once() {
        let records = vec![
            record("A", "B", true, true, false),
            record("B", "C", true, false, true),
        ];

        let results = extract(&records);
        let nodes = node_set(&results.edges);
        assert_eq!(nodes.len(), 3);
        assert!(nodes.contains("B"));
    }
}
