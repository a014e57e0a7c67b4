use crate::types::SignedEdge;

/// Signed-network extraction results.
///
/// Contains the extracted edge list together with the run statistics used
/// for reporting and sanity checks.
///
/// # Fields
///
/// - `edges`: deduplicated signed edges in first-occurrence input order
/// - `network_info`: record/drop/edge tallies for the run
///
/// # Examples
///
/// ```rust,no_run
/// use signet_core::{NetworkExtractor, config::SignetConfig};
///
/// let extractor = NetworkExtractor::new(SignetConfig::default());
/// let results = extractor.extract_file("interactions.tsv")?;
///
/// println!("Edges: {}", results.edges.len());
/// println!("Nodes: {}", results.network_info.num_nodes);
/// # Ok::<(), signet_core::types::SignetError>(())
/// ```
#[derive(Debug)]
pub struct ExtractionResults {
    /// Deduplicated signed edges in first-occurrence input order.
    ///
    /// Each edge carries normalized identifiers and a resolved sign.
    pub edges: Vec<SignedEdge>,

    /// Statistics describing the extraction run.
    ///
    /// Includes the per-stage drop breakdown and node/sign tallies.
    pub network_info: NetworkInfo,
}

/// Statistics for an extraction run.
///
/// Every input record is accounted for exactly once: it either survives into
/// an emitted edge or appears in one of the drop counters, so
/// `records_read == undirected + unpolarized + contradictory + duplicates +
/// num_edges`.
///
/// # Examples
///
/// ```rust
/// # use signet_core::results::NetworkInfo;
/// let info = NetworkInfo {
///     records_read: 61_102,
///     rows_skipped: 4,
///     undirected: 12_310,
///     unpolarized: 18_934,
///     contradictory: 1_102,
///     duplicates: 211,
///     num_edges: 28_545,
///     num_nodes: 5_431,
///     activations: 17_203,
///     inhibitions: 11_342,
/// };
///
/// println!("{} edges over {} nodes", info.num_edges, info.num_nodes);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInfo {
    /// Number of well-formed records read from the input table.
    pub records_read: usize,

    /// Malformed input rows dropped before extraction.
    pub rows_skipped: usize,

    /// Records dropped by the directionality filter.
    pub undirected: usize,

    /// Records dropped by the activity filter (no asserted polarity).
    pub unpolarized: usize,

    /// Records dropped because their two derived polarities disagree.
    pub contradictory: usize,

    /// Sign-consistent records collapsed into an already-emitted edge.
    pub duplicates: usize,

    /// Number of edges in the extracted network.
    pub num_edges: usize,

    /// Number of distinct node identifiers across all edges.
    pub num_nodes: usize,

    /// Edges with activation sign (+1).
    pub activations: usize,

    /// Edges with inhibition sign (-1).
    pub inhibitions: usize,
}
