//! # Signet - Signed Interaction-Network Extraction
//!
//! A Rust toolkit for turning raw literature-curated interaction-database
//! dumps into deduplicated, sign-consistent directed edge lists suitable for
//! causal-network inference.
//!
//! ## Overview
//!
//! Curated interaction databases record, for every (source, target) pair,
//! consensus calls for directionality and regulatory polarity across the
//! underlying evidence. Signet filters those records down to the
//! directionally-resolved, sign-consistent subset, normalizes complex
//! identifiers, and emits a flat (source, sign, target) table — the input
//! contract of integer-programming causal-network solvers. It also marshals
//! the accompanying node tables (scored measurements, weighted
//! perturbations) so their identifiers match the emitted network.
//!
//! ## Features
//!
//! - **Sign-consistency filtering**: contradictory evidence is dropped, not
//!   resolved by vote
//! - **Deterministic output**: byte-identical artifacts across repeated runs
//! - **Multiple output formats**: solver table, Cytoscape SIF, Graphviz dot
//! - **Transparent gzip input**: curated dumps can be read compressed
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use signet_core::{NetworkExtractor, config::SignetConfig};
//!
//! let extractor = NetworkExtractor::new(SignetConfig::default());
//! let results = extractor.extract_file("interactions.tsv")?;
//!
//! println!(
//!     "Extracted {} edges over {} nodes",
//!     results.network_info.num_edges,
//!     results.network_info.num_nodes
//! );
//! # Ok::<(), signet_core::types::SignetError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for extraction
//! - [`extract`]: The sign-consistency extraction pipeline
//! - [`interactions`]: Interaction-table parsing
//! - [`nodes`]: Node-table marshaling for solver inputs
//! - [`output`]: Output formatting for the supported artifact types
//! - [`results`]: Extraction results and run statistics
//! - [`types`]: Core data types and structures
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, SignetError>`](types::SignetError).
//! Only genuinely fatal conditions surface as errors — unreadable input,
//! headers lacking a required column, unwritable destinations. Malformed data
//! rows and contradictory evidence are dropped and counted instead, because
//! the extraction policy prefers omission over guessing.

pub mod config;
pub mod extract;
pub mod interactions;
pub mod nodes;
pub mod output;
pub mod results;
pub mod types;

pub use extract::NetworkExtractor;
