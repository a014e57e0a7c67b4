//! Output formatting for extracted networks.
//!
//! This module provides writers for converting [`ExtractionResults`] into the
//! tabular artifacts consumed downstream.
//!
//! ## Supported Formats
//!
//! - **Table**: three-column signed edge table (canonical solver input)
//! - **SIF**: Cytoscape simple-interaction format
//! - **DOT**: Graphviz digraph for visual inspection
//!
//! ## Examples
//!
//! ### Write a network to a file
//!
//! ```rust,no_run
//! use signet_core::{NetworkExtractor, config::{SignetConfig, OutputFormat}};
//! use signet_core::output::write_network;
//! use std::fs::File;
//!
//! let extractor = NetworkExtractor::new(SignetConfig::default());
//! let results = extractor.extract_file("interactions.tsv")?;
//!
//! let mut table_file = File::create("network.tsv")?;
//! write_network(&mut table_file, &results, OutputFormat::Table)?;
//!
//! let mut sif_file = File::create("network.sif")?;
//! write_network(&mut sif_file, &results, OutputFormat::Sif)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::{config::OutputFormat, results::ExtractionResults, types::SignetError};
use std::io::Write;

mod formats {
    pub mod dot;
    pub mod sif;
    pub mod table;
}

use formats::{dot::write_dot_format, sif::write_sif_format, table::write_table_format};

/// Writes an extracted network in the specified format.
///
/// This is the main entry point for output formatting. It delegates to
/// format-specific writers based on the requested output format.
///
/// # Arguments
///
/// * `writer` - Output writer (file, stdout, buffer, etc.)
/// * `results` - Extraction results to write
/// * `format` - Desired output format
///
/// # Errors
///
/// Returns [`SignetError`] if writing fails.
pub fn write_network<W: Write>(
    writer: &mut W,
    results: &ExtractionResults,
    format: OutputFormat,
) -> Result<(), SignetError> {
    match format {
        OutputFormat::Table => write_table_format(writer, results),
        OutputFormat::Sif => write_sif_format(writer, results),
        OutputFormat::Dot => write_dot_format(writer, results),
    }
}
