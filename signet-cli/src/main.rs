//! # Signet CLI - Command-Line Signed-Network Extractor
//!
//! A command-line interface for extracting sign-consistent causal-inference
//! input networks from curated interaction-database dumps.
//!
//! ## Usage
//!
//! ```bash
//! # Basic extraction to the canonical solver table
//! signet -i interactions.tsv -o network.tsv
//!
//! # Cytoscape SIF output
//! signet -i interactions.tsv -f sif -o network.sif
//!
//! # Compressed dump, network plus marshaled measurement table
//! signet -i interactions.tsv.gz -o network.tsv \
//!     --measurements tf_activities.tsv --measurements-output measured.tsv
//! ```
//!
//! ## Options
//!
//! - `-i, --input <FILE>`: Input interaction table (tab-separated, `.gz` ok)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-f, --format <FORMAT>`: Output format: table, sif, dot (default: table)
//! - `-q, --quiet`: Suppress the end-of-run summary
//! - `--measurements <FILE>` / `--measurements-output <FILE>`: marshal a
//!   scored measured-node table against the extracted network
//! - `--perturbations <FILE>` / `--perturbations-output <FILE>`: marshal a
//!   weighted initial-node table against the extracted network

use clap::{Arg, ArgAction, Command};
use signet_core::config::{OutputFormat, SignetConfig};
use signet_core::extract::node_set;
use signet_core::nodes::read_node_table;
use signet_core::output::write_network;
use signet_core::NetworkExtractor;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Main entry point for the Signet CLI application.
///
/// Parses command-line arguments, extracts the signed network, writes it in
/// the requested format, and marshals any node tables against it.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let matches = Command::new("signet")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Signed interaction-network extraction for causal inference")
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("FILE")
                .required(true)
                .help("Input interaction table (tab-separated, .gz ok)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .help("Output format: table, sif, dot")
                .default_value("table"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Suppress the end-of-run summary"),
        )
        .arg(
            Arg::new("measurements")
                .long("measurements")
                .value_name("FILE")
                .requires("measurements-output")
                .help("Scored measured-node table to marshal against the network"),
        )
        .arg(
            Arg::new("measurements-output")
                .long("measurements-output")
                .value_name("FILE")
                .help("Destination for the marshaled measured-node table"),
        )
        .arg(
            Arg::new("perturbations")
                .long("perturbations")
                .value_name("FILE")
                .requires("perturbations-output")
                .help("Weighted initial-node table to marshal against the network"),
        )
        .arg(
            Arg::new("perturbations-output")
                .value_name("FILE")
                .long("perturbations-output")
                .help("Destination for the marshaled initial-node table"),
        )
        .get_matches();

    let output_format = match matches.get_one::<String>("format").unwrap().as_str() {
        "table" | "tsv" => OutputFormat::Table,
        "sif" => OutputFormat::Sif,
        "dot" => OutputFormat::Dot,
        _ => return Err("Invalid output format".into()),
    };

    let config = SignetConfig {
        output_format,
        quiet: matches.get_flag("quiet"),
    };

    let extractor = NetworkExtractor::new(config);
    let input_file = matches.get_one::<String>("input").unwrap();
    let results = extractor.extract_file(input_file)?;

    // Write the network artifact
    let mut writer: Box<dyn Write> = if let Some(output_file) = matches.get_one::<String>("output")
    {
        Box::new(BufWriter::new(File::create(output_file)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };
    write_network(&mut writer, &results, extractor.config.output_format)?;
    writer.flush()?;

    // Marshal node tables against the freshly extracted network
    let network_nodes = node_set(&results.edges);
    let node_jobs = [
        ("measurements", "measurements-output"),
        ("perturbations", "perturbations-output"),
    ];
    for (input_id, output_id) in node_jobs {
        let Some(table_path) = matches.get_one::<String>(input_id) else {
            continue;
        };
        // clap's `requires` guarantees the destination is present
        let destination = matches.get_one::<String>(output_id).unwrap();

        let mut table = read_node_table(table_path)?;
        let removed = table.restrict_to(&network_nodes);
        let mut node_writer = BufWriter::new(File::create(destination)?);
        table.write(&mut node_writer)?;
        node_writer.flush()?;

        if !extractor.config.quiet {
            eprintln!(
                "Marshaled {}: kept {} node(s), dropped {} absent from the network.",
                input_id,
                table.scores.len(),
                removed
            );
        }
    }

    if !extractor.config.quiet {
        let info = &results.network_info;
        eprintln!(
            "Extraction complete! Kept {} of {} interactions ({} nodes, {} activating, {} inhibiting).",
            info.num_edges, info.records_read, info.num_nodes, info.activations, info.inhibitions
        );
        eprintln!(
            "Dropped: {} undirected, {} unpolarized, {} contradictory, {} duplicate, {} malformed.",
            info.undirected, info.unpolarized, info.contradictory, info.duplicates, info.rows_skipped
        );
    }

    Ok(())
}
