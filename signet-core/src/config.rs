/// Output format options for extracted networks.
///
/// Signet supports multiple output formats for compatibility with
/// different downstream analysis tools.
///
/// # Formats
///
/// - **Table**: three-column signed edge table (canonical solver input)
/// - **Sif**: Cytoscape simple-interaction format
/// - **Dot**: Graphviz digraph for visual inspection
///
/// # Examples
///
/// ```rust
/// use signet_core::config::{OutputFormat, SignetConfig};
///
/// let config = SignetConfig {
///     output_format: OutputFormat::Sif,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Tab-separated signed edge table.
    ///
    /// Header `source`, `interaction`, `target`; the `interaction` column
    /// holds the integer sign (`1` or `-1`). This is the artifact consumed
    /// by causal-network solvers.
    Table,

    /// Cytoscape simple-interaction format.
    ///
    /// One `source<TAB>relationship<TAB>target` line per edge, no header.
    /// Relationships are spelled `activation` / `inhibition`.
    Sif,

    /// Graphviz dot digraph.
    ///
    /// Inhibitory edges are drawn with tee arrowheads. Intended for quick
    /// visual inspection, not for machine consumption.
    Dot,
}

/// Configuration settings for signed-network extraction.
///
/// # Examples
///
/// ## Default configuration
///
/// ```rust
/// use signet_core::config::SignetConfig;
///
/// let config = SignetConfig::default();
/// ```
///
/// ## Quiet run writing SIF
///
/// ```rust
/// use signet_core::config::{OutputFormat, SignetConfig};
///
/// let config = SignetConfig {
///     output_format: OutputFormat::Sif,
///     quiet: true,
/// };
/// ```
#[derive(Debug, Clone)]
pub struct SignetConfig {
    /// Output format for the extracted network.
    ///
    /// Controls the format of the generated edge artifact. See
    /// [`OutputFormat`] for available options.
    ///
    /// **Default**: [`OutputFormat::Table`]
    pub output_format: OutputFormat,

    /// Suppress informational output during processing.
    ///
    /// When `true`, prevents the end-of-run statistics summary from being
    /// printed to stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for SignetConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            quiet: false,
        }
    }
}
