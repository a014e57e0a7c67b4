use std::fmt;

use thiserror::Error;

/// Regulatory polarity of a directed interaction.
///
/// Curated interaction databases call each directed interaction either an
/// activation (stimulation) or an inhibition. The integer encoding used in
/// the emitted artifacts is `+1` for activation and `-1` for inhibition,
/// matching the convention of downstream causal-network solvers.
///
/// # Examples
///
/// ```rust
/// use signet_core::types::Sign;
///
/// assert_eq!(Sign::Activation.to_int(), 1);
/// assert_eq!(Sign::Inhibition.to_int(), -1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Stimulatory interaction (+1)
    Activation,
    /// Inhibitory interaction (-1)
    Inhibition,
}

impl Sign {
    /// Derive a sign from a record's stimulation and inhibition consensus
    /// flags, or `None` when the flags contradict each other.
    ///
    /// Each flag independently implies a polarity. The stimulation flag maps
    /// set → +1 and unset → -1; the inhibition flag maps set → -1 and
    /// unset → +1. Note the polarity conventions of the two remaps are
    /// intentionally asymmetric — this mirrors the consensus-call encoding
    /// of the source database and must stay as is. A record carries a usable
    /// sign only when both derived polarities agree:
    ///
    /// | stimulation | inhibition | derived        | result     |
    /// |-------------|------------|----------------|------------|
    /// | 1           | 0          | +1 / +1        | Activation |
    /// | 0           | 1          | -1 / -1        | Inhibition |
    /// | 1           | 1          | +1 / -1        | `None`     |
    /// | 0           | 0          | -1 / +1        | `None`     |
    ///
    /// # Examples
    ///
    /// ```rust
    /// use signet_core::types::Sign;
    ///
    /// assert_eq!(Sign::from_consensus(true, false), Some(Sign::Activation));
    /// assert_eq!(Sign::from_consensus(true, true), None);
    /// ```
    #[must_use]
    pub const fn from_consensus(stimulation: bool, inhibition: bool) -> Option<Self> {
        let from_stimulation: i8 = if stimulation { 1 } else { -1 };
        let from_inhibition: i8 = if inhibition { -1 } else { 1 };

        if from_stimulation != from_inhibition {
            return None;
        }

        if from_stimulation == 1 {
            Some(Self::Activation)
        } else {
            Some(Self::Inhibition)
        }
    }

    /// Integer encoding used in tabular artifacts
    #[must_use]
    pub const fn to_int(self) -> i8 {
        match self {
            Self::Activation => 1,
            Self::Inhibition => -1,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_int())
    }
}

/// One row of a literature-curated interaction table.
///
/// Multiple records may describe the same (source, target) pair, each from a
/// different evidence source. The three consensus flags are the database's
/// agreed-upon calls across that evidence:
///
/// - `is_directed`: the record represents one agreed-upon causal direction
///   rather than an ambiguous/bidirectional relationship
/// - `is_stimulation` / `is_inhibition`: asserted regulatory polarity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRecord {
    /// Source entity identifier (regulator)
    pub source: String,
    /// Target entity identifier (regulated entity)
    pub target: String,
    /// Directionality consensus flag
    pub is_directed: bool,
    /// Stimulation consensus flag
    pub is_stimulation: bool,
    /// Inhibition consensus flag
    pub is_inhibition: bool,
}

/// A directed, signed edge of the extracted causal-inference input graph.
///
/// Identifiers are already normalized (reserved `:` separator rewritten to
/// `_`). For a given (source, target) pair the extractor emits each sign at
/// most once; opposite signs for the same pair are distinct edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedEdge {
    /// Source entity identifier
    pub source: String,
    /// Regulatory polarity of the interaction
    pub sign: Sign,
    /// Target entity identifier
    pub target: String,
}

impl fmt::Display for SignedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.source, self.sign, self.target)
    }
}

/// Error types that can occur during network extraction.
///
/// Malformed data rows are not represented here: per the extraction policy
/// they are dropped and counted, never surfaced as errors. This enum covers
/// the fatal conditions only — unreadable input, tables whose header does not
/// expose a required column, and unwritable destinations.
#[derive(Error, Debug)]
pub enum SignetError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Input table has no header line
    #[error("Empty interaction table: {0}")]
    EmptyTable(String),
    /// Header does not expose a required column
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
    /// Error parsing input data
    #[error("Parse error: {0}")]
    ParseError(String),
}
