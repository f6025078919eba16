//! Error types for the topology crate.

use thiserror::Error;

/// Errors produced by topology lookup and validation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TopologyError {
    /// No topology is registered under this key.
    #[error("Topology not found: {0}")]
    NotFound(String),

    /// The key string does not follow `{N}.{family}[.{variant}]`.
    #[error("Invalid topology key '{key}': {reason}")]
    InvalidKey {
        /// The offending key string.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A coupling-map bond references a qubit outside `[0, N)`.
    #[error("Topology {key}: bond ({a}, {b}) references a qubit outside 0..{n_qubits}")]
    EdgeOutOfRange {
        /// Topology key.
        key: String,
        /// First qubit of the bond.
        a: usize,
        /// Second qubit of the bond.
        b: usize,
        /// Number of qubits in the topology.
        n_qubits: usize,
    },

    /// A per-qubit table does not have one entry per qubit.
    #[error("Topology {key}: {table} has {found} entries, expected {expected}")]
    LengthMismatch {
        /// Topology key.
        key: String,
        /// Which table is short or long (`coordinates`, `field pattern`).
        table: &'static str,
        /// Expected length (the qubit count).
        expected: usize,
        /// Actual length.
        found: usize,
    },

    /// The caller's qubit count disagrees with the registered topology.
    #[error("Topology {key} has {expected} qubits, but {requested} were requested")]
    QubitCountMismatch {
        /// Topology key.
        key: String,
        /// Qubit count of the registered topology.
        expected: usize,
        /// Qubit count the caller asked for.
        requested: usize,
    },
}

impl TopologyError {
    /// True for lookups of keys that are not registered.
    pub fn is_not_found(&self) -> bool {
        matches!(self, TopologyError::NotFound(_))
    }
}

/// Result type for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;

/// Errors produced while rendering a topology plot.
///
/// These never escape [`plot_topology`](crate::plot::plot_topology); they are
/// reported and folded into [`PlotOutcome::Skipped`](crate::plot::PlotOutcome).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlotError {
    /// The visualization program could not be started.
    #[error("Renderer '{program}' unavailable: {message}")]
    Unavailable {
        /// Program that was launched.
        program: String,
        /// Launch failure description.
        message: String,
    },

    /// The visualization program ran but reported a failure.
    #[error("Renderer '{program}' failed ({status}): {stderr}")]
    Failed {
        /// Program that was launched.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// I/O error while talking to the renderer.
    #[error("Renderer I/O error: {0}")]
    Io(#[from] std::io::Error),
}
