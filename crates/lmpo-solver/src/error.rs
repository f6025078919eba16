//! Error types for the solver crate.

use thiserror::Error;

/// Errors that can occur while preparing, running or reading a solver.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SolverError {
    /// The parameter set is inconsistent.
    #[error("Invalid solver parameters: {0}")]
    InvalidParams(String),

    /// The solver cannot handle this parameter set.
    #[error("Unsupported by {solver}: {reason}")]
    Unsupported {
        /// Solver name.
        solver: String,
        /// What it cannot do.
        reason: String,
    },

    /// The solver program could not be started.
    #[error("Failed to launch solver '{program}': {source}")]
    Launch {
        /// Program that was launched.
        program: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The solver program exited unsuccessfully.
    #[error("Solver '{program}' failed ({status}): {stderr}")]
    ProcessFailed {
        /// Program that was launched.
        program: String,
        /// Exit status description.
        status: String,
        /// Captured standard error.
        stderr: String,
    },

    /// An expected output file was not written.
    #[error("Solver output missing: {0}")]
    MissingOutput(String),

    /// An output file could not be parsed.
    #[error("Parse error in {path} line {line}: {message}")]
    Parse {
        /// File being parsed.
        path: String,
        /// 1-based line number.
        line: usize,
        /// What was wrong.
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parameter file error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parameter file error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for solver operations.
pub type SolverResult<T> = Result<T, SolverError>;
