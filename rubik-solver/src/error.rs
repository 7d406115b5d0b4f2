//! Error types for the solver crate.

use std::{path::PathBuf, time::Duration};

use rubik_core::CoreError;

/// Errors raised while running the external solver.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SolverError {
    /// Solver executable not found at the configured path or on `PATH`.
    #[error("solver binary not found at {path}")]
    BinaryNotFound { path: PathBuf },

    /// The solver process could not be started.
    #[error("solver spawn failed: {0}")]
    SpawnFailed(String),

    /// The solver did not finish within the configured timeout.
    #[error("solver did not finish within {}s", .timeout.as_secs())]
    Timeout { timeout: Duration },

    /// The solver refused the cube, usually because it is not a legal state.
    #[error("solver rejected cube: {0}")]
    Rejected(String),

    /// The solver printed something that is not a move sequence.
    #[error("unparseable solver output {output:?}: {source}")]
    InvalidOutput {
        output: String,
        #[source]
        source: CoreError,
    },

    /// Underlying I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors from a complete scramble-translate-solve-verify run.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PipelineError {
    /// The supplied scramble is not valid notation.
    #[error("invalid scramble: {0}")]
    InvalidScramble(#[source] CoreError),

    /// The cube's stickers cannot be encoded for the solver.
    #[error("invalid cube state: {0}")]
    InvalidState(#[source] CoreError),

    /// The solver itself failed.
    #[error("solver error: {0}")]
    Solver(#[from] SolverError),
}
