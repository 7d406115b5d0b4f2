//! Solver process configuration.

use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

/// Default time allowed for one solver run.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Name of the solver executable looked up on `PATH` by default.
pub const DEFAULT_BINARY: &str = "kociemba";

/// How to run the external two-phase solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct SolverConfig {
    /// Path to the solver executable, or a bare name to search on `PATH`.
    pub binary_path: PathBuf,

    /// Upper bound on a single solve; the process is killed when it expires.
    pub timeout: Duration,
}

impl SolverConfig {
    /// Create a config for the given executable with the default timeout.
    #[must_use]
    pub fn new(binary_path: PathBuf) -> Self {
        Self { binary_path, timeout: DEFAULT_TIMEOUT }
    }

    /// Replace the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_BINARY))
    }
}
