//! Solver backend abstraction trait.
//!
//! Lets the pipeline run against the external `kociemba` program in
//! production and against scripted backends in tests.

use async_trait::async_trait;
use rubik_core::{FaceletString, MoveSequence};

use crate::SolverError;

/// A two-phase cube solver.
///
/// Implementations must be `Send + Sync` so one backend can serve every
/// request handler.
///
/// # Cancel Safety
/// Implementations must be cancel safe: dropping a `solve` future must not
/// leave a solver process running.
#[async_trait]
pub trait SolverBackend: Send + Sync {
    /// Find a move sequence that solves the cube described by `facelets`.
    ///
    /// An already solved cube yields an empty sequence.
    ///
    /// # Errors
    /// Returns [`SolverError::Rejected`] if the solver reports the state as
    /// impossible, [`SolverError::Timeout`] if it runs too long, and
    /// [`SolverError::InvalidOutput`] if its answer cannot be parsed.
    async fn solve(&self, facelets: &FaceletString) -> Result<MoveSequence, SolverError>;

    /// Check that the backend is usable.
    ///
    /// # Errors
    /// Returns [`SolverError::BinaryNotFound`] if the solver cannot be found.
    async fn health_check(&self) -> Result<(), SolverError>;
}
