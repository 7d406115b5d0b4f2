//! Solver integration for the rubik scramble-and-solve service.
//!
//! Wraps an external two-phase solver behind [`SolverBackend`] and runs the
//! full scramble, translate, solve and verify flow in [`SolvePipeline`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod backend;
pub mod config;
pub mod error;
pub mod kociemba;
pub mod pipeline;

pub use backend::SolverBackend;
pub use config::SolverConfig;
pub use error::{PipelineError, SolverError};
pub use kociemba::{parse_solver_output, KociembaCli};
pub use pipeline::{SolvePipeline, SolveReport};
