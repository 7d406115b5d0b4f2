//! Backend that shells out to the `kociemba` command-line solver.
//!
//! The program takes the facelet string as its only argument and prints the
//! solution in standard notation, e.g. `D2 R' D' F2 B D R2`. Illegal cube
//! states are reported either on stdout as a line starting with `Error` or
//! by a non-zero exit status with the reason on stderr.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use rubik_core::{FaceletString, MoveSequence};
use tokio::process::Command;

use crate::{SolverBackend, SolverConfig, SolverError};

/// Runs the external `kociemba` executable once per solve.
#[derive(Debug, Clone)]
pub struct KociembaCli {
    config: SolverConfig,
}

impl KociembaCli {
    /// Create a backend with the given configuration.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a backend that looks for `kociemba` on `PATH`.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }
}

#[async_trait]
impl SolverBackend for KociembaCli {
    async fn solve(&self, facelets: &FaceletString) -> Result<MoveSequence, SolverError> {
        which_binary(&self.config.binary_path)?;

        let child = Command::new(&self.config.binary_path)
            .arg(facelets.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                SolverError::SpawnFailed(format!("exec {}: {e}", self.config.binary_path.display()))
            })?;

        // On timeout the child is dropped, and with it killed.
        let output = tokio::time::timeout(self.config.timeout, child.wait_with_output())
            .await
            .map_err(|_| SolverError::Timeout { timeout: self.config.timeout })??;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        tracing::debug!(
            %facelets,
            status = %output.status,
            stdout = %stdout.trim(),
            "solver process finished"
        );

        parse_solver_output(&stdout, &stderr, output.status.success())
    }

    async fn health_check(&self) -> Result<(), SolverError> {
        which_binary(&self.config.binary_path)
    }
}

/// Interpret the solver's stdout, stderr and exit status.
///
/// # Errors
/// Returns [`SolverError::Rejected`] for an `Error...` answer or a failed
/// exit status, and [`SolverError::InvalidOutput`] if stdout is not
/// notation.
pub fn parse_solver_output(
    stdout: &str,
    stderr: &str,
    success: bool,
) -> Result<MoveSequence, SolverError> {
    let answer = stdout.trim();
    if answer.get(..5).is_some_and(|head| head.eq_ignore_ascii_case("error")) {
        return Err(SolverError::Rejected(answer.to_owned()));
    }
    if !success {
        let reason = stderr
            .lines()
            .rev()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("solver exited with a failure status");
        return Err(SolverError::Rejected(reason.to_owned()));
    }
    answer
        .parse()
        .map_err(|source| SolverError::InvalidOutput { output: answer.to_owned(), source })
}

/// Verify a binary exists either at the given path or in PATH.
fn which_binary(path: &Path) -> Result<(), SolverError> {
    if path.components().count() > 1 || path.is_absolute() {
        if path.is_file() {
            return Ok(());
        }
        return Err(SolverError::BinaryNotFound { path: path.to_owned() });
    }

    let found = std::env::var_os("PATH")
        .is_some_and(|paths| std::env::split_paths(&paths).any(|dir| dir.join(path).is_file()));

    if found {
        Ok(())
    } else {
        Err(SolverError::BinaryNotFound { path: PathBuf::from(path) })
    }
}
