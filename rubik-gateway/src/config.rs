//! Start-up configuration read from environment variables.

use std::{path::PathBuf, time::Duration};

use rubik_core::DEFAULT_SCRAMBLE_LENGTH;
use rubik_solver::SolverConfig;

use crate::error::GatewayError;

/// Address the server binds when `RUBIK_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:5000";

/// Gateway settings.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to listen on (`RUBIK_LISTEN_ADDR`).
    pub listen_addr: String,
    /// Solver executable and timeout (`RUBIK_SOLVER_BIN`,
    /// `RUBIK_SOLVER_TIMEOUT_SECS`).
    pub solver: SolverConfig,
    /// Moves per generated scramble (`RUBIK_SCRAMBLE_LENGTH`).
    pub scramble_length: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_owned(),
            solver: SolverConfig::default(),
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
        }
    }
}

impl GatewayConfig {
    /// Read the configuration from the process environment.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidConfig`] if a numeric variable does not
    /// parse or is zero.
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    /// Returns [`GatewayError::InvalidConfig`] if a numeric variable does not
    /// parse or is zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GatewayError> {
        let mut config = Self::default();

        if let Some(addr) = lookup("RUBIK_LISTEN_ADDR") {
            config.listen_addr = addr;
        }
        if let Some(bin) = lookup("RUBIK_SOLVER_BIN") {
            config.solver.binary_path = PathBuf::from(bin);
        }
        if let Some(raw) = lookup("RUBIK_SOLVER_TIMEOUT_SECS") {
            let secs = parse_positive("RUBIK_SOLVER_TIMEOUT_SECS", &raw)?;
            config.solver.timeout = Duration::from_secs(secs);
        }
        if let Some(raw) = lookup("RUBIK_SCRAMBLE_LENGTH") {
            let length = parse_positive("RUBIK_SCRAMBLE_LENGTH", &raw)?;
            config.scramble_length = usize::try_from(length).map_err(|e| {
                GatewayError::InvalidConfig {
                    key: "RUBIK_SCRAMBLE_LENGTH".to_owned(),
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        Ok(config)
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<u64, GatewayError> {
    let invalid = |reason: String| GatewayError::InvalidConfig {
        key: key.to_owned(),
        value: raw.to_owned(),
        reason,
    };
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(invalid("must be greater than zero".to_owned())),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(e.to_string())),
    }
}
