//! # Office Errors
//!
//! Every failure in the simulation is fatal: setup errors stop the run before
//! any actor starts, runtime errors abort the whole office. There is no retry
//! path, so a single enum is enough for the entire crate.

use crate::lifecycle::ConfigError;

/// Errors that can stop a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum OfficeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("event log write failed: {0}")]
    Log(#[from] std::io::Error),
    #[error("{0} signal closed")]
    SignalClosed(&'static str),
    #[error("actor task failed: {0}")]
    ActorFailed(String),
}

impl From<tokio::task::JoinError> for OfficeError {
    fn from(e: tokio::task::JoinError) -> Self {
        OfficeError::ActorFailed(e.to_string())
    }
}
