//! Typed error hierarchy for the Vibeforge core.
//!
//! Three top-level enums cover the three subsystems:
//! - `ProviderError` — generation provider request/response failures
//! - `FlowError` — invalid actions against the flow state machine
//! - `StoreError` — artifact persistence failures

use thiserror::Error;

use crate::flow::Phase;

/// Errors from a single generation request.
///
/// A provider failure never aborts the generation round: the round
/// converts it to a missing ordinal. The taxonomy is deliberately small
/// because that is all downstream code can act on.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("invalid provider endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Transport(err.to_string())
    }
}

/// Errors from the flow state machine.
///
/// Every variant leaves the controller in the phase it was in; none of
/// them are fatal.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("action '{action}' is not valid in the {phase:?} phase")]
    InvalidPhase {
        action: &'static str,
        phase: Phase,
    },

    #[error("variation index {index} is out of range for {len} candidates")]
    InvalidSelection { index: usize, len: usize },

    #[error("cannot save without a selected icon")]
    NoIconSelected,
}

/// Errors from the artifact store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read app list at {path}: {source}")]
    ReadFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write app list at {path}: {source}")]
    WriteFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("app list at {path} is not valid JSON: {source}")]
    Corrupt {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
