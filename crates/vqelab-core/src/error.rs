//! Error types for VQE Lab.

use thiserror::Error;

use crate::event::RunKind;
use crate::session::RunState;

/// Result type for VQE Lab operations.
pub type Result<T> = std::result::Result<T, VqeError>;

/// Errors that can occur while driving runs or exporting results.
///
/// None of the computations themselves can fail; these cover the run guard,
/// event delivery and file output.
#[derive(Debug, Error)]
pub enum VqeError {
    /// A run was requested while another one is in flight.
    #[error("Cannot start {requested} run: {active} run already in progress")]
    RunInProgress { requested: RunKind, active: RunKind },

    /// The configuration was edited while a run is in flight.
    #[error("Configuration is locked while a {0} run is in progress")]
    ConfigLocked(RunKind),

    /// A producer published with a ticket that is not the active run.
    #[error("Stale run ticket {ticket} (session is {state})")]
    StaleTicket { ticket: String, state: RunState },

    /// The consumer of run events went away.
    #[error("Run event channel closed")]
    ChannelClosed,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization error.
    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_json::Error> for VqeError {
    fn from(e: serde_json::Error) -> Self {
        VqeError::Export(e.to_string())
    }
}
